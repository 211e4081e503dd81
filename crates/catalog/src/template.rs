//! crates/catalog/src/template.rs
//! Positional placeholder substitution for catalog templates.

/// Substitutes `{0}`, `{1}`, ... in `template` with the matching entries of `args`.
///
/// A placeholder whose index is not covered by `args` is copied through
/// unchanged, as is any brace sequence that is not a plain decimal index.
/// Formatting never fails; a short argument list degrades the output instead.
///
/// # Examples
///
/// ```
/// use catalog::format_template;
///
/// assert_eq!(format_template("{0}: {1}", &["x", "y"]), "x: y");
/// assert_eq!(format_template("{0}: {1}", &["x"]), "x: {1}");
/// ```
#[must_use]
pub fn format_template<S>(template: &str, args: &[S]) -> String
where
    S: AsRef<str>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        match after_open.find('}') {
            Some(close) => {
                let inner = &after_open[..close];
                match placeholder_index(inner).and_then(|index| args.get(index)) {
                    Some(arg) => out.push_str(arg.as_ref()),
                    None => {
                        out.push('{');
                        out.push_str(inner);
                        out.push('}');
                    }
                }
                rest = &after_open[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

fn placeholder_index(inner: &str) -> Option<usize> {
    if inner.is_empty() || !inner.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    inner.parse().ok()
}
