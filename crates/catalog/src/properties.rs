//! crates/catalog/src/properties.rs
//! Parser for the line-oriented `key = value` format used by catalogs and
//! build metadata files.
//!
//! The grammar follows the classic properties layout:
//!
//! - blank lines and lines whose first non-blank character is `#` or `!` are
//!   ignored;
//! - the key ends at the first unescaped `=`, `:` or blank; blanks around the
//!   separator are skipped;
//! - a line ending in an odd number of backslashes continues on the next line,
//!   whose leading blanks are dropped;
//! - `\t`, `\n`, `\r`, `\f`, `\uXXXX` and `\<char>` escapes are decoded in both
//!   keys and values.

use std::str::Chars;

use crate::error::ParseError;

/// Parses `input` into `(key, value)` pairs in file order.
///
/// Duplicate keys are preserved in the output; collecting the pairs into a map
/// gives the usual "later line wins" behaviour.
///
/// # Examples
///
/// ```
/// let entries = catalog::properties::parse("# greeting\nI001 = Hello {0}.\n").unwrap();
/// assert_eq!(entries, vec![("I001".to_string(), "Hello {0}.".to_string())]);
/// ```
pub fn parse(input: &str) -> Result<Vec<(String, String)>, ParseError> {
    let mut entries = Vec::new();
    let mut lines = input.lines().enumerate();

    while let Some((index, raw)) = lines.next() {
        let line_number = index + 1;
        let trimmed = raw.trim_start_matches(is_blank);
        if trimmed.is_empty() || trimmed.starts_with(['#', '!']) {
            continue;
        }

        let mut logical = trimmed.to_owned();
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start_matches(is_blank)),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical);
        entries.push((unescape(key, line_number)?, unescape(value, line_number)?));
    }

    Ok(entries)
}

const fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\u{c}')
}

fn ends_with_continuation(line: &str) -> bool {
    let trailing = line.chars().rev().take_while(|&ch| ch == '\\').count();
    trailing % 2 == 1
}

fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    for (index, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '=' | ':' => {
                return (&line[..index], line[index + 1..].trim_start_matches(is_blank));
            }
            ch if is_blank(ch) => {
                let rest = line[index..].trim_start_matches(is_blank);
                let rest = rest.strip_prefix(['=', ':']).unwrap_or(rest);
                return (&line[..index], rest.trim_start_matches(is_blank));
            }
            _ => {}
        }
    }
    (line, "")
}

fn unescape(text: &str, line: usize) -> Result<String, ParseError> {
    if !text.contains('\\') {
        return Ok(text.to_owned());
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => out.push(decode_unicode(&mut chars, line)?),
            Some(other) => out.push(other),
            None => {}
        }
    }
    Ok(out)
}

fn read_code_unit(chars: &mut Chars<'_>, line: usize) -> Result<u32, ParseError> {
    let mut code = 0;
    for _ in 0..4 {
        let digit = chars
            .next()
            .and_then(|ch| ch.to_digit(16))
            .ok_or(ParseError::MalformedUnicodeEscape { line })?;
        code = code * 16 + digit;
    }
    Ok(code)
}

fn decode_unicode(chars: &mut Chars<'_>, line: usize) -> Result<char, ParseError> {
    let high = read_code_unit(chars, line)?;
    if !(0xD800..=0xDBFF).contains(&high) {
        return char::from_u32(high).ok_or(ParseError::InvalidCharacter { line, code: high });
    }

    // High surrogate: the low half must follow as another \u escape.
    let mut lookahead = chars.clone();
    if lookahead.next() != Some('\\') || lookahead.next() != Some('u') {
        return Err(ParseError::InvalidCharacter { line, code: high });
    }
    let low = read_code_unit(&mut lookahead, line)?;
    if !(0xDC00..=0xDFFF).contains(&low) {
        return Err(ParseError::InvalidCharacter { line, code: high });
    }
    *chars = lookahead;
    let combined = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
    char::from_u32(combined).ok_or(ParseError::InvalidCharacter {
        line,
        code: combined,
    })
}
