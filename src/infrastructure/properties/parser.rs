//! Parser for the line-oriented `key=value` property format
//!
//! Supported syntax:
//! - `#` and `!` comment lines, blank lines
//! - `=`, `:` or whitespace between key and value
//! - a line ending in an odd number of backslashes continues on the next one
//! - `\t \n \r \f`, `\uXXXX` (surrogate pairs combine), `\x` → `x`

use std::fmt;

/// A malformed escape in a property file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parse property text into pairs, in file order. Duplicate keys are kept;
/// callers decide who wins.
pub fn parse_properties(content: &str) -> Result<Vec<(String, String)>, ParseError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut pairs = Vec::new();
    for line in logical_lines(content) {
        let (raw_key, raw_value) = split_key_value(&line.text);
        let key = unescape(raw_key, line.number)?;
        let value = unescape(raw_value, line.number)?;
        pairs.push((key, value));
    }
    Ok(pairs)
}

/// Decode file bytes: UTF-8 when valid, ISO-8859-1 otherwise
pub fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|e| e.into_bytes().into_iter().map(char::from).collect())
}

struct LogicalLine {
    /// 1-based number of the first natural line
    number: usize,
    text: String,
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{c}')
}

/// Split on `\n`, `\r` or `\r\n`
fn natural_lines(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&content[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&content[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&content[start..]);
    }
    lines
}

fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn logical_lines(content: &str) -> Vec<LogicalLine> {
    let mut out = Vec::new();
    let mut lines = natural_lines(content).into_iter().enumerate();

    while let Some((index, line)) = lines.next() {
        let trimmed = line.trim_start_matches(is_blank);
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let mut text = String::new();
        let mut current = trimmed;
        while continues(current) {
            text.push_str(&current[..current.len() - 1]);
            match lines.next() {
                Some((_, next)) => current = next.trim_start_matches(is_blank),
                None => {
                    current = "";
                    break;
                }
            }
        }
        text.push_str(current);

        out.push(LogicalLine {
            number: index + 1,
            text,
        });
    }
    out
}

/// Split a logical line into raw (still escaped) key and value
fn split_key_value(line: &str) -> (&str, &str) {
    let mut key_end = line.len();
    let mut value_start = line.len();
    let mut has_separator = false;
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                value_start = i + 1;
                has_separator = true;
                break;
            }
            c if is_blank(c) => {
                key_end = i;
                value_start = i + c.len_utf8();
                break;
            }
            _ => {}
        }
    }

    let mut value = line[value_start..].trim_start_matches(is_blank);
    if !has_separator {
        if let Some(rest) = value.strip_prefix(|c: char| c == '=' || c == ':') {
            value = rest.trim_start_matches(is_blank);
        }
    }
    (&line[..key_end], value)
}

fn unescape(raw: &str, line: usize) -> Result<String, ParseError> {
    let mut units: Vec<u16> = Vec::with_capacity(raw.len());
    let mut buf = [0u16; 2];
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            units.extend_from_slice(c.encode_utf16(&mut buf));
            continue;
        }
        let Some(next) = chars.next() else {
            break;
        };
        let decoded = match next {
            't' => '\t',
            'n' => '\n',
            'r' => '\r',
            'f' => '\u{c}',
            'u' => {
                let hex: String = chars.by_ref().take(4).collect();
                if hex.len() != 4 || !hex.chars().all(|h| h.is_ascii_hexdigit()) {
                    return Err(ParseError {
                        line,
                        message: format!("malformed \\uxxxx escape: \\u{}", hex),
                    });
                }
                // Checked above: four hex digits always fit in a u16.
                let unit = u16::from_str_radix(&hex, 16).unwrap_or_default();
                units.push(unit);
                continue;
            }
            other => other,
        };
        units.extend_from_slice(decoded.encode_utf16(&mut buf));
    }

    Ok(String::from_utf16_lossy(&units))
}
