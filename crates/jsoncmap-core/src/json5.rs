//! JSON5 source transforms.
//!
//! Each function rewrites one JSON5 convenience into strict JSON and
//! leaves everything else alone. They are designed to run after
//! [`crate::strip::strip_comments`], in the order applied by
//! [`crate::mapper::JsoncMapper::preprocess`], and each is a single
//! string-aware pass.

/// Convert single-quoted strings to double-quoted JSON strings.
///
/// `'text'` becomes `"text"`; an embedded `"` is escaped and `\'` becomes
/// a bare `'`. Double-quoted strings pass through untouched.
pub fn convert_single_quotes(input: &str) -> String {
    enum Quote {
        None,
        Double,
        Single,
    }

    let mut out = String::with_capacity(input.len());
    let mut state = Quote::None;
    let mut escaped = false;

    for c in input.chars() {
        match state {
            Quote::None => {
                if c == '\'' {
                    state = Quote::Single;
                    out.push('"');
                } else {
                    if c == '"' {
                        state = Quote::Double;
                    }
                    out.push(c);
                }
            }
            Quote::Double => {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == '"' {
                    state = Quote::None;
                }
                out.push(c);
            }
            Quote::Single => {
                if escaped {
                    escaped = false;
                    if c == '\'' {
                        out.push('\'');
                    } else {
                        out.push('\\');
                        out.push(c);
                    }
                } else if c == '\\' {
                    escaped = true;
                } else if c == '\'' {
                    state = Quote::None;
                    out.push('"');
                } else if c == '"' {
                    out.push_str("\\\"");
                } else {
                    out.push(c);
                }
            }
        }
    }
    out
}

/// Convert hexadecimal number literals outside strings to decimal.
///
/// `0xFF` becomes `255`; a preceding sign is left in place. Literals that
/// do not fit in a `u64` are left as-is.
pub fn convert_hex_numbers(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut seg_start = 0;
    let mut i = 0;
    let mut in_string = false;
    let mut escaped = false;

    while i < bytes.len() {
        let c = bytes[i];
        if in_string {
            if escaped {
                escaped = false;
            } else if c == b'\\' {
                escaped = true;
            } else if c == b'"' {
                in_string = false;
            }
            i += 1;
            continue;
        }
        if c == b'"' {
            in_string = true;
            i += 1;
            continue;
        }
        if c == b'0'
            && matches!(bytes.get(i + 1), Some(&b'x') | Some(&b'X'))
            && (i == 0 || !bytes[i - 1].is_ascii_alphanumeric())
        {
            let mut j = i + 2;
            while j < bytes.len() && bytes[j].is_ascii_hexdigit() {
                j += 1;
            }
            if j > i + 2 {
                if let Ok(value) = u64::from_str_radix(&input[i + 2..j], 16) {
                    out.push_str(&input[seg_start..i]);
                    out.push_str(&value.to_string());
                    seg_start = j;
                }
                i = j;
                continue;
            }
        }
        i += 1;
    }
    out.push_str(&input[seg_start..]);
    out
}

/// Remove the explicit plus sign from positive numbers outside strings.
///
/// `+123` becomes `123`. Exponent signs (`1e+5`) are untouched.
pub fn strip_plus_signs(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut seg_start = 0;
    let mut i = 0;
    let mut in_string = false;
    let mut escaped = false;

    while i < bytes.len() {
        let c = bytes[i];
        if in_string {
            if escaped {
                escaped = false;
            } else if c == b'\\' {
                escaped = true;
            } else if c == b'"' {
                in_string = false;
            }
            i += 1;
            continue;
        }
        if c == b'"' {
            in_string = true;
            i += 1;
            continue;
        }
        if c == b'+'
            && matches!(bytes.get(i + 1), Some(n) if n.is_ascii_digit() || *n == b'.')
            && !follows_number_part(bytes, i)
        {
            out.push_str(&input[seg_start..i]);
            i += 1;
            seg_start = i;
            continue;
        }
        i += 1;
    }
    out.push_str(&input[seg_start..]);
    out
}

/// Whether the last significant byte before `pos` could be part of a
/// number literal, which would make a following `+` an exponent sign.
fn follows_number_part(bytes: &[u8], pos: usize) -> bool {
    bytes[..pos]
        .iter()
        .rev()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'.')
}

/// Replace bare `Infinity`, `-Infinity`, `+Infinity` and `NaN` tokens
/// outside strings with `null`.
///
/// Strict JSON (and `serde_json`) cannot represent these values, so the
/// sign is swallowed along with the token.
pub fn convert_infinity_nan(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut seg_start = 0;
    let mut i = 0;
    let mut in_string = false;
    let mut escaped = false;

    while i < bytes.len() {
        let c = bytes[i];
        if in_string {
            if escaped {
                escaped = false;
            } else if c == b'\\' {
                escaped = true;
            } else if c == b'"' {
                in_string = false;
            }
            i += 1;
            continue;
        }
        if c == b'"' {
            in_string = true;
            i += 1;
            continue;
        }
        let word_start = if c == b'+' || c == b'-' { i + 1 } else { i };
        let rest = &bytes[word_start.min(bytes.len())..];
        let word_len = if rest.starts_with(b"Infinity") {
            8
        } else if rest.starts_with(b"NaN") {
            3
        } else {
            0
        };
        if word_len > 0
            && (i == 0 || !bytes[i - 1].is_ascii_alphanumeric())
            && !matches!(bytes.get(word_start + word_len), Some(n) if n.is_ascii_alphanumeric())
        {
            out.push_str(&input[seg_start..i]);
            out.push_str("null");
            i = word_start + word_len;
            seg_start = i;
            continue;
        }
        i += 1;
    }
    out.push_str(&input[seg_start..]);
    out
}

/// Collapse raw newlines inside strings into `\n` escapes.
///
/// `\r\n` collapses to a single `\n`, and a backslash-newline line
/// continuation disappears entirely.
pub fn collapse_multiline_strings(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut seg_start = 0;
    let mut i = 0;
    let mut in_string = false;

    while i < bytes.len() {
        let c = bytes[i];
        if !in_string {
            if c == b'"' {
                in_string = true;
            }
            i += 1;
            continue;
        }
        match c {
            b'\\' => {
                if matches!(bytes.get(i + 1), Some(&b'\n') | Some(&b'\r')) {
                    // Line continuation: drop the backslash and the newline.
                    out.push_str(&input[seg_start..i]);
                    i += 2;
                    if bytes.get(i - 1) == Some(&b'\r') && bytes.get(i) == Some(&b'\n') {
                        i += 1;
                    }
                    seg_start = i;
                } else {
                    i = (i + 2).min(bytes.len());
                }
            }
            b'\n' | b'\r' => {
                out.push_str(&input[seg_start..i]);
                out.push_str("\\n");
                i += 1;
                if c == b'\r' && bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                seg_start = i;
            }
            b'"' => {
                in_string = false;
                i += 1;
            }
            _ => i += 1,
        }
    }
    out.push_str(&input[seg_start..]);
    out
}

/// Escape raw control characters (below U+0020) inside strings.
///
/// The short escapes `\n`, `\r`, `\t`, `\b`, `\f` are used where they
/// exist; everything else becomes `\u00XX`.
pub fn escape_control_chars(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut seg_start = 0;
    let mut i = 0;
    let mut in_string = false;

    while i < bytes.len() {
        let c = bytes[i];
        if !in_string {
            if c == b'"' {
                in_string = true;
            }
            i += 1;
            continue;
        }
        match c {
            b'\\' => i = (i + 2).min(bytes.len()),
            b'"' => {
                in_string = false;
                i += 1;
            }
            _ if c < 0x20 => {
                out.push_str(&input[seg_start..i]);
                match c {
                    b'\n' => out.push_str("\\n"),
                    b'\r' => out.push_str("\\r"),
                    b'\t' => out.push_str("\\t"),
                    0x08 => out.push_str("\\b"),
                    0x0c => out.push_str("\\f"),
                    _ => out.push_str(&format!("\\u{c:04x}")),
                }
                i += 1;
                seg_start = i;
            }
            _ => i += 1,
        }
    }
    out.push_str(&input[seg_start..]);
    out
}
