//! Comment and trailing-comma removal for JSONC text.
//!
//! Both passes copy unchanged spans of the input wholesale and only break
//! at the ASCII delimiters they remove, so multi-byte characters are never
//! split and the cost stays linear in the input length.

/// Remove `/* ... */` block comments and `// ...` line comments.
///
/// Comment delimiters inside JSON strings are content and survive. A line
/// comment consumes up to but not including its terminating newline, so
/// line structure is preserved. An unclosed block comment consumes the
/// rest of the input. Whitespace around comments is left untouched:
/// `{ /* c */ "k": 1 }` becomes `{  "k": 1 }`.
pub fn strip_comments(input: &str) -> String {
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
        match c {
            b'"' => {
                in_string = true;
                i += 1;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                out.push_str(&input[seg_start..i]);
                i = end_of_block_comment(bytes, i);
                seg_start = i;
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                out.push_str(&input[seg_start..i]);
                i = end_of_line_comment(bytes, i);
                seg_start = i;
            }
            _ => i += 1,
        }
    }
    out.push_str(&input[seg_start..]);
    out
}

/// Remove commas whose next significant character is `}` or `]`.
///
/// The lookahead skips whitespace and comments, so a comma is still
/// trailing when only a comment separates it from the closing bracket.
/// Comment text itself is preserved by this pass; run
/// [`strip_comments`] first (or use [`strip`]) to drop it.
pub fn strip_trailing_commas(input: &str) -> String {
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
        match c {
            b'"' => {
                in_string = true;
                i += 1;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = end_of_block_comment(bytes, i);
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = end_of_line_comment(bytes, i);
            }
            b',' if is_trailing_comma(bytes, i) => {
                out.push_str(&input[seg_start..i]);
                i += 1;
                seg_start = i;
            }
            _ => i += 1,
        }
    }
    out.push_str(&input[seg_start..]);
    out
}

/// Remove comments, then trailing commas.
pub fn strip(input: &str) -> String {
    strip_trailing_commas(&strip_comments(input))
}

/// Look ahead from a comma for the next significant character, skipping
/// whitespace and comments. The comma is trailing when that character is
/// a closing bracket.
fn is_trailing_comma(bytes: &[u8], comma: usize) -> bool {
    let mut j = comma + 1;
    while j < bytes.len() {
        let c = bytes[j];
        if c.is_ascii_whitespace() {
            j += 1;
        } else if c == b'/' && bytes.get(j + 1) == Some(&b'*') {
            j = end_of_block_comment(bytes, j);
        } else if c == b'/' && bytes.get(j + 1) == Some(&b'/') {
            j = end_of_line_comment(bytes, j);
        } else {
            return c == b'}' || c == b']';
        }
    }
    false
}

/// Index just past the `*/` closing `bytes[start..]`, or the end of input
/// for an unclosed comment.
fn end_of_block_comment(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 2;
    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            return i + 2;
        }
        i += 1;
    }
    bytes.len()
}

/// Index of the newline terminating the line comment at `bytes[start..]`
/// (the newline itself is not part of the comment), or the end of input.
fn end_of_line_comment(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 2;
    while i < bytes.len() {
        if bytes[i] == b'\n' || bytes[i] == b'\r' {
            return i;
        }
        i += 1;
    }
    bytes.len()
}
