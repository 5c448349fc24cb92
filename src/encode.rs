use std::borrow::Cow;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// ASCII that may appear unescaped in a URL or id. Everything else, and all non-ASCII, is
/// percent-encoded as UTF-8.
const URI_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Encode the four characters that are unsafe in HTML text and double-quoted attributes.
pub fn encode_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '"', '<', '>']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Percent-encode characters that are not allowed in a URI, leaving existing escapes alone.
///
/// A `%` followed by two ASCII alphanumerics is treated as an existing escape and copied as-is.
pub fn normalize_uri(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = String::with_capacity(value.len());
    let mut start = 0usize;
    let mut i = 0usize;
    while i < bytes.len() {
        let escaped = bytes[i] == b'%'
            && bytes.get(i + 1).is_some_and(u8::is_ascii_alphanumeric)
            && bytes.get(i + 2).is_some_and(u8::is_ascii_alphanumeric);
        if escaped {
            out.extend(utf8_percent_encode(&value[start..i], URI_UNSAFE));
            out.push_str(&value[i..i + 3]);
            i += 3;
            start = i;
            continue;
        }
        i += 1;
    }
    out.extend(utf8_percent_encode(&value[start..], URI_UNSAFE));
    out
}
