//! Percent decoding of captured path parameters.

use percent_encoding::percent_decode_str;

/// Decodes `raw` as percent-encoded UTF-8.
///
/// Malformed escapes or invalid UTF-8 yield `raw` unchanged. `+` is a
/// literal plus sign in a path segment.
pub fn decode_segment(raw: &str) -> String {
    if !has_valid_escapes(raw) {
        return raw.to_string();
    }
    match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

fn has_valid_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}
