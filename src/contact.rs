// SPDX-License-Identifier: MPL-2.0
//! Contact actions for the library screen.
//!
//! The email button hands a prefilled `mailto:` URL to the platform opener;
//! if no mail client takes it, the address is copied to the clipboard
//! instead. The call button always copies the display number.

/// Builds a `mailto:` URL with an optional percent-encoded subject.
pub fn mailto_url(address: &str, subject: Option<&str>) -> String {
    match subject {
        Some(subject) => format!("mailto:{}?subject={}", address, percent_encode(subject)),
        None => format!("mailto:{}", address),
    }
}

/// Percent-encodes a header value for use in a `mailto:` query. Unreserved
/// characters (RFC 3986 §2.3) pass through untouched.
fn percent_encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_without_subject_is_bare() {
        assert_eq!(
            mailto_url("studio@folio.example", None),
            "mailto:studio@folio.example"
        );
    }

    #[test]
    fn subject_spaces_are_percent_encoded() {
        assert_eq!(
            mailto_url("studio@folio.example", Some("Portfolio Inquiry")),
            "mailto:studio@folio.example?subject=Portfolio%20Inquiry"
        );
    }

    #[test]
    fn non_ascii_subjects_encode_per_byte() {
        assert_eq!(percent_encode("é"), "%C3%A9");
    }

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(percent_encode("a-b_c.d~e"), "a-b_c.d~e");
    }
}
