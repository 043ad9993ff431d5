//! Value escaping for the serialized cookie form.
//!
//! Values are percent-encoded with the classic JavaScript `escape()`
//! character set so that `;` and `=` can never corrupt a `name=value` pair.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except ASCII alphanumerics and `@ * _ + - . /` is written `%XX`.
const ESCAPE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'@')
    .remove(b'*')
    .remove(b'_')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'/');

/// Escapes a cookie value for storage.
pub fn escape(value: &str) -> String {
    utf8_percent_encode(value, ESCAPE_SET).to_string()
}

/// Reverses [`escape`]. Malformed `%` sequences pass through undecoded.
pub fn unescape(value: &str) -> String {
    percent_decode_str(value).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_characters_are_encoded() {
        assert_eq!(escape("a b;c=d"), "a%20b%3Bc%3Dd");
        assert_eq!(escape("100%"), "100%25");
    }

    #[test]
    fn unreserved_set_passes_through() {
        let s = "AZaz09@*_+-./";
        assert_eq!(escape(s), s);
    }

    #[test]
    fn printable_ascii_round_trips() {
        let all: String = (0x20u8..0x7f).map(|b| b as char).collect();
        assert_eq!(unescape(&escape(&all)), all);
    }

    #[test]
    fn non_ascii_round_trips() {
        assert_eq!(unescape(&escape("héllo wörld")), "héllo wörld");
    }

    #[test]
    fn malformed_sequences_pass_through() {
        assert_eq!(unescape("%zz"), "%zz");
        assert_eq!(unescape("100%"), "100%");
    }
}
