//! Percent-encoding of URI components.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is when encoding a component.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode every character outside the unreserved set.
pub fn encode(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Decode percent-escapes.
///
/// Malformed escapes are kept verbatim and invalid UTF-8 sequences are
/// replaced with `U+FFFD`.
pub fn decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::{decode, encode};

    #[test]
    fn encode_component() {
        const CASES: [(&str, &str); 6] = [
            ("", ""),
            ("abc", "abc"),
            ("a b", "a%20b"),
            ("a&b=c", "a%26b%3Dc"),
            ("-_.!~*'()", "-_.!~*'()"),
            ("é/?#", "%C3%A9%2F%3F%23"),
        ];

        for (input, expected) in CASES {
            let result = encode(input);
            assert_eq!(result, expected, "{input:?}");
        }
    }

    #[test]
    fn decode_component() {
        const CASES: [(&str, &str); 5] = [
            ("", ""),
            ("a%20b", "a b"),
            ("%C3%A9", "é"),
            ("100%", "100%"),
            ("%zz", "%zz"),
        ];

        for (input, expected) in CASES {
            let result = decode(input);
            assert_eq!(result, expected, "{input:?}");
        }
    }
}
