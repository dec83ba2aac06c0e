//! Byte-class predicates shared by the grammar-level types and the parser.
//!
//! Unrolled to explicit byte tests rather than expressed as regular
//! expressions, so the hot parsing path never depends on a regex engine.

/// `lcalpha / "*"`, the first character of a [`Key`][crate::Key].
pub(crate) const fn is_allowed_start_key_char(b: u8) -> bool {
    b.is_ascii_lowercase() || b == b'*'
}

/// `lcalpha / DIGIT / "_" / "-" / "." / "*"`, characters after the first in a key.
pub(crate) const fn is_allowed_inner_key_char(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'_' | b'-' | b'.' | b'*')
}

/// `ALPHA / "*"`, the first character of a [`Token`][crate::Token].
pub(crate) const fn is_allowed_start_token_char(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'*'
}

/// `tchar / ":" / "/"`, characters after the first in a token.
pub(crate) const fn is_allowed_inner_token_char(b: u8) -> bool {
    is_tchar(b) || matches!(b, b':' | b'/')
}

/// RFC 7230 `tchar`.
pub(crate) const fn is_tchar(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
        )
}

/// Standard base64 alphabet plus padding, the only characters permitted
/// inside `:...:` byte-sequence delimiters.
pub(crate) const fn is_allowed_b64_content(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=')
}

/// Printable ASCII (`0x20..=0x7e`), the full stored-string character set.
///
/// Used by the `String` constructor: a string may *store* a raw `"` or `\`
/// byte, since those are only escaped at serialization time.
pub(crate) const fn is_printable_ascii(b: u8) -> bool {
    b >= 0x20 && b <= 0x7e
}

/// Printable ASCII excluding `"` and `\`, the character set the parser
/// accepts unescaped inside a wire-form string literal.
pub(crate) const fn is_unescaped_string_char(b: u8) -> bool {
    is_printable_ascii(b) && b != b'"' && b != b'\\'
}
