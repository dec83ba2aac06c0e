use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;

/// A structured field value [byte sequence].
///
/// Stores the raw decoded bytes; the base64 encoding only exists in the
/// wire form.
///
/// [byte sequence]: <https://httpwg.org/specs/rfc8941.html#binary>
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteSequence(Vec<u8>);

impl ByteSequence {
    /// Returns the bytes as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns the canonical base64 encoding of the bytes (no delimiters).
    pub(crate) fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    /// Decodes a base64 string (strict, padding required) into a `ByteSequence`.
    pub(crate) fn from_base64(s: &str) -> Result<Self, base64::DecodeError> {
        STANDARD.decode(s).map(ByteSequence)
    }
}

impl From<Vec<u8>> for ByteSequence {
    fn from(v: Vec<u8>) -> Self {
        ByteSequence(v)
    }
}

impl From<&[u8]> for ByteSequence {
    fn from(v: &[u8]) -> Self {
        ByteSequence(v.to_vec())
    }
}

impl From<ByteSequence> for Vec<u8> {
    fn from(v: ByteSequence) -> Vec<u8> {
        v.0
    }
}

impl AsRef<[u8]> for ByteSequence {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ByteSequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, ":{}:", self.to_base64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_base64() {
        let bytes = ByteSequence::from(b"Hello World".to_vec());
        assert_eq!(bytes.to_base64(), "SGVsbG8gV29ybGQ=");
        assert_eq!(ByteSequence::from_base64("SGVsbG8gV29ybGQ=").unwrap(), bytes);
    }

    #[test]
    fn rejects_malformed_base64() {
        assert!(ByteSequence::from_base64("not valid base64!!").is_err());
    }
}
