use crate::{utils, Error};

use std::borrow::Borrow;
use std::convert::TryFrom;
use std::fmt;
use std::string::String as StdString;

/// An owned structured field value [string].
///
/// Strings may contain any printable ASCII byte (`0x20..=0x7e`), including
/// `"` and `\`; those two are stored raw and only escaped (as `\"` and `\\`)
/// in the serialized wire form. Named `SfvString` rather than `String` so it
/// doesn't shadow [`std::string::String`].
///
/// [string]: <https://httpwg.org/specs/rfc8941.html#string>
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SfvString(StdString);

/// A borrowed structured field value [string].
///
/// This type is to [`SfvString`] as [`str`] is to [`std::string::String`].
///
/// [string]: <https://httpwg.org/specs/rfc8941.html#string>
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, ref_cast::RefCastCustom)]
#[repr(transparent)]
pub struct SfvStringRef(str);

/// An error produced during conversion to a [`SfvString`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringError {
    byte_index: usize,
}

impl fmt::Display for StringError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "invalid character for string at byte index {}",
            self.byte_index
        )
    }
}

impl std::error::Error for StringError {}

impl From<StringError> for Error {
    fn from(_: StringError) -> Error {
        Error::invalid_character()
    }
}

const fn validate(v: &[u8]) -> Result<(), StringError> {
    let mut index = 0;

    while index < v.len() {
        if !utils::is_printable_ascii(v[index]) {
            return Err(StringError { byte_index: index });
        }
        index += 1;
    }

    Ok(())
}

impl SfvStringRef {
    #[ref_cast::ref_cast_custom]
    const fn cast(v: &str) -> &Self;

    /// Creates an empty `&SfvStringRef`.
    pub const fn empty() -> &'static Self {
        Self::cast("")
    }

    /// Creates a `&SfvStringRef` from a `&str`.
    ///
    /// The `&str` must not itself contain backslash escapes: this is the
    /// *unescaped* value, the same form the parser hands back and the
    /// serializer escapes on the way out.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(v: &str) -> Result<&Self, StringError> {
        validate(v.as_bytes())?;
        Ok(Self::cast(v))
    }

    /// Creates a `&SfvStringRef`, panicking if the value is invalid.
    pub const fn constant(v: &str) -> &Self {
        match validate(v.as_bytes()) {
            Ok(_) => Self::cast(v),
            Err(_) => panic!("invalid character for string"),
        }
    }

    /// Returns the string as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ToOwned for SfvStringRef {
    type Owned = SfvString;

    fn to_owned(&self) -> SfvString {
        SfvString(self.0.to_owned())
    }

    fn clone_into(&self, target: &mut SfvString) {
        self.0.clone_into(&mut target.0);
    }
}

impl Borrow<SfvStringRef> for SfvString {
    fn borrow(&self) -> &SfvStringRef {
        self
    }
}

impl std::ops::Deref for SfvString {
    type Target = SfvStringRef;

    fn deref(&self) -> &SfvStringRef {
        SfvStringRef::cast(&self.0)
    }
}

impl From<SfvString> for StdString {
    fn from(v: SfvString) -> StdString {
        v.0
    }
}

impl TryFrom<StdString> for SfvString {
    type Error = StringError;

    fn try_from(v: StdString) -> Result<SfvString, StringError> {
        validate(v.as_bytes())?;
        Ok(SfvString(v))
    }
}

impl TryFrom<&str> for SfvString {
    type Error = StringError;

    fn try_from(v: &str) -> Result<SfvString, StringError> {
        validate(v.as_bytes())?;
        Ok(SfvString(v.to_owned()))
    }
}

/// Creates a `&SfvStringRef`, panicking if the value is invalid.
pub const fn string_ref(v: &str) -> &SfvStringRef {
    SfvStringRef::constant(v)
}

impl fmt::Display for SfvStringRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Display for SfvString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        <SfvStringRef as fmt::Display>::fmt(self, f)
    }
}

macro_rules! impl_eq {
    ($a: ty, $b: ty) => {
        impl PartialEq<$a> for $b {
            fn eq(&self, other: &$a) -> bool {
                <SfvStringRef as PartialEq>::eq(self, other)
            }
        }
        impl PartialEq<$b> for $a {
            fn eq(&self, other: &$b) -> bool {
                <SfvStringRef as PartialEq>::eq(self, other)
            }
        }
    };
}

impl_eq!(SfvString, SfvStringRef);
impl_eq!(SfvString, &SfvStringRef);

impl<'a> TryFrom<&'a str> for &'a SfvStringRef {
    type Error = StringError;

    fn try_from(v: &'a str) -> Result<&'a SfvStringRef, StringError> {
        SfvStringRef::from_str(v)
    }
}

impl Borrow<str> for SfvString {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for SfvStringRef {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl Default for &SfvStringRef {
    fn default() -> Self {
        SfvStringRef::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_quote_and_backslash_raw() {
        assert!(SfvString::try_from("a\"b").is_ok());
        assert!(SfvString::try_from("a\\b").is_ok());
    }

    #[test]
    fn rejects_control_chars() {
        assert!(SfvString::try_from("a\nb").is_err());
    }

    #[test]
    fn accepts_printable_ascii() {
        assert!(SfvString::try_from("hello, world!").is_ok());
    }
}
