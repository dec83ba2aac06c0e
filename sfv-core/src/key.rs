use crate::{utils, Error};

use std::borrow::Borrow;
use std::convert::TryFrom;
use std::fmt;

/// An owned structured field value [key].
///
/// Keys must match the following regular expression:
///
/// ```re
/// ^[a-z*][a-z0-9.*_-]*$
/// ```
///
/// [key]: <https://httpwg.org/specs/rfc8941.html#key>
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(String);

/// A borrowed structured field value [key].
///
/// This type is to [`Key`] as [`str`] is to [`String`].
///
/// [key]: <https://httpwg.org/specs/rfc8941.html#key>
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, ref_cast::RefCastCustom)]
#[repr(transparent)]
pub struct KeyRef(str);

/// An error produced during conversion to a [`Key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyError {
    byte_index: Option<usize>,
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(byte_index) = self.byte_index {
            write!(f, "invalid character for key at byte index {byte_index}")
        } else {
            f.write_str("key cannot be empty")
        }
    }
}

impl std::error::Error for KeyError {}

impl From<KeyError> for Error {
    fn from(err: KeyError) -> Error {
        match err.byte_index {
            Some(i) => Error::invalid_key(format_args!("invalid character at byte {i}")),
            None => Error::invalid_key("cannot be empty"),
        }
    }
}

const fn validate(v: &[u8]) -> Result<(), KeyError> {
    if v.is_empty() {
        return Err(KeyError { byte_index: None });
    }

    if !utils::is_allowed_start_key_char(v[0]) {
        return Err(KeyError {
            byte_index: Some(0),
        });
    }

    let mut index = 1;

    while index < v.len() {
        if !utils::is_allowed_inner_key_char(v[index]) {
            return Err(KeyError {
                byte_index: Some(index),
            });
        }
        index += 1;
    }

    Ok(())
}

impl KeyRef {
    #[ref_cast::ref_cast_custom]
    const fn cast(v: &str) -> &Self;

    /// Creates a `&KeyRef` from a `&str`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(v: &str) -> Result<&Self, KeyError> {
        validate(v.as_bytes())?;
        Ok(Self::cast(v))
    }

    /// Creates a `&KeyRef`, panicking if the value is invalid.
    ///
    /// This method is intended to be called from `const` contexts in which
    /// the value is known to be valid. Use [`KeyRef::from_str`] for
    /// non-panicking conversions.
    pub const fn constant(v: &str) -> &Self {
        match validate(v.as_bytes()) {
            Ok(_) => Self::cast(v),
            Err(err) => {
                if err.byte_index.is_none() {
                    panic!("key cannot be empty")
                } else {
                    panic!("invalid character for key")
                }
            }
        }
    }

    /// Returns the key as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ToOwned for KeyRef {
    type Owned = Key;

    fn to_owned(&self) -> Key {
        Key(self.0.to_owned())
    }
}

impl Borrow<KeyRef> for Key {
    fn borrow(&self) -> &KeyRef {
        self
    }
}

impl std::ops::Deref for Key {
    type Target = KeyRef;

    fn deref(&self) -> &KeyRef {
        KeyRef::cast(&self.0)
    }
}

impl From<Key> for String {
    fn from(v: Key) -> String {
        v.0
    }
}

impl TryFrom<String> for Key {
    type Error = KeyError;

    fn try_from(v: String) -> Result<Key, KeyError> {
        validate(v.as_bytes())?;
        Ok(Key(v))
    }
}

impl TryFrom<&str> for Key {
    type Error = KeyError;

    fn try_from(v: &str) -> Result<Key, KeyError> {
        validate(v.as_bytes())?;
        Ok(Key(v.to_owned()))
    }
}

/// Creates a `&KeyRef`, panicking if the value is invalid.
///
/// This is a convenience free function for [`KeyRef::constant`].
pub const fn key_ref(v: &str) -> &KeyRef {
    KeyRef::constant(v)
}

impl fmt::Display for KeyRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        <KeyRef as fmt::Display>::fmt(self, f)
    }
}

macro_rules! impl_eq {
    ($a: ty, $b: ty) => {
        impl PartialEq<$a> for $b {
            fn eq(&self, other: &$a) -> bool {
                <KeyRef as PartialEq>::eq(self, other)
            }
        }
        impl PartialEq<$b> for $a {
            fn eq(&self, other: &$b) -> bool {
                <KeyRef as PartialEq>::eq(self, other)
            }
        }
    };
}

impl_eq!(Key, KeyRef);
impl_eq!(Key, &KeyRef);

impl<'a> TryFrom<&'a str> for &'a KeyRef {
    type Error = KeyError;

    fn try_from(v: &'a str) -> Result<&'a KeyRef, KeyError> {
        KeyRef::from_str(v)
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for KeyRef {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_uppercase() {
        assert!(Key::try_from("Foo").is_err());
    }

    #[test]
    fn accepts_star_and_digits() {
        assert!(Key::try_from("*foo-bar.9_2").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert!(Key::try_from("").is_err());
    }
}
