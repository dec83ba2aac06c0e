use crate::{ByteSequence, Decimal, Integer, SfvString, Token};
use std::fmt;

#[cfg(feature = "sf-date-item")]
use crate::Date;

/// A [bare item]: a typed scalar value without parameters.
///
/// [bare item]: <https://httpwg.org/specs/rfc8941.html#item>
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum BareItem {
    Integer(Integer),
    Decimal(Decimal),
    String(SfvString),
    Token(Token),
    ByteSequence(ByteSequence),
    Boolean(bool),
    #[cfg(feature = "sf-date-item")]
    Date(Date),
}

impl BareItem {
    /// Returns the integer value, if this is an `Integer`.
    pub fn as_integer(&self) -> Option<Integer> {
        match self {
            BareItem::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the decimal value, if this is a `Decimal`.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            BareItem::Decimal(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string value, if this is a `String`.
    pub fn as_str(&self) -> Option<&SfvString> {
        match self {
            BareItem::String(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the token value, if this is a `Token`.
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            BareItem::Token(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the byte sequence value, if this is a `ByteSequence`.
    pub fn as_byte_sequence(&self) -> Option<&ByteSequence> {
        match self {
            BareItem::ByteSequence(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a `Boolean`.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            BareItem::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the date value, if this is a `Date`.
    #[cfg(feature = "sf-date-item")]
    pub fn as_date(&self) -> Option<Date> {
        match self {
            BareItem::Date(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns `true` if this bare item is the boolean `true`.
    ///
    /// Used by the dictionary/parameter serializer to decide whether a
    /// member can be written in its bare-key shorthand form.
    pub(crate) fn is_true(&self) -> bool {
        matches!(self, BareItem::Boolean(true))
    }
}

impl fmt::Display for BareItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BareItem::Integer(v) => fmt::Display::fmt(v, f),
            BareItem::Decimal(v) => fmt::Display::fmt(v, f),
            BareItem::String(v) => write!(f, "\"{}\"", escape_string(v.as_str())),
            BareItem::Token(v) => fmt::Display::fmt(v, f),
            BareItem::ByteSequence(v) => fmt::Display::fmt(v, f),
            BareItem::Boolean(v) => f.write_str(if *v { "?1" } else { "?0" }),
            #[cfg(feature = "sf-date-item")]
            BareItem::Date(v) => fmt::Display::fmt(v, f),
        }
    }
}

pub(crate) fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

impl From<bool> for BareItem {
    fn from(v: bool) -> Self {
        BareItem::Boolean(v)
    }
}

impl From<SfvString> for BareItem {
    fn from(v: SfvString) -> Self {
        BareItem::String(v)
    }
}

impl From<Token> for BareItem {
    fn from(v: Token) -> Self {
        BareItem::Token(v)
    }
}

impl From<ByteSequence> for BareItem {
    fn from(v: ByteSequence) -> Self {
        BareItem::ByteSequence(v)
    }
}

impl From<Decimal> for BareItem {
    fn from(v: Decimal) -> Self {
        BareItem::Decimal(v)
    }
}

impl From<Integer> for BareItem {
    fn from(v: Integer) -> Self {
        BareItem::Integer(v)
    }
}

#[cfg(feature = "sf-date-item")]
impl From<Date> for BareItem {
    fn from(v: Date) -> Self {
        BareItem::Date(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn displays_canonical_forms() {
        assert_eq!(BareItem::Boolean(true).to_string(), "?1");
        assert_eq!(BareItem::Boolean(false).to_string(), "?0");
        assert_eq!(
            BareItem::String(SfvString::try_from("a\"b").unwrap()).to_string(),
            "\"a\\\"b\""
        );
    }
}
