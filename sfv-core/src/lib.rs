//! Structured Field Values for HTTP, per [RFC 8941].
//!
//! This crate parses, represents, and serializes HTTP Structured Field
//! Values: a strict textual grammar for the value portion of a header or
//! trailer, admitting three top-level shapes ([`OuterList`], [`Dictionary`],
//! [`Item`]) built from typed scalars ([`Integer`], [`Decimal`],
//! [`SfvString`], [`Token`], [`ByteSequence`], `bool`) with optional
//! key-value [`Parameters`] attached to every element.
//!
//! Values are immutable after construction: every write method returns a
//! new value, and a write with no observable effect returns a value sharing
//! the same underlying storage as its receiver.
//!
//! ```
//! let dict = sfv::parse_dictionary("a=?0,   b,   c; foo=bar").unwrap();
//! assert_eq!(dict.len(), 3);
//! assert_eq!(sfv::Canonical::canonical(&dict), "a=?0, b, c;foo=bar");
//! ```
//!
//! [RFC 8941]: <https://httpwg.org/specs/rfc8941.html>

mod bare_item;
mod byte_sequence;
#[cfg(feature = "sf-date-item")]
mod date;
mod decimal;
mod dictionary;
mod error;
mod field;
mod inner_list;
mod integer;
mod item;
mod key;
mod list;
mod parameters;
pub mod parser;
pub mod serializer;
mod string;
mod token;
mod utils;

pub use bare_item::BareItem;
pub use byte_sequence::ByteSequence;
#[cfg(feature = "sf-date-item")]
pub use date::Date;
pub use decimal::Decimal;
pub use dictionary::Dictionary;
pub use error::{Error, Kind};
pub use field::Field;
pub use inner_list::InnerList;
pub use integer::{integer, Integer, OutOfRangeError};
pub use item::Item;
pub use key::{key_ref, Key, KeyError, KeyRef};
pub use list::{Member, OuterList};
pub use parameters::Parameters;
pub use parser::{parse_dictionary, parse_item, parse_list, Parser};
pub use serializer::Canonical;
pub use string::{string_ref, SfvString, SfvStringRef, StringError};
pub use token::{token_ref, Token, TokenError, TokenRef};
