//! A single-pass, table-free recursive-descent reader over the input bytes.
//!
//! No regular expressions appear on the hot path; lexical classes are the
//! byte predicates in [`crate::utils`]. Position tracking is byte-based so
//! errors can point a caller at the offending offset.

use crate::bare_item::BareItem;
use crate::dictionary::Dictionary;
use crate::inner_list::InnerList;
use crate::item::Item;
use crate::key::Key;
use crate::list::{Member, OuterList};
use crate::parameters::Parameters;
use crate::string::SfvString;
use crate::token::Token;
use crate::byte_sequence::ByteSequence;
use crate::decimal::Decimal;
use crate::error::{Error, Kind};
use crate::integer::Integer;
use crate::utils;
use indexmap::IndexMap;
use std::convert::TryFrom;

#[cfg(feature = "sf-date-item")]
use crate::date::Date;

/// A recursive-descent parser over a single structured-field value.
///
/// Construct with [`Parser::new`] and call one of the three shape-specific
/// entry points. Prefer the free functions [`parse_item`], [`parse_list`],
/// and [`parse_dictionary`] unless you need to reuse a `Parser` value.
pub struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
        }
    }

    /// Parses `input` as an [`Item`][crate::Item].
    pub fn parse_item(mut self) -> Result<Item, Error> {
        self.skip_sp();
        let item = self.read_item()?;
        self.skip_sp();
        self.expect_eof()?;
        Ok(item)
    }

    /// Parses `input` as an [`OuterList`][crate::OuterList].
    pub fn parse_list(mut self) -> Result<OuterList, Error> {
        self.skip_sp();
        let mut members = Vec::new();
        if !self.at_eof() {
            members.push(self.read_member()?);
            loop {
                self.skip_sp();
                if self.peek() != Some(b',') {
                    break;
                }
                self.advance();
                self.skip_sp_required()?;
                members.push(self.read_member()?);
            }
        }
        self.skip_sp();
        self.expect_eof()?;
        Ok(OuterList::from_members(members))
    }

    /// Parses `input` as a [`Dictionary`][crate::Dictionary].
    pub fn parse_dictionary(mut self) -> Result<Dictionary, Error> {
        self.skip_sp();
        let mut entries: IndexMap<Key, Member> = IndexMap::new();
        if !self.at_eof() {
            loop {
                let key = self.read_key()?;
                let member = if self.peek() == Some(b'=') {
                    self.advance();
                    self.read_member()?
                } else {
                    let params = self.read_parameters()?;
                    Member::Item(Item::with_parameters(BareItem::Boolean(true), params))
                };
                entries.insert(key, member);
                self.skip_sp();
                if self.peek() != Some(b',') {
                    break;
                }
                self.advance();
                self.skip_sp_required()?;
            }
        }
        self.skip_sp();
        self.expect_eof()?;
        Ok(Dictionary::from_entries(entries))
    }

    fn read_member(&mut self) -> Result<Member, Error> {
        if self.peek() == Some(b'(') {
            Ok(Member::InnerList(self.read_inner_list()?))
        } else {
            Ok(Member::Item(self.read_item()?))
        }
    }

    fn read_item(&mut self) -> Result<Item, Error> {
        let bare_item = self.read_bare_item()?;
        let params = self.read_parameters()?;
        Ok(Item::with_parameters(bare_item, params))
    }

    fn read_inner_list(&mut self) -> Result<InnerList, Error> {
        self.advance(); // '('
        let mut items = Vec::new();
        self.skip_sp();
        if self.peek() != Some(b')') {
            items.push(self.read_item()?);
            loop {
                let spaces = self.skip_sp();
                if self.peek() == Some(b')') {
                    break;
                }
                if spaces == 0 {
                    return Err(self.syntax_error("expected space between inner-list items"));
                }
                items.push(self.read_item()?);
            }
        }
        if self.peek() != Some(b')') {
            return Err(self.syntax_error("unterminated inner list"));
        }
        self.advance();
        let params = self.read_parameters()?;
        Ok(InnerList::from_items(items).with_parameters(params))
    }

    fn read_parameters(&mut self) -> Result<Parameters, Error> {
        let mut entries: IndexMap<Key, BareItem> = IndexMap::new();
        while self.peek() == Some(b';') {
            self.advance();
            self.skip_sp();
            let key = self.read_key()?;
            let value = if self.peek() == Some(b'=') {
                self.advance();
                self.read_bare_item()?
            } else {
                BareItem::Boolean(true)
            };
            entries.insert(key, value);
        }
        Ok(Parameters::from_entries(entries))
    }

    fn read_key(&mut self) -> Result<Key, Error> {
        let start = self.pos;
        match self.peek() {
            Some(b) if utils::is_allowed_start_key_char(b) => self.advance(),
            _ => return Err(self.syntax_error("expected key")),
        }
        while matches!(self.peek(), Some(b) if utils::is_allowed_inner_key_char(b)) {
            self.advance();
        }
        let text = self.slice_str(start, self.pos)?;
        Key::try_from(text).map_err(Error::from)
    }

    fn read_bare_item(&mut self) -> Result<BareItem, Error> {
        match self.peek() {
            Some(b'?') => self.read_boolean(),
            Some(b'-') => self.read_number(),
            Some(b) if b.is_ascii_digit() => self.read_number(),
            Some(b'"') => self.read_string(),
            Some(b':') => self.read_byte_sequence(),
            #[cfg(feature = "sf-date-item")]
            Some(b'@') => self.read_date(),
            Some(b) if utils::is_allowed_start_token_char(b) => self.read_token(),
            _ => Err(self.syntax_error("expected a bare item")),
        }
    }

    fn read_boolean(&mut self) -> Result<BareItem, Error> {
        self.advance(); // '?'
        match self.peek() {
            Some(b'0') => {
                self.advance();
                Ok(BareItem::Boolean(false))
            }
            Some(b'1') => {
                self.advance();
                Ok(BareItem::Boolean(true))
            }
            _ => Err(self.syntax_error("invalid boolean")),
        }
    }

    fn read_number(&mut self) -> Result<BareItem, Error> {
        let negative = self.peek() == Some(b'-');
        if negative {
            self.advance();
        }

        let int_start = self.pos;
        if !matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            return Err(self.syntax_error("expected digit"));
        }
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.advance();
            if self.pos - int_start > 15 {
                return Err(self.syntax_error("integer has too many digits"));
            }
        }
        let int_len = self.pos - int_start;

        if self.peek() == Some(b'.') {
            if int_len > 12 {
                return Err(self.syntax_error("decimal integer part has too many digits"));
            }
            self.advance(); // '.'
            let frac_start = self.pos;
            while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
                self.advance();
                if self.pos - frac_start > 3 {
                    return Err(self.syntax_error("decimal fractional part has too many digits"));
                }
            }
            let frac_len = self.pos - frac_start;
            if frac_len == 0 {
                return Err(self.syntax_error("decimal requires a fractional digit"));
            }

            let int_digits = self.slice_str(int_start, int_start + int_len)?;
            let frac_digits = self.slice_str(frac_start, frac_start + frac_len)?;

            let int_val: i64 = int_digits
                .parse()
                .map_err(|_| self.syntax_error("malformed decimal"))?;
            let mut frac_val: i64 = frac_digits
                .parse()
                .map_err(|_| self.syntax_error("malformed decimal"))?;
            for _ in 0..(3 - frac_len) {
                frac_val *= 10;
            }

            let magnitude = int_val
                .checked_mul(1000)
                .and_then(|v| v.checked_add(frac_val))
                .ok_or_else(|| Error::out_of_range())?;
            let scaled = if negative { -magnitude } else { magnitude };
            let integer = Integer::try_from(scaled).map_err(|_| Error::out_of_range())?;
            Ok(BareItem::Decimal(Decimal::from_integer_scaled_1000(
                integer,
            )))
        } else {
            let digits = self.slice_str(int_start, int_start + int_len)?;
            let magnitude: i64 = digits
                .parse()
                .map_err(|_| self.syntax_error("malformed integer"))?;
            let value = if negative { -magnitude } else { magnitude };
            let integer = Integer::try_from(value).map_err(|_| Error::out_of_range())?;
            Ok(BareItem::Integer(integer))
        }
    }

    fn read_string(&mut self) -> Result<BareItem, Error> {
        self.advance(); // opening '"'
        let mut out = String::new();
        loop {
            match self.peek() {
                None => return Err(self.syntax_error("unterminated string")),
                Some(b'"') => {
                    self.advance();
                    break;
                }
                Some(b'\\') => {
                    self.advance();
                    match self.peek() {
                        Some(b'"') => {
                            out.push('"');
                            self.advance();
                        }
                        Some(b'\\') => {
                            out.push('\\');
                            self.advance();
                        }
                        _ => return Err(self.syntax_error("invalid string escape")),
                    }
                }
                Some(b) if (0x20..=0x7e).contains(&b) => {
                    out.push(b as char);
                    self.advance();
                }
                Some(_) => return Err(self.syntax_error("invalid character in string")),
            }
        }
        SfvString::try_from(out).map(BareItem::String).map_err(Error::from)
    }

    fn read_byte_sequence(&mut self) -> Result<BareItem, Error> {
        self.advance(); // opening ':'
        let start = self.pos;
        while matches!(self.peek(), Some(b) if utils::is_allowed_b64_content(b)) {
            self.advance();
        }
        let encoded = self.slice_str(start, self.pos)?;
        if self.peek() != Some(b':') {
            return Err(self.syntax_error("unterminated byte sequence"));
        }
        self.advance();
        ByteSequence::from_base64(encoded)
            .map(BareItem::ByteSequence)
            .map_err(|_| self.syntax_error("invalid base64 in byte sequence"))
    }

    fn read_token(&mut self) -> Result<BareItem, Error> {
        let start = self.pos;
        self.advance(); // first char already validated by the dispatcher
        while matches!(self.peek(), Some(b) if utils::is_allowed_inner_token_char(b)) {
            self.advance();
        }
        let text = self.slice_str(start, self.pos)?;
        Token::try_from(text).map(BareItem::Token).map_err(Error::from)
    }

    #[cfg(feature = "sf-date-item")]
    fn read_date(&mut self) -> Result<BareItem, Error> {
        self.advance(); // '@'
        match self.read_number()? {
            BareItem::Integer(seconds) => {
                let date = Date::from_unix_seconds(i64::from(seconds))?;
                Ok(BareItem::Date(date))
            }
            _ => Err(self.syntax_error("date must be a signed integer")),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn expect_eof(&self) -> Result<(), Error> {
        if self.at_eof() {
            Ok(())
        } else {
            Err(self.syntax_error("unexpected trailing data"))
        }
    }

    /// Consumes zero or more SP (`0x20`), returning how many were consumed.
    fn skip_sp(&mut self) -> usize {
        let start = self.pos;
        while self.peek() == Some(b' ') {
            self.advance();
        }
        self.pos - start
    }

    /// Consumes one or more SP, failing if none are present.
    fn skip_sp_required(&mut self) -> Result<(), Error> {
        if self.skip_sp() == 0 {
            Err(self.syntax_error("expected at least one space"))
        } else {
            Ok(())
        }
    }

    fn slice_str(&self, start: usize, end: usize) -> Result<&'a str, Error> {
        std::str::from_utf8(&self.input[start..end])
            .map_err(|_| Error::with_offset(Kind::Syntax, "invalid UTF-8", start))
    }

    fn syntax_error(&self, reason: &'static str) -> Error {
        Error::with_offset(Kind::Syntax, reason, self.pos)
    }
}

/// Parses `input` as an [`Item`][crate::Item].
pub fn parse_item(input: &str) -> Result<Item, Error> {
    Parser::new(input).parse_item()
}

/// Parses `input` as an [`OuterList`][crate::OuterList].
pub fn parse_list(input: &str) -> Result<OuterList, Error> {
    Parser::new(input).parse_list()
}

/// Parses `input` as a [`Dictionary`][crate::Dictionary].
pub fn parse_dictionary(input: &str) -> Result<Dictionary, Error> {
    Parser::new(input).parse_dictionary()
}

/// Parses a standalone parameter-list wire fragment, e.g. `;a=1;b=2`.
///
/// Used by [`Parameters::from_wire`][crate::Parameters::from_wire].
pub(crate) fn parse_parameters_fragment(input: &str) -> Result<Parameters, Error> {
    let mut parser = Parser::new(input);
    parser.skip_sp();
    let params = parser.read_parameters()?;
    parser.skip_sp();
    parser.expect_eof()?;
    Ok(params)
}

/// Parses a standalone inner-list wire fragment, e.g. `("foo" "bar");lvl=1`.
///
/// Used by [`InnerList::from_wire`][crate::InnerList::from_wire].
pub(crate) fn parse_inner_list_fragment(input: &str) -> Result<InnerList, Error> {
    let mut parser = Parser::new(input);
    parser.skip_sp();
    if parser.peek() != Some(b'(') {
        return Err(parser.syntax_error("expected '('"));
    }
    let inner_list = parser.read_inner_list()?;
    parser.skip_sp();
    parser.expect_eof()?;
    Ok(inner_list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializer::Canonical;

    #[test]
    fn parses_dictionary_scenario() {
        let dict = parse_dictionary("a=?0,   b,   c; foo=bar").unwrap();
        assert_eq!(dict.canonical(), "a=?0, b, c;foo=bar");
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn parses_nested_list_scenario() {
        let list = parse_list("(\"foo\"; a=1;b=2);lvl=5, (\"bar\" \"baz\");lvl=1").unwrap();
        assert_eq!(
            list.canonical(),
            "(\"foo\";a=1;b=2);lvl=5, (\"bar\" \"baz\");lvl=1"
        );
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn parses_item_with_parameters() {
        let item = parse_item("\"foo\";a=1;b=2").unwrap();
        assert_eq!(item.canonical(), "\"foo\";a=1;b=2");
    }

    #[test]
    fn parses_mixed_list_scenario() {
        let list = parse_list("token, \"string\", ?1; parameter, (42 42.0)").unwrap();
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn parses_byte_sequence_item() {
        let item = parse_item(":SGVsbG8gV29ybGQ=:").unwrap();
        assert_eq!(item.canonical(), ":SGVsbG8gV29ybGQ=:");
    }

    #[test]
    fn rejects_trailing_comma_in_list() {
        assert!(parse_list("a, b,").is_err());
    }

    #[test]
    fn rejects_leading_tab() {
        assert!(parse_item("\ta").is_err());
    }

    #[test]
    fn decimal_rounds_half_to_even() {
        let item = parse_item("1.2345");
        assert!(item.is_err());
    }

    #[test]
    fn integer_bounds() {
        assert!(parse_item("999999999999999").is_ok());
        assert!(parse_item("1000000000000000").is_err());
    }

    #[test]
    fn parses_parameters_fragment() {
        let params = parse_parameters_fragment(";a=1;b").unwrap();
        assert_eq!(params.canonical(), ";a=1;b");
    }

    #[test]
    fn parses_inner_list_fragment() {
        let inner = parse_inner_list_fragment(r#"("foo" "bar");lvl=1"#).unwrap();
        assert_eq!(inner.canonical(), r#"("foo" "bar");lvl=1"#);
    }

    #[test]
    fn rejects_inner_list_fragment_missing_paren() {
        assert!(parse_inner_list_fragment("foo").is_err());
    }
}
