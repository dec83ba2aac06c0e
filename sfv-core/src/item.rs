use crate::{BareItem, Error, Key, KeyRef, Parameters};
use std::fmt;

/// An [item]: a bare value together with its parameters.
///
/// Can be a member of [`OuterList`][crate::OuterList] or
/// [`Dictionary`][crate::Dictionary], or parsed/serialized on its own.
///
/// [item]: <https://httpwg.org/specs/rfc8941.html#item>
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    bare_item: BareItem,
    params: Parameters,
}

impl Item {
    /// Returns a new `Item` with empty `Parameters`.
    pub fn new(bare_item: impl Into<BareItem>) -> Self {
        Self {
            bare_item: bare_item.into(),
            params: Parameters::empty(),
        }
    }

    /// Returns a new `Item` with the given `Parameters`.
    pub fn with_parameters(bare_item: impl Into<BareItem>, params: Parameters) -> Self {
        Self {
            bare_item: bare_item.into(),
            params,
        }
    }

    /// The item's bare value.
    pub fn value(&self) -> &BareItem {
        &self.bare_item
    }

    /// The item's parameters.
    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    /// Returns a new `Item` with its bare value replaced.
    pub fn with_value(&self, value: impl Into<BareItem>) -> Self {
        Self {
            bare_item: value.into(),
            params: self.params.clone(),
        }
    }

    /// Returns a new `Item` with its parameter set replaced.
    ///
    /// Returns an instance sharing `self.params`'s storage if `params` is
    /// the same instance.
    pub fn with_params(&self, params: Parameters) -> Self {
        Self {
            bare_item: self.bare_item.clone(),
            params,
        }
    }

    /// Returns the value for a parameter key.
    pub fn parameter(&self, key: &KeyRef) -> Result<&BareItem, Error> {
        self.params.get(key)
    }

    /// Returns a new `Item` with `key=value` added to its parameters.
    pub fn add_parameter(&self, key: Key, value: BareItem) -> Result<Self, Error> {
        Ok(self.with_params(self.params.add(key, value)?))
    }

    /// Returns a new `Item` with `key=value` appended to its parameters.
    pub fn append_parameter(&self, key: Key, value: BareItem) -> Result<Self, Error> {
        Ok(self.with_params(self.params.append(key, value)?))
    }

    /// Returns a new `Item` with `key=value` prepended to its parameters.
    pub fn prepend_parameter(&self, key: Key, value: BareItem) -> Result<Self, Error> {
        Ok(self.with_params(self.params.prepend(key, value)?))
    }

    /// Returns a new `Item` with the given parameter keys removed.
    pub fn without_parameters<'a>(&self, keys: impl IntoIterator<Item = &'a KeyRef>) -> Self {
        self.with_params(self.params.remove(keys))
    }

    /// Returns a new `Item` with all parameters removed.
    pub fn without_any_parameter(&self) -> Self {
        self.with_params(Parameters::empty())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.bare_item, self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn empty_params_serialize_to_bare_value() {
        let item = Item::new(crate::integer(42));
        assert_eq!(item.to_string(), "42");
    }

    #[test]
    fn with_params_serializes_trailing_parameters() {
        let params = Parameters::from_pairs([(
            Key::try_from("a").unwrap(),
            BareItem::Integer(crate::integer(1)),
        )])
        .unwrap();
        let item = Item::with_parameters(crate::integer(42), params);
        assert_eq!(item.to_string(), "42;a=1");
    }
}
