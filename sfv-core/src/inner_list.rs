use crate::parameters::resolve_index;
use crate::{BareItem, Error, Item, Key, KeyRef, Parameters};
use std::fmt;
use std::sync::Arc;

/// An [inner list]: a parenthesized, ordered sequence of `Item`s, itself
/// parameterizable.
///
/// [inner list]: <https://httpwg.org/specs/rfc8941.html#inner-list>
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InnerList {
    items: Arc<Vec<Item>>,
    params: Parameters,
}

impl InnerList {
    /// Returns a new `InnerList` with empty `Parameters`.
    pub fn from_items(items: impl Into<Vec<Item>>) -> Self {
        Self {
            items: Arc::new(items.into()),
            params: Parameters::empty(),
        }
    }

    /// Returns a new `InnerList` built from items and an ordered parameter
    /// pair sequence.
    pub fn from_pair(
        items: impl Into<Vec<Item>>,
        params: impl IntoIterator<Item = (Key, BareItem)>,
    ) -> Result<Self, Error> {
        Ok(Self {
            items: Arc::new(items.into()),
            params: Parameters::from_pairs(params)?,
        })
    }

    /// Returns a new `InnerList` built from items and an unordered
    /// associative parameter source.
    pub fn from_associative(
        items: impl Into<Vec<Item>>,
        params: impl IntoIterator<Item = (Key, BareItem)>,
    ) -> Result<Self, Error> {
        Self::from_pair(items, params)
    }

    /// The number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if `index` (negative counts from the end) is in
    /// bounds.
    pub fn has(&self, index: i64) -> bool {
        resolve_index(index, self.items.len()).is_ok()
    }

    /// Returns the item at `index`; negative indices count from the end.
    pub fn get(&self, index: i64) -> Result<&Item, Error> {
        let i = resolve_index(index, self.items.len())?;
        Ok(&self.items[i])
    }

    /// Returns the valid index range, `0..len`.
    pub fn keys(&self) -> impl Iterator<Item = usize> {
        0..self.items.len()
    }

    /// Iterates over the items in order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// The list's own parameters.
    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    /// Returns `true` if `self` and `other` share the same underlying item
    /// storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    /// Returns a new `InnerList` with `item` appended.
    pub fn push(&self, item: Item) -> Self {
        let mut items = (*self.items).clone();
        items.push(item);
        Self {
            items: Arc::new(items),
            params: self.params.clone(),
        }
    }

    /// Returns a new `InnerList` with `item` prepended.
    pub fn unshift(&self, item: Item) -> Self {
        let mut items = (*self.items).clone();
        items.insert(0, item);
        Self {
            items: Arc::new(items),
            params: self.params.clone(),
        }
    }

    /// Returns a new `InnerList` with `item` inserted at `index`.
    ///
    /// `insert(len, item)` is equivalent to [`push`][Self::push];
    /// `insert(0, item)` is equivalent to [`unshift`][Self::unshift].
    pub fn insert(&self, index: i64, item: Item) -> Result<Self, Error> {
        let len = self.items.len();
        let i = resolve_index(index, len + 1)?;
        let mut items = (*self.items).clone();
        items.insert(i, item);
        Ok(Self {
            items: Arc::new(items),
            params: self.params.clone(),
        })
    }

    /// Returns a new `InnerList` with the item at `index` replaced.
    pub fn replace(&self, index: i64, item: Item) -> Result<Self, Error> {
        let i = resolve_index(index, self.items.len())?;
        let mut items = (*self.items).clone();
        items[i] = item;
        Ok(Self {
            items: Arc::new(items),
            params: self.params.clone(),
        })
    }

    /// Returns a new `InnerList` with the items at the given indices
    /// removed, returning an identical instance if `indices` is empty.
    pub fn remove(&self, indices: impl IntoIterator<Item = i64>) -> Result<Self, Error> {
        let len = self.items.len();
        let mut resolved: Vec<usize> = indices
            .into_iter()
            .map(|i| resolve_index(i, len))
            .collect::<Result<_, _>>()?;
        if resolved.is_empty() {
            return Ok(self.clone());
        }
        resolved.sort_unstable();
        resolved.dedup();
        let mut items = (*self.items).clone();
        for i in resolved.into_iter().rev() {
            items.remove(i);
        }
        Ok(Self {
            items: Arc::new(items),
            params: self.params.clone(),
        })
    }

    /// Returns a new `InnerList` with its parameter set replaced.
    pub fn with_parameters(&self, params: Parameters) -> Self {
        Self {
            items: Arc::clone(&self.items),
            params,
        }
    }

    /// Returns a new `InnerList` with `key=value` added to its parameters.
    pub fn add_parameter(&self, key: Key, value: BareItem) -> Result<Self, Error> {
        Ok(self.with_parameters(self.params.add(key, value)?))
    }

    /// Returns a new `InnerList` with `key=value` appended to its
    /// parameters.
    pub fn append_parameter(&self, key: Key, value: BareItem) -> Result<Self, Error> {
        Ok(self.with_parameters(self.params.append(key, value)?))
    }

    /// Returns a new `InnerList` with `key=value` prepended to its
    /// parameters.
    pub fn prepend_parameter(&self, key: Key, value: BareItem) -> Result<Self, Error> {
        Ok(self.with_parameters(self.params.prepend(key, value)?))
    }

    /// Returns a new `InnerList` with the given parameter keys removed.
    pub fn without_parameters<'a>(&self, keys: impl IntoIterator<Item = &'a KeyRef>) -> Self {
        self.with_parameters(self.params.remove(keys))
    }

    /// Parses a standalone inner-list wire fragment, e.g. `("foo" "bar");lvl=1`.
    pub fn from_wire(text: &str) -> Result<Self, Error> {
        crate::parser::parse_inner_list_fragment(text)
    }
}

impl fmt::Display for InnerList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("(")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "){}", self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_unshift() {
        let list = InnerList::from_items(vec![Item::new(crate::integer(1))]);
        let list = list.push(Item::new(crate::integer(2)));
        let list = list.unshift(Item::new(crate::integer(0)));
        assert_eq!(list.to_string(), "(0 1 2)");
    }

    #[test]
    fn remove_empty_is_identity() {
        let list = InnerList::from_items(vec![Item::new(crate::integer(1))]);
        let same = list.remove(std::iter::empty()).unwrap();
        assert!(list.ptr_eq(&same));
    }

    #[test]
    fn from_wire_parses_fragment() {
        let list = InnerList::from_wire(r#"("foo" "bar");lvl=1"#).unwrap();
        assert_eq!(list.to_string(), r#"("foo" "bar");lvl=1"#);
    }

    #[test]
    fn negative_index_matches_last() {
        let list = InnerList::from_items(vec![
            Item::new(crate::integer(1)),
            Item::new(crate::integer(2)),
        ]);
        assert_eq!(list.get(-1).unwrap(), list.get(1).unwrap());
    }
}
