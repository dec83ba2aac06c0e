use crate::{BareItem, Error, InnerList, Item, Key, KeyRef, Member};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// The top-level [dictionary] structured field value: an insertion-ordered
/// map of `Key` to `Member`.
///
/// [dictionary]: <https://httpwg.org/specs/rfc8941.html#dictionary>
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dictionary {
    entries: Arc<IndexMap<Key, Member>>,
}

impl Dictionary {
    /// Returns an empty `Dictionary`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a `Dictionary` from an ordered sequence of `(key, member)`
    /// pairs, later duplicates updating the earlier entry in place.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Key, Member)>) -> Self {
        let mut entries = IndexMap::new();
        for (key, value) in pairs {
            entries.insert(key, value);
        }
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Builds a `Dictionary` from an unordered associative source; each key
    /// is expected to appear once.
    pub fn from_associative(assoc: impl IntoIterator<Item = (Key, Member)>) -> Self {
        Self::from_pairs(assoc)
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if an entry with the given key exists.
    pub fn has(&self, key: &KeyRef) -> bool {
        self.entries.contains_key(key.as_str())
    }

    /// Returns the member for a key, or a `NotFound` error.
    pub fn get(&self, key: &KeyRef) -> Result<&Member, Error> {
        self.entries
            .get(key.as_str())
            .ok_or_else(|| Error::not_found(key))
    }

    /// Returns the `(key, member)` pair at a position; negative indices
    /// count from the end.
    pub fn pair(&self, index: i64) -> Result<(&KeyRef, &Member), Error> {
        let i = crate::parameters::resolve_index(index, self.entries.len())?;
        let (k, v) = self.entries.get_index(i).expect("index validated above");
        Ok((KeyRef::constant(k.as_str()), v))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &KeyRef> {
        self.entries.keys().map(|k| KeyRef::constant(k.as_str()))
    }

    /// Iterates over `(key, member)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&KeyRef, &Member)> {
        self.entries
            .iter()
            .map(|(k, v)| (KeyRef::constant(k.as_str()), v))
    }

    /// Returns `true` if `self` and `other` share the same underlying
    /// storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    /// Appends `key=member`, replacing it in place (preserving its original
    /// position) if it already exists.
    pub fn add(&self, key: Key, member: impl Into<Member>) -> Self {
        let mut entries = (*self.entries).clone();
        entries.insert(key, member.into());
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Removes any existing binding for `key`, then inserts it at the tail.
    pub fn append(&self, key: Key, member: impl Into<Member>) -> Self {
        let mut entries = (*self.entries).clone();
        entries.shift_remove(&key);
        entries.insert(key, member.into());
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Removes any existing binding for `key`, then inserts it at the head.
    pub fn prepend(&self, key: Key, member: impl Into<Member>) -> Self {
        let mut entries = (*self.entries).clone();
        entries.shift_remove(&key);
        entries.shift_insert(0, key, member.into());
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Removes the given keys, returning an identical instance if none of
    /// them were present.
    pub fn remove<'a>(&self, keys: impl IntoIterator<Item = &'a KeyRef>) -> Self {
        let mut entries: Option<IndexMap<Key, Member>> = None;
        for key in keys {
            if self.entries.contains_key(key.as_str()) {
                entries
                    .get_or_insert_with(|| (*self.entries).clone())
                    .shift_remove(key.as_str());
            }
        }
        match entries {
            Some(entries) => Self {
                entries: Arc::new(entries),
            },
            None => self.clone(),
        }
    }

    /// Applies `other`'s entries on top of `self`, later-wins.
    pub fn merge_associative(&self, other: &Self) -> Self {
        self.merge_pairs(other.iter().map(|(k, v)| (k.to_owned(), v.clone())))
    }

    /// Applies an ordered sequence of `(key, member)` pairs on top of
    /// `self`, later-wins.
    pub fn merge_pairs(&self, pairs: impl IntoIterator<Item = (Key, Member)>) -> Self {
        let mut entries = (*self.entries).clone();
        for (key, value) in pairs {
            entries.insert(key, value);
        }
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Convenience: inserts a boolean-valued bare item at `key`, the common
    /// case of a dictionary flag.
    pub fn add_item(&self, key: Key, item: Item) -> Self {
        self.add(key, Member::Item(item))
    }

    /// Convenience: inserts an `InnerList` at `key`.
    pub fn add_inner_list(&self, key: Key, inner_list: InnerList) -> Self {
        self.add(key, Member::InnerList(inner_list))
    }

    /// Builds a `Dictionary` directly from an already-validated map; used by
    /// the parser.
    pub(crate) fn from_entries(entries: IndexMap<Key, Member>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, (key, member)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match member {
                Member::Item(item) if item.value() == &BareItem::Boolean(true) => {
                    write!(f, "{key}{}", item.parameters())?;
                }
                _ => write!(f, "{key}={member}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    fn key(s: &str) -> Key {
        Key::try_from(s).unwrap()
    }

    #[test]
    fn boolean_true_uses_bare_key_shorthand() {
        let dict = Dictionary::from_pairs([
            (key("a"), Member::Item(Item::new(false))),
            (key("b"), Member::Item(Item::new(true))),
        ]);
        assert_eq!(dict.to_string(), "a=?0, b");
    }

    #[test]
    fn remove_no_op_preserves_identity() {
        let dict = Dictionary::from_pairs([(key("a"), Member::Item(Item::new(true)))]);
        let same = dict.remove([crate::key_ref("nope")]);
        assert!(dict.ptr_eq(&same));
    }
}
