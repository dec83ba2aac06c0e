use crate::parameters::resolve_index;
use crate::{Error, InnerList, Item};
use std::fmt;
use std::sync::Arc;

/// A member of an [`OuterList`] or [`Dictionary`][crate::Dictionary]: either
/// a bare `Item` or an `InnerList`.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Member {
    Item(Item),
    InnerList(InnerList),
}

impl Member {
    /// Returns the item, if this member is an `Item`.
    pub fn as_item(&self) -> Option<&Item> {
        match self {
            Member::Item(item) => Some(item),
            Member::InnerList(_) => None,
        }
    }

    /// Returns the inner list, if this member is an `InnerList`.
    pub fn as_inner_list(&self) -> Option<&InnerList> {
        match self {
            Member::InnerList(inner_list) => Some(inner_list),
            Member::Item(_) => None,
        }
    }
}

impl From<Item> for Member {
    fn from(item: Item) -> Self {
        Member::Item(item)
    }
}

impl From<InnerList> for Member {
    fn from(inner_list: InnerList) -> Self {
        Member::InnerList(inner_list)
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Member::Item(item) => fmt::Display::fmt(item, f),
            Member::InnerList(inner_list) => fmt::Display::fmt(inner_list, f),
        }
    }
}

/// The top-level [list] structured field value: an ordered sequence of
/// `Item`s and `InnerList`s.
///
/// [list]: <https://httpwg.org/specs/rfc8941.html#list>
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OuterList {
    members: Arc<Vec<Member>>,
}

impl OuterList {
    /// Returns a new `OuterList` from the given members.
    pub fn from_members(members: impl Into<Vec<Member>>) -> Self {
        Self {
            members: Arc::new(members.into()),
        }
    }

    /// The number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if there are no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` if `index` (negative counts from the end) is in
    /// bounds.
    pub fn has(&self, index: i64) -> bool {
        resolve_index(index, self.members.len()).is_ok()
    }

    /// Returns the member at `index`; negative indices count from the end.
    pub fn get(&self, index: i64) -> Result<&Member, Error> {
        let i = resolve_index(index, self.members.len())?;
        Ok(&self.members[i])
    }

    /// Returns the valid index range, `0..len`.
    pub fn keys(&self) -> impl Iterator<Item = usize> {
        0..self.members.len()
    }

    /// Iterates over the members in order.
    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    /// Returns `true` if `self` and `other` share the same underlying
    /// member storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.members, &other.members)
    }

    /// Returns a new `OuterList` with `member` appended.
    pub fn push(&self, member: impl Into<Member>) -> Self {
        let mut members = (*self.members).clone();
        members.push(member.into());
        Self {
            members: Arc::new(members),
        }
    }

    /// Returns a new `OuterList` with `member` prepended.
    pub fn unshift(&self, member: impl Into<Member>) -> Self {
        let mut members = (*self.members).clone();
        members.insert(0, member.into());
        Self {
            members: Arc::new(members),
        }
    }

    /// Returns a new `OuterList` with `member` inserted at `index`.
    ///
    /// `insert(len, member)` is equivalent to [`push`][Self::push];
    /// `insert(0, member)` is equivalent to [`unshift`][Self::unshift].
    pub fn insert(&self, index: i64, member: impl Into<Member>) -> Result<Self, Error> {
        let len = self.members.len();
        let i = resolve_index(index, len + 1)?;
        let mut members = (*self.members).clone();
        members.insert(i, member.into());
        Ok(Self {
            members: Arc::new(members),
        })
    }

    /// Returns a new `OuterList` with the member at `index` replaced.
    pub fn replace(&self, index: i64, member: impl Into<Member>) -> Result<Self, Error> {
        let i = resolve_index(index, self.members.len())?;
        let mut members = (*self.members).clone();
        members[i] = member.into();
        Ok(Self {
            members: Arc::new(members),
        })
    }

    /// Returns a new `OuterList` with the members at the given indices
    /// removed, returning an identical instance if `indices` is empty.
    pub fn remove(&self, indices: impl IntoIterator<Item = i64>) -> Result<Self, Error> {
        let len = self.members.len();
        let mut resolved: Vec<usize> = indices
            .into_iter()
            .map(|i| resolve_index(i, len))
            .collect::<Result<_, _>>()?;
        if resolved.is_empty() {
            return Ok(self.clone());
        }
        resolved.sort_unstable();
        resolved.dedup();
        let mut members = (*self.members).clone();
        for i in resolved.into_iter().rev() {
            members.remove(i);
        }
        Ok(Self {
            members: Arc::new(members),
        })
    }
}

impl fmt::Display for OuterList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{member}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_members_with_comma_space() {
        let list = OuterList::from_members(vec![
            Member::Item(Item::new(crate::integer(1))),
            Member::Item(Item::new(crate::integer(2))),
        ]);
        assert_eq!(list.to_string(), "1, 2");
    }

    #[test]
    fn remove_empty_is_identity() {
        let list = OuterList::from_members(vec![Member::Item(Item::new(crate::integer(1)))]);
        let same = list.remove(std::iter::empty()).unwrap();
        assert!(list.ptr_eq(&same));
    }
}
