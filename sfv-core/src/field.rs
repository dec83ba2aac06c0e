use crate::{Dictionary, Item, OuterList};
use std::fmt;

/// The top-level structured field shape, chosen by the caller according to
/// which parse entry point it used.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Field {
    List(OuterList),
    Dictionary(Dictionary),
    Item(Item),
}

impl From<OuterList> for Field {
    fn from(v: OuterList) -> Self {
        Field::List(v)
    }
}

impl From<Dictionary> for Field {
    fn from(v: Dictionary) -> Self {
        Field::Dictionary(v)
    }
}

impl From<Item> for Field {
    fn from(v: Item) -> Self {
        Field::Item(v)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Field::List(v) => fmt::Display::fmt(v, f),
            Field::Dictionary(v) => fmt::Display::fmt(v, f),
            Field::Item(v) => fmt::Display::fmt(v, f),
        }
    }
}
