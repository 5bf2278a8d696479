use std::rc::Rc;

use iterkit_tag::Tag;

use crate::atomic;

/// A single element of a sequence.
///
/// An item is either an atomic value, or a key/value entry when the
/// sequence was produced by enumerating a keyed collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Atomic(atomic::Atomic),
    Entry(Rc<(Item, Item)>),
}

impl Item {
    pub fn entry(key: impl Into<Item>, value: impl Into<Item>) -> Self {
        Item::Entry(Rc::new((key.into(), value.into())))
    }

    pub fn as_atomic(&self) -> Option<&atomic::Atomic> {
        match self {
            Item::Atomic(a) => Some(a),
            Item::Entry(_) => None,
        }
    }

    /// The key of an entry item.
    pub fn key(&self) -> Option<&Item> {
        match self {
            Item::Entry(pair) => Some(&pair.0),
            Item::Atomic(_) => None,
        }
    }

    /// The value of an entry item.
    pub fn value(&self) -> Option<&Item> {
        match self {
            Item::Entry(pair) => Some(&pair.1),
            Item::Atomic(_) => None,
        }
    }

    /// Only nil and false are falsy; every other item counts as true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Item::Atomic(a) => a.is_truthy(),
            Item::Entry(_) => true,
        }
    }

    pub fn tag(&self) -> Tag {
        match self {
            Item::Atomic(a) => a.tag(),
            Item::Entry(_) => Tag::Pair,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_atomic().and_then(|a| a.to_str())
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self.as_atomic()? {
            atomic::Atomic::Integer(i) => i64::try_from(i.as_ref().clone()).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self.as_atomic()? {
            atomic::Atomic::Double(d) => Some(d.0),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.as_atomic()? {
            atomic::Atomic::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn nil() -> Self {
        Item::Atomic(atomic::Atomic::Nil)
    }
}

impl<T> From<T> for Item
where
    T: Into<atomic::Atomic>,
{
    fn from(a: T) -> Self {
        Self::Atomic(a.into())
    }
}
