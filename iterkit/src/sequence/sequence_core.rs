use crate::atomic;
use crate::sequence;
use crate::sequence::Item;

/// An ordered sequence of items.
///
/// Sequences are read-only for every operation in this crate: filtered
/// and transformed results are freshly constructed sequences, and the
/// visiting operations return the receiver itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequence {
    items: Vec<Item>,
}

impl Sequence {
    /// Construct an empty sequence
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Check whether the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the length of the sequence
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Access an iterator over the items in the sequence
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

impl IntoIterator for Sequence {
    type Item = sequence::Item;
    type IntoIter = std::vec::IntoIter<sequence::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a sequence::Item;
    type IntoIter = std::slice::Iter<'a, sequence::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<Item>> for Sequence {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl From<Item> for Sequence {
    fn from(item: Item) -> Self {
        Self { items: vec![item] }
    }
}

impl<T> From<Option<T>> for Sequence
where
    T: Into<Item>,
{
    fn from(item: Option<T>) -> Self {
        match item {
            Some(item) => Self::from(vec![item.into()]),
            None => Sequence::empty(),
        }
    }
}

impl<T> From<Vec<T>> for Sequence
where
    T: Into<atomic::Atomic>,
{
    fn from(items: Vec<T>) -> Self {
        let items = items
            .into_iter()
            .map(|i| Item::from(i.into()))
            .collect::<Vec<_>>();
        Self::from(items)
    }
}

impl<T> From<T> for Sequence
where
    T: Into<atomic::Atomic>,
{
    fn from(item: T) -> Self {
        Self::from(vec![Item::from(item.into())])
    }
}

impl From<std::ops::Range<i64>> for Sequence {
    fn from(range: std::ops::Range<i64>) -> Self {
        Self::from(range.collect::<Vec<_>>())
    }
}

impl From<std::ops::RangeInclusive<i64>> for Sequence {
    fn from(range: std::ops::RangeInclusive<i64>) -> Self {
        Self::from(range.collect::<Vec<_>>())
    }
}
