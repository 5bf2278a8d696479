use crate::sequence::{Item, Sequence};

impl Sequence {
    /// Keep the items for which the predicate's return value is truthy.
    ///
    /// The surviving items keep their source order; the item itself is
    /// placed in the result, not the predicate's return value. The
    /// receiver is unchanged.
    pub fn select<F, R>(&self, mut f: F) -> Sequence
    where
        F: FnMut(&Item) -> R,
        R: Into<Item>,
    {
        let mut result: Vec<Item> = Vec::new();
        for item in self.iter() {
            if f(item).into().is_truthy() {
                result.push(item.clone());
            }
        }
        result.into()
    }
}
