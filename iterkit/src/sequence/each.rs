use crate::sequence::{Item, Sequence};

impl Sequence {
    /// Visit every item in order.
    ///
    /// The visitor's return value is discarded; the receiver itself is
    /// returned unchanged, never a transformed copy.
    pub fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&Item),
    {
        for item in self.iter() {
            f(item);
        }
        self
    }

    /// Visit every item in order along with its zero-based position.
    ///
    /// The counter advances for every item regardless of its value.
    /// Returns the receiver unchanged, like [`Sequence::each`].
    pub fn each_with_index<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&Item, usize),
    {
        let mut index = 0;
        for item in self.iter() {
            f(item, index);
            index += 1;
        }
        self
    }
}
