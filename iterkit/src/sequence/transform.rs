use crate::error;
use crate::sequence::matching::Transformer;
use crate::sequence::{Item, Sequence};

impl Sequence {
    /// Transform every item, producing a new sequence of the same
    /// length with position `i` holding the transformed item `i`.
    ///
    /// The receiver is unchanged. Calling without a transformer is an
    /// error, not a no-op.
    pub fn map(&self, transformer: Option<Transformer>) -> error::Result<Sequence> {
        let mut transformer = transformer.ok_or(error::Error::MissingFunction)?;
        let mut result: Vec<Item> = Vec::with_capacity(self.len());
        for item in self.iter() {
            result.push(transformer(item));
        }
        Ok(result.into())
    }
}
