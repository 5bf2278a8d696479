use crate::error;
use crate::sequence::matching::Reducer;
use crate::sequence::{Item, Sequence};

impl Sequence {
    /// Strict left-to-right fold.
    ///
    /// With an initial value the reducer runs once per item. Without
    /// one, the first item seeds the accumulator and folding starts
    /// from the second; an empty sequence then has nothing to seed
    /// with and is an error. The fold order is never reassociated.
    pub fn inject(&self, initial: Option<Item>, reducer: Option<Reducer>) -> error::Result<Item> {
        let mut reducer = reducer.ok_or(error::Error::MissingFunction)?;
        let mut items = self.iter();
        let mut accumulator = match initial {
            Some(initial) => initial,
            None => match items.next() {
                Some(first) => first.clone(),
                None => return Err(error::Error::EmptyFold),
            },
        };
        for item in items {
            accumulator = reducer(accumulator, item);
        }
        Ok(accumulator)
    }
}
