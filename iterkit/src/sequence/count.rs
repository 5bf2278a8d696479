use crate::error;
use crate::sequence::matching::{CountArg, CountMode};
use crate::sequence::Sequence;

impl Sequence {
    /// Count items, by total, by predicate, or by equality.
    ///
    /// With no argument the count is the element total. With a
    /// predicate, the count is the number of items whose predicate
    /// result is truthy. With an equality argument, the count is the
    /// number of items equal to it under native equality. Zero on an
    /// empty sequence in every mode.
    pub fn count(&self, arg: CountArg) -> error::Result<usize> {
        match arg.resolve()? {
            CountMode::Total => Ok(self.len()),
            CountMode::Predicate(mut predicate) => {
                let mut total = 0;
                for item in self.iter() {
                    if predicate(item).is_truthy() {
                        total += 1;
                    }
                }
                Ok(total)
            }
            CountMode::Equals(value) => {
                let mut total = 0;
                for item in self.iter() {
                    if item == &value {
                        total += 1;
                    }
                }
                Ok(total)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::Item;

    #[test]
    fn test_count_total() {
        let words = Sequence::from(vec!["apple", "Orange", "Watermelon", "Banana"]);
        assert_eq!(words.count(CountArg::new()), Ok(4));
    }

    #[test]
    fn test_count_with_always_truthy_predicate() {
        // an arithmetic result is a truthy item, so every element counts
        let numbers = Sequence::from(vec![1i64, 2, 3, 4]);
        let result = numbers.count(CountArg::predicate(|n| n.as_i64().unwrap() + 1));
        assert_eq!(result, Ok(4));
    }

    #[test]
    fn test_count_with_selective_predicate() {
        let numbers = Sequence::from(vec![1i64, 2, 3, 4]);
        let result = numbers.count(CountArg::predicate(|n| n.as_i64().unwrap() % 2 == 0));
        assert_eq!(result, Ok(2));
    }

    #[test]
    fn test_count_by_equality() {
        let words = Sequence::from(vec![
            "microverse",
            "microverse",
            "freecodecamp",
            "codeacademy",
        ]);
        assert_eq!(words.count(CountArg::equals("microverse")), Ok(2));
    }

    #[test]
    fn test_count_by_equality_across_numeric_representations() {
        let numbers = Sequence::from(vec![
            Item::from(1i64),
            Item::from(1.0),
            Item::from(2i64),
        ]);
        assert_eq!(numbers.count(CountArg::equals(1i64)), Ok(2));
    }

    #[test]
    fn test_count_empty_is_zero() {
        assert_eq!(Sequence::empty().count(CountArg::new()), Ok(0));
        assert_eq!(Sequence::empty().count(CountArg::equals(1i64)), Ok(0));
        assert_eq!(
            Sequence::empty().count(CountArg::predicate(|_| true)),
            Ok(0)
        );
    }

    #[test]
    fn test_count_rejects_predicate_with_equals() {
        let numbers = Sequence::from(vec![1i64, 2, 3]);
        let arg = CountArg {
            predicate: Some(Box::new(|item: &Item| item.clone())),
            equals: Some(Item::from(1i64)),
        };
        assert_eq!(numbers.count(arg), Err(error::Error::PredicateAndMatcher));
    }
}
