use crate::error;
use crate::sequence::matching::TestArg;
use crate::sequence::Sequence;

impl Sequence {
    /// True if the resolved test holds for every item.
    ///
    /// Vacuously true on an empty sequence, in every matching mode.
    pub fn all(&self, arg: TestArg) -> error::Result<bool> {
        let mut test = arg.resolve()?;
        for item in self.iter() {
            if !test.test(item) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// True if the resolved test holds for at least one item.
    ///
    /// False on an empty sequence.
    pub fn any(&self, arg: TestArg) -> error::Result<bool> {
        let mut test = arg.resolve()?;
        for item in self.iter() {
            if test.test(item) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// True if the resolved test holds for no item: the negation of
    /// [`Sequence::any`]. Vacuously true on an empty sequence.
    pub fn none(&self, arg: TestArg) -> error::Result<bool> {
        Ok(!self.any(arg)?)
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use iterkit_tag::Tag;

    use super::*;
    use crate::sequence::{Item, Matcher};

    fn fruits() -> Sequence {
        Sequence::from(vec!["apple", "Orange", "Watermelon", "Banana"])
    }

    #[test]
    fn test_all_empty_is_true() {
        assert_eq!(Sequence::empty().all(TestArg::new()), Ok(true));
    }

    #[test]
    fn test_all_false_element() {
        let sequence = Sequence::from(vec![Item::from(false)]);
        assert_eq!(sequence.all(TestArg::new()), Ok(false));
    }

    #[test]
    fn test_all_with_predicate() {
        let odds = Sequence::from(vec![1i64, 3, 5]);
        let result = odds.all(TestArg::predicate(|n| {
            if n.as_i64().unwrap() % 2 != 0 {
                n.clone()
            } else {
                Item::nil()
            }
        }));
        assert_eq!(result, Ok(true));
    }

    #[test]
    fn test_all_with_tag() {
        let numbers = Sequence::from(vec![1i64, 2, 3, 4]);
        assert_eq!(
            numbers.all(TestArg::matcher(Matcher::Tag(Tag::Numeric))),
            Ok(true)
        );
    }

    #[test]
    fn test_all_with_pattern() {
        let matcher = Matcher::Pattern(Regex::new("a").unwrap());
        assert_eq!(fruits().all(TestArg::matcher(matcher)), Ok(true));
    }

    #[test]
    fn test_all_with_equality() {
        let sequence = Sequence::from(vec!["microverse"]);
        assert_eq!(
            sequence.all(TestArg::matcher(Matcher::Equals("microverse".into()))),
            Ok(true)
        );
        assert_eq!(
            sequence.all(TestArg::matcher(Matcher::Equals(
                "microverseschool".into()
            ))),
            Ok(false)
        );
    }

    #[test]
    fn test_any_mixed_truthiness() {
        let sequence = Sequence::from(vec![
            Item::from(false),
            Item::nil(),
            Item::from(true),
            Item::from(8i64),
        ]);
        assert_eq!(sequence.any(TestArg::new()), Ok(true));
    }

    #[test]
    fn test_any_all_false() {
        let sequence = Sequence::from(vec![Item::from(false)]);
        assert_eq!(sequence.any(TestArg::new()), Ok(false));
    }

    #[test]
    fn test_any_empty_is_false() {
        assert_eq!(Sequence::empty().any(TestArg::new()), Ok(false));
    }

    #[test]
    fn test_any_with_tag_over_heterogeneous_items() {
        let sequence = Sequence::from(vec![
            Item::from(1i64),
            Item::from("word"),
            Item::from(false),
        ]);
        assert_eq!(
            sequence.any(TestArg::matcher(Matcher::Tag(Tag::Numeric))),
            Ok(true)
        );
    }

    #[test]
    fn test_any_with_pattern() {
        let matcher = Matcher::Pattern(Regex::new("g").unwrap());
        assert_eq!(fruits().any(TestArg::matcher(matcher)), Ok(true));
    }

    #[test]
    fn test_any_with_predicate_no_match() {
        let numbers = Sequence::from(vec![1i64, 2, 3, 4]);
        let result = numbers.any(TestArg::predicate(|n| n.as_i64().unwrap() > 5));
        assert_eq!(result, Ok(false));
    }

    #[test]
    fn test_none_empty_is_true() {
        assert_eq!(Sequence::empty().none(TestArg::new()), Ok(true));
    }

    #[test]
    fn test_none_only_false_elements() {
        let sequence = Sequence::from(vec![Item::from(false)]);
        assert_eq!(sequence.none(TestArg::new()), Ok(true));
    }

    #[test]
    fn test_none_with_predicate() {
        let numbers = Sequence::from(vec![1i64, 2, 3, 4]);
        assert_eq!(
            numbers.none(TestArg::predicate(|n| n.as_i64().unwrap() > 5)),
            Ok(true)
        );
        assert_eq!(
            numbers.none(TestArg::predicate(|n| n.as_i64().unwrap() == 3)),
            Ok(false)
        );
    }

    #[test]
    fn test_none_with_tag() {
        assert_eq!(
            fruits().none(TestArg::matcher(Matcher::Tag(Tag::Numeric))),
            Ok(true)
        );
    }

    #[test]
    fn test_none_with_pattern() {
        let matcher = Matcher::Pattern(Regex::new("z").unwrap());
        assert_eq!(fruits().none(TestArg::matcher(matcher)), Ok(true));
    }

    #[test]
    fn test_none_with_equality() {
        let words = Sequence::from(vec!["microverse", "freecodecamp", "odin_projects"]);
        assert_eq!(
            words.none(TestArg::matcher(Matcher::Equals("codecademy".into()))),
            Ok(true)
        );
    }

    #[test]
    fn test_quantifier_rejects_predicate_with_matcher() {
        let numbers = Sequence::from(vec![1i64, 2, 3]);
        let arg = TestArg {
            predicate: Some(Box::new(|item: &Item| item.clone())),
            matcher: Some(Matcher::Tag(Tag::Numeric)),
        };
        assert_eq!(numbers.all(arg), Err(error::Error::PredicateAndMatcher));
    }
}
