// This module resolves the arguments of the quantifier and count
// calls into a single per-item test. A call may carry a predicate, a
// matcher, or neither; carrying both is an error, never a silent
// preference.

use regex::Regex;

use iterkit_tag::Tag;

use crate::error;
use crate::sequence::Item;

/// A caller-supplied predicate, invoked once per item.
///
/// The returned item is used only for its truthiness: a predicate that
/// returns nil or false rejects the item, anything else accepts it.
pub type Predicate<'a> = Box<dyn FnMut(&Item) -> Item + 'a>;

/// A caller-supplied transformation, invoked once per item.
pub type Transformer<'a> = Box<dyn FnMut(&Item) -> Item + 'a>;

/// A caller-supplied fold function taking the accumulator and an item.
pub type Reducer<'a> = Box<dyn FnMut(Item, &Item) -> Item + 'a>;

/// Box a closure into an optional transformer argument.
pub fn transformer<'a, F, R>(f: F) -> Option<Transformer<'a>>
where
    F: FnMut(&Item) -> R + 'a,
    R: Into<Item>,
{
    let mut f = f;
    Some(Box::new(move |item| f(item).into()))
}

/// Box a closure into an optional reducer argument.
pub fn reducer<'a, F, R>(f: F) -> Option<Reducer<'a>>
where
    F: FnMut(Item, &Item) -> R + 'a,
    R: Into<Item>,
{
    let mut f = f;
    Some(Box::new(move |acc, item| f(acc, item).into()))
}

/// The non-callable matching modes for quantifier calls.
///
/// A matcher is the counterpart to a predicate: instead of calling
/// back into caller code, each item is checked against a capability
/// tag, a pattern, or a plain value.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// The item's tag derives from the given tag.
    Tag(Tag),
    /// The item is a string matching the pattern. Non-string items
    /// never match a pattern.
    Pattern(Regex),
    /// The item equals the given item under native equality.
    Equals(Item),
}

impl Matcher {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Matcher::Tag(tag) => item.tag().derives_from(*tag),
            Matcher::Pattern(pattern) => match item.as_str() {
                Some(s) => pattern.is_match(s),
                None => false,
            },
            Matcher::Equals(other) => item == other,
        }
    }
}

/// Arguments to a quantifier call.
///
/// At most one of `predicate` and `matcher` may be supplied; with
/// neither, each item is tested for its own truthiness.
#[derive(Default)]
pub struct TestArg<'a> {
    pub predicate: Option<Predicate<'a>>,
    pub matcher: Option<Matcher>,
}

impl<'a> TestArg<'a> {
    /// No predicate and no matcher: test each item's own truthiness.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn predicate<F, R>(f: F) -> Self
    where
        F: FnMut(&Item) -> R + 'a,
        R: Into<Item>,
    {
        let mut f = f;
        Self {
            predicate: Some(Box::new(move |item| f(item).into())),
            matcher: None,
        }
    }

    pub fn matcher(matcher: Matcher) -> Self {
        Self {
            predicate: None,
            matcher: Some(matcher),
        }
    }

    pub(crate) fn resolve(self) -> error::Result<Test<'a>> {
        match (self.predicate, self.matcher) {
            (Some(_), Some(_)) => Err(error::Error::PredicateAndMatcher),
            (Some(predicate), None) => Ok(Test::Predicate(predicate)),
            (None, Some(matcher)) => Ok(Test::Matcher(matcher)),
            (None, None) => Ok(Test::Truthy),
        }
    }
}

/// A resolved per-item test.
pub(crate) enum Test<'a> {
    Truthy,
    Predicate(Predicate<'a>),
    Matcher(Matcher),
}

impl Test<'_> {
    pub(crate) fn test(&mut self, item: &Item) -> bool {
        match self {
            Test::Truthy => item.is_truthy(),
            Test::Predicate(predicate) => predicate(item).is_truthy(),
            Test::Matcher(matcher) => matcher.matches(item),
        }
    }
}

/// Arguments to a count call.
///
/// At most one of `predicate` and `equals` may be supplied; with
/// neither, the count is the element total.
#[derive(Default)]
pub struct CountArg<'a> {
    pub predicate: Option<Predicate<'a>>,
    pub equals: Option<Item>,
}

impl<'a> CountArg<'a> {
    /// No predicate and no equality argument: count every element.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn predicate<F, R>(f: F) -> Self
    where
        F: FnMut(&Item) -> R + 'a,
        R: Into<Item>,
    {
        let mut f = f;
        Self {
            predicate: Some(Box::new(move |item| f(item).into())),
            equals: None,
        }
    }

    pub fn equals(value: impl Into<Item>) -> Self {
        Self {
            predicate: None,
            equals: Some(value.into()),
        }
    }

    pub(crate) fn resolve(self) -> error::Result<CountMode<'a>> {
        match (self.predicate, self.equals) {
            (Some(_), Some(_)) => Err(error::Error::PredicateAndMatcher),
            (Some(predicate), None) => Ok(CountMode::Predicate(predicate)),
            (None, Some(value)) => Ok(CountMode::Equals(value)),
            (None, None) => Ok(CountMode::Total),
        }
    }
}

/// A resolved counting mode.
pub(crate) enum CountMode<'a> {
    Total,
    Predicate(Predicate<'a>),
    Equals(Item),
}
