use std::fmt;
use std::rc::Rc;

use ibig::IBig;
use ordered_float::OrderedFloat;

use iterkit_tag::Tag;

use crate::atomic;

/// A dynamic scalar value.
#[derive(Debug, Clone)]
pub enum Atomic {
    /// The absent value.
    Nil,
    Boolean(bool),
    Integer(Rc<IBig>),
    Double(OrderedFloat<f64>),
    String(Rc<String>),
}

impl Atomic {
    /// The single truthiness rule: only `Nil` and `false` are falsy.
    ///
    /// Zero and the empty string count as true.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Atomic::Nil | Atomic::Boolean(false))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Atomic::Integer(_) | Atomic::Double(_))
    }

    /// The capability tag of this value.
    pub fn tag(&self) -> Tag {
        match self {
            Atomic::Nil => Tag::Nil,
            Atomic::Boolean(_) => Tag::Boolean,
            Atomic::Integer(_) => Tag::Integer,
            Atomic::Double(_) => Tag::Double,
            Atomic::String(_) => Tag::String,
        }
    }

    pub(crate) fn to_str(&self) -> Option<&str> {
        match self {
            Atomic::String(s) => Some(s),
            _ => None,
        }
    }
}

impl PartialEq for Atomic {
    fn eq(&self, other: &Self) -> bool {
        atomic::atomic_eq(self, other)
    }
}

impl fmt::Display for Atomic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atomic::Nil => write!(f, ""),
            Atomic::Boolean(b) => write!(f, "{}", b),
            Atomic::Integer(i) => write!(f, "{}", i),
            Atomic::Double(OrderedFloat(d)) => write!(f, "{}", d),
            Atomic::String(s) => write!(f, "{}", s),
        }
    }
}

// strings

impl From<String> for Atomic {
    fn from(s: String) -> Self {
        Atomic::String(Rc::new(s))
    }
}

impl From<&str> for Atomic {
    fn from(s: &str) -> Self {
        Atomic::String(Rc::new(s.to_string()))
    }
}

impl From<&String> for Atomic {
    fn from(s: &String) -> Self {
        Atomic::String(Rc::new(s.clone()))
    }
}

// bool

impl From<bool> for Atomic {
    fn from(b: bool) -> Self {
        Atomic::Boolean(b)
    }
}

// integers

impl From<IBig> for Atomic {
    fn from(i: IBig) -> Self {
        Atomic::Integer(Rc::new(i))
    }
}

impl From<Rc<IBig>> for Atomic {
    fn from(i: Rc<IBig>) -> Self {
        Atomic::Integer(i)
    }
}

impl From<i64> for Atomic {
    fn from(i: i64) -> Self {
        Atomic::Integer(Rc::new(IBig::from(i)))
    }
}

impl From<i32> for Atomic {
    fn from(i: i32) -> Self {
        Atomic::Integer(Rc::new(IBig::from(i)))
    }
}

impl From<usize> for Atomic {
    fn from(i: usize) -> Self {
        Atomic::Integer(Rc::new(IBig::from(i)))
    }
}

// doubles

impl From<f64> for Atomic {
    fn from(d: f64) -> Self {
        Atomic::Double(OrderedFloat(d))
    }
}

impl From<OrderedFloat<f64>> for Atomic {
    fn from(d: OrderedFloat<f64>) -> Self {
        Atomic::Double(d)
    }
}
