use std::rc::Rc;

use ibig::IBig;
use ordered_float::OrderedFloat;

use super::Atomic;

// A hashable key form of an atomic value, so keyed collections can
// detect duplicate keys. Numeric keys are normalized: an integral
// double is stored as an integer, keeping 1 and 1.0 the same key,
// matching the equality rules in op_eq.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum MapKey {
    Nil,
    Boolean(bool),
    Integer(Rc<IBig>),
    Double(OrderedFloat<f64>),
    String(Rc<String>),
    NaN,
    PositiveInfinity,
    NegativeInfinity,
}

impl MapKey {
    pub(crate) fn new(atomic: Atomic) -> MapKey {
        match atomic {
            Atomic::Nil => MapKey::Nil,
            Atomic::Boolean(b) => MapKey::Boolean(b),
            Atomic::Integer(i) => MapKey::Integer(i),
            Atomic::Double(OrderedFloat(d)) => {
                if d.is_nan() {
                    MapKey::NaN
                } else if d.is_infinite() {
                    if d.is_sign_positive() {
                        MapKey::PositiveInfinity
                    } else {
                        MapKey::NegativeInfinity
                    }
                } else if d.fract() == 0.0 && d >= i64::MIN as f64 && d <= i64::MAX as f64 {
                    MapKey::Integer(Rc::new(IBig::from(d as i64)))
                } else {
                    MapKey::Double(OrderedFloat(d))
                }
            }
            Atomic::String(s) => MapKey::String(s),
        }
    }
}
