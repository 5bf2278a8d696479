use ibig::IBig;
use ordered_float::OrderedFloat;

use super::Atomic;

/// Native equality over atomic values.
///
/// Numeric values compare across representations: an integer is cast
/// to a double when compared against one. Values of unrelated tags are
/// simply unequal, never an error, so heterogeneous sequences can be
/// scanned with an equality matcher.
pub(crate) fn atomic_eq(a: &Atomic, b: &Atomic) -> bool {
    use Atomic::*;

    match (a, b) {
        (Nil, Nil) => true,
        (Boolean(a), Boolean(b)) => a == b,
        (String(a), String(b)) => a == b,
        (Integer(a), Integer(b)) => a == b,
        // comparing doubles directly keeps NaN != NaN
        (Double(OrderedFloat(a)), Double(OrderedFloat(b))) => a == b,
        (Integer(i), Double(OrderedFloat(d))) | (Double(OrderedFloat(d)), Integer(i)) => {
            integer_as_double(i) == *d
        }
        _ => false,
    }
}

fn integer_as_double(i: &IBig) -> f64 {
    i.to_f64()
}
