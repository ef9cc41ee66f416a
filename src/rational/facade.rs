//! Static, non-mutating entry points: `facade::add(a, b)` is the same as
//! cloning `a` and calling its instance method with `b`. Mode of the
//! result is always inherited from `a`, the first argument — a clone is
//! made even when `a` could in principle be returned unmodified, so two
//! calls into the facade never alias the same instance.

use super::Rational;
use crate::{ElapsedMillis, Result};
use std::cmp::Ordering;

pub fn add(a: &Rational, b: &Rational) -> Rational {
    a.checked_add(b)
}

pub fn subtract(a: &Rational, b: &Rational) -> Rational {
    a.checked_subtract(b)
}

pub fn multiply(a: &Rational, b: &Rational) -> Rational {
    a.checked_multiply(b)
}

pub fn divide(a: &Rational, b: &Rational) -> Result<Rational> {
    a.checked_divide(b)
}

pub fn modulus(a: &Rational, b: &Rational) -> Result<Rational> {
    a.checked_modulus(b)
}

pub fn abs(a: &Rational) -> Rational {
    a.checked_abs()
}

pub fn compare(a: &Rational, b: &Rational) -> Ordering {
    a.compare(b)
}

pub fn to_fraction(a: &Rational) -> String {
    a.to_fraction()
}

pub fn to_decimal(a: &Rational, max_dp: u32) -> Result<String> {
    a.to_decimal(max_dp)
}

pub fn simplify(a: &Rational, max_ms: f64, elapsed: impl ElapsedMillis) -> Result<Rational> {
    let mut c = a.clone();
    c.simplify(max_ms, elapsed)?;
    Ok(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_add_does_not_mutate_either_argument() {
        let a = Rational::from_i64(2);
        let b = Rational::from_i64(3);
        let c = add(&a, &b);
        assert_eq!(a.value(), 2.0);
        assert_eq!(b.value(), 3.0);
        assert_eq!(c.value(), 5.0);
    }

    #[test]
    fn facade_divide_inherits_mode_from_the_first_argument() {
        let a = Rational::from_i64_mode(7, Some(true));
        let b = Rational::from_i64(2);
        let c = divide(&a, &b).unwrap();
        assert!(c.is_integer());
    }
}
