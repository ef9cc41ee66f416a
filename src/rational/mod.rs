//! The `R` layer: integer-or-fractional rational composition over [`BigInt`].

mod format;
mod parse;
mod simplify;

pub mod facade;

use crate::bigint::DEFAULT_RADIX;
use crate::{BigInt, Error, Result};
use std::cmp::Ordering;
use std::fmt;

#[derive(Clone)]
pub(crate) struct Remainder {
    pub(crate) num: BigInt,
    pub(crate) den: BigInt,
}

/// An exact rational number: an integer `whole` part plus an optional
/// `{num, den}` fraction, or an integer-only value with no fraction at all.
#[derive(Clone)]
pub struct Rational {
    pub(crate) integer_only: bool,
    pub(crate) whole: BigInt,
    pub(crate) remainder: Option<Remainder>,
}

impl Rational {
    /// An integer-mode zero.
    pub fn new() -> Self {
        Self::zero_mode(true)
    }

    pub fn zero_mode(integer_only: bool) -> Self {
        if integer_only {
            Self {
                integer_only: true,
                whole: BigInt::zero(DEFAULT_RADIX),
                remainder: None,
            }
        } else {
            Self {
                integer_only: false,
                whole: BigInt::zero(DEFAULT_RADIX),
                remainder: Some(Remainder {
                    num: BigInt::zero(DEFAULT_RADIX),
                    den: BigInt::from_i64(1, DEFAULT_RADIX),
                }),
            }
        }
    }

    pub fn from_i64(v: i64) -> Self {
        Self::from_i64_mode(v, None)
    }

    pub fn from_i64_mode(v: i64, is_integer: Option<bool>) -> Self {
        let whole = BigInt::from_i64(v, DEFAULT_RADIX);
        let integer_only = is_integer.unwrap_or(true);
        if integer_only {
            Self {
                integer_only: true,
                whole,
                remainder: None,
            }
        } else {
            Self {
                integer_only: false,
                whole,
                remainder: Some(Remainder {
                    num: BigInt::zero(DEFAULT_RADIX),
                    den: BigInt::from_i64(1, DEFAULT_RADIX),
                }),
            }
        }
    }

    pub fn from_f64(v: f64) -> Self {
        Self::from_f64_mode(v, None)
    }

    pub fn from_f64_mode(v: f64, is_integer: Option<bool>) -> Self {
        parse::from_f64_mode(v, is_integer)
    }

    pub fn from_str_radix10(s: &str) -> Result<Self> {
        parse::from_str_mode(s, None)
    }

    pub fn from_str_radix10_mode(s: &str, is_integer: Option<bool>) -> Result<Self> {
        parse::from_str_mode(s, is_integer)
    }

    /// Clones `self`, switching mode if requested; mirrors the "from an
    /// existing R instance" construction path.
    pub fn with_mode(&self, is_integer: Option<bool>) -> Self {
        let mut c = self.clone();
        match is_integer {
            Some(true) => {
                c.make_integer();
            }
            Some(false) => {
                c.make_fractional();
            }
            None => {}
        }
        c
    }

    pub(crate) fn radix(&self) -> i64 {
        self.whole.radix()
    }

    /// Divides numerator by denominator (quotient into `whole`), resets a
    /// zero numerator's denominator to 1, then reconciles signs so `num`
    /// and `whole` agree (or `num == 0`).
    pub(crate) fn _normalise_remainder(&mut self) {
        let radix = self.whole.radix();
        let Some(r) = self.remainder.as_mut() else {
            return;
        };
        let mut quotient = r.num.clone();
        let new_num = quotient.divide(&r.den).expect("denominator is never zero");
        self.whole.add(&quotient);
        self.whole.normalise(false);
        r.num = new_num;

        if r.num.is_zero() {
            r.den = BigInt::from_i64(1, radix);
            return;
        }

        let whole_neg = self.whole.is_negative();
        let whole_pos = self.whole.is_positive();
        let num_neg = r.num.is_negative();
        let num_pos = r.num.is_positive();
        if num_neg && whole_pos {
            r.num.add(&r.den);
            r.num.normalise(false);
            self.whole.subtract(&BigInt::from_i64(1, radix));
            self.whole.normalise(false);
        } else if num_pos && whole_neg {
            r.num.subtract(&r.den);
            r.num.normalise(false);
            self.whole.add(&BigInt::from_i64(1, radix));
            self.whole.normalise(false);
        }
    }

    pub fn add(&mut self, other: &Self) -> &mut Self {
        self.whole.add(&other.whole);
        self.whole.normalise(false);
        if let (Some(r), Some(br)) = (self.remainder.as_mut(), other.remainder.as_ref()) {
            if !br.num.is_zero() {
                let mut lhs = r.num.clone();
                lhs.multiply(&br.den);
                let mut rhs = br.num.clone();
                rhs.multiply(&r.den);
                lhs.add(&rhs);
                r.num = lhs;
                r.den.multiply(&br.den);
            }
        }
        self._normalise_remainder();
        self
    }

    pub fn subtract(&mut self, other: &Self) -> &mut Self {
        self.whole.subtract(&other.whole);
        self.whole.normalise(false);
        if let (Some(r), Some(br)) = (self.remainder.as_mut(), other.remainder.as_ref()) {
            if !br.num.is_zero() {
                let mut lhs = r.num.clone();
                lhs.multiply(&br.den);
                let mut rhs = br.num.clone();
                rhs.multiply(&r.den);
                lhs.subtract(&rhs);
                r.num = lhs;
                r.den.multiply(&br.den);
            }
        }
        self._normalise_remainder();
        self
    }

    pub fn multiply(&mut self, other: &Self) -> &mut Self {
        if self.integer_only {
            self.whole.multiply(&other.whole);
            self.whole.normalise(false);
            return self;
        }
        let r = self.remainder.as_mut().expect("fractional mode has a remainder");
        if other.integer_only {
            r.num.multiply(&other.whole);
            r.num.normalise(false);
        } else {
            let br = other.remainder.as_ref().expect("fractional mode has a remainder");
            let mut b_term = br.den.clone();
            b_term.multiply(&other.whole);
            b_term.add(&br.num);

            let mut left = r.num.clone();
            left.multiply(&b_term);
            let mut right = br.num.clone();
            right.multiply(&self.whole);
            right.multiply(&r.den);
            left.add(&right);
            r.num = left;
            r.den.multiply(&br.den);
        }
        self.whole.multiply(&other.whole);
        self.whole.normalise(false);
        self._normalise_remainder();
        self
    }

    pub fn divide(&mut self, other: &Self) -> Result<&mut Self> {
        if self.integer_only {
            if other.whole.is_zero() {
                return Err(Error::DivideByZero);
            }
            self.whole.divide(&other.whole)?;
            return Ok(self);
        }
        let radix = self.whole.radix();
        let r = self.remainder.as_mut().expect("fractional mode has a remainder");
        let mut self_total = self.whole.clone();
        self_total.multiply(&r.den);
        self_total.add(&r.num);

        let (other_total, other_den) = if other.integer_only {
            (other.whole.clone(), BigInt::from_i64(1, radix))
        } else {
            let br = other.remainder.as_ref().expect("fractional mode has a remainder");
            let mut bt = other.whole.clone();
            bt.multiply(&br.den);
            bt.add(&br.num);
            (bt, br.den.clone())
        };

        if other_total.is_zero() {
            return Err(Error::DivideByZero);
        }

        self_total.multiply(&other_den);
        let mut new_den = r.den.clone();
        new_den.multiply(&other_total);

        self.whole.reset();
        r.num = self_total;
        r.den = new_den;
        self._normalise_remainder();
        Ok(self)
    }

    pub fn modulus(&mut self, other: &Self) -> Result<&mut Self> {
        if other.whole.is_zero() {
            return Err(Error::DivideByZero);
        }
        let remainder = self.whole.divide(&other.whole)?;
        self.whole = remainder;
        self.integer_only = true;
        self.remainder = None;
        Ok(self)
    }

    // Aliases mirroring the original facade's method names.
    pub fn plus(&mut self, other: &Self) -> &mut Self {
        self.add(other)
    }
    pub fn minus(&mut self, other: &Self) -> &mut Self {
        self.subtract(other)
    }
    pub fn times(&mut self, other: &Self) -> &mut Self {
        self.multiply(other)
    }
    pub fn div(&mut self, other: &Self) -> Result<&mut Self> {
        self.divide(other)
    }

    pub fn make_integer(&mut self) -> &mut Self {
        self.integer_only = true;
        self.remainder = None;
        self
    }

    pub fn make_fractional(&mut self) -> &mut Self {
        if self.integer_only {
            let radix = self.whole.radix();
            self.remainder = Some(Remainder {
                num: BigInt::zero(radix),
                den: BigInt::from_i64(1, radix),
            });
            self.integer_only = false;
        }
        self
    }

    pub fn int(&self) -> Self {
        let mut c = self.clone();
        c.make_integer();
        c
    }

    pub fn frac(&self) -> Self {
        let radix = self.radix();
        match &self.remainder {
            Some(r) => Self {
                integer_only: false,
                whole: BigInt::zero(radix),
                remainder: Some(Remainder {
                    num: r.num.clone(),
                    den: r.den.clone(),
                }),
            },
            None => Self::zero_mode(false),
        }
    }

    pub fn abs(&mut self) -> &mut Self {
        self.whole = self.whole.abs();
        if let Some(r) = self.remainder.as_mut() {
            r.num = r.num.abs();
        }
        self
    }

    /// -1, 0, or 1: the combined sign of `whole` if non-zero, else the
    /// sign of the fractional numerator.
    pub fn sign(&self) -> i32 {
        if self.whole.is_negative() {
            -1
        } else if self.whole.is_positive() {
            1
        } else {
            match &self.remainder {
                Some(r) if r.num.is_negative() => -1,
                Some(r) if r.num.is_positive() => 1,
                _ => 0,
            }
        }
    }

    pub fn is_zero(&self) -> bool {
        self.whole.is_zero() && self.remainder.as_ref().map_or(true, |r| r.num.is_zero())
    }

    pub fn has_fraction(&self) -> bool {
        self.remainder.as_ref().map_or(false, |r| !r.num.is_zero())
    }

    pub fn is_negative(&self) -> bool {
        self.sign() < 0
    }

    pub fn is_positive(&self) -> bool {
        self.sign() > 0
    }

    pub fn is_integer(&self) -> bool {
        self.integer_only
    }

    pub fn is_fractional(&self) -> bool {
        !self.integer_only
    }

    pub fn value(&self) -> f64 {
        let whole_v = self.whole.value();
        match &self.remainder {
            None => whole_v,
            Some(r) if r.num.is_zero() => whole_v,
            Some(r) => {
                let radix = self.radix();
                let mut scaled = r.num.clone();
                scaled.multiply(&BigInt::from_i64(100_000_000, radix));
                let _ = scaled.divide(&r.den);
                whole_v + scaled.value() / 100_000_000.0
            }
        }
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        let self_sign = self.sign();
        let other_sign = other.sign();
        if self_sign != other_sign {
            return self_sign.cmp(&other_sign);
        }
        let whole_cmp = self.whole.abs().cmp(&other.whole.abs());
        let magnitude_cmp = if whole_cmp != Ordering::Equal {
            whole_cmp
        } else {
            let radix = self.radix();
            let (self_num, self_den) = self
                .remainder
                .as_ref()
                .map(|r| (r.num.clone(), r.den.clone()))
                .unwrap_or_else(|| (BigInt::zero(radix), BigInt::from_i64(1, radix)));
            let (other_num, other_den) = other
                .remainder
                .as_ref()
                .map(|r| (r.num.clone(), r.den.clone()))
                .unwrap_or_else(|| (BigInt::zero(radix), BigInt::from_i64(1, radix)));
            let mut lhs = self_num.abs();
            lhs.multiply(&other_den);
            let mut rhs = other_num.abs();
            rhs.multiply(&self_den);
            lhs.cmp(&rhs)
        };
        if self_sign < 0 {
            magnitude_cmp.reverse()
        } else {
            magnitude_cmp
        }
    }

    pub fn lt(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }
    pub fn lte(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Greater
    }
    pub fn gt(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }
    pub fn gte(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Less
    }
    pub fn eq_value(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    pub fn checked_add(&self, other: &Self) -> Self {
        let mut c = self.clone();
        c.add(other);
        c
    }
    pub fn checked_subtract(&self, other: &Self) -> Self {
        let mut c = self.clone();
        c.subtract(other);
        c
    }
    pub fn checked_multiply(&self, other: &Self) -> Self {
        let mut c = self.clone();
        c.multiply(other);
        c
    }
    pub fn checked_divide(&self, other: &Self) -> Result<Self> {
        let mut c = self.clone();
        c.divide(other)?;
        Ok(c)
    }
    pub fn checked_modulus(&self, other: &Self) -> Result<Self> {
        let mut c = self.clone();
        c.modulus(other)?;
        Ok(c)
    }
    pub fn checked_abs(&self) -> Self {
        let mut c = self.clone();
        c.abs();
        c
    }

    /// Renders as `whole num/den` (or a bare integer when there's no
    /// fraction), e.g. `-4 269/642`.
    pub fn to_fraction(&self) -> String {
        format::to_fraction(self)
    }

    /// Renders as a decimal string, with a `[...]` recurring block if the
    /// expansion repeats within `max_dp` digits. Fails if `max_dp == 0`.
    pub fn to_decimal(&self, max_dp: u32) -> Result<String> {
        if max_dp == 0 {
            return Err(Error::InvalidToStringArgument);
        }
        Ok(format::render_decimal(self, max_dp))
    }

    /// Trial-divides `num`/`den` against shared small primes up to
    /// `rough_sqrt(num)`, stopping early once `elapsed` reports `max_ms`
    /// milliseconds have passed (`0.0` means no deadline). Returns `true`
    /// iff the walk reached its ceiling without timing out or exhausting
    /// the shared prime cache, *and* the post-loop exact-division test
    /// succeeded — not whether any factor was actually removed.
    pub fn simplify(
        &mut self,
        max_ms: f64,
        elapsed: impl crate::ElapsedMillis,
    ) -> Result<bool> {
        simplify::simplify(self, max_ms, elapsed)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format::render_decimal(self, 100))
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rational({}, integer_only={})",
            format::render_decimal(self, 100),
            self.integer_only
        )
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Rational {}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl std::str::FromStr for Rational {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_radix10(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_only_arithmetic_discards_operand_fractions() {
        let mut a = Rational::from_i64(5);
        let b = Rational::from_f64_mode(12.5, Some(false));
        a.subtract(&b);
        assert_eq!(a.value(), -7.0);
    }

    #[test]
    fn modulus_of_22_mod_3_is_1() {
        let mut a = Rational::from_i64(22);
        let b = Rational::from_i64(3);
        a.modulus(&b).unwrap();
        assert_eq!(format::render_decimal(&a, 100), "1");
    }

    #[test]
    fn compare_is_a_total_order_and_antisymmetric() {
        let a = Rational::from_str_radix10("1/3").unwrap();
        let b = Rational::from_str_radix10("2/3").unwrap();
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);
        assert_eq!(a.compare(&a), Ordering::Equal);
    }

    #[test]
    fn add_then_subtract_round_trips() {
        let a = Rational::from_str_radix10("7/8").unwrap();
        let b = Rational::from_str_radix10("-3/5").unwrap();
        let mut c = a.clone();
        c.add(&b);
        c.subtract(&b);
        assert_eq!(c.compare(&a), Ordering::Equal);
    }

    #[test]
    fn multiply_then_divide_round_trips() {
        let a = Rational::from_str_radix10("7/8").unwrap();
        let b = Rational::from_str_radix10("5/3").unwrap();
        let mut c = a.clone();
        c.multiply(&b);
        c.divide(&b).unwrap();
        assert_eq!(c.compare(&a), Ordering::Equal);
    }

    #[test]
    fn divide_by_zero_is_rejected() {
        let mut a = Rational::from_i64(1);
        let zero = Rational::from_i64(0);
        assert_eq!(a.divide(&zero), Err(Error::DivideByZero));
    }
}
