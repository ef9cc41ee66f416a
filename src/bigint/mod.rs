//! The `N` engine: a digit-array big integer with lazy carry propagation.
//!
//! Digits are little-endian and, between operations, may be negative or
//! exceed `radix` in magnitude ("transiently denormal" in the crate's own
//! vocabulary). `normalise` and `positivise` are the two operations that
//! restore a clean representation; most arithmetic defers calling them for
//! as long as `safe_max` proves it's still safe to.

mod primes;

use crate::random::RandomSource;
use crate::{Error, Result};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

pub(crate) const DEFAULT_RADIX: i64 = 1 << 25;

/// An arbitrary-precision signed integer.
#[derive(Clone)]
pub struct BigInt {
    digits: Vec<i64>,
    safe_max: i64,
    radix: i64,
}

fn floor_div_mod(a: i128, b: i128) -> (i128, i128) {
    let mut q = a / b;
    let mut r = a % b;
    if r < 0 {
        q -= 1;
        r += b;
    }
    (q, r)
}

fn isqrt_floor(x: i128) -> i128 {
    if x <= 1 {
        return x.max(0);
    }
    let mut r = (x as f64).sqrt() as i128;
    while r > 0 && r * r > x {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= x {
        r += 1;
    }
    r
}

fn isqrt_ceil(x: i128) -> i128 {
    let f = isqrt_floor(x);
    if f * f == x {
        f
    } else {
        f + 1
    }
}

fn compare_slices(a: &[i64], b: &[i64]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for i in (0..a.len()).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Subtracts `m * operand` from `rem` (both non-negative, little-endian),
/// borrowing across digit boundaries, and trims any resulting high zeros.
/// Callers must only pick `m` small enough that the result stays >= 0.
fn subtract_multiple(rem: &mut Vec<i64>, operand: &[i64], m: i64, radix: i64) {
    if rem.len() < operand.len() {
        rem.resize(operand.len(), 0);
    }
    let mut borrow: i128 = 0;
    for i in 0..rem.len() {
        let od = operand.get(i).copied().unwrap_or(0) as i128;
        let mut v = rem[i] as i128 - od * m as i128 - borrow;
        if v < 0 {
            let k = (-v + radix as i128 - 1) / radix as i128;
            v += k * radix as i128;
            borrow = k;
        } else {
            borrow = 0;
        }
        rem[i] = v as i64;
    }
    while matches!(rem.last(), Some(&0)) {
        rem.pop();
    }
}

impl BigInt {
    /// A zero-valued `BigInt` using the production radix.
    pub fn new() -> Self {
        Self::zero(DEFAULT_RADIX)
    }

    pub(crate) fn zero(radix: i64) -> Self {
        Self {
            digits: Vec::new(),
            safe_max: 0,
            radix,
        }
    }

    pub(crate) fn from_i64(v: i64, radix: i64) -> Self {
        let mut n = Self::zero(radix);
        n.set(v);
        n
    }

    /// Builds a `BigInt` with a non-default radix. Only meaningful for
    /// exercising invariant 8 (base-independence) in tests: production
    /// code always goes through [`BigInt::new`]/[`DEFAULT_RADIX`].
    #[cfg(test)]
    pub(crate) fn with_radix(v: i64, radix: i64) -> Self {
        Self::from_i64(v, radix)
    }

    pub(crate) fn radix(&self) -> i64 {
        self.radix
    }

    /// Parses a signed decimal integer string (`[+-]?[0-9]+`).
    pub fn from_decimal_str(s: &str) -> Result<Self> {
        Self::from_decimal_str_radix(s, DEFAULT_RADIX)
    }

    pub(crate) fn from_decimal_str_radix(s: &str, radix: i64) -> Result<Self> {
        let trimmed = s.trim();
        let (neg, rest) = match trimmed.strip_prefix('-') {
            Some(r) => (true, r),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidNumber(s.to_string()));
        }
        let mut n = Self::zero(radix);
        for b in rest.bytes() {
            n.digit_multiply_with_add(10, (b - b'0') as i64);
        }
        if neg {
            n.negate();
            n.normalise(false);
        }
        Ok(n)
    }

    /// Replaces the value in place with a machine integer.
    pub(crate) fn set(&mut self, m: i64) {
        self.digits.clear();
        self.safe_max = self.radix - 1;
        let neg = m < 0;
        let mut mag = (m as i128).unsigned_abs();
        while mag != 0 {
            self.digits.push((mag % self.radix as u128) as i64);
            mag /= self.radix as u128;
        }
        if neg {
            for d in self.digits.iter_mut() {
                *d = -*d;
            }
        }
    }

    /// Resets to zero, dropping the digit array entirely.
    pub(crate) fn reset(&mut self) {
        self.digits.clear();
        self.safe_max = 0;
    }

    /// An approximate `f64` value of this integer (for reporting, not exact
    /// arithmetic).
    pub fn value(&self) -> f64 {
        let mut result = 0.0;
        for &d in self.digits.iter().rev() {
            result = result * self.radix as f64 + d as f64;
        }
        result
    }

    /// Propagates carries through the digit array so every interior digit
    /// lands in `[0, radix)`, extending the array if a residual carry
    /// remains. When `no_reduction` is false, trailing (high-order) zero
    /// digits are trimmed afterwards.
    pub(crate) fn normalise(&mut self, no_reduction: bool) {
        if self.safe_max >= self.radix {
            let mut carry: i128 = 0;
            for d in self.digits.iter_mut() {
                carry += *d as i128;
                let (q, r) = floor_div_mod(carry, self.radix as i128);
                *d = r as i64;
                carry = q;
            }
            while carry != 0 {
                let (q, r) = floor_div_mod(carry, self.radix as i128);
                self.digits.push(r as i64);
                carry = q;
            }
        }
        self.safe_max = self.radix - 1;
        if !no_reduction {
            while matches!(self.digits.last(), Some(0)) {
                self.digits.pop();
            }
        }
    }

    /// Given a normalised value, sweeps low-to-high turning any negative
    /// digit into a non-negative one by borrowing from the next digit up
    /// (extending the array if needed), then trims trailing zeros.
    /// Precondition: the overall value is non-negative.
    pub(crate) fn positivise(&mut self) {
        let mut i = 0;
        while i < self.digits.len() {
            if self.digits[i] < 0 {
                self.digits[i] += self.radix;
                if i + 1 == self.digits.len() {
                    self.digits.push(-1);
                } else {
                    self.digits[i + 1] -= 1;
                }
            }
            i += 1;
        }
        while matches!(self.digits.last(), Some(0)) {
            self.digits.pop();
        }
    }

    fn top_is_negative(&self) -> bool {
        matches!(self.digits.last(), Some(&d) if d < 0)
    }

    pub fn is_zero(&self) -> bool {
        let mut c = self.clone();
        c.normalise(false);
        c.digits.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        let mut c = self.clone();
        c.normalise(false);
        c.top_is_negative()
    }

    pub fn is_positive(&self) -> bool {
        let mut c = self.clone();
        c.normalise(false);
        matches!(c.digits.last(), Some(&d) if d > 0)
    }

    /// `(radix + digits[0]) mod radix`, or 0 for a zero value.
    pub(crate) fn lsb(&self) -> i64 {
        match self.digits.first() {
            None => 0,
            Some(&d0) => {
                let v = self.radix as i128 + d0 as i128;
                (((v % self.radix as i128) + self.radix as i128) % self.radix as i128) as i64
            }
        }
    }

    /// Compares two positivised, normalised values of like sign.
    pub(crate) fn compare(&self, other: &Self) -> Ordering {
        compare_slices(&self.digits, &other.digits)
    }

    fn full_compare(&self, other: &Self) -> Ordering {
        let mut a = self.clone();
        a.normalise(false);
        let mut b = other.clone();
        b.normalise(false);
        let a_neg = a.top_is_negative();
        let b_neg = b.top_is_negative();
        match (a_neg, b_neg) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => {
                a.positivise();
                b.positivise();
                a.compare(&b)
            }
            (true, true) => {
                a.negate();
                a.normalise(true);
                a.positivise();
                b.negate();
                b.normalise(true);
                b.positivise();
                // more negative (larger magnitude) sorts first: reverse.
                b.compare(&a)
            }
        }
    }

    pub fn negate(&mut self) {
        for d in self.digits.iter_mut() {
            *d = -*d;
        }
    }

    pub fn abs(&self) -> Self {
        let mut c = self.clone();
        if c.is_negative() {
            c.negate();
            c.normalise(false);
        }
        c
    }

    pub fn add(&mut self, other: &Self) {
        debug_assert_eq!(self.radix, other.radix);
        let n = self.digits.len().max(other.digits.len());
        self.digits.resize(n, 0);
        for i in 0..other.digits.len() {
            self.digits[i] += other.digits[i];
        }
        self.safe_max = self.safe_max.saturating_add(other.safe_max);
        if (self.safe_max as i128) >= (self.radix as i128) * (self.radix as i128) {
            self.normalise(false);
        }
    }

    pub fn subtract(&mut self, other: &Self) {
        debug_assert_eq!(self.radix, other.radix);
        let n = self.digits.len().max(other.digits.len());
        self.digits.resize(n, 0);
        for i in 0..other.digits.len() {
            self.digits[i] -= other.digits[i];
        }
        self.safe_max = self.safe_max.saturating_add(other.safe_max);
        if (self.safe_max as i128) >= (self.radix as i128) * (self.radix as i128) {
            self.normalise(false);
        }
    }

    /// Normalises (keeping zeros), then computes `addend + digits[i] * m`
    /// digit by digit, carrying the overflow forward and appending any
    /// residual carry past the end of the array.
    pub(crate) fn digit_multiply_with_add(&mut self, m: i64, addend: i64) {
        self.normalise(true);
        let mut carry: i128 = addend as i128;
        for d in self.digits.iter_mut() {
            carry += *d as i128 * m as i128;
            let (q, r) = floor_div_mod(carry, self.radix as i128);
            *d = r as i64;
            carry = q;
        }
        while carry != 0 {
            let (q, r) = floor_div_mod(carry, self.radix as i128);
            self.digits.push(r as i64);
            carry = q;
        }
        self.safe_max = self.radix - 1;
    }

    fn root_b(&self) -> i64 {
        isqrt_floor(self.radix as i128) as i64
    }

    fn school_multiply(&mut self, other: &Self) {
        let a = std::mem::take(&mut self.digits);
        let b = &other.digits;
        let mut result = vec![0i64; a.len() + b.len() + 1];
        for (i, &ai) in a.iter().enumerate() {
            let mut carry: i128 = 0;
            for (j, &bj) in b.iter().enumerate() {
                let acc = result[i + j] as i128 + ai as i128 * bj as i128 + carry;
                let (q, r) = floor_div_mod(acc, self.radix as i128);
                result[i + j] = r as i64;
                carry = q;
            }
            let mut k = i + b.len();
            while carry != 0 {
                if k == result.len() {
                    result.push(0);
                }
                let acc = result[k] as i128 + carry;
                let (q, r) = floor_div_mod(acc, self.radix as i128);
                result[k] = r as i64;
                carry = q;
                k += 1;
            }
        }
        self.digits = result;
        self.safe_max = self.radix - 1;
    }

    /// Splits each digit of `self` into `ROOT_B`-sized high/low lanes and
    /// multiplies lane-by-lane against `other`, deferring carry
    /// propagation to the caller's final `normalise`.
    fn split_scalar_multiply(&mut self, other: &Self) {
        let root_b = self.root_b() as i128;
        let a = std::mem::take(&mut self.digits);
        let b = &other.digits;
        let mut result = vec![0i128; a.len() + b.len()];
        for (i, &ai) in a.iter().enumerate() {
            let q = ai as i128 / root_b;
            for (j, &bj) in b.iter().enumerate() {
                result[i + j] += q * bj as i128;
            }
        }
        for r in result.iter_mut() {
            *r *= root_b;
        }
        for (i, &ai) in a.iter().enumerate() {
            let r = ai as i128 % root_b;
            for (j, &bj) in b.iter().enumerate() {
                result[i + j] += r * bj as i128;
            }
        }
        self.digits = result.into_iter().map(|v| v as i64).collect();
        self.safe_max = self.radix;
    }

    pub fn multiply(&mut self, other: &Self) {
        debug_assert_eq!(self.radix, other.radix);
        let mut other_n = other.clone();
        other_n.normalise(false);
        if self.is_zero() || other_n.digits.is_empty() {
            self.reset();
            return;
        }
        if other_n.digits.len() == 1 {
            let m = other_n.digits[0];
            let bound = self.radix as i128 * self.radix as i128;
            if self.safe_max as i128 * m.unsigned_abs() as i128 <= bound {
                for d in self.digits.iter_mut() {
                    *d *= m;
                }
                self.safe_max = self.safe_max.saturating_mul(m.unsigned_abs() as i64);
            } else {
                self.digit_multiply_with_add(m, 0);
            }
            return;
        }
        self.normalise(false);
        if self.digits.len() > 3 && other_n.digits.len() > 3 {
            self.split_scalar_multiply(&other_n);
        } else {
            self.school_multiply(&other_n);
        }
        self.normalise(false);
    }

    /// Divides `self` in place by the single non-negative digit `d`
    /// (walking high-to-low), returning the scalar remainder.
    /// Precondition: `self` positivised, `d > 0`.
    fn digit_divide(&mut self, d: i64) -> i64 {
        let mut overflow: i128 = 0;
        for i in (0..self.digits.len()).rev() {
            let t = overflow * self.radix as i128 + self.digits[i] as i128;
            let q = t / d as i128;
            overflow = t - q * d as i128;
            self.digits[i] = q as i64;
        }
        self.safe_max = self.radix - 1;
        while matches!(self.digits.last(), Some(0)) {
            self.digits.pop();
        }
        overflow as i64
    }

    /// Divides `self` by `other` in place (leaving the quotient in
    /// `self`), returning the remainder. Fails on division by zero.
    pub fn divide(&mut self, other: &Self) -> Result<Self> {
        debug_assert_eq!(self.radix, other.radix);
        self.normalise(false);
        let mut other_n = other.clone();
        other_n.normalise(false);

        if self.digits.is_empty() {
            return Ok(Self::zero(self.radix));
        }
        if other_n.digits.is_empty() {
            return Err(Error::DivideByZero);
        }

        let self_neg = self.top_is_negative();
        let other_neg = other_n.top_is_negative();
        if self_neg {
            self.negate();
            self.normalise(true);
        }
        if other_neg {
            other_n.negate();
            other_n.normalise(true);
        }
        self.positivise();
        other_n.positivise();

        if other_n.digits.len() == 1 {
            let d = other_n.digits[0];
            let r = self.digit_divide(d);
            if self_neg != other_neg {
                self.negate();
                self.normalise(true);
            }
            let mut rem = Self::from_i64(r, self.radix);
            if self_neg {
                rem.negate();
                rem.normalise(true);
            }
            return Ok(rem);
        }

        match self.compare(&other_n) {
            Ordering::Less => {
                let rem_digits = std::mem::take(&mut self.digits);
                self.safe_max = 0;
                let mut rem = Self {
                    digits: rem_digits,
                    safe_max: self.radix - 1,
                    radix: self.radix,
                };
                if self_neg {
                    rem.negate();
                    rem.normalise(true);
                }
                return Ok(rem);
            }
            Ordering::Equal => {
                self.digits = vec![1];
                self.safe_max = self.radix - 1;
                if self_neg != other_neg {
                    self.negate();
                    self.normalise(true);
                }
                return Ok(Self::zero(self.radix));
            }
            Ordering::Greater => {}
        }

        let m = self.digits.len();
        let n = other_n.digits.len();
        let mut quotient = vec![0i64; m - n + 1];
        let mut rem: Vec<i64> = self.digits[m - n..m].to_vec();
        let other_top = other_n.digits[n - 1] as i128;
        let other_next = if n >= 2 { other_n.digits[n - 2] as i128 } else { 0 };
        let denom = other_top * self.radix as i128 + other_next + 1;

        let mut i = m - n;
        loop {
            let rem_top = rem.last().copied().unwrap_or(0) as i128;
            let rem_next = if rem.len() >= 2 {
                rem[rem.len() - 2] as i128
            } else {
                0
            };
            let numer = rem_top * self.radix as i128 + rem_next;
            let mut q = (numer / denom) as i64;
            subtract_multiple(&mut rem, &other_n.digits, q, self.radix);
            while compare_slices(&rem, &other_n.digits) != Ordering::Less {
                subtract_multiple(&mut rem, &other_n.digits, 1, self.radix);
                q += 1;
            }
            quotient[i] = q;
            if i == 0 {
                break;
            }
            i -= 1;
            rem.insert(0, self.digits[i]);
        }

        self.digits = quotient;
        self.normalise(false);
        let mut remainder = Self {
            digits: rem,
            safe_max: self.radix - 1,
            radix: self.radix,
        };
        remainder.normalise(false);

        if self_neg != other_neg {
            self.negate();
            self.normalise(true);
        }
        if self_neg {
            remainder.negate();
            remainder.normalise(true);
        }
        Ok(remainder)
    }

    /// Renders the value as a base-10 string by repeatedly dividing a
    /// positivised copy by 10 and prepending the remainder digit.
    pub fn to_decimal_string(&self) -> String {
        let mut c = self.clone();
        c.normalise(false);
        let neg = c.top_is_negative();
        if neg {
            c.negate();
            c.normalise(true);
        }
        c.positivise();
        if c.digits.is_empty() {
            return "0".to_string();
        }
        let mut out = Vec::new();
        while !c.digits.is_empty() {
            let d = c.digit_divide(10);
            out.push((b'0' + d as u8) as char);
        }
        let mut s: String = out.into_iter().rev().collect();
        if neg {
            s.insert(0, '-');
        }
        s
    }

    /// Fills `decimal_digits` worth of uniform randomness: one sample per
    /// full `radix`-sized slot, plus a biased top slot covering the
    /// residual decimal digits. The contract is approximate length, not an
    /// exact digit count.
    pub fn random(decimal_digits: u32, source: &mut impl RandomSource) -> Result<Self> {
        Self::random_radix(decimal_digits, DEFAULT_RADIX, source)
    }

    pub(crate) fn random_radix(
        decimal_digits: u32,
        radix: i64,
        source: &mut impl RandomSource,
    ) -> Result<Self> {
        if decimal_digits == 0 {
            return Err(Error::InvalidRandomArgument);
        }
        let digits_per_slot = ((radix as f64).log10().floor() as u32).max(1);
        let full_slots = decimal_digits / digits_per_slot;
        let residual = decimal_digits - full_slots * digits_per_slot;
        let mut digits = Vec::with_capacity(full_slots as usize + 1);
        for _ in 0..full_slots {
            let u = source.next_unit_f64();
            let v = (u * radix as f64) as i64;
            digits.push(v.clamp(0, radix - 1));
        }
        if residual > 0 || full_slots == 0 {
            let span = 10f64.powi(residual.max(1) as i32);
            let u = source.next_unit_f64();
            digits.push(((1.0 + u) * span) as i64);
        }
        let mut result = Self {
            digits,
            safe_max: radix * 2,
            radix,
        };
        result.normalise(false);
        Ok(result)
    }

    /// A deliberately rough upper bound on `sqrt(self)`, used only to pick
    /// a trial-division ceiling. Not exact.
    pub(crate) fn rough_sqrt(&self) -> Self {
        let mut c = self.clone();
        c.normalise(false);
        c.positivise();
        let l = c.digits.len();
        if l == 0 {
            return Self::zero(self.radix);
        }
        if l == 1 {
            let high = isqrt_ceil(c.digits[0] as i128) as i64;
            return Self::from_i64(high, self.radix);
        }
        let top = c.digits[l - 1] as i128;
        let next = c.digits[l - 2] as i128;
        let mut high = isqrt_ceil(top * self.radix as i128 + next + 1) as i64;
        let lower_count = (l - 2) / 2;
        let mut result_digits = c.digits[0..lower_count].to_vec();
        if l % 2 == 1 {
            high *= c.root_b();
        }
        result_digits.push(high);
        let mut result = Self {
            digits: result_digits,
            safe_max: self.radix * self.radix,
            radix: self.radix,
        };
        result.normalise(false);
        result
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal_string())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({})", self.to_decimal_string())
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.full_compare(other) == Ordering::Equal
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.full_compare(other)
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_decimal_string().hash(state);
    }
}

pub(crate) use primes::Primes;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::StepSource;

    fn n(v: i64) -> BigInt {
        BigInt::from_i64(v, DEFAULT_RADIX)
    }

    #[test]
    fn set_and_to_decimal_string_round_trip() {
        for v in [0i64, 1, -1, 42, -42, 1_000_000_000, -1_000_000_000] {
            assert_eq!(n(v).to_decimal_string(), v.to_string());
        }
    }

    #[test]
    fn from_decimal_str_parses_signed_integers() {
        assert_eq!(
            BigInt::from_decimal_str("12345678901234567890")
                .unwrap()
                .to_decimal_string(),
            "12345678901234567890"
        );
        assert_eq!(
            BigInt::from_decimal_str("-7").unwrap().to_decimal_string(),
            "-7"
        );
        assert!(BigInt::from_decimal_str("12a").is_err());
        assert!(BigInt::from_decimal_str("").is_err());
    }

    #[test]
    fn add_and_subtract_match_i64_arithmetic() {
        for (a, b) in [(3, 4), (-3, 4), (3, -4), (-3, -4), (0, 5), (5, 0)] {
            let mut x = n(a);
            x.add(&n(b));
            assert_eq!(x.to_decimal_string(), (a + b).to_string());

            let mut y = n(a);
            y.subtract(&n(b));
            assert_eq!(y.to_decimal_string(), (a - b).to_string());
        }
    }

    #[test]
    fn multiply_scalar_fast_path() {
        let mut x = n(123_456);
        x.multiply(&n(7));
        assert_eq!(x.to_decimal_string(), "864192");
    }

    #[test]
    fn multiply_large_numbers_uses_split_or_school_path() {
        let a: i128 = 123_456_789_012_345;
        let b: i128 = 987_654_321_098;
        let mut x = BigInt::from_decimal_str(&a.to_string()).unwrap();
        let y = BigInt::from_decimal_str(&b.to_string()).unwrap();
        x.multiply(&y);
        assert_eq!(x.to_decimal_string(), (a * b).to_string());
    }

    #[test]
    fn divide_matches_truncating_semantics_with_sign_applied_to_remainder() {
        let cases: [(i64, i64); 6] = [(7, 2), (-7, 2), (7, -2), (-7, -2), (100, 10), (0, 5)];
        for (num, den) in cases {
            let mut x = n(num);
            let r = x.divide(&n(den)).unwrap();
            assert_eq!(x.to_decimal_string(), (num / den).to_string());
            assert_eq!(r.to_decimal_string(), (num % den).to_string());
        }
    }

    #[test]
    fn divide_by_zero_fails() {
        let mut x = n(10);
        assert_eq!(x.divide(&n(0)), Err(Error::DivideByZero));
    }

    #[test]
    fn divide_big_numbers_long_division() {
        let a: i128 = 9_999_999_999_999_999;
        let b: i128 = 7_777;
        let mut x = BigInt::from_decimal_str(&a.to_string()).unwrap();
        let y = BigInt::from_decimal_str(&b.to_string()).unwrap();
        let r = x.divide(&y).unwrap();
        assert_eq!(x.to_decimal_string(), (a / b).to_string());
        assert_eq!(r.to_decimal_string(), (a % b).to_string());
    }

    #[test]
    fn compare_orders_by_sign_then_magnitude() {
        assert!(n(-5) < n(-1));
        assert!(n(-1) < n(0));
        assert!(n(0) < n(1));
        assert!(n(1) < n(100));
        assert_eq!(n(5), n(5));
    }

    #[test]
    fn is_zero_is_negative_is_positive() {
        assert!(n(0).is_zero());
        assert!(!n(0).is_negative());
        assert!(!n(0).is_positive());
        assert!(n(-3).is_negative());
        assert!(n(3).is_positive());
    }

    #[test]
    fn base_independence_small_alt_radix() {
        let radix = 10;
        let mut a = BigInt::with_radix(0, radix);
        a.set(123);
        let mut b = BigInt::with_radix(0, radix);
        b.set(456);
        a.multiply(&b);
        assert_eq!(a.to_decimal_string(), "56088");
    }

    #[test]
    fn random_produces_a_value_with_roughly_the_requested_digits() {
        let mut source = StepSource {
            values: vec![0.5, 0.25, 0.75],
            cursor: 0,
        };
        let v = BigInt::random(10, &mut source).unwrap();
        assert!(!v.is_negative());
        let s = v.to_decimal_string();
        assert!(s.len() >= 9 && s.len() <= 11, "got {s}");
    }

    #[test]
    fn random_rejects_zero_digits() {
        let mut source = StepSource {
            values: vec![0.1],
            cursor: 0,
        };
        assert_eq!(
            BigInt::random(0, &mut source),
            Err(Error::InvalidRandomArgument)
        );
    }

    #[test]
    fn rough_sqrt_is_an_upper_bound() {
        let v = BigInt::from_decimal_str("123456789123456789").unwrap();
        let r = v.rough_sqrt();
        let mut sq = r.clone();
        sq.multiply(&r);
        assert!(sq.value() >= v.value() * 0.5);
    }
}
