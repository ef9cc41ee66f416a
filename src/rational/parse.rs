//! String-grammar parsing for [`Rational`]: mixed fractions (`-4 538/1284`),
//! pure fractions (`1/3`), decimals with an optional recurring `[...]`
//! block (`0.[3]`), and plain integers.

use super::{Rational, Remainder};
use crate::bigint::DEFAULT_RADIX;
use crate::{BigInt, Error, Result};

fn is_signed_integer(s: &str) -> bool {
    let rest = s.strip_prefix(['+', '-']).unwrap_or(s);
    !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit())
}

fn is_unsigned_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_plain_fraction(s: &str) -> bool {
    match s.split_once('/') {
        Some((n, d)) => is_signed_integer(n) && is_unsigned_integer(d),
        None => false,
    }
}

fn parse_fraction(s: &str, radix: i64) -> Result<(BigInt, BigInt)> {
    let (n, d) = s
        .split_once('/')
        .ok_or_else(|| Error::InvalidNumber(s.to_string()))?;
    if n.is_empty() || d.is_empty() {
        return Err(Error::EmptyFractionComponent);
    }
    let num = BigInt::from_decimal_str_radix(n, radix)?;
    let den = BigInt::from_decimal_str_radix(d, radix)?;
    if den.is_zero() {
        return Err(Error::DivideByZero);
    }
    Ok((num, den))
}

/// Splits `whole.prefix[bracket]` into its three textual pieces, then
/// accumulates `num`/`den` digit by digit, snapshotting `(num, den)` right
/// before the bracket so the recurring value can be recovered by
/// subtracting the snapshot from the final totals.
fn parse_decimal(s: &str, radix: i64) -> Result<(BigInt, BigInt, BigInt)> {
    let (neg, rest) = match s.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (whole_str, frac_str) = rest
        .split_once('.')
        .ok_or_else(|| Error::InvalidNumber(s.to_string()))?;

    let (prefix, bracket) = match frac_str.split_once('[') {
        Some((p, rest)) => {
            let b = rest
                .strip_suffix(']')
                .ok_or_else(|| Error::InvalidNumber(s.to_string()))?;
            if b.is_empty() || !is_unsigned_integer(b) {
                return Err(Error::InvalidNumber(s.to_string()));
            }
            (p, Some(b))
        }
        None => (frac_str, None),
    };
    if !whole_str.is_empty() && !is_unsigned_integer(whole_str) {
        return Err(Error::InvalidNumber(s.to_string()));
    }
    if !prefix.is_empty() && !is_unsigned_integer(prefix) {
        return Err(Error::InvalidNumber(s.to_string()));
    }
    if whole_str.is_empty() && prefix.is_empty() && bracket.is_none() {
        return Err(Error::InvalidNumber(s.to_string()));
    }

    let ten = BigInt::from_i64(10, radix);
    let mut num = BigInt::zero(radix);
    let mut den = BigInt::from_i64(1, radix);
    for b in prefix.bytes() {
        num.multiply(&ten);
        num.add(&BigInt::from_i64((b - b'0') as i64, radix));
        den.multiply(&ten);
    }

    let (frac_num, frac_den) = if let Some(bracket_digits) = bracket {
        let num0 = num.clone();
        let den0 = den.clone();
        for b in bracket_digits.bytes() {
            num.multiply(&ten);
            num.add(&BigInt::from_i64((b - b'0') as i64, radix));
            den.multiply(&ten);
        }
        let mut frac_num = num;
        frac_num.subtract(&num0);
        frac_num.normalise(false);
        let mut frac_den = den;
        frac_den.subtract(&den0);
        frac_den.normalise(false);
        (frac_num, frac_den)
    } else {
        (num, den)
    };

    let mut whole = BigInt::from_decimal_str_radix(if whole_str.is_empty() { "0" } else { whole_str }, radix)?;
    let mut frac_num = frac_num;
    if neg {
        whole.negate();
        whole.normalise(false);
        frac_num.negate();
        frac_num.normalise(false);
    }
    Ok((whole, frac_num, frac_den))
}

fn finish(
    whole: BigInt,
    frac: Option<(BigInt, BigInt)>,
    is_integer: Option<bool>,
) -> Result<Rational> {
    let mut r = match frac {
        None => Rational {
            integer_only: true,
            whole,
            remainder: None,
        },
        Some((num, den)) => {
            if den.is_zero() {
                return Err(Error::DivideByZero);
            }
            let mut r = Rational {
                integer_only: false,
                whole,
                remainder: Some(Remainder { num, den }),
            };
            r._normalise_remainder();
            r
        }
    };
    match is_integer {
        Some(true) => {
            r.make_integer();
        }
        Some(false) => {
            r.make_fractional();
        }
        None => {}
    }
    Ok(r)
}

pub(crate) fn from_str_mode(s: &str, is_integer: Option<bool>) -> Result<Rational> {
    let radix = DEFAULT_RADIX;
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidNumber(s.to_string()));
    }

    if let Some((w, f)) = trimmed.split_once(' ') {
        let w = w.trim();
        let f = f.trim();
        if is_signed_integer(w) && is_plain_fraction(f) {
            let whole = BigInt::from_decimal_str_radix(w, radix)?;
            let (mut num, den) = parse_fraction(f, radix)?;
            if whole.is_negative() {
                num.negate();
                num.normalise(false);
            }
            return finish(whole, Some((num, den)), is_integer);
        }
    }

    if is_plain_fraction(trimmed) {
        let (num, den) = parse_fraction(trimmed, radix)?;
        return finish(BigInt::zero(radix), Some((num, den)), is_integer);
    }

    if trimmed.contains('.') {
        let (whole, num, den) = parse_decimal(trimmed, radix)?;
        return finish(whole, Some((num, den)), is_integer);
    }

    if is_signed_integer(trimmed) {
        let whole = BigInt::from_decimal_str_radix(trimmed, radix)?;
        return finish(whole, None, is_integer);
    }

    Err(Error::InvalidNumber(s.to_string()))
}

/// Builds an R directly from a platform float without round-tripping
/// through decimal text: the fractional part is truncated to 8 decimal
/// places (`{truncated_frac, 10^8}`), then both sides of that fraction have
/// their common trailing zeros stripped. This is lossy by construction —
/// anything finer than 8 fractional decimal digits is dropped, not rounded.
pub(crate) fn from_f64_mode(v: f64, is_integer: Option<bool>) -> Rational {
    let radix = DEFAULT_RADIX;
    if !v.is_finite() {
        return Rational::zero_mode(is_integer.unwrap_or(true));
    }

    let negative = v.is_sign_negative() && v != 0.0;
    let whole_magnitude = format!("{:.0}", v.trunc().abs());
    let mut whole = BigInt::from_decimal_str_radix(&whole_magnitude, radix)
        .unwrap_or_else(|_| BigInt::zero(radix));

    let mut num = (v.fract().abs() * 100_000_000.0).trunc() as i64;
    let mut den = 100_000_000i64;
    while num != 0 && num % 10 == 0 && den % 10 == 0 {
        num /= 10;
        den /= 10;
    }

    let mut num = BigInt::from_i64(num, radix);
    let den = BigInt::from_i64(den, radix);
    if negative {
        whole.negate();
        whole.normalise(false);
        num.negate();
        num.normalise(false);
    }

    finish(whole, Some((num, den)), is_integer)
        .unwrap_or_else(|_| Rational::zero_mode(is_integer.unwrap_or(true)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pure_fraction() {
        let r = from_str_mode("1/3", None).unwrap();
        assert!(r.is_fractional());
        assert_eq!(super::super::format::to_fraction(&r), "0 1/3");
    }

    #[test]
    fn parses_recurring_decimal_bracket() {
        let r = from_str_mode("0.[3]", None).unwrap();
        assert_eq!(super::super::format::to_fraction(&r), "0 1/3");
    }

    #[test]
    fn parses_mixed_fraction_with_negative_whole() {
        let r = from_str_mode("-4 538/1284", None).unwrap();
        assert!(r.whole.is_negative());
        assert_eq!(r.sign(), -1);
    }

    #[test]
    fn parses_plain_integer_as_integer_mode_by_default() {
        let r = from_str_mode("42", None).unwrap();
        assert!(r.is_integer());
    }

    #[test]
    fn mode_override_forces_fractional_representation() {
        let r = from_str_mode("42", Some(false)).unwrap();
        assert!(r.is_fractional());
    }

    #[test]
    fn parses_terminating_decimal() {
        let r = from_str_mode("123.5", None).unwrap();
        assert_eq!(super::super::format::to_fraction(&r), "123 5/10");
    }

    #[test]
    fn rejects_garbage() {
        assert!(from_str_mode("abc", None).is_err());
        assert!(from_str_mode("1/", None).is_err());
        assert!(from_str_mode("", None).is_err());
    }

    #[test]
    fn from_f64_round_trips_a_terminating_value() {
        let r = from_f64_mode(12.5, Some(false));
        assert_eq!(super::super::format::to_fraction(&r), "12 5/10");
    }

    #[test]
    fn from_f64_truncates_to_eight_decimal_places_instead_of_shortest_repr() {
        // 1.0/3.0's shortest round-trip repr is "0.3333333333333333" (16
        // fractional digits); the platform-number rule truncates to 8.
        let r = from_f64_mode(1.0 / 3.0, Some(false));
        assert_eq!(super::super::format::to_fraction(&r), "0 33333333/100000000");
    }

    #[test]
    fn from_f64_handles_a_negative_value() {
        let r = from_f64_mode(-12.5, Some(false));
        assert!(r.is_negative());
        assert_eq!(super::super::format::to_fraction(&r), "-12 5/10");
    }
}
