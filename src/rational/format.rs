//! Rendering a [`Rational`] back out as a mixed fraction or a decimal
//! string, the latter with `[...]` recurring-block detection.

use super::Rational;
use crate::BigInt;
use std::collections::HashMap;

/// Renders as `whole num/den`, or a bare integer when there's no fraction.
pub(crate) fn to_fraction(r: &Rational) -> String {
    let mut out = String::new();
    let negative_zero_whole = r.whole.is_zero()
        && r.remainder.as_ref().map_or(false, |rm| rm.num.is_negative());
    if negative_zero_whole {
        out.push('-');
    }
    out.push_str(&r.whole.to_decimal_string());
    if let Some(rem) = &r.remainder {
        if !rem.num.is_zero() {
            out.push(' ');
            out.push_str(&rem.num.abs().to_decimal_string());
            out.push('/');
            out.push_str(&rem.den.to_decimal_string());
        }
    }
    out
}

/// Renders a decimal expansion, stopping after `max_dp` fractional digits
/// or sooner if a recurring cycle is detected, in which case the
/// repeating digits are wrapped in `[...]`.
pub(crate) fn render_decimal(r: &Rational, max_dp: u32) -> String {
    let negative = r.is_negative();
    let sign = if negative { "-" } else { "" };
    let whole_str = r.whole.abs().to_decimal_string();

    let rem = match &r.remainder {
        Some(rem) if !rem.num.is_zero() => rem,
        _ => return format!("{sign}{whole_str}"),
    };

    let radix = r.radix();
    let ten = BigInt::from_i64(10, radix);
    let mut cur = rem.num.abs();
    let den = rem.den.clone();

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut digits = String::new();
    let mut cycle_start: Option<usize> = None;
    let mut truncated = false;

    for emitted in 0..max_dp {
        if cur.is_zero() {
            break;
        }
        let key = cur.to_decimal_string();
        if let Some(&pos) = seen.get(&key) {
            cycle_start = Some(pos);
            break;
        }
        seen.insert(key, digits.len());
        cur.multiply(&ten);
        let next_rem = cur.divide(&den).expect("denominator is never zero");
        digits.push_str(&cur.to_decimal_string());
        cur = next_rem;
        if emitted + 1 == max_dp && !cur.is_zero() {
            truncated = true;
        }
    }

    if digits.is_empty() {
        return format!("{sign}{whole_str}");
    }

    if let Some(pos) = cycle_start {
        digits.insert(pos, '[');
        digits.push(']');
    }
    let suffix = if truncated { "..." } else { "" };
    format!("{sign}{whole_str}.{digits}{suffix}")
}
