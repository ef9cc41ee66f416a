//! Time-budgeted trial-division simplification of a [`Rational`]'s
//! fraction against the process-wide prime cache.

use super::Rational;
use crate::bigint::Primes;
use crate::clock::ElapsedMillis;
use crate::{BigInt, Error, Result};

/// Trial-divides `|num|`/`den` against the shared prime cache up to
/// `ceil = rough_sqrt(|num|)`, tracking any prime factor that divides `num`
/// but not `den` in an accumulator `factor` rather than discarding it.
///
/// `max_ms == 0.0` means "no deadline, walk to exhaustion"; only `NaN` or a
/// negative budget is rejected. Returns `true` iff the walk reached `ceil`
/// without timing out or exhausting the shared cache below the radix, *and*
/// the post-loop exact-division test (`den / num`) succeeded — not whether
/// any factor was actually removed, which an already-coprime fraction like
/// `1/3` never does despite its walk trivially completing.
pub(crate) fn simplify(r: &mut Rational, max_ms: f64, elapsed: impl ElapsedMillis) -> Result<bool> {
    if max_ms.is_nan() || max_ms < 0.0 {
        return Err(Error::InvalidSimplifyArgument);
    }
    let radix = r.whole.radix();
    let negative = match &r.remainder {
        Some(rem) if !rem.num.is_zero() => rem.num.is_negative(),
        _ => return Ok(true),
    };

    let rem = r.remainder.as_ref().unwrap();
    let mut num = rem.num.abs();
    let mut den = rem.den.clone();
    let mut factor = BigInt::from_i64(1, radix);

    let ceil = num.rough_sqrt().value();

    let mut primes = Primes::new();
    let mut elapsed = elapsed;
    let mut completed = true;

    loop {
        if max_ms > 0.0 && elapsed.elapsed_ms() >= max_ms {
            completed = false;
            break;
        }
        let p = primes.next();
        if p == 0 {
            completed = false;
            break;
        }
        if p as f64 > ceil {
            break;
        }
        let p_big = BigInt::from_i64(p, radix);
        loop {
            let mut num_copy = num.clone();
            let num_rem = num_copy.divide(&p_big)?;
            if !num_rem.is_zero() {
                break;
            }
            num = num_copy;
            let mut den_copy = den.clone();
            let den_rem = den_copy.divide(&p_big)?;
            if den_rem.is_zero() {
                den = den_copy;
            } else {
                factor.multiply(&p_big);
            }
        }
    }

    let mut den_copy = den.clone();
    let divide_rem = den_copy.divide(&num)?;
    let exact = divide_rem.is_zero();
    if exact {
        den = den_copy;
        num = factor;
    } else {
        num.multiply(&factor);
    }

    if negative && !num.is_zero() {
        num.negate();
        num.normalise(false);
    }
    let rem = r.remainder.as_mut().unwrap();
    rem.num = num;
    rem.den = den;

    Ok(completed && exact)
}
