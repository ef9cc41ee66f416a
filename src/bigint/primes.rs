use super::DEFAULT_RADIX;
use std::sync::{Mutex, OnceLock};

fn shared_cache() -> &'static Mutex<Vec<i64>> {
    static CACHE: OnceLock<Mutex<Vec<i64>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(vec![2, 3]))
}

fn isqrt_floor(x: i64) -> i64 {
    if x <= 1 {
        return x.max(0);
    }
    let mut r = (x as f64).sqrt() as i64;
    while r > 0 && r * r > x {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= x {
        r += 1;
    }
    r
}

/// A cursor into the process-wide, monotonically-growing prime list.
///
/// Every `Primes` instance shares one `Mutex<Vec<i64>>`; extending the
/// cache past a new iterator's first use re-trial-divides candidates
/// against the primes already found by any other iterator, so the work
/// of sieving a given range is only ever done once per process. The
/// cache is only ever extended up to the radix `B`, regardless of what
/// smaller bound any particular caller cares about — a caller with a
/// tighter bound stops consuming the iterator itself rather than asking
/// the cache to pretend primes beyond its own interest don't exist.
pub(crate) struct Primes {
    cursor: usize,
}

impl Primes {
    pub(crate) fn new() -> Self {
        Self { cursor: 0 }
    }

    /// Returns the next prime strictly less than `B`, or `0` once the next
    /// candidate would reach `B` (global exhaustion sentinel). Callers that
    /// only care about primes below some smaller bound must check the
    /// returned value against that bound themselves and stop consuming the
    /// iterator; a `0` from this method always means "exhausted up to `B`",
    /// never "exhausted up to your bound".
    pub(crate) fn next(&mut self) -> i64 {
        let mut guard = shared_cache().lock().unwrap();
        while self.cursor >= guard.len() {
            let mut candidate = guard.last().copied().unwrap_or(1) + 2;
            let found = loop {
                if candidate >= DEFAULT_RADIX {
                    break None;
                }
                let limit = isqrt_floor(candidate);
                let is_prime = guard
                    .iter()
                    .take_while(|&&p| p <= limit)
                    .all(|&p| candidate % p != 0);
                if is_prime {
                    break Some(candidate);
                }
                candidate += 2;
            };
            match found {
                Some(p) => guard.push(p),
                None => return 0,
            }
        }
        let p = guard[self.cursor];
        self.cursor += 1;
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_primes_in_order() {
        let mut primes = Primes::new();
        let first_five: Vec<i64> = (0..5).map(|_| primes.next()).collect();
        assert_eq!(first_five, vec![2, 3, 5, 7, 11]);
    }

    #[test]
    fn a_tight_caller_bound_does_not_starve_a_looser_one() {
        // One caller only wants primes below 10; a second, sharing the same
        // process-wide cache, wants primes below 1_000. The first caller's
        // interest must never cap what the second can see.
        let mut tight = Primes::new();
        let mut loose = Primes::new();
        let mut tight_seen = Vec::new();
        loop {
            let p = tight.next();
            if p == 0 || p >= 10 {
                break;
            }
            tight_seen.push(p);
        }
        assert_eq!(tight_seen, vec![2, 3, 5, 7]);

        let loose_seen: Vec<i64> = (0..10).map(|_| loose.next()).collect();
        assert_eq!(loose_seen, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn two_cursors_share_the_underlying_cache() {
        let mut a = Primes::new();
        let mut b = Primes::new();
        assert_eq!(a.next(), b.next());
        assert_eq!(a.next(), 3);
        assert_eq!(b.next(), 3);
    }
}
