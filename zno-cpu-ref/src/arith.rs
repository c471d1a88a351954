//! Small number-theoretic helpers for `Z_m^*`, backed by GMP through `rug`.

use rug::{Integer, integer::IsPrime};

const PRIMALITY_REPS: u32 = 30;

pub(crate) fn is_prime(p: u32) -> bool {
    Integer::from(p).is_probably_prime(PRIMALITY_REPS) != IsPrime::No
}

pub(crate) fn gcd(a: u64, b: u64) -> u64 {
    Integer::from(a).gcd(&Integer::from(b)).to_u64_wrapping()
}

/// `p^r` when it fits in an `i64`. Overflow stops the computation early.
pub(crate) fn checked_power(p: u32, r: u32) -> Option<i64> {
    i64::from(p).checked_pow(r)
}

/// Product of the factors, `None` when it does not fit in a `u32`.
pub(crate) fn product_u32(factors: &[i64]) -> Option<u32> {
    factors
        .iter()
        .fold(Integer::from(1), |acc, &factor| acc * factor)
        .to_u32()
}

/// Prime factorization by trial division, smallest prime first.
pub(crate) fn factor(mut n: u64) -> Vec<(u64, u32)> {
    let mut factors: Vec<(u64, u32)> = Vec::new();
    let mut q: u64 = 2;
    while q * q <= n {
        if n % q == 0 {
            let mut e: u32 = 0;
            while n % q == 0 {
                n /= q;
                e += 1;
            }
            factors.push((q, e));
        }
        q += if q == 2 { 1 } else { 2 };
    }
    if n > 1 {
        factors.push((n, 1));
    }
    factors
}

pub(crate) fn totient(n: u64) -> u64 {
    factor(n).iter().fold(n, |acc, &(q, _)| acc / q * (q - 1))
}

/// Order of `p` in `Z_m^*`, `None` when `p` is not a unit modulo `m`.
pub(crate) fn multiplicative_order(p: u64, m: u64) -> Option<u64> {
    if gcd(p, m) != 1 {
        return None;
    }
    let base: Integer = Integer::from(p);
    let modulus: Integer = Integer::from(m);
    let is_one = |e: u64| {
        base.clone()
            .pow_mod(&Integer::from(e), &modulus)
            .is_ok_and(|v| v == 1)
    };
    let mut order: u64 = totient(m);
    for (q, _) in factor(order) {
        while order % q == 0 && is_one(order / q) {
            order /= q;
        }
    }
    Some(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primes() {
        assert!(is_prime(2));
        assert!(is_prime(8191));
        assert!(is_prime(65537));
        assert!(!is_prime(1));
        assert!(!is_prime(4));
        assert!(!is_prime(4095));
    }

    #[test]
    fn factorization() {
        assert_eq!(factor(4095), vec![(3, 2), (5, 1), (7, 1), (13, 1)]);
        assert_eq!(factor(4096), vec![(2, 12)]);
        assert_eq!(factor(1), vec![]);
        assert_eq!(factor(65537), vec![(65537, 1)]);
    }

    #[test]
    fn totients() {
        assert_eq!(totient(4095), 1728);
        assert_eq!(totient(4096), 2048);
        assert_eq!(totient(31775), 24000);
        assert_eq!(totient(2), 1);
    }

    #[test]
    fn orders() {
        assert_eq!(multiplicative_order(2, 4095), Some(12));
        assert_eq!(multiplicative_order(2, 31775), Some(20));
        assert_eq!(multiplicative_order(3, 2), Some(1));
        assert_eq!(multiplicative_order(2, 4096), None);
    }

    #[test]
    fn powers_and_products() {
        assert_eq!(checked_power(2, 62), Some(1 << 62));
        assert_eq!(checked_power(2, 63), None);
        assert_eq!(checked_power(2, u32::MAX), None);
        assert_eq!(checked_power(65537, u32::MAX), None);
        assert_eq!(checked_power(4294967291, u32::MAX), None);
        assert_eq!(product_u32(&[7, 5, 9, 13]), Some(4095));
        assert_eq!(product_u32(&[]), Some(1));
        assert_eq!(product_u32(&[1 << 20, 1 << 20]), None);
    }
}
