use itertools::Itertools;
use tracing::debug;
use zno_hal::layouts::NativeFault;

use crate::{BgvRefBuilder, BgvRefContext, arith};

pub(crate) const DEFAULT_P: u32 = 2;
pub(crate) const DEFAULT_R: u32 = 1;
pub(crate) const DEFAULT_BITS: u32 = 300;
pub(crate) const DEFAULT_C: u32 = 3;

/// Checks a staged configuration and computes the derived values.
///
/// Unset scalars take the library defaults. `m` may be left unset when
/// `mvec` is given, in which case it is the product of `mvec`.
pub(crate) fn build_context(staged: BgvRefBuilder) -> Result<BgvRefContext, NativeFault> {
    let BgvRefBuilder {
        m,
        p,
        r,
        bits,
        c,
        gens,
        ords,
        mvec,
        bootstrap,
    } = staged;

    check_mvec(&mvec)?;
    let m: u32 = resolve_m(m, &mvec)?;
    let p: u32 = p.unwrap_or(DEFAULT_P);
    let r: u32 = r.unwrap_or(DEFAULT_R);
    let bits: u32 = bits.unwrap_or(DEFAULT_BITS);
    let c: u32 = c.unwrap_or(DEFAULT_C);
    check_plaintext(p, r)?;
    check_generators(m, &gens, &ords)?;

    if bootstrap.is_enabled() {
        if mvec.is_empty() {
            return Err(NativeFault::logic(format!("{bootstrap} bootstrapping requires mvec")));
        }
        if arith::gcd(u64::from(p), u64::from(m)) != 1 {
            return Err(NativeFault::logic(format!(
                "{bootstrap} bootstrapping requires gcd(p, m) = 1, got p = {p}, m = {m}"
            )));
        }
    }

    let phi_m: u64 = arith::totient(u64::from(m));
    let ord_p: Option<u64> = arith::multiplicative_order(u64::from(p), u64::from(m));
    debug!(m, p, r, bits, c, phi_m, ?ord_p, %bootstrap, "bgv context built");

    Ok(BgvRefContext {
        m,
        p,
        r,
        bits,
        c,
        gens,
        ords,
        mvec,
        bootstrap,
        phi_m,
        ord_p,
    })
}

fn resolve_m(m: Option<u32>, mvec: &[i64]) -> Result<u32, NativeFault> {
    let product: Option<u32> = if mvec.is_empty() {
        None
    } else {
        Some(arith::product_u32(mvec).ok_or_else(|| NativeFault::out_of_range("product of mvec exceeds 32 bits"))?)
    };
    let m: u32 = match (m, product) {
        (Some(m), Some(product)) if m != product => {
            return Err(NativeFault::invalid_argument(format!(
                "mvec multiplies to {product}, expected m = {m}"
            )));
        }
        (Some(m), _) => m,
        (None, Some(product)) => product,
        (None, None) => return Err(NativeFault::invalid_argument("m is not set and mvec is empty")),
    };
    if m < 2 {
        return Err(NativeFault::out_of_range(format!("m = {m} must be at least 2")));
    }
    Ok(m)
}

fn check_mvec(mvec: &[i64]) -> Result<(), NativeFault> {
    if let Some(factor) = mvec.iter().find(|&&factor| factor < 2) {
        return Err(NativeFault::invalid_argument(format!("mvec factor {factor} is below 2")));
    }
    if let Some((a, b)) = mvec
        .iter()
        .tuple_combinations()
        .find(|&(&a, &b)| arith::gcd(a as u64, b as u64) != 1)
    {
        return Err(NativeFault::invalid_argument(format!(
            "mvec factors {a} and {b} are not coprime"
        )));
    }
    Ok(())
}

fn check_plaintext(p: u32, r: u32) -> Result<(), NativeFault> {
    if !arith::is_prime(p) {
        return Err(NativeFault::invalid_argument(format!("p = {p} is not prime")));
    }
    if arith::checked_power(p, r).is_none() {
        return Err(NativeFault::out_of_range(format!("p^r = {p}^{r} exceeds 63 bits")));
    }
    Ok(())
}

fn check_generators(m: u32, gens: &[i64], ords: &[i64]) -> Result<(), NativeFault> {
    if gens.len() != ords.len() {
        return Err(NativeFault::invalid_argument(format!(
            "{} generators but {} orders",
            gens.len(),
            ords.len()
        )));
    }
    let m_i64: i64 = i64::from(m);
    for &g in gens {
        if !(1..m_i64).contains(&g) || arith::gcd(g as u64, u64::from(m)) != 1 {
            return Err(NativeFault::invalid_argument(format!("generator {g} is not a unit modulo {m}")));
        }
    }
    for &ord in ords {
        if ord == 0 || ord.unsigned_abs() >= u64::from(m) {
            return Err(NativeFault::out_of_range(format!("order {ord} is out of range for m = {m}")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use zno_hal::layouts::{Bootstrap, FaultClass};

    use super::*;

    fn staged(m: Option<u32>) -> BgvRefBuilder {
        BgvRefBuilder {
            m,
            ..Default::default()
        }
    }

    #[test]
    fn defaults_fill_unset_scalars() {
        let context: BgvRefContext = build_context(staged(Some(4096))).unwrap();
        assert_eq!(
            (context.p, context.r, context.bits, context.c),
            (DEFAULT_P, DEFAULT_R, DEFAULT_BITS, DEFAULT_C)
        );
        assert_eq!(context.phi_m, 2048);
        assert_eq!(context.ord_p, None);
    }

    #[test]
    fn mvec_must_match_m() {
        let mut builder: BgvRefBuilder = staged(Some(4096));
        builder.mvec = vec![7, 5, 9, 13];
        let fault: NativeFault = build_context(builder).unwrap_err();
        assert_eq!(fault.class(), FaultClass::InvalidArgument);
    }

    #[test]
    fn mvec_must_be_coprime() {
        let mut builder: BgvRefBuilder = staged(None);
        builder.mvec = vec![3, 9, 5];
        assert!(build_context(builder).unwrap_err().message().contains("not coprime"));
    }

    #[test]
    fn generators_must_be_units() {
        let mut builder: BgvRefBuilder = staged(Some(4095));
        builder.gens = vec![3];
        builder.ords = vec![6];
        assert!(build_context(builder).is_err());
    }

    #[test]
    fn plaintext_modulus_bounded() {
        let mut builder: BgvRefBuilder = staged(Some(4096));
        builder.p = Some(3);
        builder.r = Some(40);
        assert_eq!(build_context(builder).unwrap_err().class(), FaultClass::OutOfRange);
    }

    #[test]
    fn huge_lifting_exponent_rejected() {
        for p in [2, 65537, 4294967291] {
            let mut builder: BgvRefBuilder = staged(Some(4096));
            builder.p = Some(p);
            builder.r = Some(u32::MAX);
            assert_eq!(build_context(builder).unwrap_err().class(), FaultClass::OutOfRange);
        }
    }

    #[test]
    fn bootstrapping_needs_unit_p() {
        let mut builder: BgvRefBuilder = staged(None);
        builder.mvec = vec![7, 5, 9, 13];
        builder.p = Some(3);
        builder.bootstrap = Bootstrap::Thin;
        assert_eq!(build_context(builder).unwrap_err().class(), FaultClass::Logic);
    }
}
