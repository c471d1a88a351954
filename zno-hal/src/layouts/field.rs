use std::{fmt, num::NonZeroU32};

use num_traits::PrimInt;

use crate::error::{Error, Result};

/// Scalar configuration parameters of a BGV context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    /// Cyclotomic index.
    M,
    /// Plaintext prime.
    P,
    /// Hensel lifting exponent, the plaintext modulus is `p^r`.
    R,
    /// Bit size of the ciphertext modulus chain.
    Bits,
    /// Number of columns of the key-switching matrices.
    C,
}

impl Param {
    pub const ALL: [Param; 5] = [Param::M, Param::P, Param::R, Param::Bits, Param::C];

    pub fn name(self) -> &'static str {
        match self {
            Param::M => "m",
            Param::P => "p",
            Param::R => "r",
            Param::Bits => "bits",
            Param::C => "c",
        }
    }

    /// Narrows a host integer to the positive 32-bit domain of this parameter.
    ///
    /// Zero is reported as [Error::Zero], negative values and values above
    /// `u32::MAX` as [Error::OutOfRange].
    pub fn check<T: PrimInt>(self, value: T) -> Result<NonZeroU32> {
        let value: u32 = value.to_u32().ok_or(Error::OutOfRange(self.into()))?;
        NonZeroU32::new(value).ok_or(Error::Zero(self.into()))
    }
}

/// Integer sequences describing the structure of `Z_m^*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamSeq {
    /// Generators of `Z_m^* / <p>`.
    Gens,
    /// Orders of the generators, negative for "bad" dimensions.
    Ords,
    /// Factorization of `m` into pairwise coprime factors.
    Mvec,
}

impl ParamSeq {
    pub const ALL: [ParamSeq; 3] = [ParamSeq::Gens, ParamSeq::Ords, ParamSeq::Mvec];

    pub fn name(self) -> &'static str {
        match self {
            ParamSeq::Gens => "gens",
            ParamSeq::Ords => "ords",
            ParamSeq::Mvec => "mvec",
        }
    }
}

/// Values computed by the native library during finalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Derived {
    /// Euler totient of `m`, the ring dimension.
    PhiM,
    /// Multiplicative order of `p` modulo `m`.
    OrdP,
    /// Number of plaintext slots, `phi(m) / ord(p)`.
    NSlots,
}

impl Derived {
    pub fn name(self) -> &'static str {
        match self {
            Derived::PhiM => "phi_m",
            Derived::OrdP => "ord_p",
            Derived::NSlots => "nslots",
        }
    }
}

/// Any configurable field of a builder. Carried by errors to name the
/// offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    M,
    P,
    R,
    Bits,
    C,
    Gens,
    Ords,
    Mvec,
    Bootstrap,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::M => "m",
            Field::P => "p",
            Field::R => "r",
            Field::Bits => "bits",
            Field::C => "c",
            Field::Gens => "gens",
            Field::Ords => "ords",
            Field::Mvec => "mvec",
            Field::Bootstrap => "bootstrap",
        }
    }
}

impl From<Param> for Field {
    fn from(param: Param) -> Self {
        match param {
            Param::M => Field::M,
            Param::P => Field::P,
            Param::R => Field::R,
            Param::Bits => Field::Bits,
            Param::C => Field::C,
        }
    }
}

impl From<ParamSeq> for Field {
    fn from(seq: ParamSeq) -> Self {
        match seq {
            ParamSeq::Gens => Field::Gens,
            ParamSeq::Ords => Field::Ords,
            ParamSeq::Mvec => Field::Mvec,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ParamSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Derived {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_accepts_positive_values_of_any_width() {
        assert_eq!(Param::M.check(4096u16).map(NonZeroU32::get), Ok(4096));
        assert_eq!(Param::Bits.check(500i64).map(NonZeroU32::get), Ok(500));
        assert_eq!(Param::C.check(u32::MAX).map(NonZeroU32::get), Ok(u32::MAX));
    }

    #[test]
    fn check_rejects_zero() {
        for param in Param::ALL {
            assert_eq!(param.check(0u8), Err(Error::Zero(param.into())));
        }
    }

    #[test]
    fn check_rejects_negative_and_oversized() {
        assert_eq!(Param::P.check(-1i32), Err(Error::OutOfRange(Field::P)));
        assert_eq!(Param::M.check(u64::from(u32::MAX) + 1), Err(Error::OutOfRange(Field::M)));
        assert_eq!(Param::R.check(i64::MIN), Err(Error::OutOfRange(Field::R)));
    }
}
