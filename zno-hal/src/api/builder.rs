use num_traits::PrimInt;

use crate::{
    error::Result,
    layouts::{Backend, Bootstrap, Context, Param, ParamSeq},
};

/// Instantiate a new [crate::layouts::Builder] with every field unset.
pub trait BuilderNew<B: Backend> {
    fn new() -> Self;
}

/// Set the scalar parameters of a builder.
///
/// Each setter consumes the builder and returns its successor. Values are
/// narrowed to positive 32-bit integers before reaching the native side.
/// On error the consumed builder is released.
pub trait BuilderSetParam: Sized {
    fn param<T: PrimInt>(self, param: Param, value: T) -> Result<Self>;

    fn m<T: PrimInt>(self, m: T) -> Result<Self> {
        self.param(Param::M, m)
    }

    fn p<T: PrimInt>(self, p: T) -> Result<Self> {
        self.param(Param::P, p)
    }

    fn r<T: PrimInt>(self, r: T) -> Result<Self> {
        self.param(Param::R, r)
    }

    fn bits<T: PrimInt>(self, bits: T) -> Result<Self> {
        self.param(Param::Bits, bits)
    }

    fn c<T: PrimInt>(self, c: T) -> Result<Self> {
        self.param(Param::C, c)
    }
}

/// Set the integer sequences of a builder. Sequences are copied, the
/// caller keeps ownership of its slice.
pub trait BuilderSetSeq: Sized {
    fn seq<T: Copy + Into<i64>>(self, seq: ParamSeq, values: &[T]) -> Result<Self>;

    fn gens<T: Copy + Into<i64>>(self, gens: &[T]) -> Result<Self> {
        self.seq(ParamSeq::Gens, gens)
    }

    fn ords<T: Copy + Into<i64>>(self, ords: &[T]) -> Result<Self> {
        self.seq(ParamSeq::Ords, ords)
    }

    fn mvec<T: Copy + Into<i64>>(self, mvec: &[T]) -> Result<Self> {
        self.seq(ParamSeq::Mvec, mvec)
    }
}

/// Select the bootstrapping mode of a builder. The last call wins.
pub trait BuilderSetBootstrap: Sized {
    fn bootstrappable(self, flag: bool) -> Result<Self>;
    fn thickboot(self) -> Result<Self>;
    fn thinboot(self) -> Result<Self>;

    fn bootstrap(self, mode: Bootstrap) -> Result<Self> {
        match mode {
            Bootstrap::None => self.bootstrappable(false),
            Bootstrap::Thin => self.thinboot(),
            Bootstrap::Thick => self.thickboot(),
        }
    }
}

/// Consume a builder and produce a [crate::layouts::Context].
pub trait BuilderFinalize<B: Backend> {
    fn finalize(self) -> Result<Context<B>>;
}
