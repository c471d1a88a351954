use std::{num::NonZeroU32, ptr::NonNull};

use zno_hal::{
    layouts::{Bootstrap, Builder, Context, NativeFault, Param, ParamSeq},
    oep::{BuilderBuildImpl, BuilderNewImpl, BuilderSetBootstrapImpl, BuilderSetParamImpl, BuilderSetSeqImpl},
};

use crate::{BgvRef, validate};

/// Staging object behind a `Builder<BgvRef>`.
///
/// Fields stay unset until a setter records them; finalize fills the gaps
/// with the library defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BgvRefBuilder {
    pub(crate) m: Option<u32>,
    pub(crate) p: Option<u32>,
    pub(crate) r: Option<u32>,
    pub(crate) bits: Option<u32>,
    pub(crate) c: Option<u32>,
    pub(crate) gens: Vec<i64>,
    pub(crate) ords: Vec<i64>,
    pub(crate) mvec: Vec<i64>,
    pub(crate) bootstrap: Bootstrap,
}

impl BgvRefBuilder {
    fn param_mut(&mut self, param: Param) -> &mut Option<u32> {
        match param {
            Param::M => &mut self.m,
            Param::P => &mut self.p,
            Param::R => &mut self.r,
            Param::Bits => &mut self.bits,
            Param::C => &mut self.c,
        }
    }

    fn seq_mut(&mut self, seq: ParamSeq) -> &mut Vec<i64> {
        match seq {
            ParamSeq::Gens => &mut self.gens,
            ParamSeq::Ords => &mut self.ords,
            ParamSeq::Mvec => &mut self.mvec,
        }
    }
}

fn staging(builder: &mut Builder<BgvRef>) -> &mut BgvRefBuilder {
    // SAFETY: the handle comes from `builder_new_impl` and `builder` owns it exclusively.
    unsafe { &mut *builder.as_mut_ptr() }
}

unsafe impl BuilderNewImpl<Self> for BgvRef {
    fn builder_new_impl() -> Builder<Self> {
        let handle: NonNull<BgvRefBuilder> = NonNull::from(Box::leak(Box::new(BgvRefBuilder::default())));
        unsafe { Builder::from_nonnull(handle) }
    }
}

unsafe impl BuilderSetParamImpl<Self> for BgvRef {
    fn builder_set_param_impl(mut builder: Builder<Self>, param: Param, value: NonZeroU32) -> Result<Builder<Self>, NativeFault> {
        *staging(&mut builder).param_mut(param) = Some(value.get());
        Ok(builder)
    }
}

unsafe impl BuilderSetSeqImpl<Self> for BgvRef {
    fn builder_set_seq_impl(mut builder: Builder<Self>, seq: ParamSeq, values: Vec<i64>) -> Result<Builder<Self>, NativeFault> {
        *staging(&mut builder).seq_mut(seq) = values;
        Ok(builder)
    }
}

unsafe impl BuilderSetBootstrapImpl<Self> for BgvRef {
    fn builder_set_bootstrappable_impl(mut builder: Builder<Self>, flag: bool) -> Result<Builder<Self>, NativeFault> {
        let staged: &mut BgvRefBuilder = staging(&mut builder);
        staged.bootstrap = staged.bootstrap.with_flag(flag);
        Ok(builder)
    }

    fn builder_set_thickboot_impl(mut builder: Builder<Self>) -> Result<Builder<Self>, NativeFault> {
        staging(&mut builder).bootstrap = Bootstrap::Thick;
        Ok(builder)
    }

    fn builder_set_thinboot_impl(mut builder: Builder<Self>) -> Result<Builder<Self>, NativeFault> {
        staging(&mut builder).bootstrap = Bootstrap::Thin;
        Ok(builder)
    }
}

unsafe impl BuilderBuildImpl<Self> for BgvRef {
    fn builder_build_impl(builder: Builder<Self>) -> Result<Context<Self>, NativeFault> {
        // The staging object is reclaimed here and released on every path.
        let staged: Box<BgvRefBuilder> = unsafe { Box::from_raw(builder.into_raw().as_ptr()) };
        let context = validate::build_context(*staged)?;
        let handle = NonNull::from(Box::leak(Box::new(context)));
        Ok(unsafe { Context::from_nonnull(handle) })
    }
}
