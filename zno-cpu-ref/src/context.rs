use zno_hal::{
    layouts::{Bootstrap, Context, Derived, NativeOptional, NativeSeq, Param, ParamSeq},
    oep::{ContextGetBootstrapImpl, ContextGetDerivedImpl, ContextGetParamImpl, ContextGetSeqImpl},
};

use crate::BgvRef;

/// Finalized, immutable BGV context of the reference backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BgvRefContext {
    pub(crate) m: u32,
    pub(crate) p: u32,
    pub(crate) r: u32,
    pub(crate) bits: u32,
    pub(crate) c: u32,
    pub(crate) gens: Vec<i64>,
    pub(crate) ords: Vec<i64>,
    pub(crate) mvec: Vec<i64>,
    pub(crate) bootstrap: Bootstrap,
    pub(crate) phi_m: u64,
    /// `None` when `p` divides `m`.
    pub(crate) ord_p: Option<u64>,
}

impl BgvRefContext {
    pub(crate) fn param(&self, param: Param) -> u32 {
        match param {
            Param::M => self.m,
            Param::P => self.p,
            Param::R => self.r,
            Param::Bits => self.bits,
            Param::C => self.c,
        }
    }

    pub(crate) fn seq(&self, seq: ParamSeq) -> &[i64] {
        match seq {
            ParamSeq::Gens => &self.gens,
            ParamSeq::Ords => &self.ords,
            ParamSeq::Mvec => &self.mvec,
        }
    }

    pub(crate) fn derived(&self, derived: Derived) -> Option<u64> {
        match derived {
            Derived::PhiM => Some(self.phi_m),
            Derived::OrdP => self.ord_p,
            Derived::NSlots => self.ord_p.map(|ord_p| self.phi_m / ord_p),
        }
    }
}

fn native(context: &Context<BgvRef>) -> &BgvRefContext {
    // SAFETY: the handle comes from `builder_build_impl` and lives as long as `context`.
    unsafe { &*context.as_ptr() }
}

unsafe impl ContextGetParamImpl<Self> for BgvRef {
    fn context_get_param_impl(context: &Context<Self>, param: Param) -> NativeOptional<u32> {
        NativeOptional::present(native(context).param(param))
    }
}

unsafe impl ContextGetDerivedImpl<Self> for BgvRef {
    fn context_get_derived_impl(context: &Context<Self>, derived: Derived) -> NativeOptional<u64> {
        native(context).derived(derived).into()
    }
}

unsafe impl ContextGetSeqImpl<Self> for BgvRef {
    fn context_get_seq_impl(context: &Context<Self>, seq: ParamSeq) -> NativeSeq<'_> {
        NativeSeq::from_slice(native(context).seq(seq))
    }
}

unsafe impl ContextGetBootstrapImpl<Self> for BgvRef {
    fn context_get_bootstrap_impl(context: &Context<Self>) -> Bootstrap {
        native(context).bootstrap
    }
}
