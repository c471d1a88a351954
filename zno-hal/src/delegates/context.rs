use crate::{
    api::{ContextGetBootstrap, ContextGetDerived, ContextGetParam, ContextGetSeq, LibraryVersion},
    layouts::{Backend, Bootstrap, Context, Derived, NativeVersion, Param, ParamSeq},
    marshal::{copy_native_seq, to_optional},
    oep::{ContextGetBootstrapImpl, ContextGetDerivedImpl, ContextGetParamImpl, ContextGetSeqImpl, VersionImpl},
};

impl<B> ContextGetParam for Context<B>
where
    B: Backend + ContextGetParamImpl<B>,
{
    fn param(&self, param: Param) -> Option<u32> {
        to_optional(B::context_get_param_impl(self, param))
    }
}

impl<B> ContextGetDerived for Context<B>
where
    B: Backend + ContextGetDerivedImpl<B>,
{
    fn derived(&self, derived: Derived) -> Option<u64> {
        to_optional(B::context_get_derived_impl(self, derived))
    }
}

impl<B> ContextGetSeq for Context<B>
where
    B: Backend + ContextGetSeqImpl<B>,
{
    fn seq(&self, seq: ParamSeq) -> Vec<i64> {
        copy_native_seq(B::context_get_seq_impl(self, seq))
    }
}

impl<B> ContextGetBootstrap for Context<B>
where
    B: Backend + ContextGetBootstrapImpl<B>,
{
    fn bootstrap(&self) -> Bootstrap {
        B::context_get_bootstrap_impl(self)
    }
}

impl<B> LibraryVersion for B
where
    B: Backend + VersionImpl<B>,
{
    fn version() -> NativeVersion {
        B::version_impl()
    }
}
