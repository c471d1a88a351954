use std::num::NonZeroU32;

use crate::layouts::{Backend, Builder, Context, NativeFault, Param, ParamSeq};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::BuilderNew] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait BuilderNewImpl<B: Backend> {
    fn builder_new_impl() -> Builder<B>;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::BuilderSetParam] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait BuilderSetParamImpl<B: Backend> {
    fn builder_set_param_impl(builder: Builder<B>, param: Param, value: NonZeroU32) -> Result<Builder<B>, NativeFault>;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::BuilderSetSeq] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait BuilderSetSeqImpl<B: Backend> {
    fn builder_set_seq_impl(builder: Builder<B>, seq: ParamSeq, values: Vec<i64>) -> Result<Builder<B>, NativeFault>;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::BuilderSetBootstrap] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait BuilderSetBootstrapImpl<B: Backend> {
    fn builder_set_bootstrappable_impl(builder: Builder<B>, flag: bool) -> Result<Builder<B>, NativeFault>;
    fn builder_set_thickboot_impl(builder: Builder<B>) -> Result<Builder<B>, NativeFault>;
    fn builder_set_thinboot_impl(builder: Builder<B>) -> Result<Builder<B>, NativeFault>;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::BuilderFinalize] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait BuilderBuildImpl<B: Backend> {
    fn builder_build_impl(builder: Builder<B>) -> Result<Context<B>, NativeFault>;
}
