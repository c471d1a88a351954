use crate::layouts::{Backend, Bootstrap, Context, Derived, NativeOptional, NativeSeq, Param, ParamSeq};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::ContextGetParam] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait ContextGetParamImpl<B: Backend> {
    fn context_get_param_impl(context: &Context<B>, param: Param) -> NativeOptional<u32>;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::ContextGetDerived] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait ContextGetDerivedImpl<B: Backend> {
    fn context_get_derived_impl(context: &Context<B>, derived: Derived) -> NativeOptional<u64>;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::ContextGetSeq] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait ContextGetSeqImpl<B: Backend> {
    fn context_get_seq_impl(context: &Context<B>, seq: ParamSeq) -> NativeSeq<'_>;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::ContextGetBootstrap] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait ContextGetBootstrapImpl<B: Backend> {
    fn context_get_bootstrap_impl(context: &Context<B>) -> Bootstrap;
}
