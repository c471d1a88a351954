mod builder;
mod context;
mod version;

pub use builder::*;
pub use context::*;
pub use version::*;

use crate::layouts::Backend;

/// A backend implementing every extension point of the builder protocol.
pub trait ContextBackend:
    Backend
    + BuilderNewImpl<Self>
    + BuilderSetParamImpl<Self>
    + BuilderSetSeqImpl<Self>
    + BuilderSetBootstrapImpl<Self>
    + BuilderBuildImpl<Self>
    + ContextGetParamImpl<Self>
    + ContextGetDerivedImpl<Self>
    + ContextGetSeqImpl<Self>
    + ContextGetBootstrapImpl<Self>
    + VersionImpl<Self>
{
}

impl<B> ContextBackend for B where
    B: Backend
        + BuilderNewImpl<B>
        + BuilderSetParamImpl<B>
        + BuilderSetSeqImpl<B>
        + BuilderSetBootstrapImpl<B>
        + BuilderBuildImpl<B>
        + ContextGetParamImpl<B>
        + ContextGetDerivedImpl<B>
        + ContextGetSeqImpl<B>
        + ContextGetBootstrapImpl<B>
        + VersionImpl<B>
{
}
