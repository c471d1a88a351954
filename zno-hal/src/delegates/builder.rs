use num_traits::PrimInt;
use tracing::{debug, trace};

use crate::{
    api::{BuilderFinalize, BuilderNew, BuilderSetBootstrap, BuilderSetParam, BuilderSetSeq},
    error::{Result, Stage, guard},
    layouts::{Backend, Builder, Context, Field, Param, ParamSeq},
    marshal::marshal_seq,
    oep::{BuilderBuildImpl, BuilderNewImpl, BuilderSetBootstrapImpl, BuilderSetParamImpl, BuilderSetSeqImpl},
};

impl<B> BuilderNew<B> for Builder<B>
where
    B: Backend + BuilderNewImpl<B>,
{
    fn new() -> Self {
        let builder: Builder<B> = B::builder_new_impl();
        debug!(backend = std::any::type_name::<B>(), "builder created");
        builder
    }
}

impl<B> BuilderSetParam for Builder<B>
where
    B: Backend + BuilderSetParamImpl<B>,
{
    fn param<T: PrimInt>(self, param: Param, value: T) -> Result<Self> {
        let value = param.check(value)?;
        trace!(%param, value = value.get(), "set");
        guard(Stage::Set(param.into()), move || B::builder_set_param_impl(self, param, value))
    }
}

impl<B> BuilderSetSeq for Builder<B>
where
    B: Backend + BuilderSetSeqImpl<B>,
{
    fn seq<T: Copy + Into<i64>>(self, seq: ParamSeq, values: &[T]) -> Result<Self> {
        let values: Vec<i64> = marshal_seq(values);
        trace!(%seq, len = values.len(), "set");
        guard(Stage::Set(seq.into()), move || B::builder_set_seq_impl(self, seq, values))
    }
}

impl<B> BuilderSetBootstrap for Builder<B>
where
    B: Backend + BuilderSetBootstrapImpl<B>,
{
    fn bootstrappable(self, flag: bool) -> Result<Self> {
        trace!(flag, "set bootstrappable");
        guard(Stage::Set(Field::Bootstrap), move || {
            B::builder_set_bootstrappable_impl(self, flag)
        })
    }

    fn thickboot(self) -> Result<Self> {
        trace!("set thickboot");
        guard(Stage::Set(Field::Bootstrap), move || B::builder_set_thickboot_impl(self))
    }

    fn thinboot(self) -> Result<Self> {
        trace!("set thinboot");
        guard(Stage::Set(Field::Bootstrap), move || B::builder_set_thinboot_impl(self))
    }
}

impl<B> BuilderFinalize<B> for Builder<B>
where
    B: Backend + BuilderBuildImpl<B>,
{
    fn finalize(self) -> Result<Context<B>> {
        let context: Context<B> = guard(Stage::Finalize, move || B::builder_build_impl(self))?;
        debug!(backend = std::any::type_name::<B>(), "context finalized");
        Ok(context)
    }
}
