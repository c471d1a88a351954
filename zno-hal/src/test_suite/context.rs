use std::{marker::PhantomData, sync::Arc, thread};

use crate::{
    api::{BuilderFinalize, BuilderNew, BuilderSetParam, BuilderSetSeq, ContextGetDerived, ContextGetParam, ContextGetSeq, LibraryVersion},
    error::Result,
    layouts::{Builder, Context, Parameters},
    oep::ContextBackend,
};

fn context_4095<B: ContextBackend>() -> Context<B> {
    (|| -> Result<Context<B>> {
        Builder::<B>::new()
            .m(4095)?
            .p(2)?
            .gens(&[2341i64, 3277, 911])?
            .ords(&[6i64, 4, 6])?
            .mvec(&[7i64, 5, 9, 13])?
            .finalize()
    })()
    .unwrap()
}

pub fn test_context_derived_coprime<B: ContextBackend>(_backend: PhantomData<B>) {
    let context: Context<B> = context_4095::<B>();
    assert_eq!(context.phi_m(), Some(1728));
    assert_eq!(context.ord_p(), Some(12));
    assert_eq!(context.nslots(), Some(144));
}

pub fn test_context_derived_not_coprime<B: ContextBackend>(_backend: PhantomData<B>) {
    let context: Context<B> = Builder::<B>::new().m(4096).unwrap().p(2).unwrap().finalize().unwrap();
    assert_eq!(context.phi_m(), Some(2048));
    assert_eq!(context.ord_p(), None);
    assert_eq!(context.nslots(), None);
}

pub fn test_context_reads_are_stable<B: ContextBackend>(_backend: PhantomData<B>) {
    let context: Context<B> = context_4095::<B>();
    let first: Parameters = Parameters::from_context(&context);
    let mut gens: Vec<i64> = context.gens();
    gens.clear();
    let second: Parameters = Parameters::from_context(&context);
    assert_eq!(first, second);
    assert_eq!(context.gens(), vec![2341, 3277, 911]);
}

pub fn test_context_shared_across_threads<B: ContextBackend>(_backend: PhantomData<B>) {
    let context: Arc<Context<B>> = Arc::new(context_4095::<B>());
    thread::scope(|scope| {
        for _ in 0..4 {
            let context: Arc<Context<B>> = Arc::clone(&context);
            scope.spawn(move || {
                for _ in 0..100 {
                    assert_eq!(context.m(), Some(4095));
                    assert_eq!(context.mvec(), vec![7, 5, 9, 13]);
                    assert_eq!(context.nslots(), Some(144));
                }
            });
        }
    });
}

pub fn test_library_version_format<B: ContextBackend>(_backend: PhantomData<B>) {
    let version: String = B::library_version();
    let parts: Vec<&str> = version.split('.').collect();
    assert_eq!(parts.len(), 3, "{version}");
    for part in parts {
        assert!(!part.is_empty() && part.chars().all(|c| c.is_ascii_digit()), "{version}");
        part.parse::<u32>().unwrap();
    }
    assert_eq!(version, B::version().to_string());
}
