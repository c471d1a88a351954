use std::marker::PhantomData;

use crate::{
    api::{
        BuilderFinalize, BuilderNew, BuilderSetBootstrap, BuilderSetParam, BuilderSetSeq, ContextGetBootstrap, ContextGetDerived,
        ContextGetParam, ContextGetSeq,
    },
    error::{Error, Result, Stage},
    layouts::{Bootstrap, Builder, Context, Field, Param, Parameters},
    oep::ContextBackend,
    source::Source,
};

const SMALL_PRIMES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 31, 127, 131, 257, 8191];

pub fn test_builder_round_trip<B: ContextBackend>(_backend: PhantomData<B>) {
    let build = || -> Result<Context<B>> {
        Builder::<B>::new()
            .m(4096)?
            .p(2)?
            .r(1)?
            .bits(500)?
            .c(2)?
            .bootstrappable(false)?
            .finalize()
    };
    let context: Context<B> = build().unwrap();
    assert_eq!(context.m(), Some(4096));
    assert_eq!(context.p(), Some(2));
    assert_eq!(context.r(), Some(1));
    assert_eq!(context.bits(), Some(500));
    assert_eq!(context.c(), Some(2));
    assert!(!context.is_bootstrappable());
    assert_eq!(context.bootstrap(), Bootstrap::None);
}

pub fn test_builder_native_defaults<B: ContextBackend>(_backend: PhantomData<B>) {
    let context: Context<B> = Builder::<B>::new().m(4096u16).unwrap().finalize().unwrap();
    assert_eq!(context.m(), Some(4096));
    assert_eq!(context.p(), Some(2));
    assert_eq!(context.r(), Some(1));
    assert_eq!(context.bits(), Some(300));
    assert_eq!(context.c(), Some(3));
    assert!(context.gens().is_empty());
    assert!(context.mvec().is_empty());
}

pub fn test_builder_zero_rejected<B: ContextBackend>(_backend: PhantomData<B>) {
    for param in Param::ALL {
        let outcome: Result<Builder<B>> = Builder::<B>::new().param(param, 0u32);
        assert_eq!(outcome.unwrap_err(), Error::Zero(param.into()));
    }
}

pub fn test_builder_out_of_range_rejected<B: ContextBackend>(_backend: PhantomData<B>) {
    assert_eq!(Builder::<B>::new().m(-1i32).unwrap_err(), Error::OutOfRange(Field::M));
    assert_eq!(Builder::<B>::new().bits(1u64 << 32).unwrap_err(), Error::OutOfRange(Field::Bits));
    assert_eq!(Builder::<B>::new().p(i64::MIN).unwrap_err(), Error::OutOfRange(Field::P));
    assert_eq!(Builder::<B>::new().c(u128::MAX).unwrap_err(), Error::OutOfRange(Field::C));
}

pub fn test_builder_sequences_round_trip<B: ContextBackend>(_backend: PhantomData<B>) {
    let gens: [i32; 3] = [2341, 3277, 911];
    let ords: [i16; 3] = [6, 4, 6];
    let mvec: [u8; 4] = [7, 5, 9, 13];
    let context: Context<B> = (|| -> Result<Context<B>> {
        Builder::<B>::new()
            .m(4095)?
            .gens(&gens)?
            .ords(&ords)?
            .mvec(&mvec)?
            .finalize()
    })()
    .unwrap();
    assert_eq!(context.gens(), vec![2341, 3277, 911]);
    assert_eq!(context.ords(), vec![6, 4, 6]);
    assert_eq!(context.mvec(), vec![7, 5, 9, 13]);
}

pub fn test_builder_empty_sequences_accepted<B: ContextBackend>(_backend: PhantomData<B>) {
    let empty: [i64; 0] = [];
    let context: Context<B> = (|| -> Result<Context<B>> {
        Builder::<B>::new()
            .m(4096)?
            .gens(&empty)?
            .ords(&empty)?
            .mvec(&empty)?
            .finalize()
    })()
    .unwrap();
    assert!(context.gens().is_empty());
    assert!(context.ords().is_empty());
    assert!(context.mvec().is_empty());
}

pub fn test_builder_mvec_determines_m<B: ContextBackend>(_backend: PhantomData<B>) {
    let context: Context<B> = Builder::<B>::new()
        .mvec(&[7i64, 5, 9, 13])
        .unwrap()
        .finalize()
        .unwrap();
    assert_eq!(context.m(), Some(4095));
}

pub fn test_builder_native_rejection_is_generic<B: ContextBackend>(_backend: PhantomData<B>) {
    let rejected: [Result<Builder<B>>; 5] = [
        // gens and ords of different lengths
        Builder::<B>::new()
            .m(4095)
            .and_then(|b| b.gens(&[2341i64, 3277]))
            .and_then(|b| b.ords(&[6i64, 4, 6])),
        // p not prime
        Builder::<B>::new().m(4096).and_then(|b| b.p(4)),
        // m neither set nor derivable
        Builder::<B>::new().p(2),
        // mvec does not multiply to m
        Builder::<B>::new().m(4096).and_then(|b| b.mvec(&[7i64, 5])),
        // m too small
        Builder::<B>::new().m(1),
    ];
    for builder in rejected {
        assert_eq!(builder.unwrap().finalize().unwrap_err(), Error::Generic(Stage::Finalize));
    }
}

pub fn test_builder_huge_lifting_exponent_rejected<B: ContextBackend>(_backend: PhantomData<B>) {
    for p in [2u32, 65537, 4294967291] {
        let outcome: Result<Context<B>> = Builder::<B>::new()
            .m(4096)
            .and_then(|b| b.p(p))
            .and_then(|b| b.r(u32::MAX))
            .and_then(|b| b.finalize());
        assert_eq!(outcome.unwrap_err(), Error::Generic(Stage::Finalize), "p = {p}");
    }
}

pub fn test_builder_bootstrap_last_write_wins<B: ContextBackend>(_backend: PhantomData<B>) {
    let bootstrapped = |steps: &[Bootstrap], flag: Option<bool>| -> Bootstrap {
        let mut builder: Builder<B> = Builder::<B>::new().m(4095).unwrap().mvec(&[7i64, 5, 9, 13]).unwrap();
        for &mode in steps {
            builder = builder.bootstrap(mode).unwrap();
        }
        if let Some(flag) = flag {
            builder = builder.bootstrappable(flag).unwrap();
        }
        builder.finalize().unwrap().bootstrap()
    };
    assert_eq!(bootstrapped(&[Bootstrap::Thick, Bootstrap::Thin], None), Bootstrap::Thin);
    assert_eq!(bootstrapped(&[Bootstrap::Thin, Bootstrap::Thick], None), Bootstrap::Thick);
    assert_eq!(bootstrapped(&[Bootstrap::Thin], Some(false)), Bootstrap::None);
    assert_eq!(bootstrapped(&[Bootstrap::Thick], Some(true)), Bootstrap::Thick);
    assert_eq!(bootstrapped(&[], Some(true)), Bootstrap::Thin);
    assert_eq!(bootstrapped(&[], None), Bootstrap::None);
}

pub fn test_builder_bootstrap_requires_mvec<B: ContextBackend>(_backend: PhantomData<B>) {
    let outcome: Result<Context<B>> = Builder::<B>::new()
        .m(4095)
        .and_then(|b| b.thinboot())
        .and_then(|b| b.finalize());
    assert_eq!(outcome.unwrap_err(), Error::Generic(Stage::Finalize));
}

pub fn test_builder_random_round_trip<B: ContextBackend>(_backend: PhantomData<B>) {
    let mut root: Source = Source::new([0x5au8; 32]);
    for _ in 0..64 {
        let (_, mut source) = root.branch();
        let params: Parameters = Parameters {
            m: Some(source.next_u32_between(2, 1 << 16)),
            p: Some(*source.choose(&SMALL_PRIMES)),
            r: Some(source.next_u32_between(1, 3)),
            bits: Some(source.next_u32_between(60, 2000)),
            c: Some(source.next_u32_between(1, 8)),
            ..Default::default()
        };
        let context: Context<B> = params.build().unwrap();
        assert_eq!(Parameters::from_context(&context), params, "{params}");

        let phi_m: u64 = context.phi_m().unwrap();
        assert!(phi_m >= 1 && phi_m < u64::from(params.m.unwrap()));
        if let (Some(ord_p), Some(nslots)) = (context.ord_p(), context.nslots()) {
            assert_eq!(ord_p * nslots, phi_m, "{params}");
        }
    }
}

pub fn test_parameters_match_setters<B: ContextBackend>(_backend: PhantomData<B>) {
    let params: Parameters =
        r#"{"m":4095,"p":2,"r":1,"bits":300,"c":2,"gens":[2341,3277,911],"ords":[6,4,6],"mvec":[7,5,9,13],"bootstrap":"thick"}"#
            .parse()
            .unwrap();
    let from_params: Context<B> = params.build().unwrap();
    let from_setters: Context<B> = (|| -> Result<Context<B>> {
        Builder::<B>::new()
            .m(4095)?
            .p(2)?
            .r(1)?
            .bits(300)?
            .c(2)?
            .gens(&[2341i64, 3277, 911])?
            .ords(&[6i64, 4, 6])?
            .mvec(&[7i64, 5, 9, 13])?
            .thickboot()?
            .finalize()
    })()
    .unwrap();
    assert_eq!(Parameters::from_context(&from_params), Parameters::from_context(&from_setters));
    assert_eq!(Parameters::from_context(&from_params), params);
}

pub fn test_parameters_checked_like_setters<B: ContextBackend>(_backend: PhantomData<B>) {
    let zero_bits: Parameters = r#"{"m":4096,"bits":0}"#.parse().unwrap();
    assert_eq!(zero_bits.build::<B>().unwrap_err(), Error::Zero(Field::Bits));
    let no_m: Parameters = r#"{"p":3}"#.parse().unwrap();
    assert_eq!(no_m.build::<B>().unwrap_err(), Error::Generic(Stage::Finalize));
}
