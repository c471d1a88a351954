use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};

use crate::{
    api::{BuilderNew, BuilderSetParam, ContextGetSeq},
    layouts::{Bootstrap, Builder, Context, Parameters},
    oep::ContextBackend,
};

fn parameter_sets() -> Vec<(&'static str, Parameters)> {
    vec![
        (
            "m=4096",
            Parameters {
                m: Some(4096),
                p: Some(2),
                bits: Some(300),
                ..Default::default()
            },
        ),
        (
            "m=4095,thick",
            Parameters {
                m: Some(4095),
                p: Some(2),
                gens: vec![2341, 3277, 911],
                ords: vec![6, 4, 6],
                mvec: vec![7, 5, 9, 13],
                bootstrap: Bootstrap::Thick,
                ..Default::default()
            },
        ),
        (
            "m=31775,thin",
            Parameters {
                m: Some(31775),
                p: Some(2),
                mvec: vec![41, 775],
                bootstrap: Bootstrap::Thin,
                ..Default::default()
            },
        ),
    ]
}

pub fn bench_finalize<B: ContextBackend>(c: &mut Criterion, label: &str) {
    let group_name: String = format!("finalize::{label}");

    let mut group = c.benchmark_group(group_name);

    for (name, params) in parameter_sets() {
        let id: BenchmarkId = BenchmarkId::from_parameter(name);
        group.bench_with_input(id, &params, |b, params| {
            b.iter(|| {
                let context: Context<B> = params.build().unwrap();
                black_box(context);
            })
        });
    }

    group.finish();
}

pub fn bench_builder_setters<B: ContextBackend>(c: &mut Criterion, label: &str) {
    let group_name: String = format!("builder_setters::{label}");

    let mut group = c.benchmark_group(group_name);

    group.bench_function("m_p_r_bits_c", |b| {
        b.iter(|| {
            let builder: Builder<B> = Builder::<B>::new()
                .m(black_box(4096u32))
                .and_then(|b| b.p(black_box(2u32)))
                .and_then(|b| b.r(black_box(1u32)))
                .and_then(|b| b.bits(black_box(300u32)))
                .and_then(|b| b.c(black_box(2u32)))
                .unwrap();
            black_box(builder);
        })
    });

    group.finish();
}

pub fn bench_read_back<B: ContextBackend>(c: &mut Criterion, label: &str) {
    let group_name: String = format!("read_back::{label}");

    let mut group = c.benchmark_group(group_name);

    for (name, params) in parameter_sets() {
        let context: Context<B> = params.build().unwrap();
        let id: BenchmarkId = BenchmarkId::from_parameter(name);
        group.bench_with_input(id, &context, |b, context| {
            b.iter(|| {
                black_box(Parameters::from_context(context));
                black_box(context.mvec());
            })
        });
    }

    group.finish();
}
