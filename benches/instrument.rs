//! Benchmarks for class instrumentation.
//!
//! Measures a full class visit over synthetic units:
//! - A traced method with several exit paths
//! - A pass-through class that fails selection
//! - A parallel batch of independent classes

extern crate classweave;

use std::hint::black_box;
use std::sync::Arc;

use classweave::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};

fn engine() -> Instrumenter {
    Instrumenter::with_diagnostics(
        InstrumentationOptions::new()
            .with_package_prefix("app.")
            .with_traced_method("hello"),
        Arc::new(NullSink),
    )
}

fn traced_class(name: &str) -> ClassUnit {
    let mut hello = MethodUnit::new("hello", "(I)I", MethodAccessFlags::PUBLIC).frames(3, 2);
    for _ in 0..16 {
        hello.instructions.push(Instruction::simple(opcodes::ILOAD_1));
        hello.instructions.push(Instruction::simple(opcodes::IFEQ));
        hello.instructions.push(Instruction::simple(opcodes::ICONST_0));
        hello.instructions.push(Instruction::simple(opcodes::IRETURN));
    }
    hello.instructions.push(Instruction::simple(opcodes::ICONST_1));
    hello.instructions.push(Instruction::simple(opcodes::IRETURN));

    ClassUnit::new(name)
        .method(hello)
        .method(
            MethodUnit::new("<clinit>", "()V", MethodAccessFlags::STATIC)
                .instruction(Instruction::simple(opcodes::RETURN))
                .frames(0, 0),
        )
}

/// Benchmark one class visit with entry/exit injection on 17 exit paths.
fn bench_instrument_traced_class(c: &mut Criterion) {
    let engine = engine();
    let unit = traced_class("app.Greeter");

    c.bench_function("instrument_traced_class", |b| {
        b.iter(|| {
            let rewritten = engine.instrument_class(black_box(&unit)).unwrap();
            black_box(rewritten)
        });
    });
}

/// Benchmark the pass-through path for an ineligible class.
fn bench_instrument_pass_through(c: &mut Criterion) {
    let engine = engine();
    let unit = traced_class("app.R$layout");

    c.bench_function("instrument_pass_through", |b| {
        b.iter(|| {
            let rewritten = engine.instrument_class(black_box(&unit)).unwrap();
            black_box(rewritten)
        });
    });
}

/// Benchmark a parallel batch of independent class visits.
fn bench_instrument_batch(c: &mut Criterion) {
    let engine = engine();
    let units: Vec<ClassUnit> = (0..256)
        .map(|index| traced_class(&format!("app.Worker{index}")))
        .collect();

    c.bench_function("instrument_batch_256", |b| {
        b.iter(|| {
            let rewritten = engine.instrument_all(black_box(&units)).unwrap();
            black_box(rewritten)
        });
    });
}

criterion_group!(
    benches,
    bench_instrument_traced_class,
    bench_instrument_pass_through,
    bench_instrument_batch
);
criterion_main!(benches);
