use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use ndarray::prelude::*;
use ndarray_rand::{rand_distr::Uniform, RandomExt};
use ndarray_spectral_conv::*;

fn criterion_benchmark(c: &mut Criterion) {
    let x = Array::random((256, 255), Uniform::new(0f32, 1.));
    let k = Array::random((11, 11), Uniform::new(0f32, 1.));

    c.bench_function("fft_valid", |b| {
        b.iter(|| black_box(x.conv_fft(&k, BorderMode::Valid)))
    });

    c.bench_function("fft_full", |b| {
        b.iter(|| black_box(x.conv_fft(&k, BorderMode::Full)))
    });

    c.bench_function("fft_full_pad_last_dim", |b| {
        let conv = FftConvolution::new(BorderMode::Full).with_pad_last_dim(true);
        b.iter(|| black_box(x.conv_fft(&k, conv)))
    });

    c.bench_function("fft_full_fast_len", |b| {
        let conv = FftConvolution::new(BorderMode::Full).with_fast_len(true);
        b.iter(|| black_box(x.conv_fft(&k, conv)))
    });

    let mut fft_processor = processor::get::<f32, f32>();
    c.bench_function("fft_full_with_processor", |b| {
        b.iter(|| black_box(x.conv_fft_with_processor(&k, BorderMode::Full, &mut fft_processor)))
    });

    c.bench_function("direct_full", |b| {
        b.iter(|| black_box(x.conv(&k, BorderMode::Full)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
