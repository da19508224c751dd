//! Benchmarks for the color difference pipeline and palette generation.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use deltae_color::{ciede2000, rgb_to_xyz, xyz_to_lab, ToLab};
use deltae_core::{Lab, Rgb, Weights, WhitePoint};
use deltae_palette::{PaletteConfig, PaletteGenerator, Swatch};
use deltae_transfer::srgb;

/// Evenly spread RGB colors covering the cube.
fn rgb_samples(count: usize) -> Vec<Rgb> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            Rgb::new(255.0 * t, 255.0 * (1.0 - t), 255.0 * ((7.0 * t) % 1.0))
        })
        .collect()
}

/// Benchmark the sRGB decode and RGB to XYZ conversion.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for size in [1_000, 100_000] {
        let colors = rgb_samples(size);
        let xyz: Vec<_> = colors.iter().map(|&rgb| rgb_to_xyz(rgb)).collect();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("srgb_eotf", size), &colors, |b, v| {
            b.iter(|| v.iter().map(|c| srgb::eotf(black_box(c.r / 255.0))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("rgb_to_xyz", size), &colors, |b, v| {
            b.iter(|| v.iter().map(|&c| rgb_to_xyz(black_box(c))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("xyz_to_lab", size), &xyz, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&c| xyz_to_lab(black_box(c), WhitePoint::D65))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark CIEDE2000 over consecutive pairs.
fn bench_ciede2000(c: &mut Criterion) {
    let mut group = c.benchmark_group("ciede2000");

    for size in [1_000, 100_000] {
        let labs: Vec<Lab> = rgb_samples(size + 1)
            .into_iter()
            .map(|rgb| rgb.to_lab_d65())
            .collect();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("pairs", size), &labs, |b, v| {
            b.iter(|| {
                v.windows(2)
                    .map(|w| ciede2000(black_box(w[0]), black_box(w[1]), Weights::UNIT))
                    .sum::<f64>()
            })
        });
    }

    group.finish();
}

/// Benchmark palette steps on candidate grids.
fn bench_palette(c: &mut Criterion) {
    let mut group = c.benchmark_group("palette");
    group.sample_size(20);

    for levels in [16, 32] {
        let Ok(mut generator) = PaletteGenerator::from_grid(levels) else {
            continue;
        };
        group.throughput(Throughput::Elements(generator.len() as u64));

        let white = Swatch::new([255, 255, 255]);
        group.bench_function(BenchmarkId::new("add", levels), |b| {
            b.iter(|| {
                generator.reset(&Default::default());
                generator.add(black_box(&white))
            })
        });

        group.bench_function(BenchmarkId::new("generate_16", levels), |b| {
            b.iter(|| generator.generate(&PaletteConfig::default(), 16))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_convert, bench_ciede2000, bench_palette);

criterion_main!(benches);
