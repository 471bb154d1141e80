// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::{hint::black_box, time::Duration};
use zeus_math::math::{fast_cos_r, fast_sin_r, slow_cosine_r, slow_sine_r};
use zeus_math::{catmull_rom_spline_point, look_at, Vector3f, Vector4f};

#[allow(clippy::cast_precision_loss)]
fn make_points(n: usize) -> Vec<Vector3f> {
    (0..n)
        .map(|i| {
            let f = i as f32;
            Vector3f::new(f.sin() * 10.0, f.cos() * 10.0, f * 0.01 + 1.0)
        })
        .collect()
}

fn bench_vector_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_kernels");
    group.measurement_time(Duration::from_secs(4));
    for &n in &[16usize, 256, 4_096] {
        let points = make_points(n);
        let homogeneous: Vec<Vector4f> = points.iter().map(|p| Vector4f::from_point(*p)).collect();
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("vec3_normalize", n), &points, |b, pts| {
            b.iter(|| {
                pts.iter()
                    .map(Vector3f::normalized)
                    .fold(Vector3f::ZERO, |acc, v| acc + v)
            });
        });

        group.bench_with_input(BenchmarkId::new("vec4_normalize", n), &homogeneous, |b, pts| {
            b.iter(|| {
                pts.iter()
                    .map(Vector4f::normalized)
                    .fold(Vector4f::ZERO, |acc, v| acc + v)
            });
        });

        group.bench_with_input(BenchmarkId::new("vec3_slerp", n), &points, |b, pts| {
            b.iter(|| {
                pts.windows(2)
                    .map(|w| Vector3f::slerp(&w[0], &w[1], black_box(0.3)))
                    .fold(Vector3f::ZERO, |acc, v| acc + v)
            });
        });

        group.bench_with_input(BenchmarkId::new("catmull_rom", n), &points, |b, pts| {
            b.iter(|| {
                pts.windows(4)
                    .map(|w| catmull_rom_spline_point(&w[0], &w[1], &w[2], &w[3], black_box(0.5)))
                    .fold(Vector3f::ZERO, |acc, v| acc + v)
            });
        });

        group.bench_with_input(BenchmarkId::new("look_at", n), &points, |b, pts| {
            b.iter(|| {
                pts.windows(2)
                    .map(|w| look_at(&w[0], &w[1], &Vector3f::UP).origin)
                    .fold(Vector3f::ZERO, |acc, v| acc + v)
            });
        });
    }
    group.finish();

    let angles: Vec<f32> = make_points(1_024).iter().map(|p| p.x).collect();
    let mut trig = c.benchmark_group("trig");
    trig.throughput(Throughput::Elements(angles.len() as u64));
    trig.bench_function("fast_sin_cos", |b| {
        b.iter(|| {
            angles
                .iter()
                .map(|&a| fast_sin_r(a) + fast_cos_r(a))
                .sum::<f32>()
        });
    });
    trig.bench_function("libm_sin_cos", |b| {
        b.iter(|| {
            angles
                .iter()
                .map(|&a| slow_sine_r(a) + slow_cosine_r(a))
                .sum::<f32>()
        });
    });
    trig.finish();
}

criterion_group!(benches, bench_vector_kernels);
criterion_main!(benches);
