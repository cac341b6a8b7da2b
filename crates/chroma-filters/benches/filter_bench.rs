use chroma_core::Rgba;
use chroma_filters::{channel_mix, daltonism, desaturate, invert};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn row(width: usize) -> Vec<Rgba> {
    (0..width)
        .map(|i| {
            let t = i as f32 / width as f32;
            Rgba::opaque(t, 1.0 - t, (t * 7.0).fract())
        })
        .collect()
}

fn bench_daltonism_row(c: &mut Criterion) {
    let pixels = row(512);
    c.bench_function("daltonism_512_pixels", |b| {
        b.iter(|| {
            for p in &pixels {
                black_box(daltonism(*p, 2, 0.8));
            }
        });
    });
}

fn bench_channel_mix_row(c: &mut Criterion) {
    let pixels = row(512);
    c.bench_function("channel_mix_512_pixels", |b| {
        b.iter(|| {
            for p in &pixels {
                black_box(channel_mix(*p, 0, 0.8));
            }
        });
    });
}

fn bench_inversion_row(c: &mut Criterion) {
    let pixels = row(512);
    c.bench_function("inversion_512_pixels", |b| {
        b.iter(|| {
            for p in &pixels {
                black_box(invert(*p, 0));
            }
        });
    });
}

fn bench_desaturation_row(c: &mut Criterion) {
    let pixels = row(512);
    c.bench_function("desaturation_512_pixels", |b| {
        b.iter(|| {
            for p in &pixels {
                black_box(desaturate(*p, 0.8));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_daltonism_row,
    bench_channel_mix_row,
    bench_inversion_row,
    bench_desaturation_row
);
criterion_main!(benches);
