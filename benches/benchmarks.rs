//! Performance benchmarks for color resolution and rendering.
//!
//! Measures the hot paths:
//! - WCAG luminance and contrast
//! - Lightness search of the contrast solver
//! - Random background selection under constraints
//! - Wallpaper rendering

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use palette::Srgb;

use color_wallpaper::color::ColorValue;
use color_wallpaper::contrast::contrast_ratio;
use color_wallpaper::contrast_solver::invert_with_min_contrast;
use color_wallpaper::names::ColorNames;
use color_wallpaper::random::PaletteSource;
use color_wallpaper::render::{WallpaperLayout, render_wallpaper};
use color_wallpaper::selection::{ColorSelectionPolicy, OverlayConstraint, SelectionRequest};

/// 256 colors spanning the RGB cube.
fn sample_colors() -> Vec<Srgb<u8>> {
    (0u8..=255)
        .map(|i: u8| Srgb::new(i, i.wrapping_mul(97), i.wrapping_mul(193)))
        .collect()
}

/// Benchmark contrast ratios of 256 colors against white.
fn bench_contrast_ratio(c: &mut Criterion) {
    let colors = sample_colors();
    let white = Srgb::new(255u8, 255, 255);

    c.bench_function("contrast_ratio_256", |b| {
        b.iter(|| {
            for color in &colors {
                black_box(contrast_ratio(*color, white));
            }
        })
    });
}

/// Benchmark the solver on a gray that needs a long lightness walk.
fn bench_solver(c: &mut Criterion) {
    let names = ColorNames::builtin();
    let gray = ColorValue::named(Srgb::new(0x50, 0x50, 0x50), names);

    c.bench_function("invert_with_min_contrast", |b| {
        b.iter(|| invert_with_min_contrast(black_box(&gray), Some(4.0), names))
    });

    // Exhausts both directions
    let mid = ColorValue::named(Srgb::new(0x7F, 0x7F, 0x7F), names);
    c.bench_function("invert_with_min_contrast_unsatisfiable", |b| {
        b.iter(|| invert_with_min_contrast(black_box(&mid), Some(10.0), names))
    });
}

/// Benchmark random selection with an overlay and a strict inversion bound.
fn bench_selection(c: &mut Criterion) {
    let names = ColorNames::builtin();
    let policy = ColorSelectionPolicy::new(names);
    let request = SelectionRequest {
        min_contrast: Some(7.0),
        overlay: Some(OverlayConstraint {
            color: ColorValue::named(Srgb::new(255, 255, 255), names),
            min_contrast: 4.5,
        }),
        ..SelectionRequest::random()
    };

    c.bench_function("select_random_constrained", |b| {
        let mut source = PaletteSource::seeded(names, 1);
        b.iter(|| policy.resolve(black_box(&request), &mut source))
    });
}

/// Benchmark rendering a full HD wallpaper.
fn bench_render(c: &mut Criterion) {
    let names = ColorNames::builtin();
    let selection = policy_selection(names);
    let layout = WallpaperLayout::default();

    c.bench_function("render_wallpaper_1080p", |b| {
        b.iter(|| render_wallpaper(black_box(&selection), &layout))
    });
}

fn policy_selection(names: &ColorNames) -> color_wallpaper::selection::Selection {
    let mut source = PaletteSource::seeded(names, 7);
    ColorSelectionPolicy::new(names)
        .resolve(&SelectionRequest::random(), &mut source)
        .expect("unconstrained selection always resolves")
}

criterion_group!(
    benches,
    bench_contrast_ratio,
    bench_solver,
    bench_selection,
    bench_render,
);

criterion_main!(benches);
