// ─────────────────────────────────────────────────────────────────────
// Flame Key — Generation Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for the per-keystroke path: everything here
//! runs synchronously on each text change.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use flamekey_core::{
    analyze_resonance, build_sigil, generate_seed, render_svg, select_palette, FixedSource,
    Session,
};
use flamekey_types::FlameKeyConfig;

const SHORT: &str = "truth is clear";
const LONG: &str = "I speak from the heart with devotion and longing, without fear or doubt, \
                    hoping that truth and peace align with the calm I trust in others.";

// ── Seed generation ─────────────────────────────────────────────────

fn bench_seed_short(c: &mut Criterion) {
    c.bench_function("seed_short", |b| {
        b.iter(|| generate_seed(black_box(SHORT), 12))
    });
}

fn bench_seed_long(c: &mut Criterion) {
    c.bench_function("seed_long", |b| b.iter(|| generate_seed(black_box(LONG), 12)));
}

// ── Sigil + palette + SVG ───────────────────────────────────────────

fn bench_sigil(c: &mut Criterion) {
    let seed = generate_seed(LONG, 12);
    c.bench_function("sigil_build", |b| b.iter(|| build_sigil(black_box(&seed))));
}

fn bench_svg_export(c: &mut Criterion) {
    let seed = generate_seed(LONG, 12);
    let path = build_sigil(&seed);
    let palette = select_palette(&seed);
    c.bench_function("svg_export", |b| {
        b.iter(|| render_svg(black_box(&path), black_box(&palette)))
    });
}

// ── Resonance ───────────────────────────────────────────────────────

fn bench_resonance(c: &mut Criterion) {
    c.bench_function("resonance_long", |b| {
        b.iter(|| analyze_resonance(black_box(LONG), &mut FixedSource::neutral()))
    });
}

// ── Full session recompute ──────────────────────────────────────────

fn bench_session_set_text(c: &mut Criterion) {
    let mut session = match Session::new(FlameKeyConfig::default()) {
        Ok(s) => s,
        Err(e) => panic!("default config rejected: {e}"),
    };
    c.bench_function("session_set_text", |b| {
        b.iter(|| {
            session.set_text(black_box(LONG));
        })
    });
}

criterion_group!(
    benches,
    bench_seed_short,
    bench_seed_long,
    bench_sigil,
    bench_svg_export,
    bench_resonance,
    bench_session_set_text,
);
criterion_main!(benches);
