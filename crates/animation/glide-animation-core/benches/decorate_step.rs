use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glide_animation_core::{
    curves::{Easing, Timing},
    decorate_animation, Animation, TimingConfig, Value,
};

const FRAMES: usize = 60;

fn timing() -> Timing {
    Timing::new(TimingConfig {
        duration_ms: 1000.0,
        easing: Easing::EaseInOut,
    })
}

fn run(from: &str, to: &str) -> Option<Value> {
    let mut anim = decorate_animation(Animation::new(timing(), Some(Value::text(to))));
    anim.on_start(&Value::text(from), 0.0, None);
    for i in 1..=FRAMES {
        anim.on_frame(i as f64 * 1000.0 / 60.0);
    }
    anim.current
}

fn bench_unit(c: &mut Criterion) {
    c.bench_function("unit_px_60_frames", |b| {
        b.iter(|| black_box(run(black_box("0px"), black_box("100px"))))
    });
    c.bench_function("unit_prefixed_deg_60_frames", |b| {
        b.iter(|| black_box(run(black_box("rotate-90deg"), black_box("rotate90deg"))))
    });
}

fn bench_color(c: &mut Criterion) {
    c.bench_function("color_hex_60_frames", |b| {
        b.iter(|| black_box(run(black_box("#ff0000"), black_box("#0000ff"))))
    });
    c.bench_function("color_rgba_60_frames", |b| {
        b.iter(|| {
            black_box(run(
                black_box("rgba(10, 20, 30, 0.2)"),
                black_box("hsl(120, 50%, 50%)"),
            ))
        })
    });
}

criterion_group!(benches, bench_unit, bench_color);
criterion_main!(benches);
