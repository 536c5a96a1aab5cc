use criterion::{black_box, criterion_group, criterion_main, Criterion};
use whirl_animation::{tick, CarouselConfig, CarouselPhysicsState, VelocityTracker};

fn bench_tick(c: &mut Criterion) {
    let config = CarouselConfig::desktop(316.0, 5);
    c.bench_function("tick_full_decay", |b| {
        b.iter(|| {
            let mut state = CarouselPhysicsState {
                velocity: black_box(-25.0),
                ..Default::default()
            };
            while !tick(&mut state, &config).finished {}
            state.position
        })
    });
}

fn bench_tracker(c: &mut Criterion) {
    let config = CarouselConfig::desktop(316.0, 5);
    c.bench_function("tracker_sample_and_release", |b| {
        b.iter(|| {
            let mut tracker = VelocityTracker::new();
            tracker.begin_at(500.0, 0.0);
            for i in 1..=black_box(20u32) {
                tracker.add_sample(500.0 - 15.0 * i as f32, i as f64 * 16.0, &config);
            }
            tracker.release_velocity(&config)
        })
    });
}

criterion_group!(benches, bench_tick, bench_tracker);
criterion_main!(benches);
