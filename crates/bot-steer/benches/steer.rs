use bot_core::{Obstacle, Vec2};
use bot_steer::{SteerConfig, Steering};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn obstacle_ring(count: usize, radius: f32) -> Vec<Obstacle> {
    (0..count)
        .map(|i| {
            let angle = (i as f32) / (count as f32) * core::f32::consts::TAU;
            Obstacle::new(Vec2::from_angle(angle) * 120.0, radius)
        })
        .collect()
}

fn bench_deflect(c: &mut Criterion) {
    let steering = Steering::new(SteerConfig::default());
    let mut group = c.benchmark_group("bot-steer/deflect");

    let far_ring = obstacle_ring(64, 10.0);
    group.bench_function("clear_64_obstacles", |b| {
        b.iter(|| black_box(steering.deflect(Vec2::ZERO, 0.3, &far_ring)))
    });

    let mut blocked = obstacle_ring(64, 10.0);
    blocked.push(Obstacle::new(Vec2::new(25.0, 2.0), 20.0));
    group.bench_function("blocked_65_obstacles", |b| {
        b.iter(|| black_box(steering.deflect(Vec2::ZERO, 0.0, &blocked)))
    });

    group.finish();
}

criterion_group!(benches, bench_deflect);
criterion_main!(benches);
