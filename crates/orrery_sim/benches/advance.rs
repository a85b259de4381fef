use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use orrery_core::SimConfig;
use orrery_physics::procgen::generate_trisolaris;
use orrery_sim::Simulation;

fn bench_advance(c: &mut Criterion) {
    let config = SimConfig::default();
    let bodies = generate_trisolaris(&config).expect("default system");

    c.bench_function("advance_trisolaris", |b| {
        let mut sim = Simulation::new(bodies.clone());
        b.iter(|| sim.advance(black_box(config.tick_seconds)))
    });

    c.bench_function("advance_trisolaris_1000", |b| {
        b.iter(|| {
            let mut sim = Simulation::new(bodies.clone());
            for _ in 0..1000 {
                sim.advance(config.tick_seconds);
            }
            black_box(sim.elapsed_time())
        })
    });
}

criterion_group!(benches, bench_advance);
criterion_main!(benches);
