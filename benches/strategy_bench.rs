use criterion::{criterion_group, criterion_main, Criterion};
use grid_route_planning::{plan_route, ExhaustiveSearch, GreedyLookahead, Pathfinder, RouteGrid};
use grid_util::Point;
use rand::prelude::*;
use std::hint::black_box;

fn strategy_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let grid = RouteGrid::create(32, 32).unwrap();
    let origin = Point::new(0, 0);
    let pathfinder = Pathfinder::new();
    for n_targets in [4, 6] {
        let mut targets: Vec<Point> = Vec::new();
        while targets.len() < n_targets {
            let p = Point::new(rng.gen_range(0..32), rng.gen_range(0..32));
            if p != origin && !targets.contains(&p) {
                targets.push(p);
            }
        }
        c.bench_function(format!("greedy, {n_targets} targets").as_str(), |b| {
            b.iter(|| {
                black_box(plan_route(
                    &grid,
                    &pathfinder,
                    &GreedyLookahead,
                    origin,
                    &targets,
                ))
            })
        });
        c.bench_function(format!("exhaustive, {n_targets} targets").as_str(), |b| {
            b.iter(|| {
                black_box(plan_route(
                    &grid,
                    &pathfinder,
                    &ExhaustiveSearch,
                    origin,
                    &targets,
                ))
            })
        });
    }
}

criterion_group!(benches, strategy_bench);
criterion_main!(benches);
