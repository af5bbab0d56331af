use grid_util::point::Point;
use log::debug;

use crate::planner::{PendingWeights, RouteStrategy, SegmentTable};

/// Fast heuristic strategy with a one-level-deep lookahead.
///
/// For every candidate next target, the full remaining tour is simulated:
/// the candidate is visited first, then the simulation repeatedly picks the
/// target minimizing `segment steps + Chebyshev distance from the current
/// position`, charging each simulated visit under the pending-penalty model.
/// The candidate whose simulated tour is cheapest is committed for real, and
/// the process repeats until no targets remain. Not guaranteed optimal;
/// ties fall to the earliest candidate in target order, keeping the result
/// deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyLookahead;

impl RouteStrategy for GreedyLookahead {
    fn plan_order(
        &self,
        segments: &SegmentTable,
        origin: Point,
        targets: &[Point],
    ) -> Vec<Point> {
        let mut order = Vec::with_capacity(targets.len());
        let mut remaining: Vec<Point> = targets.to_vec();
        let mut weights = PendingWeights::new(targets);
        let mut current = origin;
        while !remaining.is_empty() {
            let mut best: Option<(i32, Point)> = None;
            for &candidate in &remaining {
                let estimate =
                    simulate_tour(segments, current, candidate, &remaining, &weights);
                if best.map_or(true, |(cost, _)| estimate < cost) {
                    best = Some((estimate, candidate));
                }
            }
            let (estimate, next) = best.unwrap();
            let steps = segments.steps(current, next);
            let charge = weights.commit(next, steps);
            debug!(
                "Committing to {} (charge {}, lookahead estimate {})",
                next, charge, estimate
            );
            remaining.retain(|t| *t != next);
            order.push(next);
            current = next;
        }
        order
    }
}

/// Simulated total cost of visiting `candidate` next and then clearing the
/// rest of `remaining` nearest-first.
fn simulate_tour(
    segments: &SegmentTable,
    current: Point,
    candidate: Point,
    remaining: &[Point],
    weights: &PendingWeights,
) -> i32 {
    let mut weights = weights.clone();
    let mut pending: Vec<Point> = remaining
        .iter()
        .copied()
        .filter(|t| *t != candidate)
        .collect();
    let mut total = weights.commit(candidate, segments.steps(current, candidate));
    let mut position = candidate;
    while !pending.is_empty() {
        let mut best: Option<(i32, Point)> = None;
        for &target in &pending {
            let key = segments.steps(position, target) + position.move_distance(&target);
            if best.map_or(true, |(cost, _)| key < cost) {
                best = Some((key, target));
            }
        }
        let (_, next) = best.unwrap();
        total += weights.commit(next, segments.steps(position, next));
        pending.retain(|t| *t != next);
        position = next;
    }
    total
}
