use std::cmp::Ordering;
use std::collections::BinaryHeap;

use grid_util::point::Point;
use log::debug;

use crate::planner::{PendingWeights, RouteStrategy, SegmentTable};

/// Optimal strategy: uniform-cost search over partial visit orders.
///
/// A state is `(current position, visit order so far, pending weights,
/// accumulated cost)`. Expanding a state branches on every unvisited target
/// and charges the move under the pending-penalty model, so every expansion
/// adds a strictly positive increment and the first fully-visited state
/// popped from the frontier carries the globally minimal cost. States are
/// immutable once pushed; branching copies. Time and memory are exponential
/// in the target count, so callers should keep target sets small (roughly a
/// dozen at most). No internal timeout is applied.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExhaustiveSearch;

struct SearchState {
    cost: i32,
    /// Insertion sequence number, used as a deterministic FIFO tie-break.
    seq: u64,
    current: Point,
    order: Vec<Point>,
    weights: PendingWeights,
}

impl PartialEq for SearchState {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for SearchState {}

impl PartialOrd for SearchState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchState {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on accumulated cost, oldest state first on ties.
        match other.cost.cmp(&self.cost) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            s => s,
        }
    }
}

impl RouteStrategy for ExhaustiveSearch {
    fn plan_order(
        &self,
        segments: &SegmentTable,
        origin: Point,
        targets: &[Point],
    ) -> Vec<Point> {
        let mut frontier = BinaryHeap::new();
        let mut seq = 0_u64;
        frontier.push(SearchState {
            cost: 0,
            seq,
            current: origin,
            order: Vec::new(),
            weights: PendingWeights::new(targets),
        });
        let mut expanded = 0_usize;
        while let Some(state) = frontier.pop() {
            if state.order.len() == targets.len() {
                debug!(
                    "Optimal order found at cost {} after {} expansions",
                    state.cost, expanded
                );
                return state.order;
            }
            expanded += 1;
            for &target in targets {
                if state.order.contains(&target) {
                    continue;
                }
                let steps = segments.steps(state.current, target);
                let mut weights = state.weights.clone();
                let charge = weights.commit(target, steps);
                let mut order = state.order.clone();
                order.push(target);
                seq += 1;
                frontier.push(SearchState {
                    cost: state.cost + charge,
                    seq,
                    current: target,
                    order,
                    weights,
                });
            }
        }
        // Every state has finite depth and each target branches at least
        // once from the root, so the frontier can only empty after a full
        // order was returned.
        unreachable!("exhaustive frontier emptied before visiting all targets")
    }
}
