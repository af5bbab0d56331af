//! Multi-target route planning on top of a single-pair
//! [PathOracle](crate::pathfinder::PathOracle).
//!
//! The planner decides the order in which a set of target cells is visited.
//! All pairwise segments are optimal A* paths, so only the visit order is at
//! stake, and order matters because of the pending-penalty cost model: every
//! target carries a weight that starts at 1 and grows by one for each grid
//! step the agent takes while that target is still waiting. Reaching a
//! target charges `segment steps + weight`, with the weight frozen at the
//! moment the move towards it is committed. Targets reached late therefore
//! pay for the detours taken before them.
//!
//! Two interchangeable [RouteStrategy] implementations are provided:
//! [GreedyLookahead](greedy::GreedyLookahead), a fast heuristic, and
//! [ExhaustiveSearch](exhaustive::ExhaustiveSearch), which is optimal but
//! exponential in the number of targets. Planning never mutates the grid;
//! applying a [Route] to cell statuses is the job of
//! [replay](crate::replay::replay).

pub mod exhaustive;
pub mod greedy;

use fxhash::FxHashMap;
use grid_util::point::Point;
use log::info;

use crate::error::{PlanError, Result};
use crate::grid::RouteGrid;
use crate::pathfinder::PathOracle;

/// One planned visit: the target reached, the segment walked to reach it
/// (starting at the previous stop, ending at the target) and the route cost
/// accumulated up to and including this visit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Visit {
    pub target: Point,
    pub segment: Vec<Point>,
    pub running_cost: i32,
}

/// Final planning output: the full step-by-step path from the origin through
/// every target, its total cost, and the per-target breakdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: Vec<Point>,
    pub total_cost: i32,
    pub visits: Vec<Visit>,
}

/// Chooses the order in which targets are visited. Implementations see only
/// precomputed optimal segments; they cannot fail, since [SegmentTable]
/// construction has already proven every pair reachable.
pub trait RouteStrategy {
    fn plan_order(&self, segments: &SegmentTable, origin: Point, targets: &[Point])
        -> Vec<Point>;
}

/// Optimal segments between every pair of waypoints (`origin` plus all
/// targets), computed once up front. Fails with [NoPath](PlanError::NoPath)
/// if any target cannot be reached, which aborts planning before any
/// strategy runs.
pub struct SegmentTable {
    segments: FxHashMap<(Point, Point), Vec<Point>>,
}

impl SegmentTable {
    pub fn build<P: PathOracle + ?Sized>(
        grid: &RouteGrid,
        pathfinder: &P,
        origin: Point,
        targets: &[Point],
    ) -> Result<SegmentTable> {
        let mut waypoints = vec![origin];
        waypoints.extend_from_slice(targets);
        let mut segments = FxHashMap::default();
        for &p in &waypoints {
            segments.insert((p, p), vec![p]);
        }
        for (i, &from) in waypoints.iter().enumerate() {
            for &to in &waypoints[i + 1..] {
                if from == to {
                    continue;
                }
                let path = pathfinder.find_path(grid, from, to)?;
                if path.is_empty() {
                    // `to` is always a target here: the origin is waypoint 0.
                    return Err(PlanError::NoPath(to));
                }
                let mut reversed = path.clone();
                reversed.reverse();
                segments.insert((from, to), path);
                segments.insert((to, from), reversed);
            }
        }
        Ok(SegmentTable { segments })
    }

    pub fn segment(&self, from: Point, to: Point) -> &[Point] {
        &self.segments[&(from, to)]
    }

    /// Number of grid steps between two waypoints.
    pub fn steps(&self, from: Point, to: Point) -> i32 {
        self.segment(from, to).len() as i32 - 1
    }
}

/// Per-target pending-penalty ledger. Shared by both strategies and the
/// route assembler so a single cost formula governs simulation, search and
/// the final charge.
#[derive(Clone, Debug)]
pub(crate) struct PendingWeights {
    weights: FxHashMap<Point, i32>,
}

impl PendingWeights {
    pub(crate) fn new(targets: &[Point]) -> PendingWeights {
        PendingWeights {
            weights: targets.iter().map(|t| (*t, 1)).collect(),
        }
    }

    /// Charges a committed visit: `steps + weight(target)` with the weight
    /// frozen as of the commit, then grows every other pending weight by
    /// `steps`.
    pub(crate) fn commit(&mut self, target: Point, steps: i32) -> i32 {
        let weight = self.weights.remove(&target).unwrap();
        for w in self.weights.values_mut() {
            *w += steps;
        }
        steps + weight
    }
}

/// Plans a route visiting every target exactly once, starting at `origin`.
///
/// Duplicate targets are collapsed; an empty target set yields the trivial
/// `Route { path: [origin], total_cost: 0 }`. All positions are validated
/// up front and a route is only returned when every target is reachable.
pub fn plan_route<P, S>(
    grid: &RouteGrid,
    pathfinder: &P,
    strategy: &S,
    origin: Point,
    targets: &[Point],
) -> Result<Route>
where
    P: PathOracle + ?Sized,
    S: RouteStrategy + ?Sized,
{
    if !grid.in_bounds(origin) {
        return Err(PlanError::InvalidPosition(origin));
    }
    for &target in targets {
        if !grid.in_bounds(target) {
            return Err(PlanError::InvalidPosition(target));
        }
    }
    let mut unique: Vec<Point> = Vec::new();
    for &target in targets {
        if !unique.contains(&target) {
            unique.push(target);
        }
    }
    if unique.is_empty() {
        return Ok(Route {
            path: vec![origin],
            total_cost: 0,
            visits: Vec::new(),
        });
    }
    info!("Planning route from {} over {} targets", origin, unique.len());
    let table = SegmentTable::build(grid, pathfinder, origin, &unique)?;
    let order = strategy.plan_order(&table, origin, &unique);
    debug_assert_eq!(order.len(), unique.len());
    let route = assemble_route(&table, origin, &order);
    info!(
        "Route planned: {} steps, total cost {}",
        route.path.len() - 1,
        route.total_cost
    );
    Ok(route)
}

/// Turns a visit order into the final [Route] by concatenating segments and
/// charging each visit under the pending-penalty model.
fn assemble_route(table: &SegmentTable, origin: Point, order: &[Point]) -> Route {
    let mut path = vec![origin];
    let mut visits = Vec::with_capacity(order.len());
    let mut weights = PendingWeights::new(order);
    let mut total_cost = 0;
    let mut current = origin;
    for &target in order {
        let segment = table.segment(current, target);
        let steps = segment.len() as i32 - 1;
        total_cost += weights.commit(target, steps);
        path.extend_from_slice(&segment[1..]);
        visits.push(Visit {
            target,
            segment: segment.to_vec(),
            running_cost: total_cost,
        });
        current = target;
    }
    Route {
        path,
        total_cost,
        visits,
    }
}
