use grid_util::point::Point;
use log::debug;

use crate::astar::astar_search;
use crate::error::{PlanError, Result};
use crate::grid::RouteGrid;

/// Point-to-point path oracle consumed by the route planner.
///
/// The contract: `start == goal` yields `[start]`; an unreachable goal
/// yields an empty path (a reachability miss, not an error); out-of-bounds
/// endpoints fail with [InvalidPosition](PlanError::InvalidPosition).
pub trait PathOracle {
    fn find_path(&self, grid: &RouteGrid, start: Point, goal: Point) -> Result<Vec<Point>>;
}

/// Single-pair shortest-path A* search on the 8-connected grid.
///
/// Moves cost 1 in all 8 directions and the heuristic is the
/// [Chebyshev distance](https://en.wikipedia.org/wiki/Chebyshev_distance),
/// which is admissible and consistent for unit-cost 8-directional movement:
/// the first expansion of the goal yields a cost-optimal path. The route
/// planner depends on that optimality, so no heuristic inflation is applied.
#[derive(Clone, Debug, Default)]
pub struct Pathfinder;

impl Pathfinder {
    pub fn new() -> Pathfinder {
        Pathfinder
    }
}

impl PathOracle for Pathfinder {
    /// Computes a shortest path from `start` to `goal`, both inclusive.
    fn find_path(&self, grid: &RouteGrid, start: Point, goal: Point) -> Result<Vec<Point>> {
        for endpoint in [start, goal] {
            if !grid.in_bounds(endpoint) {
                return Err(PlanError::InvalidPosition(endpoint));
            }
        }
        if start == goal {
            return Ok(vec![start]);
        }
        debug!("Searching path {} -> {}", start, goal);
        let result = astar_search(
            &start,
            |node| {
                grid.neighbours(*node)
                    .into_iter()
                    .map(|p| (p, 1))
                    .collect::<Vec<(Point, i32)>>()
            },
            |point| point.move_distance(&goal),
            |point| *point == goal,
        );
        Ok(result.map(|(path, _cost)| path).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let grid = RouteGrid::create(1, 1).unwrap();
        let pathfinder = Pathfinder::new();
        let start = Point::new(0, 0);
        let path = pathfinder.find_path(&grid, start, start).unwrap();
        assert_eq!(path, vec![start]);
    }

    /// On an open grid the optimal step count is the Chebyshev distance.
    #[test]
    fn diagonal_moves_are_unit_cost() {
        let grid = RouteGrid::create(6, 6).unwrap();
        let pathfinder = Pathfinder::new();
        let start = Point::new(0, 0);
        let goal = Point::new(5, 3);
        let path = pathfinder.find_path(&grid, start, goal).unwrap();
        assert_eq!(path.len() as i32 - 1, start.move_distance(&goal));
        assert_eq!(*path.first().unwrap(), start);
        assert_eq!(*path.last().unwrap(), goal);
    }

    /// Consecutive path positions must be Chebyshev-adjacent.
    #[test]
    fn path_is_step_connected() {
        let grid = RouteGrid::create(8, 5).unwrap();
        let pathfinder = Pathfinder::new();
        let path = pathfinder
            .find_path(&grid, Point::new(7, 0), Point::new(0, 4))
            .unwrap();
        for pair in path.windows(2) {
            assert_eq!(pair[0].move_distance(&pair[1]), 1);
        }
    }

    #[test]
    fn out_of_bounds_endpoint_is_rejected() {
        let grid = RouteGrid::create(3, 3).unwrap();
        let pathfinder = Pathfinder::new();
        let outside = Point::new(0, 3);
        assert_eq!(
            pathfinder.find_path(&grid, Point::new(0, 0), outside),
            Err(PlanError::InvalidPosition(outside))
        );
        assert_eq!(
            pathfinder.find_path(&grid, outside, Point::new(0, 0)),
            Err(PlanError::InvalidPosition(outside))
        );
    }

    /// Identical calls must return the identical path.
    #[test]
    fn search_is_deterministic() {
        let grid = RouteGrid::create(9, 9).unwrap();
        let pathfinder = Pathfinder::new();
        let first = pathfinder
            .find_path(&grid, Point::new(1, 1), Point::new(7, 4))
            .unwrap();
        for _ in 0..5 {
            let again = pathfinder
                .find_path(&grid, Point::new(1, 1), Point::new(7, 4))
                .unwrap();
            assert_eq!(first, again);
        }
    }
}
