use grid_util::point::Point;
use log::debug;

use crate::error::Result;
use crate::grid::{CellStatus, RouteGrid};
use crate::planner::Route;

/// One reported replay step: the cell entered, its status transition and the
/// route cost accumulated so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayStep {
    pub position: Point,
    pub from: CellStatus,
    pub to: CellStatus,
    pub running_cost: i32,
}

/// Presentation collaborator fed by [replay]. Implementations own all
/// rendering and timing concerns; the core knows nothing about them.
pub trait ReplaySink {
    fn on_step(&mut self, step: ReplayStep);
}

impl<F: FnMut(ReplayStep)> ReplaySink for F {
    fn on_step(&mut self, step: ReplayStep) {
        self(step)
    }
}

/// Walks a planned [Route] over the grid, mutating cell statuses and
/// reporting every step to `sink`.
///
/// Cells entered in passing go `Free -> Path`; each visit's target goes to
/// `Visited` on arrival. `Origin` cells and targets of later visits keep
/// their status when merely passed through. Costs are taken verbatim from
/// the route's per-visit records, never recomputed: steps before a target
/// report the total of all completed visits, and arrival at a target reports
/// that visit's running cost.
///
/// This is the only place in the crate that mutates statuses; planning
/// itself is a pure function of the grid.
pub fn replay<S: ReplaySink>(grid: &mut RouteGrid, route: &Route, sink: &mut S) -> Result<()> {
    let mut completed_cost = 0;
    for visit in &route.visits {
        for &position in visit.segment.iter().skip(1) {
            let from = grid.status(position)?;
            let arrived = position == visit.target;
            let to = match from {
                _ if arrived => CellStatus::Visited,
                CellStatus::Free => CellStatus::Path,
                other => other,
            };
            if to != from {
                grid.set_status(position, to)?;
            }
            let running_cost = if arrived {
                visit.running_cost
            } else {
                completed_cost
            };
            sink.on_step(ReplayStep {
                position,
                from,
                to,
                running_cost,
            });
        }
        // A target sharing the previous stop's cell has a single-point
        // segment; it is still reported as a visit.
        if visit.segment.len() == 1 {
            let position = visit.target;
            let from = grid.status(position)?;
            grid.set_status(position, CellStatus::Visited)?;
            sink.on_step(ReplayStep {
                position,
                from,
                to: CellStatus::Visited,
                running_cost: visit.running_cost,
            });
        }
        completed_cost = visit.running_cost;
        debug!(
            "Visited {} at running cost {}",
            visit.target, visit.running_cost
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathfinder::Pathfinder;
    use crate::planner::greedy::GreedyLookahead;
    use crate::planner::plan_route;

    fn collect_steps(grid: &mut RouteGrid, route: &Route) -> Vec<ReplayStep> {
        let mut steps = Vec::new();
        replay(grid, route, &mut |step: ReplayStep| steps.push(step)).unwrap();
        steps
    }

    #[test]
    fn marks_targets_visited_and_path_cells() {
        let mut grid = RouteGrid::create(5, 5).unwrap();
        let origin = Point::new(0, 0);
        let target = Point::new(3, 0);
        grid.set_status(origin, CellStatus::Origin).unwrap();
        grid.set_status(target, CellStatus::Target).unwrap();
        let route = plan_route(
            &grid,
            &Pathfinder::new(),
            &GreedyLookahead,
            origin,
            &[target],
        )
        .unwrap();
        let steps = collect_steps(&mut grid, &route);

        assert_eq!(steps.len(), 3);
        assert_eq!(grid.status(target).unwrap(), CellStatus::Visited);
        assert_eq!(grid.status(origin).unwrap(), CellStatus::Origin);
        for step in &steps[..steps.len() - 1] {
            assert_eq!(step.to, CellStatus::Path);
            assert_eq!(step.running_cost, 0);
        }
        let last = steps.last().unwrap();
        assert_eq!(last.position, target);
        assert_eq!(last.from, CellStatus::Target);
        assert_eq!(last.to, CellStatus::Visited);
        assert_eq!(last.running_cost, route.total_cost);
    }

    /// Running costs are taken from the route verbatim and are
    /// non-decreasing over the replay.
    #[test]
    fn running_cost_is_monotonic() {
        let mut grid = RouteGrid::create(6, 6).unwrap();
        let origin = Point::new(0, 0);
        let targets = [Point::new(5, 0), Point::new(0, 5), Point::new(5, 5)];
        let route = plan_route(
            &grid,
            &Pathfinder::new(),
            &GreedyLookahead,
            origin,
            &targets,
        )
        .unwrap();
        let steps = collect_steps(&mut grid, &route);
        let mut previous = 0;
        for step in &steps {
            assert!(step.running_cost >= previous);
            previous = step.running_cost;
        }
        assert_eq!(steps.last().unwrap().running_cost, route.total_cost);
    }

    /// A target on the origin cell is reported even though no move is made.
    #[test]
    fn zero_length_visit_is_reported() {
        let mut grid = RouteGrid::create(3, 3).unwrap();
        let origin = Point::new(1, 1);
        let route = plan_route(
            &grid,
            &Pathfinder::new(),
            &GreedyLookahead,
            origin,
            &[origin],
        )
        .unwrap();
        let steps = collect_steps(&mut grid, &route);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].position, origin);
        assert_eq!(steps[0].to, CellStatus::Visited);
        assert_eq!(grid.status(origin).unwrap(), CellStatus::Visited);
    }
}
