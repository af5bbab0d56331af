//! # grid_route_planning
//!
//! Multi-target route planning on a bounded, obstacle-free 2-D grid. A
//! single-pair A* pathfinder over 8-connected unit-cost moves (Chebyshev
//! heuristic) serves as the edge-cost oracle for a route planner that picks
//! the order in which a set of target cells is visited from an origin.
//!
//! Visit order matters because of a pending-penalty cost model: every target
//! carries a weight that grows while it waits, so targets cleared late cost
//! more than their bare travel distance. Two interchangeable strategies are
//! provided: a fast greedy lookahead and an optimal (but exponential)
//! exhaustive search. See the [planner] module for the exact cost formula.
//!
//! Planning is a pure function of the grid; applying a planned [Route] to
//! cell statuses, step by step, is done by [replay::replay], which feeds a
//! presentation collaborator of the caller's choosing.
//!
//! Coordinates are 0-based [grid_util::Point]s with `x` the column and `y`
//! the row.

mod astar;

pub mod error;
pub mod grid;
pub mod pathfinder;
pub mod planner;
pub mod replay;

pub use error::{PlanError, Result};
pub use grid::{CellStatus, RouteGrid};
pub use pathfinder::{PathOracle, Pathfinder};
pub use planner::exhaustive::ExhaustiveSearch;
pub use planner::greedy::GreedyLookahead;
pub use planner::{plan_route, Route, RouteStrategy, SegmentTable, Visit};
pub use replay::{replay, ReplaySink, ReplayStep};
