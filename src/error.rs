use grid_util::point::Point;
use thiserror::Error;

/// Errors raised at the planning API boundary.
///
/// Validation failures ([InvalidDimensions](PlanError::InvalidDimensions),
/// [InvalidPosition](PlanError::InvalidPosition)) are raised before any state
/// is touched. [NoPath](PlanError::NoPath) aborts the whole planning call:
/// the cost model assumes every target is reachable, so no partial route is
/// ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("position {0} lies outside the grid bounds")]
    InvalidPosition(Point),

    #[error("target {0} cannot be reached")]
    NoPath(Point),
}

pub type Result<T> = std::result::Result<T, PlanError>;
