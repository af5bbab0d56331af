use core::fmt;

use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;

use crate::error::{PlanError, Result};

/// State of a single grid cell.
///
/// `Free`, `Target` and `Origin` are set up before planning; `Path` and
/// `Visited` are applied by [replay](crate::replay::replay) after a route has
/// been computed. Planning itself never mutates statuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CellStatus {
    #[default]
    Free,
    Target,
    Origin,
    Path,
    Visited,
}

/// [RouteGrid] is a bounded lattice of [CellStatus] values built on a
/// [SimpleGrid]. Implements [Grid] by delegating to the inner grid.
///
/// Positions use 0-based [Point] coordinates with `x` the column in
/// `[0, width)` and `y` the row in `[0, height)`. The grid has no obstacle
/// concept: every in-bounds cell can be moved to, and all 8 Chebyshev
/// neighbours of a cell are legal moves.
#[derive(Clone, Debug)]
pub struct RouteGrid {
    cells: SimpleGrid<CellStatus>,
}

impl RouteGrid {
    /// Creates a grid of `Free` cells, failing with
    /// [InvalidDimensions](PlanError::InvalidDimensions) on a zero-sized
    /// dimension.
    pub fn create(width: usize, height: usize) -> Result<RouteGrid> {
        if width == 0 || height == 0 {
            return Err(PlanError::InvalidDimensions { width, height });
        }
        Ok(RouteGrid {
            cells: SimpleGrid::new(width, height, CellStatus::Free),
        })
    }

    pub fn in_bounds(&self, pos: Point) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.cells.width()
            && (pos.y as usize) < self.cells.height()
    }

    /// Bounds-checked status read.
    pub fn status(&self, pos: Point) -> Result<CellStatus> {
        if !self.in_bounds(pos) {
            return Err(PlanError::InvalidPosition(pos));
        }
        Ok(self.cells.get_point(pos))
    }

    /// Bounds-checked status write.
    pub fn set_status(&mut self, pos: Point, status: CellStatus) -> Result<()> {
        if !self.in_bounds(pos) {
            return Err(PlanError::InvalidPosition(pos));
        }
        self.cells.set_point(pos, status);
        Ok(())
    }

    /// All in-bounds Moore (8-connected) neighbours of `pos`.
    pub fn neighbours(&self, pos: Point) -> Vec<Point> {
        pos.moore_neighborhood()
            .into_iter()
            .filter(|p| self.in_bounds(*p))
            .collect::<Vec<Point>>()
    }

    /// Positions currently marked [CellStatus::Target], scanned row-major.
    pub fn targets(&self) -> Vec<Point> {
        self.positions_with(CellStatus::Target)
    }

    /// The position marked [CellStatus::Origin], if one has been set.
    pub fn origin(&self) -> Option<Point> {
        self.positions_with(CellStatus::Origin).into_iter().next()
    }

    fn positions_with(&self, status: CellStatus) -> Vec<Point> {
        let mut found = Vec::new();
        for y in 0..self.height() {
            for x in 0..self.width() {
                if self.cells.get(x, y) == status {
                    found.push(Point::new(x as i32, y as i32));
                }
            }
        }
        found
    }
}

impl Grid<CellStatus> for RouteGrid {
    fn new(width: usize, height: usize, default_value: CellStatus) -> Self {
        RouteGrid {
            cells: SimpleGrid::new(width, height, default_value),
        }
    }
    fn get(&self, x: usize, y: usize) -> CellStatus {
        self.cells.get(x, y)
    }
    fn set(&mut self, x: usize, y: usize, status: CellStatus) {
        self.cells.set(x, y, status);
    }
    fn width(&self) -> usize {
        self.cells.width()
    }
    fn height(&self) -> usize {
        self.cells.height()
    }
}

impl fmt::Display for RouteGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in (0..self.height()).rev() {
            for x in 0..self.width() {
                let c = match self.cells.get(x, y) {
                    CellStatus::Free => '.',
                    CellStatus::Target => 'T',
                    CellStatus::Origin => 'S',
                    CellStatus::Path => '*',
                    CellStatus::Visited => 'v',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            RouteGrid::create(0, 5),
            Err(PlanError::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(matches!(
            RouteGrid::create(5, 0),
            Err(PlanError::InvalidDimensions { width: 5, height: 0 })
        ));
    }

    #[test]
    fn rejects_out_of_bounds_writes() {
        let mut grid = RouteGrid::create(3, 3).unwrap();
        let outside = Point::new(3, 0);
        assert_eq!(
            grid.set_status(outside, CellStatus::Target),
            Err(PlanError::InvalidPosition(outside))
        );
        assert_eq!(grid.status(Point::new(-1, 0)), Err(PlanError::InvalidPosition(Point::new(-1, 0))));
    }

    #[test]
    fn corner_and_interior_neighbour_counts() {
        let grid = RouteGrid::create(4, 4).unwrap();
        assert_eq!(grid.neighbours(Point::new(0, 0)).len(), 3);
        assert_eq!(grid.neighbours(Point::new(1, 0)).len(), 5);
        assert_eq!(grid.neighbours(Point::new(2, 2)).len(), 8);
    }

    #[test]
    fn scans_marked_cells() {
        let mut grid = RouteGrid::create(4, 3).unwrap();
        grid.set_status(Point::new(2, 1), CellStatus::Origin).unwrap();
        grid.set_status(Point::new(0, 0), CellStatus::Target).unwrap();
        grid.set_status(Point::new(3, 2), CellStatus::Target).unwrap();
        assert_eq!(grid.origin(), Some(Point::new(2, 1)));
        assert_eq!(grid.targets(), vec![Point::new(0, 0), Point::new(3, 2)]);
    }
}
