//! Per-cell visual state of one side of the comparison.

use gridsearch_core::{Grid, Point};

/// What a front-end should paint in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Free and not yet expanded.
    Free,
    Obstacle,
    /// Expanded by the most recent step.
    Current,
    /// Expanded earlier.
    Visited,
    /// On the final path.
    Path,
    Start,
    Goal,
}

/// A grid of [`CellState`]s.
///
/// Free cells move through `Free → Current → Visited → Path`. The start and
/// goal keep their own states no matter what the search does to them.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    start: Point,
    goal: Point,
    cells: Vec<CellState>,
    current: Option<Point>,
}

impl Board {
    pub fn new(grid: &Grid, start: Point, goal: Point) -> Self {
        let mut b = Self {
            grid: grid.clone(),
            start,
            goal,
            cells: Vec::new(),
            current: None,
        };
        b.reset();
        b
    }

    /// Restore the initial, nothing-explored state.
    pub fn reset(&mut self) {
        let grid = &self.grid;
        self.cells = grid
            .bounds()
            .iter()
            .map(|p| {
                if grid.is_free(p) {
                    CellState::Free
                } else {
                    CellState::Obstacle
                }
            })
            .collect();
        self.current = None;
    }

    /// The state at `p`. Out-of-grid points read as obstacles.
    pub fn at(&self, p: Point) -> CellState {
        if p == self.start && self.grid.contains(p) {
            return CellState::Start;
        }
        if p == self.goal && self.grid.contains(p) {
            return CellState::Goal;
        }
        self.grid
            .idx(p)
            .map_or(CellState::Obstacle, |i| self.cells[i])
    }

    /// Highlight `p` as the cell just expanded; the previous highlight
    /// becomes visited.
    pub fn visit(&mut self, p: Point) {
        self.settle_current();
        self.paint(p, CellState::Current);
        self.current = Some(p);
    }

    /// Paint the final path.
    pub fn show_path(&mut self, path: &[Point]) {
        self.settle_current();
        for &p in path {
            self.paint(p, CellState::Path);
        }
    }

    /// Turn the current highlight, if any, into a plain visited cell.
    pub fn settle_current(&mut self) {
        if let Some(c) = self.current.take() {
            self.paint(c, CellState::Visited);
        }
    }

    pub fn current(&self) -> Option<Point> {
        self.current
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Number of cells currently in `state` (start and goal excluded).
    pub fn count(&self, state: CellState) -> usize {
        self.grid
            .bounds()
            .iter()
            .filter(|&p| p != self.start && p != self.goal)
            .filter(|&p| self.at(p) == state)
            .count()
    }

    fn paint(&mut self, p: Point, state: CellState) {
        if let Some(i) = self.grid.idx(p) {
            self.cells[i] = state;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        let grid = Grid::from_rows(&[[0u8, 0, 0], [0, 1, 0], [0, 0, 0]]);
        Board::new(&grid, Point::new(0, 0), Point::new(2, 2))
    }

    #[test]
    fn initial_state() {
        let b = board();
        assert_eq!(b.at(Point::new(0, 0)), CellState::Start);
        assert_eq!(b.at(Point::new(2, 2)), CellState::Goal);
        assert_eq!(b.at(Point::new(1, 1)), CellState::Obstacle);
        assert_eq!(b.at(Point::new(0, 1)), CellState::Free);
        assert_eq!(b.at(Point::new(7, 7)), CellState::Obstacle);
        assert_eq!(b.count(CellState::Free), 6);
    }

    #[test]
    fn current_then_visited() {
        let mut b = board();
        b.visit(Point::new(0, 1));
        assert_eq!(b.at(Point::new(0, 1)), CellState::Current);
        b.visit(Point::new(0, 2));
        assert_eq!(b.at(Point::new(0, 1)), CellState::Visited);
        assert_eq!(b.at(Point::new(0, 2)), CellState::Current);
        assert_eq!(b.current(), Some(Point::new(0, 2)));
    }

    #[test]
    fn start_and_goal_are_reserved() {
        let mut b = board();
        b.visit(Point::new(0, 0));
        assert_eq!(b.at(Point::new(0, 0)), CellState::Start);
        b.show_path(&[Point::new(0, 0), Point::new(0, 1), Point::new(2, 2)]);
        assert_eq!(b.at(Point::new(0, 0)), CellState::Start);
        assert_eq!(b.at(Point::new(2, 2)), CellState::Goal);
        assert_eq!(b.at(Point::new(0, 1)), CellState::Path);
    }

    #[test]
    fn reset_restores_initial() {
        let mut b = board();
        b.visit(Point::new(1, 0));
        b.visit(Point::new(2, 0));
        b.show_path(&[Point::new(2, 0)]);
        b.reset();
        assert_eq!(b.count(CellState::Free), 6);
        assert_eq!(b.current(), None);
    }
}
