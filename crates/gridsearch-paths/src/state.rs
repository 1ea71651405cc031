use gridsearch_core::{Grid, Point};

use crate::frontier::{Algorithm, Frontier};

/// Parent-map sentinel: the cell has not been discovered yet.
pub(crate) const UNDISCOVERED: usize = usize::MAX;
/// Parent-map sentinel: the cell is the start and has no parent.
pub(crate) const NO_PARENT: usize = usize::MAX - 1;

/// Outcome of a single [`SearchState::expand`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Expansion {
    /// A non-goal coordinate was removed and its neighbours discovered.
    Expanded(Point),
    /// The goal was removed. Its neighbours are not examined.
    Goal(Point),
    /// The frontier was already empty.
    Exhausted,
}

/// The mutable state of one traversal: frontier, parent map and counters.
///
/// Shared by the batch search and the stepwise [`Traversal`](crate::Traversal)
/// so that both report identical expansion counts and paths.
#[derive(Debug, Clone)]
pub(crate) struct SearchState {
    pub(crate) algorithm: Algorithm,
    pub(crate) grid: Grid,
    pub(crate) start: Point,
    pub(crate) goal: Point,
    pub(crate) frontier: Frontier,
    /// Flat-indexed parent links, recorded when a cell is first discovered.
    parent: Vec<usize>,
    pub(crate) expanded: usize,
    pub(crate) max_frontier: usize,
}

impl SearchState {
    pub(crate) fn new(algorithm: Algorithm, grid: &Grid, start: Point, goal: Point) -> Self {
        let mut frontier = Frontier::new(algorithm);
        let mut parent = vec![UNDISCOVERED; grid.len()];
        // A start outside the grid leaves the frontier empty: the search
        // fails immediately with zero expansions.
        if let Some(si) = grid.idx(start) {
            parent[si] = NO_PARENT;
            frontier.push(start);
        }
        let max_frontier = frontier.len();
        Self {
            algorithm,
            grid: grid.clone(),
            start,
            goal,
            frontier,
            parent,
            expanded: 0,
            max_frontier,
        }
    }

    /// Remove one coordinate from the frontier and expand it.
    pub(crate) fn expand(&mut self) -> Expansion {
        let Some(cur) = self.frontier.pop() else {
            return Expansion::Exhausted;
        };
        self.expanded += 1;

        if cur == self.goal {
            self.max_frontier = self.max_frontier.max(self.frontier.len());
            return Expansion::Goal(cur);
        }

        // Only in-grid coordinates are ever pushed.
        let ci = self.grid.idx(cur).unwrap_or(NO_PARENT);
        for n in self.grid.free_neighbors(cur) {
            let Some(ni) = self.grid.idx(n) else {
                continue;
            };
            if self.parent[ni] != UNDISCOVERED {
                continue;
            }
            self.parent[ni] = ci;
            self.frontier.push(n);
        }
        self.max_frontier = self.max_frontier.max(self.frontier.len());
        Expansion::Expanded(cur)
    }

    /// Walk parent links back from `to` and return the start→`to` path.
    ///
    /// Returns `None` if `to` was never discovered.
    pub(crate) fn path_to(&self, to: Point) -> Option<Vec<Point>> {
        let mut i = self.grid.idx(to)?;
        if self.parent[i] == UNDISCOVERED {
            return None;
        }
        let mut path = vec![to];
        while self.parent[i] != NO_PARENT {
            i = self.parent[i];
            path.push(self.grid.point(i));
        }
        path.reverse();
        Some(path)
    }

    /// Whether `p` has been added to the frontier at some point.
    pub(crate) fn is_discovered(&self, p: Point) -> bool {
        self.grid
            .idx(p)
            .is_some_and(|i| self.parent[i] != UNDISCOVERED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_set_at_discovery() {
        // .  .
        // .  .
        // From (0,0) BFS discovers (1,0) then (0,1); (1,1) is first found
        // from (1,0) because (1,0) is expanded first.
        let grid = Grid::new(2, 2);
        let mut st = SearchState::new(Algorithm::Bfs, &grid, Point::new(0, 0), Point::new(1, 1));
        assert_eq!(st.expand(), Expansion::Expanded(Point::new(0, 0)));
        assert!(st.is_discovered(Point::new(1, 0)));
        assert!(st.is_discovered(Point::new(0, 1)));
        assert!(!st.is_discovered(Point::new(1, 1)));
        assert_eq!(st.expand(), Expansion::Expanded(Point::new(1, 0)));
        assert_eq!(
            st.path_to(Point::new(1, 1)),
            Some(vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)])
        );
        // Expanding (0,1) later must not steal the parent.
        assert_eq!(st.expand(), Expansion::Expanded(Point::new(0, 1)));
        assert_eq!(
            st.path_to(Point::new(1, 1)),
            Some(vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)])
        );
        assert_eq!(st.expand(), Expansion::Goal(Point::new(1, 1)));
        assert_eq!(st.expanded, 4);
    }

    #[test]
    fn start_outside_grid_is_exhausted() {
        let grid = Grid::new(2, 2);
        let mut st = SearchState::new(Algorithm::Dfs, &grid, Point::new(9, 9), Point::new(0, 0));
        assert_eq!(st.max_frontier, 0);
        assert_eq!(st.expand(), Expansion::Exhausted);
        assert_eq!(st.expanded, 0);
    }

    #[test]
    fn undiscovered_has_no_path() {
        let grid = Grid::new(1, 3);
        let st = SearchState::new(Algorithm::Bfs, &grid, Point::new(0, 0), Point::new(0, 2));
        assert_eq!(st.path_to(Point::new(0, 2)), None);
        assert_eq!(st.path_to(Point::new(0, 0)), Some(vec![Point::new(0, 0)]));
    }
}
