use gridsearch_core::{Grid, Point};

use crate::frontier::Algorithm;
use crate::state::{Expansion, SearchState};

/// Result of a batch search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Start→goal path, both endpoints included. `None` if the goal is
    /// unreachable.
    pub path: Option<Vec<Point>>,
    /// Number of coordinates removed from the frontier and expanded.
    pub expanded: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

impl SearchResult {
    /// Whether a path was found.
    #[inline]
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of coordinates on the path, 0 if there is none.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }
}

/// Run `algorithm` from `start` to `goal` to completion.
///
/// Terminates on the first removal of `goal` from the frontier. With
/// [`Algorithm::Bfs`] the returned path is a shortest one in step count;
/// with [`Algorithm::Dfs`] it is some valid path determined by the
/// down/up/right/left neighbour order.
///
/// Start and goal are not validated: a start outside the grid fails with
/// zero expansions, and a goal on an obstacle is unreachable unless it is
/// also the start.
pub fn search(algorithm: Algorithm, grid: &Grid, start: Point, goal: Point) -> SearchResult {
    let mut st = SearchState::new(algorithm, grid, start, goal);
    let path = loop {
        match st.expand() {
            Expansion::Expanded(_) => {}
            Expansion::Goal(g) => break st.path_to(g),
            Expansion::Exhausted => break None,
        }
    };
    log::debug!(
        "{algorithm} {start} -> {goal}: {} after {} expansions (max {} {})",
        if path.is_some() { "found" } else { "no path" },
        st.expanded,
        st.max_frontier,
        algorithm.frontier_name(),
    );
    SearchResult {
        path,
        expanded: st.expanded,
        max_frontier: st.max_frontier,
    }
}

/// Breadth-first [`search`].
pub fn bfs(grid: &Grid, start: Point, goal: Point) -> SearchResult {
    search(Algorithm::Bfs, grid, start, goal)
}

/// Depth-first [`search`].
pub fn dfs(grid: &Grid, start: Point, goal: Point) -> SearchResult {
    search(Algorithm::Dfs, grid, start, goal)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn result_round_trip() {
        let grid = Grid::new(2, 3);
        let r = bfs(&grid, Point::new(0, 0), Point::new(1, 2));
        let json = serde_json::to_string(&r).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
