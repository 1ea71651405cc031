use gridsearch_core::{Grid, Point};

use crate::frontier::Algorithm;
use crate::state::{Expansion, SearchState};

/// One unit of observable progress from a [`Traversal`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum StepEvent {
    /// A coordinate was removed from the frontier and expanded.
    Visit {
        /// The coordinate just expanded.
        at: Point,
        /// Frontier contents after the expansion, oldest entry first.
        frontier: Vec<Point>,
        /// Every coordinate expanded so far, in expansion order.
        visited: Vec<Point>,
        /// Cumulative expansion count, including this one.
        expanded: usize,
        /// Largest frontier size seen so far.
        max_frontier: usize,
    },
    /// The goal was expanded. Terminal.
    Done {
        path: Vec<Point>,
        expanded: usize,
        max_frontier: usize,
    },
    /// The frontier ran out before reaching the goal. Terminal.
    Failed { expanded: usize, max_frontier: usize },
}

impl StepEvent {
    /// Whether this event ends the sequence.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, StepEvent::Visit { .. })
    }

    /// Cumulative expansion count carried by the event.
    #[inline]
    pub fn expanded(&self) -> usize {
        match *self {
            StepEvent::Visit { expanded, .. }
            | StepEvent::Done { expanded, .. }
            | StepEvent::Failed { expanded, .. } => expanded,
        }
    }

    /// Largest frontier size carried by the event.
    #[inline]
    pub fn max_frontier(&self) -> usize {
        match *self {
            StepEvent::Visit { max_frontier, .. }
            | StepEvent::Done { max_frontier, .. }
            | StepEvent::Failed { max_frontier, .. } => max_frontier,
        }
    }

    /// The reconstructed path; empty for anything but [`StepEvent::Done`].
    #[inline]
    pub fn path(&self) -> &[Point] {
        match self {
            StepEvent::Done { path, .. } => path,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Searching,
    /// The goal's `Visit` has been emitted; `Done` comes next.
    Reached(Vec<Point>),
    Finished,
}

/// A BFS or DFS run suspended between expansions.
///
/// Each call to [`advance`](Traversal::advance) performs at most one
/// expansion and returns the matching [`StepEvent`]. The sequence is:
/// one `Visit` per expansion (the goal's expansion included), then exactly
/// one terminal `Done` or `Failed`, then `None` forever. The number of
/// `Visit` events therefore equals [`SearchResult::expanded`](crate::SearchResult)
/// for the same inputs.
///
/// Dropping a traversal part-way has no side effects; to start over, call
/// [`restart`](Traversal::restart) or build a new one.
#[derive(Debug, Clone)]
pub struct Traversal {
    state: SearchState,
    visited: Vec<Point>,
    phase: Phase,
}

impl Traversal {
    pub fn new(algorithm: Algorithm, grid: &Grid, start: Point, goal: Point) -> Self {
        Self {
            state: SearchState::new(algorithm, grid, start, goal),
            visited: Vec::new(),
            phase: Phase::Searching,
        }
    }

    /// Breadth-first traversal.
    pub fn bfs(grid: &Grid, start: Point, goal: Point) -> Self {
        Self::new(Algorithm::Bfs, grid, start, goal)
    }

    /// Depth-first traversal.
    pub fn dfs(grid: &Grid, start: Point, goal: Point) -> Self {
        Self::new(Algorithm::Dfs, grid, start, goal)
    }

    /// Discard all progress and start again from the same inputs.
    pub fn restart(&mut self) {
        let st = &self.state;
        *self = Self::new(st.algorithm, &st.grid, st.start, st.goal);
    }

    /// Perform one step. Returns `None` once the terminal event has been
    /// emitted.
    pub fn advance(&mut self) -> Option<StepEvent> {
        match std::mem::replace(&mut self.phase, Phase::Finished) {
            Phase::Finished => None,
            Phase::Reached(path) => Some(StepEvent::Done {
                path,
                expanded: self.state.expanded,
                max_frontier: self.state.max_frontier,
            }),
            Phase::Searching => match self.state.expand() {
                Expansion::Expanded(at) => {
                    self.phase = Phase::Searching;
                    Some(self.visit(at))
                }
                Expansion::Goal(at) => {
                    let path = self.state.path_to(at).unwrap_or_else(|| vec![at]);
                    self.phase = Phase::Reached(path);
                    Some(self.visit(at))
                }
                Expansion::Exhausted => Some(StepEvent::Failed {
                    expanded: self.state.expanded,
                    max_frontier: self.state.max_frontier,
                }),
            },
        }
    }

    fn visit(&mut self, at: Point) -> StepEvent {
        self.visited.push(at);
        StepEvent::Visit {
            at,
            frontier: self.state.frontier.snapshot(),
            visited: self.visited.clone(),
            expanded: self.state.expanded,
            max_frontier: self.state.max_frontier,
        }
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.state.algorithm
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.state.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.state.goal
    }

    /// Expansions performed so far.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.state.expanded
    }

    /// Largest frontier size seen so far.
    #[inline]
    pub fn max_frontier(&self) -> usize {
        self.state.max_frontier
    }

    /// Current frontier size.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.state.frontier.len()
    }

    /// Coordinates expanded so far, in order.
    #[inline]
    pub fn visited(&self) -> &[Point] {
        &self.visited
    }

    /// Whether `p` has entered the frontier at some point.
    pub fn is_discovered(&self, p: Point) -> bool {
        self.state.is_discovered(p)
    }

    /// Whether the terminal event has been emitted.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}

impl Iterator for Traversal {
    type Item = StepEvent;

    #[inline]
    fn next(&mut self) -> Option<StepEvent> {
        self.advance()
    }
}

impl std::iter::FusedIterator for Traversal {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search;
    use gridsearch_core::GridBuilder;

    fn p(row: i32, col: i32) -> Point {
        Point::new(row, col)
    }

    fn ring() -> Grid {
        Grid::from_rows(&[[0u8, 0, 0], [0, 1, 0], [0, 0, 0]])
    }

    #[test]
    fn dfs_ring_event_sequence() {
        let events: Vec<StepEvent> = Traversal::dfs(&ring(), p(0, 0), p(2, 2)).collect();
        let visits: Vec<Point> = events
            .iter()
            .filter_map(|e| match e {
                StepEvent::Visit { at, .. } => Some(*at),
                _ => None,
            })
            .collect();
        assert_eq!(visits, vec![p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)]);
        assert_eq!(
            events.last(),
            Some(&StepEvent::Done {
                path: vec![p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)],
                expanded: 5,
                max_frontier: 2,
            })
        );
        assert_eq!(events.len(), 6);
    }

    #[test]
    fn visit_carries_snapshots() {
        let mut t = Traversal::bfs(&ring(), p(0, 0), p(2, 2));
        assert_eq!(
            t.advance(),
            Some(StepEvent::Visit {
                at: p(0, 0),
                frontier: vec![p(1, 0), p(0, 1)],
                visited: vec![p(0, 0)],
                expanded: 1,
                max_frontier: 2,
            })
        );
        assert_eq!(
            t.advance(),
            Some(StepEvent::Visit {
                at: p(1, 0),
                frontier: vec![p(0, 1), p(2, 0)],
                visited: vec![p(0, 0), p(1, 0)],
                expanded: 2,
                max_frontier: 2,
            })
        );
        assert_eq!(t.frontier_len(), 2);
        assert!(t.is_discovered(p(2, 0)));
        assert!(!t.is_discovered(p(2, 2)));
    }

    #[test]
    fn visits_match_batch_count() {
        let grid = GridBuilder::new(4, 4)
            .obstacles([p(1, 1), p(1, 2), p(2, 2)])
            .build();
        for alg in Algorithm::ALL {
            for goal in [p(3, 3), p(1, 1), p(0, 0)] {
                let batch = search(alg, &grid, p(0, 0), goal);
                let events: Vec<StepEvent> = Traversal::new(alg, &grid, p(0, 0), goal).collect();
                let visits = events.iter().filter(|e| !e.is_terminal()).count();
                assert_eq!(visits, batch.expanded, "{alg} to {goal}");
                let last = events.last().unwrap();
                assert_eq!(last.expanded(), batch.expanded);
                assert_eq!(last.max_frontier(), batch.max_frontier);
                assert_eq!(
                    last.path(),
                    batch.path.as_deref().unwrap_or(&[]),
                    "{alg} to {goal}"
                );
            }
        }
    }

    #[test]
    fn start_equals_goal() {
        let mut t = Traversal::bfs(&ring(), p(2, 2), p(2, 2));
        assert!(matches!(t.advance(), Some(StepEvent::Visit { expanded: 1, .. })));
        assert_eq!(
            t.advance(),
            Some(StepEvent::Done {
                path: vec![p(2, 2)],
                expanded: 1,
                max_frontier: 1,
            })
        );
        assert!(t.is_finished());
        assert_eq!(t.advance(), None);
        assert_eq!(t.advance(), None);
    }

    #[test]
    fn unreachable_yields_failed_once() {
        let t = Traversal::dfs(&ring(), p(0, 0), p(1, 1));
        let events: Vec<StepEvent> = t.collect();
        assert_eq!(events.len(), 9);
        assert_eq!(
            events.last(),
            Some(&StepEvent::Failed {
                expanded: 8,
                max_frontier: 2,
            })
        );
        assert!(events.last().unwrap().path().is_empty());
        assert_eq!(events.iter().filter(|e| e.is_terminal()).count(), 1);
    }

    #[test]
    fn no_coordinate_expanded_twice() {
        let grid = Grid::new(5, 5);
        for alg in Algorithm::ALL {
            let mut t = Traversal::new(alg, &grid, p(2, 2), p(9, 9));
            while t.advance().is_some() {}
            let mut seen = t.visited().to_vec();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), t.visited().len());
            assert_eq!(seen.len(), 25);
        }
    }

    #[test]
    fn restart_replays_identically() {
        let grid = Grid::from_rows(&[
            [0u8, 0, 0, 1, 0, 0],
            [0, 1, 0, 1, 0, 0],
            [0, 1, 0, 0, 0, 0],
            [0, 0, 0, 1, 0, 0],
            [1, 1, 0, 0, 0, 0],
        ]);
        for alg in Algorithm::ALL {
            let mut t = Traversal::new(alg, &grid, p(0, 0), p(4, 5));
            let first: Vec<StepEvent> = t.by_ref().collect();
            assert!(t.is_finished());
            t.restart();
            assert_eq!(t.expanded(), 0);
            // Abandon a run part-way, then restart again.
            t.advance();
            t.advance();
            t.restart();
            let second: Vec<StepEvent> = t.collect();
            assert_eq!(format!("{first:?}"), format!("{second:?}"));
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn event_sequence_bytes_identical_across_runs() {
        let grid = Grid::from_rows(&[[0u8, 0, 0], [0, 1, 0], [0, 0, 0]]);
        let run = || {
            let events: Vec<StepEvent> =
                Traversal::bfs(&grid, Point::new(0, 0), Point::new(2, 2)).collect();
            serde_json::to_vec(&events).unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn event_is_tagged() {
        let ev = StepEvent::Failed {
            expanded: 3,
            max_frontier: 2,
        };
        let json = serde_json::to_string(&ev).unwrap();
        assert_eq!(json, r#"{"kind":"failed","expanded":3,"max_frontier":2}"#);
        let back: StepEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ev);
    }
}
