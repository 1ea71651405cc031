use std::time::Instant;

use gridsearch_core::{Grid, Point};
use gridsearch_paths::{Algorithm, StepEvent, Traversal};

use crate::board::Board;
use crate::stats::SideStats;

/// One algorithm's half of the comparison: its traversal, its board and
/// its statistics.
#[derive(Debug, Clone)]
pub struct Side {
    traversal: Traversal,
    board: Board,
    stats: SideStats,
    finished: bool,
}

impl Side {
    pub fn new(algorithm: Algorithm, grid: &Grid, start: Point, goal: Point) -> Self {
        Self {
            traversal: Traversal::new(algorithm, grid, start, goal),
            board: Board::new(grid, start, goal),
            stats: SideStats::default(),
            finished: false,
        }
    }

    /// Consume one event from the traversal and apply it.
    ///
    /// A terminal event and an exhausted traversal are treated alike: the
    /// side is marked finished and its clock stops. Returns `false` if the
    /// side had already finished.
    pub fn step(&mut self, now: Instant) -> bool {
        if self.finished {
            return false;
        }
        if self.stats.started.is_none() {
            log::info!("{} started", self.algorithm());
        }
        self.stats.start(now);
        match self.traversal.advance() {
            Some(StepEvent::Visit {
                at,
                expanded,
                max_frontier,
                ..
            }) => {
                log::trace!("{} expanded {at}", self.algorithm());
                self.board.visit(at);
                self.stats.expanded = expanded;
                self.stats.max_frontier = max_frontier;
            }
            Some(StepEvent::Done {
                path,
                expanded,
                max_frontier,
            }) => {
                self.stats.expanded = expanded;
                self.stats.max_frontier = max_frontier;
                self.stats.path_len = Some(path.len());
                self.board.show_path(&path);
                self.finish(now);
            }
            Some(StepEvent::Failed {
                expanded,
                max_frontier,
            }) => {
                self.stats.expanded = expanded;
                self.stats.max_frontier = max_frontier;
                self.board.settle_current();
                self.finish(now);
            }
            None => self.finish(now),
        }
        true
    }

    fn finish(&mut self, now: Instant) {
        self.finished = true;
        self.stats.stop(now);
        log::info!(
            "{} finished: {} expansions, path length {}",
            self.algorithm(),
            self.stats.expanded,
            self.stats
                .path_len
                .map_or_else(|| "-".to_string(), |n| n.to_string()),
        );
    }

    /// Start over from the same grid, start and goal.
    pub fn reset(&mut self) {
        self.traversal.restart();
        self.board.reset();
        self.stats = SideStats::default();
        self.finished = false;
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.traversal.algorithm()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn stats(&self) -> &SideStats {
        &self.stats
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
