use std::time::{Duration, Instant};

use gridsearch_core::{Grid, Point};
use gridsearch_paths::Algorithm;

use crate::keys::Action;
use crate::side::Side;

/// Shortest allowed delay between ticks.
pub const MIN_DELAY: Duration = Duration::from_millis(50);
/// Longest allowed delay between ticks.
pub const MAX_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_DELAY: Duration = Duration::from_millis(250);
/// Increment used by [`Comparison::faster`] and [`Comparison::slower`].
pub const DELAY_STEP: Duration = Duration::from_millis(50);

/// BFS and DFS side by side over the same grid, stepped in lockstep.
///
/// The two traversals share nothing but the grid. Every tick asks each
/// unfinished side for one event, so both advance by one expansion per tick
/// regardless of depth. A side that finishes stops advancing while the other
/// carries on.
///
/// Continuous running is cooperative: the comparison only records when the
/// next tick is due ([`next_deadline`](Self::next_deadline)) and the
/// front-end calls [`poll`](Self::poll) from its own event loop. A tick
/// always runs to completion before the next one is scheduled.
#[derive(Debug, Clone)]
pub struct Comparison {
    sides: [Side; 2],
    running: bool,
    delay: Duration,
    next_tick: Option<Instant>,
}

impl Comparison {
    pub fn new(grid: &Grid, start: Point, goal: Point) -> Self {
        Self {
            sides: Algorithm::ALL.map(|alg| Side::new(alg, grid, start, goal)),
            running: false,
            delay: DEFAULT_DELAY,
            next_tick: None,
        }
    }

    /// The BFS side.
    #[inline]
    pub fn bfs(&self) -> &Side {
        &self.sides[0]
    }

    /// The DFS side.
    #[inline]
    pub fn dfs(&self) -> &Side {
        &self.sides[1]
    }

    /// Both sides, BFS first.
    #[inline]
    pub fn sides(&self) -> &[Side; 2] {
        &self.sides
    }

    /// Advance every unfinished side by one event. Returns `true` if either
    /// side moved.
    pub fn step(&mut self, now: Instant) -> bool {
        let mut moved = false;
        for side in &mut self.sides {
            moved |= side.step(now);
        }
        moved
    }

    /// Start continuous running. The first tick is due immediately.
    /// No-op once both sides have finished.
    pub fn run(&mut self, now: Instant) {
        if self.is_finished() {
            return;
        }
        if !self.running {
            log::debug!("run, delay {} ms", self.delay.as_millis());
        }
        self.running = true;
        self.next_tick = Some(now);
    }

    /// Stop continuous running, keeping all progress.
    pub fn pause(&mut self) {
        if self.running {
            log::debug!("paused");
        }
        self.running = false;
        self.next_tick = None;
    }

    /// Throw away both traversals and start over from scratch.
    pub fn reset(&mut self) {
        self.pause();
        for side in &mut self.sides {
            side.reset();
        }
        log::debug!("reset");
    }

    /// Set the delay between ticks, clamped to [`MIN_DELAY`]..=[`MAX_DELAY`].
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay.clamp(MIN_DELAY, MAX_DELAY);
    }

    pub fn faster(&mut self) {
        self.set_delay(self.delay.saturating_sub(DELAY_STEP));
    }

    pub fn slower(&mut self) {
        self.set_delay(self.delay + DELAY_STEP);
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether both sides have finished.
    pub fn is_finished(&self) -> bool {
        self.sides.iter().all(Side::is_finished)
    }

    /// When the next tick is due, if running.
    #[inline]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_tick
    }

    /// Run a tick if one is due at `now`, then schedule the next one.
    ///
    /// Stops running once both sides have finished. Returns `true` if a tick
    /// was performed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_tick else {
            return false;
        };
        if !self.running || now < due {
            return false;
        }
        self.step(now);
        if self.is_finished() {
            log::info!("both searches finished");
            self.running = false;
            self.next_tick = None;
        } else {
            self.next_tick = Some(now + self.delay);
        }
        true
    }

    /// Apply a user action. Returns `false` for [`Action::Quit`], which the
    /// front-end handles.
    pub fn handle(&mut self, action: Action, now: Instant) -> bool {
        match action {
            Action::Step => {
                self.step(now);
            }
            Action::Run => self.run(now),
            Action::Pause => self.pause(),
            Action::Reset => self.reset(),
            Action::Faster => self.faster(),
            Action::Slower => self.slower(),
            Action::Quit => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CellState;
    use crate::stats::SideStats;

    fn ring() -> Comparison {
        let grid = Grid::from_rows(&[[0u8, 0, 0], [0, 1, 0], [0, 0, 0]]);
        Comparison::new(&grid, Point::new(0, 0), Point::new(2, 2))
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn paired_stepping() {
        let t0 = Instant::now();
        let mut c = ring();
        c.step(t0);
        c.step(t0);
        assert_eq!(c.bfs().stats().expanded, 2);
        assert_eq!(c.dfs().stats().expanded, 2);
        assert_eq!(c.bfs().board().at(Point::new(1, 0)), CellState::Current);
        assert_eq!(c.dfs().board().at(Point::new(0, 1)), CellState::Current);
    }

    #[test]
    fn finished_side_stops_while_other_continues() {
        let t0 = Instant::now();
        let mut c = ring();
        // DFS needs 6 events, BFS needs 9.
        for i in 0..6 {
            assert!(c.step(t0 + ms(i)));
        }
        assert!(c.dfs().is_finished());
        assert!(!c.bfs().is_finished());
        assert_eq!(c.dfs().stats().elapsed, Some(ms(5)));
        for i in 6..9 {
            assert!(c.step(t0 + ms(i)));
        }
        assert!(c.is_finished());
        assert_eq!(c.bfs().stats().expanded, 8);
        assert_eq!(c.dfs().stats().expanded, 5);
        assert_eq!(c.bfs().stats().path_len, Some(5));
        assert!(!c.step(t0 + ms(10)));
    }

    #[test]
    fn run_ticks_on_schedule() {
        let t0 = Instant::now();
        let mut c = ring();
        c.set_delay(ms(100));
        assert!(!c.poll(t0));
        c.run(t0);
        assert!(c.is_running());
        assert_eq!(c.next_deadline(), Some(t0));
        assert!(c.poll(t0));
        assert_eq!(c.bfs().stats().expanded, 1);
        assert_eq!(c.next_deadline(), Some(t0 + ms(100)));
        // Not due yet.
        assert!(!c.poll(t0 + ms(99)));
        assert_eq!(c.bfs().stats().expanded, 1);
        assert!(c.poll(t0 + ms(100)));
        assert_eq!(c.bfs().stats().expanded, 2);
    }

    #[test]
    fn run_stops_when_both_finish() {
        let t0 = Instant::now();
        let mut c = ring();
        c.set_delay(MIN_DELAY);
        c.run(t0);
        let mut now = t0;
        let mut ticks = 0;
        while c.is_running() {
            if c.poll(now) {
                ticks += 1;
            }
            now += MIN_DELAY;
            assert!(ticks < 100);
        }
        assert_eq!(ticks, 9);
        assert!(c.is_finished());
        assert_eq!(c.next_deadline(), None);
        // Running again after completion does nothing.
        c.run(now);
        assert!(!c.is_running());
    }

    #[test]
    fn pause_preserves_state() {
        let t0 = Instant::now();
        let mut c = ring();
        c.run(t0);
        c.poll(t0);
        c.pause();
        assert!(!c.is_running());
        assert!(!c.poll(t0 + ms(5000)));
        assert_eq!(c.bfs().stats().expanded, 1);
        c.run(t0 + ms(6000));
        assert!(c.poll(t0 + ms(6000)));
        assert_eq!(c.bfs().stats().expanded, 2);
    }

    #[test]
    fn reset_restores_initial_state() {
        let t0 = Instant::now();
        let mut c = ring();
        c.run(t0);
        c.poll(t0);
        c.step(t0);
        c.reset();
        assert!(!c.is_running());
        for side in c.sides() {
            assert_eq!(side.stats(), &SideStats::default());
            assert!(!side.is_finished());
            assert_eq!(side.board().count(CellState::Free), 6);
        }
    }

    #[test]
    fn replay_after_reset_is_identical() {
        let t0 = Instant::now();
        let mut c = ring();
        let mut first = Vec::new();
        while c.step(t0) {
            first.push((c.bfs().board().current(), c.dfs().board().current()));
        }
        c.reset();
        let mut second = Vec::new();
        while c.step(t0) {
            second.push((c.bfs().board().current(), c.dfs().board().current()));
        }
        assert_eq!(first, second);
    }

    #[test]
    fn delay_is_clamped() {
        let mut c = ring();
        assert_eq!(c.delay(), DEFAULT_DELAY);
        c.set_delay(ms(5));
        assert_eq!(c.delay(), MIN_DELAY);
        c.faster();
        assert_eq!(c.delay(), MIN_DELAY);
        c.set_delay(ms(5000));
        assert_eq!(c.delay(), MAX_DELAY);
        c.slower();
        assert_eq!(c.delay(), MAX_DELAY);
        c.faster();
        assert_eq!(c.delay(), ms(950));
    }

    #[test]
    fn handle_actions() {
        let t0 = Instant::now();
        let mut c = ring();
        assert!(c.handle(Action::Step, t0));
        assert_eq!(c.bfs().stats().expanded, 1);
        assert!(c.handle(Action::Run, t0));
        assert!(c.is_running());
        assert!(c.handle(Action::Pause, t0));
        assert!(!c.is_running());
        assert!(c.handle(Action::Slower, t0));
        assert_eq!(c.delay(), DEFAULT_DELAY + DELAY_STEP);
        assert!(c.handle(Action::Reset, t0));
        assert_eq!(c.bfs().stats().expanded, 0);
        assert!(!c.handle(Action::Quit, t0));
    }
}
