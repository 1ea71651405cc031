use std::time::{Duration, Instant};

use gridsearch_paths::Algorithm;

/// Live statistics for one side of the comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideStats {
    pub expanded: usize,
    pub max_frontier: usize,
    /// Number of coordinates on the path, once one is known.
    pub path_len: Option<usize>,
    /// Wall-clock time of the first tick.
    pub started: Option<Instant>,
    /// Frozen when the side finishes.
    pub elapsed: Option<Duration>,
}

impl SideStats {
    /// Record the first tick. Later calls are no-ops.
    pub fn start(&mut self, now: Instant) {
        self.started.get_or_insert(now);
    }

    /// Freeze the elapsed time at `now`. No-op if never started or already
    /// frozen.
    pub fn stop(&mut self, now: Instant) {
        if self.elapsed.is_none() {
            if let Some(t0) = self.started {
                self.elapsed = Some(now.saturating_duration_since(t0));
            }
        }
    }

    /// `"-"` before the first tick, `"running"` until finished, then the
    /// elapsed seconds with four decimals.
    pub fn time_label(&self) -> String {
        match (self.elapsed, self.started) {
            (Some(d), _) => format!("{:.4}s", d.as_secs_f64()),
            (None, Some(_)) => "running".to_string(),
            (None, None) => "-".to_string(),
        }
    }

    /// Display lines for a statistics panel.
    pub fn lines(&self, algorithm: Algorithm) -> [String; 5] {
        let path = self
            .path_len
            .map_or_else(|| "-".to_string(), |n| n.to_string());
        [
            format!("{algorithm}:"),
            format!("Nodes visited: {}", self.expanded),
            format!("Max {}: {}", algorithm.frontier_name(), self.max_frontier),
            format!("Path length: {path}"),
            format!("Time: {}", self.time_label()),
        ]
    }
}
