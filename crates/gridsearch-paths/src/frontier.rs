use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use gridsearch_core::Point;

/// Which traversal to run. The only difference between the two is the
/// frontier discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Breadth-first search: FIFO frontier, shortest paths.
    Bfs,
    /// Depth-first search: LIFO frontier, some path.
    Dfs,
}

impl Algorithm {
    /// Both algorithms, in display order.
    pub const ALL: [Algorithm; 2] = [Algorithm::Bfs, Algorithm::Dfs];

    /// Short upper-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
        }
    }

    /// Name of the frontier container.
    pub const fn frontier_name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "queue",
            Algorithm::Dfs => "stack",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Returned when a string names neither `bfs` nor `dfs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm '{}' (expected bfs or dfs)", self.0)
    }
}

impl std::error::Error for ParseAlgorithmError {}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// Discovered-but-not-yet-expanded coordinates.
#[derive(Debug, Clone)]
pub enum Frontier {
    /// FIFO: `pop` removes the oldest entry.
    Queue(VecDeque<Point>),
    /// LIFO: `pop` removes the most recent entry.
    Stack(Vec<Point>),
}

impl Frontier {
    /// An empty frontier with the discipline of `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Bfs => Frontier::Queue(VecDeque::new()),
            Algorithm::Dfs => Frontier::Stack(Vec::new()),
        }
    }

    #[inline]
    pub fn push(&mut self, p: Point) {
        match self {
            Frontier::Queue(q) => q.push_back(p),
            Frontier::Stack(s) => s.push(p),
        }
    }

    /// Remove the next coordinate to expand.
    #[inline]
    pub fn pop(&mut self) -> Option<Point> {
        match self {
            Frontier::Queue(q) => q.pop_front(),
            Frontier::Stack(s) => s.pop(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Frontier::Queue(q) => q.len(),
            Frontier::Stack(s) => s.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the contents, oldest entry first.
    ///
    /// For a queue the next coordinate to expand is the first element; for
    /// a stack it is the last.
    pub fn snapshot(&self) -> Vec<Point> {
        match self {
            Frontier::Queue(q) => q.iter().copied().collect(),
            Frontier::Stack(s) => s.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_is_fifo() {
        let mut f = Frontier::new(Algorithm::Bfs);
        f.push(Point::new(0, 0));
        f.push(Point::new(0, 1));
        f.push(Point::new(0, 2));
        assert_eq!(f.len(), 3);
        assert_eq!(f.pop(), Some(Point::new(0, 0)));
        assert_eq!(f.snapshot(), vec![Point::new(0, 1), Point::new(0, 2)]);
    }

    #[test]
    fn stack_is_lifo() {
        let mut f = Frontier::new(Algorithm::Dfs);
        f.push(Point::new(0, 0));
        f.push(Point::new(0, 1));
        f.push(Point::new(0, 2));
        assert_eq!(f.pop(), Some(Point::new(0, 2)));
        assert_eq!(f.snapshot(), vec![Point::new(0, 0), Point::new(0, 1)]);
        f.pop();
        f.pop();
        assert!(f.is_empty());
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn parse_algorithm() {
        assert_eq!("bfs".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert_eq!(" DFS ".parse::<Algorithm>(), Ok(Algorithm::Dfs));
        let err = "astar".parse::<Algorithm>().unwrap_err();
        assert!(err.to_string().contains("astar"));
    }

    #[test]
    fn names() {
        assert_eq!(Algorithm::Bfs.to_string(), "BFS");
        assert_eq!(Algorithm::Dfs.frontier_name(), "stack");
    }
}
