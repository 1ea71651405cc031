//! Text report for batch mode.

use std::time::Duration;

use gridsearch_core::Point;
use gridsearch_paths::{Algorithm, SearchResult};

/// `[(0, 0), (1, 0), ...]`, or `None` when there is no path.
pub fn format_path(path: Option<&[Point]>) -> String {
    match path {
        None => "None".to_string(),
        Some(path) => {
            let cells: Vec<String> = path.iter().map(Point::to_string).collect();
            format!("[{}]", cells.join(", "))
        }
    }
}

/// The two report lines for one batch run.
pub fn format_report(algorithm: Algorithm, result: &SearchResult, elapsed: Duration) -> String {
    format!(
        "{algorithm} Path: {}\nLength: {} | Time: {:.4}s | Nodes Visited: {}",
        format_path(result.path.as_deref()),
        result.path_len(),
        elapsed.as_secs_f64(),
        result.expanded,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsearch_core::Grid;
    use gridsearch_paths::search;

    fn ring() -> Grid {
        Grid::from_rows(&[[0u8, 0, 0], [0, 1, 0], [0, 0, 0]])
    }

    #[test]
    fn bfs_report() {
        let r = search(Algorithm::Bfs, &ring(), Point::new(0, 0), Point::new(2, 2));
        assert_eq!(
            format_report(Algorithm::Bfs, &r, Duration::from_micros(120)),
            "BFS Path: [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]\n\
             Length: 5 | Time: 0.0001s | Nodes Visited: 8"
        );
    }

    #[test]
    fn dfs_report() {
        let r = search(Algorithm::Dfs, &ring(), Point::new(0, 0), Point::new(2, 2));
        let text = format_report(Algorithm::Dfs, &r, Duration::ZERO);
        assert_eq!(
            text.lines().next(),
            Some("DFS Path: [(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]")
        );
        assert!(text.ends_with("Nodes Visited: 5"));
    }

    #[test]
    fn missing_path() {
        let r = search(Algorithm::Bfs, &ring(), Point::new(0, 0), Point::new(1, 1));
        assert_eq!(
            format_report(Algorithm::Bfs, &r, Duration::from_millis(2)),
            "BFS Path: None\nLength: 0 | Time: 0.0020s | Nodes Visited: 8"
        );
    }

    #[test]
    fn single_cell_path() {
        assert_eq!(format_path(Some(&[Point::new(3, 4)])), "[(3, 4)]");
        assert_eq!(format_path(Some(&[])), "[]");
    }
}
