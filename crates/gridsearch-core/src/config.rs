//! Grid configuration input: the map, the start and the goal.
//!
//! Two on-disk formats are accepted. JSON files hold a [`GridConfig`]
//! directly:
//!
//! ```json
//! { "grid": [[0, 0, 1], [0, 0, 0]], "start": [0, 0], "goal": [1, 2] }
//! ```
//!
//! Any other file is read as an ASCII map: one line per row, all lines of the
//! same width, `.`/`0` free, `#`/`1` obstacle, `S` start and `G` goal.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::geom::Point;
use crate::grid::Grid;

/// A grid plus its two distinguished coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Row-major 0/1 matrix (0 = free, 1 = obstacle).
    pub grid: Vec<Vec<u8>>,
    pub start: Point,
    pub goal: Point,
}

impl GridConfig {
    /// The demo map used when no configuration file is given.
    pub fn example() -> Self {
        Self {
            grid: vec![
                vec![0, 0, 0, 1, 0, 0],
                vec![0, 1, 0, 1, 0, 0],
                vec![0, 1, 0, 0, 0, 0],
                vec![0, 0, 0, 1, 0, 0],
                vec![1, 1, 0, 0, 0, 0],
            ],
            start: Point::new(0, 0),
            goal: Point::new(4, 5),
        }
    }

    /// Load from `path`: `.json` as JSON, anything else as an ASCII map.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let cfg = if is_json {
            Self::from_json_str(&text)?
        } else {
            Self::from_ascii(&text)?
        };
        log::info!(
            "loaded {}x{} grid from {}",
            cfg.grid.len(),
            cfg.grid.first().map_or(0, Vec::len),
            path.display()
        );
        Ok(cfg)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate an ASCII map.
    ///
    /// Leading/trailing whitespace of the whole text is trimmed, but not of
    /// individual lines.
    pub fn from_ascii(s: &str) -> Result<Self, ConfigError> {
        let s = s.trim();
        let mut grid: Vec<Vec<u8>> = Vec::new();
        let mut start = None;
        let mut goal = None;

        for (row, line) in s.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut cells = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                let pos = Point::new(row as i32, col as i32);
                let v = match ch {
                    '.' | '0' => 0,
                    '#' | '1' => 1,
                    'S' | 'G' => {
                        let slot = if ch == 'S' { &mut start } else { &mut goal };
                        if slot.is_some() {
                            return Err(ConfigError::DuplicateMarker { ch, pos });
                        }
                        *slot = Some(pos);
                        0
                    }
                    _ => return Err(ConfigError::InvalidChar { ch, pos }),
                };
                cells.push(v);
            }
            grid.push(cells);
        }

        let cfg = Self {
            grid,
            start: start.ok_or(ConfigError::MissingMarker('S'))?,
            goal: goal.ok_or(ConfigError::MissingMarker('G'))?,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Serialise as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check rectangularity, cell values, and that start and goal are inside
    /// the grid. Start or goal on an obstacle is allowed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(first) = self.grid.first() else {
            return Err(ConfigError::Empty);
        };
        let cols = first.len();
        if cols == 0 {
            return Err(ConfigError::Empty);
        }
        for (row, cells) in self.grid.iter().enumerate() {
            if cells.len() != cols {
                return Err(ConfigError::InconsistentSize {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
            if let Some(col) = cells.iter().position(|&v| v > 1) {
                return Err(ConfigError::InvalidValue {
                    pos: Point::new(row as i32, col as i32),
                    value: cells[col],
                });
            }
        }
        let rows = self.grid.len() as i32;
        let cols = cols as i32;
        for (what, p) in [("start", self.start), ("goal", self.goal)] {
            if p.row < 0 || p.row >= rows || p.col < 0 || p.col >= cols {
                return Err(ConfigError::OutOfBounds {
                    what,
                    pos: p,
                    rows,
                    cols,
                });
            }
        }
        Ok(())
    }

    /// Validate and turn into the values the search engine consumes.
    pub fn build(&self) -> Result<(Grid, Point, Point), ConfigError> {
        self.validate()?;
        let grid = Grid::from_rows(&self.grid);
        if !grid.is_free(self.start) {
            log::warn!("start {} is an obstacle cell", self.start);
        }
        if !grid.is_free(self.goal) {
            log::warn!("goal {} is an obstacle cell", self.goal);
        }
        Ok((grid, self.start, self.goal))
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::example()
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors that can occur when loading or validating a [`GridConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The JSON document is malformed or has the wrong shape.
    Json(serde_json::Error),
    /// The grid has no rows or no columns.
    Empty,
    /// Rows have different widths.
    InconsistentSize {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A matrix entry other than 0 or 1.
    InvalidValue { pos: Point, value: u8 },
    /// Start or goal lies outside the grid.
    OutOfBounds {
        what: &'static str,
        pos: Point,
        rows: i32,
        cols: i32,
    },
    /// A character an ASCII map may not contain.
    InvalidChar { ch: char, pos: Point },
    /// An ASCII map without an `S` or `G`.
    MissingMarker(char),
    /// An ASCII map with more than one `S` or `G`.
    DuplicateMarker { ch: char, pos: Point },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, .. } => write!(f, "cannot read grid config {}", path.display()),
            Self::Json(e) => write!(f, "invalid grid config: {e}"),
            Self::Empty => f.write_str("grid config: grid is empty"),
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid config: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidValue { pos, value } => {
                write!(f, "grid config: cell {pos} has value {value}, expected 0 or 1")
            }
            Self::OutOfBounds {
                what,
                pos,
                rows,
                cols,
            } => write!(f, "grid config: {what} {pos} is outside the {rows}x{cols} grid"),
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid map contains invalid character '{ch}' at {pos}")
            }
            Self::MissingMarker(ch) => write!(f, "grid map has no '{ch}' marker"),
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "grid map has a second '{ch}' marker at {pos}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
