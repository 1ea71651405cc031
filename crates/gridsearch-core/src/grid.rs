//! The obstacle map searched by both traversals.
//!
//! A [`Grid`] is immutable once built. Cloning it yields another handle on
//! the same backing storage, so a traversal can keep its own copy without
//! duplicating the cells.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::geom::{Point, Range};

/// Passability of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tile {
    #[default]
    Free,
    Obstacle,
}

impl Tile {
    /// Whether a search may enter this cell.
    #[inline]
    pub const fn is_free(self) -> bool {
        matches!(self, Tile::Free)
    }

    /// The 0/1 encoding used by grid configuration files.
    #[inline]
    pub const fn value(self) -> u8 {
        match self {
            Tile::Free => 0,
            Tile::Obstacle => 1,
        }
    }
}

/// A fixed-size rectangular map of [`Tile`]s with shared, read-only storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Rc<[Tile]>,
    bounds: Range,
}

impl Grid {
    /// Create an obstacle-free grid of `rows` × `cols` cells.
    pub fn new(rows: i32, cols: i32) -> Self {
        GridBuilder::new(rows, cols).build()
    }

    /// Build a grid from a 0/1 matrix (0 = free, anything else = obstacle).
    ///
    /// The column count is taken from the first row; shorter rows are padded
    /// with free cells and longer rows are truncated. Configuration input is
    /// validated for rectangularity before it gets here.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.as_ref().len()) as i32;
        let mut b = GridBuilder::new(height, width);
        for (row, cells) in rows.iter().enumerate() {
            for (col, &v) in cells.as_ref().iter().enumerate().take(width as usize) {
                if v != 0 {
                    b.set(Point::new(row as i32, col as i32), Tile::Obstacle);
                }
            }
        }
        b.build()
    }

    /// The bounding range of the grid, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.width()
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the grid has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The tile at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.idx(p).map(|i| self.tiles[i])
    }

    /// Whether `p` is inside the grid and free.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_free)
    }

    /// Neighbours of `p` a search may step to, in down/up/right/left order.
    pub fn free_neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4().into_iter().filter(|&n| self.is_free(n))
    }

    /// Number of free cells in the whole grid.
    pub fn free_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_free()).count()
    }

    /// Convert a `Point` to a flat row-major index. `None` if out of range.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols() as usize + p.col as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let cols = self.cols().max(1) as usize;
        Point::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// The grid as a 0/1 matrix.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        let cols = self.cols().max(0) as usize;
        if cols == 0 {
            return Vec::new();
        }
        self.tiles
            .chunks(cols)
            .map(|r| r.iter().map(|t| t.value()).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    /// ASCII rendering: `.` free, `#` obstacle, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols() {
                let c = match self.at(Point::new(row, col)) {
                    Some(Tile::Obstacle) => '#',
                    _ => '.',
                };
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridBuilder
// ---------------------------------------------------------------------------

/// Mutable staging area for a [`Grid`].
#[derive(Debug, Clone)]
pub struct GridBuilder {
    tiles: Vec<Tile>,
    bounds: Range,
}

impl GridBuilder {
    /// Start from an obstacle-free `rows` × `cols` map.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Range::with_size(rows, cols);
        Self {
            tiles: vec![Tile::Free; bounds.len()],
            bounds,
        }
    }

    /// Set the tile at `p`. No-op if `p` is outside the map.
    pub fn set(&mut self, p: Point, tile: Tile) -> &mut Self {
        if self.bounds.contains(p) {
            let i = p.row as usize * self.bounds.width() as usize + p.col as usize;
            self.tiles[i] = tile;
        }
        self
    }

    /// Mark every point in `points` as an obstacle.
    pub fn obstacles<I: IntoIterator<Item = Point>>(&mut self, points: I) -> &mut Self {
        for p in points {
            self.set(p, Tile::Obstacle);
        }
        self
    }

    /// Freeze into an immutable [`Grid`].
    pub fn build(&self) -> Grid {
        Grid {
            tiles: Rc::from(self.tiles.as_slice()),
            bounds: self.bounds,
        }
    }
}
