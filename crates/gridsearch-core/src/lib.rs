//! Core types shared by the gridsearch crates.
//!
//! This crate provides the geometry primitives, the immutable obstacle
//! [`Grid`] both traversals run on, and the [`GridConfig`] input layer that
//! loads a map together with its start and goal.
//!
//! The serde derives on [`Point`], [`Range`] and [`Tile`] are always on,
//! since [`GridConfig`] reads and writes JSON.

pub mod config;
pub mod geom;
pub mod grid;

pub use config::{ConfigError, GridConfig};
pub use geom::{CARDINALS, Point, Range};
pub use grid::{Grid, GridBuilder, Tile};
