//! Side-by-side BFS/DFS animation logic.
//!
//! This crate holds everything an animated comparison needs except the
//! drawing itself: per-cell [`Board`] states, live [`SideStats`], and the
//! [`Comparison`] driver that steps both traversals in lockstep and supports
//! single-step, run, pause, reset and an adjustable tick delay. Front-ends
//! translate their input into [`Key`]s, map them through [`ComparisonKeys`]
//! and paint the boards.

pub mod board;
pub mod comparison;
pub mod keys;
pub mod side;
pub mod stats;

pub use board::{Board, CellState};
pub use comparison::{Comparison, DEFAULT_DELAY, DELAY_STEP, MAX_DELAY, MIN_DELAY};
pub use keys::{Action, ComparisonKeys, Key};
pub use side::Side;
pub use stats::SideStats;
