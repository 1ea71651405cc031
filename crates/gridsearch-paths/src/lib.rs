//! Breadth-first and depth-first search on a 2D obstacle grid.
//!
//! Both algorithms share one shape and differ only in frontier discipline
//! ([`Frontier::Queue`] vs [`Frontier::Stack`]). Each is available in two
//! forms:
//!
//! - **Batch** ([`search`], [`bfs`], [`dfs`]): run to completion and return a
//!   [`SearchResult`] with the path and expansion count.
//! - **Stepwise** ([`Traversal`]): an explicit state machine that performs one
//!   expansion per [`Traversal::advance`] call and reports it as a
//!   [`StepEvent`], so a front-end can animate the search at its own pace.
//!
//! Neighbours are always examined in the order down, up, right, left, and a
//! cell's parent is fixed when the cell is first discovered. Together these
//! make every path and event sequence reproducible.

mod frontier;
mod search;
mod state;
mod traversal;

pub use frontier::{Algorithm, Frontier, ParseAlgorithmError};
pub use search::{SearchResult, bfs, dfs, search};
pub use traversal::{StepEvent, Traversal};
