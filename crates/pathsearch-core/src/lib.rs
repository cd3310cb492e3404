#![warn(missing_docs)]
//! Core types and utilities for `pathsearch`.
//!
//! This crate provides the capabilities a search consumes ([`Graph`], [`Heuristic`]) and the
//! data structures it is built from.

mod error;
mod node_table;
mod pqueue;
pub mod traits;

pub use crate::error::*;
pub use crate::node_table::*;
pub use crate::pqueue::*;
pub use crate::traits::{Graph, Heuristic, ZeroHeuristic};
