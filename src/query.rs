//! Graph queries over one partition.
//!
//! All recursive operations run on an explicit stack ([`walker`]) bounded
//! by [`TraversalLimits`], so a cyclic or very deep relation graph yields an
//! error instead of exhausting the call stack.

pub mod graph;
pub mod limits;
pub mod walker;

pub use graph::{GraphQuery, TOP};
pub use limits::TraversalLimits;
