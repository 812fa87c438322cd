//! Leacock-Chodorow relatedness.
//!
//! `sim(s1, s2) = -log10(path_length / (2 * D))`, where `path_length` is the
//! node count of the shortest path joining `s1` and `s2` through a common
//! node reachable from both along one relation, and `D` is a per
//! (part of speech, relation) depth constant computed once and cached.

pub mod depth;
pub mod leacock_chodorow;

pub use depth::DepthConstants;
pub use leacock_chodorow::{LeacockChodorow, SensePairScore, collapse_by_score};
