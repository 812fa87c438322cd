//! Partitioned synset index.
//!
//! Synsets are stored per part of speech in a [`Partition`] keyed by id,
//! next to a literal → ids index. The [`RelationIndex`] owns all four
//! partitions and is completed by a single relation inversion pass
//! (see [`inverter`]) before it is queried.

pub mod diagnostics;
pub mod inverter;
pub mod partition;
pub mod relation_index;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use partition::{Partition, PartitionStats};
pub use relation_index::{InsertOutcome, RelationIndex};
