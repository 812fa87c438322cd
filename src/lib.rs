//! # wnquery
//!
//! An in-memory query engine for WordNet-style lexical databases.
//!
//! ## Features
//!
//! - Four part-of-speech partitions with id, literal and sense lookup
//! - One-shot inversion of relations (hypernym/hyponym, holonym/meronym, ...)
//! - Bounded traversal, reachability and connectivity queries
//! - Leacock-Chodorow similarity with cached depth constants
//! - Semantic feature compatibility checks
//!
//! ## Example
//!
//! ```
//! use wnquery::prelude::*;
//! use wnquery::ingest::numbered;
//!
//! let records = vec![
//!     SynsetRecord::new("n1", "n").with_synonym("entity", 1),
//!     SynsetRecord::new("n2", "n")
//!         .with_synonym("dog", 1)
//!         .with_pointer("n1", "hypernym"),
//! ];
//! let (wordnet, _diagnostics) =
//!     WordNet::from_records(numbered(records), EngineConfig::default()).unwrap();
//!
//! assert_eq!(wordnet.relation_targets("n1", PartOfSpeech::Noun, "hyponym"), vec!["n2"]);
//! assert_eq!(wordnet.max_depth("n2", PartOfSpeech::Noun, "hypernym").unwrap(), 2);
//! ```

pub mod cli;
pub mod engine;
pub mod error;
pub mod features;
pub mod index;
pub mod ingest;
pub mod query;
pub mod similarity;
pub mod synset;

pub mod prelude {
    pub use crate::engine::{EngineConfig, WordNet};
    pub use crate::error::{Result, WordNetError};
    pub use crate::features::FeatureMap;
    pub use crate::index::{Diagnostic, DiagnosticKind, Diagnostics, RelationIndex};
    pub use crate::query::{GraphQuery, TOP, TraversalLimits};
    pub use crate::similarity::{LeacockChodorow, SensePairScore};
    pub use crate::synset::{PartOfSpeech, Pointer, Synonym, Synset, SynsetRecord};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
