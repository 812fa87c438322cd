//! Synset data model.
//!
//! A [`Synset`] is a set of word senses sharing one meaning. Synsets live in
//! one of four part-of-speech partitions and point at each other through
//! named relation [`Pointer`]s that hold target ids, never references.

pub mod pos;
pub mod record;
pub mod synset;
pub mod visdic;

pub use pos::PartOfSpeech;
pub use record::SynsetRecord;
pub use synset::{Pointer, Synonym, Synset};
