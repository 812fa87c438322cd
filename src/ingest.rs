//! Sources of synset records.
//!
//! The engine consumes a lazy stream of `(SynsetRecord, line)` pairs. A
//! [`SynsetSource`] opens such a stream; the JSON Lines reader in
//! [`jsonl`] is the bundled implementation.

use crate::error::Result;
use crate::synset::SynsetRecord;

pub mod jsonl;

/// A trait for sources that can be turned into a record stream.
///
/// # Example
///
/// ```no_run
/// use wnquery::ingest::SynsetSource;
/// use wnquery::ingest::jsonl::JsonlSynsetReader;
///
/// let reader = JsonlSynsetReader::new("wordnet.jsonl");
/// for item in reader.records().unwrap() {
///     let (record, line) = item.unwrap();
///     println!("{line}: {}", record.id);
/// }
/// ```
pub trait SynsetSource {
    /// The iterator type that yields records with their source line number.
    type Iter: Iterator<Item = Result<(SynsetRecord, usize)>>;

    /// Open the source. Failing to open it is fatal for construction.
    fn records(&self) -> Result<Self::Iter>;
}

/// Number in-memory records from 1, as if each came from its own line.
pub fn numbered<I>(records: I) -> impl Iterator<Item = Result<(SynsetRecord, usize)>>
where
    I: IntoIterator<Item = SynsetRecord>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| Ok((record, i + 1)))
}
