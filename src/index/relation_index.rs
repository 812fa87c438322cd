//! The four-partition relation index.

use log::info;

use crate::error::{Result, WordNetError};
use crate::index::diagnostics::{Diagnostic, Diagnostics};
use crate::index::partition::{Partition, PartitionStats};
use crate::synset::{PartOfSpeech, Synset, SynsetRecord};

/// What [`RelationIndex::insert`] did with a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The synset was stored and its literals indexed.
    Stored,
    /// The record was rejected and a diagnostic recorded.
    Skipped,
    /// The record was the end-of-stream sentinel.
    EndOfStream,
}

/// Noun, verb, adjective and adverb partitions.
///
/// The index is built once from a record stream, completed by a single call
/// to [`RelationIndex::invert_relations`], and read-only afterwards.
#[derive(Debug, Clone)]
pub struct RelationIndex {
    partitions: [Partition; 4],
    inverted: bool,
}

impl Default for RelationIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl RelationIndex {
    pub fn new() -> Self {
        RelationIndex {
            partitions: PartOfSpeech::ALL.map(Partition::new),
            inverted: false,
        }
    }

    /// Consume a record stream up to its end or its first sentinel record.
    ///
    /// Stream errors are fatal and propagate; rejected records are reported
    /// in `diagnostics` and skipped.
    pub fn build<I>(records: I, diagnostics: &mut Diagnostics) -> Result<Self>
    where
        I: IntoIterator<Item = Result<(SynsetRecord, usize)>>,
    {
        let mut index = RelationIndex::new();
        for item in records {
            let (record, line) = item?;
            if index.insert(record, line, diagnostics)? == InsertOutcome::EndOfStream {
                break;
            }
        }
        let stored: usize = index.partitions.iter().map(Partition::len).sum();
        info!("Loaded {stored} synsets");
        Ok(index)
    }

    /// Validate and store one record read from input line `line`.
    ///
    /// Fails only when the index has already been inverted.
    pub fn insert(
        &mut self,
        record: SynsetRecord,
        line: usize,
        diagnostics: &mut Diagnostics,
    ) -> Result<InsertOutcome> {
        if self.inverted {
            return Err(WordNetError::invalid_operation(
                "cannot insert synsets after relations have been inverted",
            ));
        }
        if record.is_sentinel() {
            return Ok(InsertOutcome::EndOfStream);
        }

        let id = record.id.clone();
        let tag = record.pos.clone();
        let synset = match record.into_synset() {
            Ok(synset) => synset,
            Err(_) => {
                diagnostics.push(Diagnostic::InvalidPartOfSpeech { id, tag, line });
                return Ok(InsertOutcome::Skipped);
            }
        };

        let pos = synset.pos;
        match self.partition_mut(pos).insert(synset) {
            Ok(()) => Ok(InsertOutcome::Stored),
            Err(_) => {
                diagnostics.push(Diagnostic::DuplicateId { pos, id, line });
                Ok(InsertOutcome::Skipped)
            }
        }
    }

    pub fn partition(&self, pos: PartOfSpeech) -> &Partition {
        &self.partitions[pos.index()]
    }

    pub(crate) fn partition_mut(&mut self, pos: PartOfSpeech) -> &mut Partition {
        &mut self.partitions[pos.index()]
    }

    /// Whether the inversion pass has run.
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub(crate) fn mark_inverted(&mut self) {
        self.inverted = true;
    }

    /// The synset with the given id.
    pub fn by_id(&self, id: &str, pos: PartOfSpeech) -> Option<&Synset> {
        self.partition(pos).get(id)
    }

    /// All synsets containing `literal`, in insertion order.
    pub fn by_literal(&self, literal: &str, pos: PartOfSpeech) -> Vec<&Synset> {
        let partition = self.partition(pos);
        partition
            .literal_ids(literal)
            .iter()
            .filter_map(|id| partition.get(id))
            .collect()
    }

    /// Ids of the synsets containing `literal`, in insertion order.
    pub fn literal_ids(&self, literal: &str, pos: PartOfSpeech) -> &[String] {
        self.partition(pos).literal_ids(literal)
    }

    /// The first synset containing `literal` with sense number `sense`.
    pub fn by_sense(&self, literal: &str, sense: u32, pos: PartOfSpeech) -> Option<&Synset> {
        self.by_literal(literal, pos)
            .into_iter()
            .find(|synset| synset.contains_sense(literal, sense))
    }

    /// Synsets containing `literal` across the given partitions.
    pub fn by_literal_in(&self, literal: &str, pos_list: &[PartOfSpeech]) -> Vec<&Synset> {
        pos_list
            .iter()
            .flat_map(|pos| self.by_literal(literal, *pos))
            .collect()
    }

    /// Statistics of every partition, in partition order.
    pub fn stats(&self) -> Vec<PartitionStats> {
        self.partitions.iter().map(Partition::stats).collect()
    }
}
