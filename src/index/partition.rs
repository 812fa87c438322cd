//! A single part-of-speech partition.

use std::collections::BTreeMap;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::synset::{PartOfSpeech, Synset};

/// Synset counts of one partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionStats {
    pub pos: PartOfSpeech,
    /// Number of stored synsets.
    pub synsets: usize,
    /// Number of (literal, synset) pairs in the literal index.
    pub word_senses: usize,
    /// Number of distinct literals.
    pub words: usize,
}

/// Synsets of one part of speech plus their literal index.
///
/// Ids are kept in a `BTreeMap` so that whole-partition passes visit them in
/// ascending order.
#[derive(Debug, Clone)]
pub struct Partition {
    pos: PartOfSpeech,
    synsets: BTreeMap<String, Synset>,
    literals: AHashMap<String, Vec<String>>,
}

impl Partition {
    pub fn new(pos: PartOfSpeech) -> Self {
        Partition {
            pos,
            synsets: BTreeMap::new(),
            literals: AHashMap::new(),
        }
    }

    pub fn pos(&self) -> PartOfSpeech {
        self.pos
    }

    /// Store a synset and index its literals.
    ///
    /// Returns the synset back if its id is already taken; the stored one is
    /// left untouched.
    pub(crate) fn insert(&mut self, synset: Synset) -> std::result::Result<(), Synset> {
        if self.synsets.contains_key(&synset.id) {
            return Err(synset);
        }
        for synonym in &synset.synonyms {
            self.literals
                .entry(synonym.literal.clone())
                .or_default()
                .push(synset.id.clone());
        }
        self.synsets.insert(synset.id.clone(), synset);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Synset> {
        self.synsets.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Synset> {
        self.synsets.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.synsets.contains_key(id)
    }

    /// Ids of the synsets containing `literal`, in insertion order.
    pub fn literal_ids(&self, literal: &str) -> &[String] {
        self.literals
            .get(literal)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.synsets.keys().map(String::as_str)
    }

    /// Synsets in ascending id order.
    pub fn synsets(&self) -> impl Iterator<Item = &Synset> {
        self.synsets.values()
    }

    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    pub fn stats(&self) -> PartitionStats {
        PartitionStats {
            pos: self.pos,
            synsets: self.synsets.len(),
            word_senses: self.literals.values().map(Vec::len).sum(),
            words: self.literals.len(),
        }
    }
}
