//! Synset records as produced by ingestion.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::synset::synset::{Pointer, Synonym, Synset};

/// An unvalidated synset as read from a source file.
///
/// The part-of-speech tag is kept as raw text so the index can report
/// records with an unknown tag instead of failing the whole stream. A
/// record with an empty id marks the end of the stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynsetRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id3: String,
    #[serde(default)]
    pub pos: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bcs: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub stamp: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub domain: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub nl: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tnl: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub usages: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub snotes: Vec<String>,
    #[serde(default)]
    pub synonyms: Vec<Synonym>,
    #[serde(default)]
    pub pointers: Vec<Pointer>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sumo_links: Vec<Pointer>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elrs: Vec<Pointer>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elrs3: Vec<Pointer>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub eksz_links: Vec<Pointer>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vframe_links: Vec<Pointer>,
}

impl SynsetRecord {
    /// Create a record with an id, a raw part-of-speech tag and nothing else.
    pub fn new<I: Into<String>, P: Into<String>>(id: I, pos: P) -> Self {
        SynsetRecord {
            id: id.into(),
            pos: pos.into(),
            ..Default::default()
        }
    }

    /// Add a synonym (builder style).
    pub fn with_synonym<S: Into<String>>(mut self, literal: S, sense: u32) -> Self {
        self.synonyms.push(Synonym::new(literal, sense));
        self
    }

    /// Add an internal relation (builder style).
    pub fn with_pointer<T: Into<String>, R: Into<String>>(mut self, target: T, relation: R) -> Self {
        self.pointers.push(Pointer::new(target, relation));
        self
    }

    /// Set the definition (builder style).
    pub fn with_definition<S: Into<String>>(mut self, definition: S) -> Self {
        self.definition = definition.into();
        self
    }

    /// Whether this is the end-of-stream sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.id.is_empty()
    }

    /// Validate the part-of-speech tag and turn the record into a synset.
    pub fn into_synset(self) -> Result<Synset> {
        let pos = self.pos.parse()?;
        Ok(Synset {
            id: self.id,
            id3: self.id3,
            pos,
            definition: self.definition,
            bcs: self.bcs,
            stamp: self.stamp,
            domain: self.domain,
            nl: self.nl,
            tnl: self.tnl,
            usages: self.usages,
            snotes: self.snotes,
            synonyms: self.synonyms,
            pointers: self.pointers,
            sumo_links: self.sumo_links,
            elrs: self.elrs,
            elrs3: self.elrs3,
            eksz_links: self.eksz_links,
            vframe_links: self.vframe_links,
        })
    }
}

impl From<&Synset> for SynsetRecord {
    /// Serialize a stored synset back into a record. Internal relations are
    /// written as their deduplicated, sorted set.
    fn from(synset: &Synset) -> Self {
        SynsetRecord {
            id: synset.id.clone(),
            id3: synset.id3.clone(),
            pos: synset.pos.tag().to_string(),
            definition: synset.definition.clone(),
            bcs: synset.bcs.clone(),
            stamp: synset.stamp.clone(),
            domain: synset.domain.clone(),
            nl: synset.nl.clone(),
            tnl: synset.tnl.clone(),
            usages: synset.usages.clone(),
            snotes: synset.snotes.clone(),
            synonyms: synset.synonyms.clone(),
            pointers: synset.unique_pointers(),
            sumo_links: synset.sumo_links.clone(),
            elrs: synset.elrs.clone(),
            elrs3: synset.elrs3.clone(),
            eksz_links: synset.eksz_links.clone(),
            vframe_links: synset.vframe_links.clone(),
        }
    }
}
