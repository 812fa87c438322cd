//! Synset and synonym values.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::synset::pos::PartOfSpeech;

/// A word sense: a literal with its sense number inside a synset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synonym {
    pub literal: String,
    pub sense: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lnote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nucleus: Option<String>,
}

impl Synonym {
    /// Create a synonym without note or nucleus marker.
    pub fn new<S: Into<String>>(literal: S, sense: u32) -> Self {
        Synonym {
            literal: literal.into(),
            sense,
            lnote: None,
            nucleus: None,
        }
    }
}

/// A typed link `(target, relation)`.
///
/// Used for internal relations between synsets of the same partition as
/// well as for the external link lists a synset carries. Ordering is
/// target first, then relation name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pointer {
    pub target: String,
    pub relation: String,
}

impl Pointer {
    pub fn new<T: Into<String>, R: Into<String>>(target: T, relation: R) -> Self {
        Pointer {
            target: target.into(),
            relation: relation.into(),
        }
    }
}

/// A synset stored in a partition.
///
/// Only `pointers` changes after the synset has been stored, and only
/// through the one-time relation inversion pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synset {
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id3: String,
    pub pos: PartOfSpeech,
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
    /// Internal relations, in insertion order. May hold duplicates after
    /// inversion.
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

impl Synset {
    /// Create an empty synset with the given id and part of speech.
    pub fn new<S: Into<String>>(id: S, pos: PartOfSpeech) -> Self {
        Synset {
            id: id.into(),
            id3: String::new(),
            pos,
            definition: String::new(),
            bcs: String::new(),
            stamp: String::new(),
            domain: String::new(),
            nl: String::new(),
            tnl: String::new(),
            usages: Vec::new(),
            snotes: Vec::new(),
            synonyms: Vec::new(),
            pointers: Vec::new(),
            sumo_links: Vec::new(),
            elrs: Vec::new(),
            elrs3: Vec::new(),
            eksz_links: Vec::new(),
            vframe_links: Vec::new(),
        }
    }

    /// Targets of the out-edges labelled `relation`, in adjacency order.
    pub fn targets<'a>(&'a self, relation: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pointers
            .iter()
            .filter(move |p| p.relation == relation)
            .map(|p| p.target.as_str())
    }

    /// Whether any out-edge is labelled `relation`.
    pub fn has_relation(&self, relation: &str) -> bool {
        self.pointers.iter().any(|p| p.relation == relation)
    }

    /// Whether one of the synonyms has the given literal.
    pub fn contains_literal(&self, literal: &str) -> bool {
        self.synonyms.iter().any(|s| s.literal == literal)
    }

    /// Whether one of the synonyms is `literal` with sense number `sense`.
    pub fn contains_sense(&self, literal: &str, sense: u32) -> bool {
        self.synonyms
            .iter()
            .any(|s| s.literal == literal && s.sense == sense)
    }

    /// The deduplicated edge set, sorted by target then relation.
    ///
    /// This is the form used whenever a synset is serialized.
    pub fn unique_pointers(&self) -> Vec<Pointer> {
        self.pointers
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Names of the relations leaving this synset, sorted and unique.
    pub fn relation_names(&self) -> BTreeSet<&str> {
        self.pointers.iter().map(|p| p.relation.as_str()).collect()
    }
}
