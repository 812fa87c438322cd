//! Build-time diagnostics.
//!
//! Recoverable anomalies found while ingesting records and inverting
//! relations are collected as structured [`Diagnostic`] events and handed
//! back to the caller, who decides how to route or format them. Each event
//! is also logged through the `log` facade as it is recorded.

use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::synset::PartOfSpeech;

/// The category of a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    DuplicateId,
    InvalidPartOfSpeech,
    MissingRelationTarget,
    SelfReferencingRelation,
    AddedInverseRelation,
}

impl DiagnosticKind {
    /// Warning code, `None` for informational events.
    pub fn code(self) -> Option<&'static str> {
        match self {
            DiagnosticKind::DuplicateId => Some("W01"),
            DiagnosticKind::InvalidPartOfSpeech => Some("W02"),
            DiagnosticKind::MissingRelationTarget => Some("W03"),
            DiagnosticKind::SelfReferencingRelation => Some("W04"),
            DiagnosticKind::AddedInverseRelation => None,
        }
    }
}

/// One event reported while building the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A record reused an id already stored in its partition; it was skipped.
    DuplicateId {
        pos: PartOfSpeech,
        id: String,
        line: usize,
    },
    /// A record had an unknown part-of-speech tag; it was skipped.
    InvalidPartOfSpeech { id: String, tag: String, line: usize },
    /// An invertible relation points at an id missing from the partition.
    MissingRelationTarget {
        pos: PartOfSpeech,
        source: String,
        target: String,
        relation: String,
    },
    /// An invertible relation points back at its own synset; no inverse
    /// edge was added.
    SelfReferencingRelation {
        pos: PartOfSpeech,
        id: String,
        relation: String,
        inverse: String,
    },
    /// `synset` gained the edge `(target, relation)`.
    AddedInverseRelation {
        pos: PartOfSpeech,
        synset: String,
        target: String,
        relation: String,
    },
}

impl Diagnostic {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Diagnostic::DuplicateId { .. } => DiagnosticKind::DuplicateId,
            Diagnostic::InvalidPartOfSpeech { .. } => DiagnosticKind::InvalidPartOfSpeech,
            Diagnostic::MissingRelationTarget { .. } => DiagnosticKind::MissingRelationTarget,
            Diagnostic::SelfReferencingRelation { .. } => DiagnosticKind::SelfReferencingRelation,
            Diagnostic::AddedInverseRelation { .. } => DiagnosticKind::AddedInverseRelation,
        }
    }

    /// Whether the event reports an anomaly rather than progress.
    pub fn is_warning(&self) -> bool {
        self.kind().code().is_some()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DuplicateId { id, line, .. } => write!(
                f,
                "Warning W01: synset with this id ({id}) already exists (input line {line})"
            ),
            Diagnostic::InvalidPartOfSpeech { tag, line, .. } => write!(
                f,
                "Warning W02: Invalid POS '{tag}' for synset in input line {line}"
            ),
            Diagnostic::MissingRelationTarget {
                source,
                target,
                relation,
                ..
            } => write!(
                f,
                "Warning W03: synset {target} is missing ('{relation}' target from synset {source})"
            ),
            Diagnostic::SelfReferencingRelation { id, inverse, .. } => write!(
                f,
                "Warning W04: self-referencing relation '{inverse}' for synset {id}"
            ),
            Diagnostic::AddedInverseRelation {
                synset,
                target,
                relation,
                ..
            } => write!(
                f,
                "Added inverted relation (target={target},type={relation}) to synset {synset}"
            ),
        }
    }
}

/// Ordered collection of the diagnostics of one build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    events: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event and log it.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_warning() {
            warn!("{diagnostic}");
        } else {
            debug!("{diagnostic}");
        }
        self.events.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.events.iter()
    }

    /// Events of the given kind, in the order they were recorded.
    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.events.iter().filter(move |d| d.kind() == kind)
    }

    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.of_kind(kind).count()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.events.iter().filter(|d| d.is_warning())
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.events
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
