//! Part-of-speech partitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordNetError};

/// One of the four independent id/literal index spaces.
///
/// The textual tags are the ones used by VisDic files: `n`, `v`, `a` and `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartOfSpeech {
    #[serde(rename = "n")]
    Noun,
    #[serde(rename = "v")]
    Verb,
    #[serde(rename = "a")]
    Adjective,
    #[serde(rename = "b")]
    Adverb,
}

impl PartOfSpeech {
    /// All partitions in index order.
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// The single-letter tag.
    pub fn tag(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "n",
            PartOfSpeech::Verb => "v",
            PartOfSpeech::Adjective => "a",
            PartOfSpeech::Adverb => "b",
        }
    }

    /// Plural name used in progress messages and statistics.
    pub fn plural_name(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "nouns",
            PartOfSpeech::Verb => "verbs",
            PartOfSpeech::Adjective => "adjectives",
            PartOfSpeech::Adverb => "adverbs",
        }
    }

    /// Position of the partition inside [`PartOfSpeech::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for PartOfSpeech {
    type Err = WordNetError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "n" => Ok(PartOfSpeech::Noun),
            "v" => Ok(PartOfSpeech::Verb),
            "a" => Ok(PartOfSpeech::Adjective),
            "b" => Ok(PartOfSpeech::Adverb),
            other => Err(WordNetError::invalid_pos(other)),
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
