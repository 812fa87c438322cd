//! Output formatting for CLI commands.
//!
//! Every command produces one [`CommandOutput`]. Human output mirrors the
//! text of an interactive wordnet console; JSON output serializes the same
//! value.

use std::fmt;

use serde::Serialize;

use crate::cli::args::{OutputFormat, WnQueryArgs};
use crate::error::Result;
use crate::index::{Diagnostic, PartitionStats};
use crate::similarity::SensePairScore;
use crate::synset::Synset;

/// Result of one CLI command.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    Synsets(SynsetList),
    Xml(XmlOutput),
    Ids(IdList),
    Entries(EntryList),
    SenseRelations(SenseRelationsReport),
    Connection(Connection),
    Compatibility(Compatibility),
    Count(Count),
    Scores(ScoreList),
    Stats(StatsReport),
    Diagnostics(DiagnosticsReport),
}

/// Synsets printed one per line as `id  {literal:sense, ...}  (definition)`.
#[derive(Debug, Clone, Serialize)]
pub struct SynsetList {
    pub synsets: Vec<Synset>,
}

/// VisDic XML of a synset.
#[derive(Debug, Clone, Serialize)]
pub struct XmlOutput {
    pub xml: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IdList {
    pub ids: Vec<String>,
}

/// A synset reached by a relation lookup or trace.
///
/// `summary` is `None` for ids that are not stored in the partition.
#[derive(Debug, Clone, Serialize)]
pub struct SynsetEntry {
    pub id: String,
    pub level: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl SynsetEntry {
    fn line(&self) -> String {
        format!(
            "{}{}",
            "  ".repeat(self.level),
            self.summary.as_deref().unwrap_or(self.id.as_str())
        )
    }
}

/// Relation targets or trace entries, indented by level.
#[derive(Debug, Clone, Serialize)]
pub struct EntryList {
    pub entries: Vec<SynsetEntry>,
}

/// The relations of one sense of a literal.
///
/// Holds the relation names when no relation was asked for, otherwise the
/// targets of that relation.
#[derive(Debug, Clone, Serialize)]
pub struct SenseRelations {
    pub id: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<SynsetEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SenseRelationsReport {
    pub senses: Vec<SenseRelations>,
}

/// Outcome of a connectivity check.
#[derive(Debug, Clone, Serialize)]
pub struct Connection {
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Compatibility {
    pub compatible: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Count {
    #[serde(skip)]
    pub label: &'static str,
    pub value: usize,
}

/// Similarity scores, one per sense pair.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreList {
    pub scores: Vec<SensePairScore>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub partitions: Vec<PartitionStats>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticsReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutput::Synsets(list) if list.synsets.is_empty() => write!(f, "Synset not found"),
            CommandOutput::Synsets(list) => {
                let lines: Vec<String> = list.synsets.iter().map(Synset::summary).collect();
                write!(f, "{}", lines.join("\n"))
            }
            CommandOutput::Xml(xml) => write!(f, "{}", xml.xml),
            CommandOutput::Ids(list) if list.ids.is_empty() => write!(f, "Nothing found"),
            CommandOutput::Ids(list) => write!(f, "{}", list.ids.join("\n")),
            CommandOutput::Entries(list) if list.entries.is_empty() => write!(f, "Nothing found"),
            CommandOutput::Entries(list) => {
                let lines: Vec<String> = list.entries.iter().map(SynsetEntry::line).collect();
                write!(f, "{}", lines.join("\n"))
            }
            CommandOutput::SenseRelations(report) if report.senses.is_empty() => {
                write!(f, "Literal not found")
            }
            CommandOutput::SenseRelations(report) => {
                let blocks: Vec<String> = report
                    .senses
                    .iter()
                    .map(|sense| {
                        let mut lines = vec![sense.summary.clone()];
                        lines.extend(sense.relations.iter().map(|name| format!("  {name}")));
                        lines.extend(sense.targets.iter().map(SynsetEntry::line));
                        lines.join("\n")
                    })
                    .collect();
                write!(f, "{}", blocks.join("\n\n"))
            }
            CommandOutput::Connection(Connection {
                source: Some(source),
                target: Some(target),
                ..
            }) => write!(f, "Connected: {source} -> {target}"),
            CommandOutput::Connection(_) => write!(f, "Not connected"),
            CommandOutput::Compatibility(c) if c.compatible => write!(f, "Compatible"),
            CommandOutput::Compatibility(_) => write!(f, "Not compatible"),
            CommandOutput::Count(count) => write!(f, "{}: {}", count.label, count.value),
            CommandOutput::Scores(list) if list.scores.is_empty() => write!(f, "No senses found"),
            CommandOutput::Scores(list) => {
                let mut scores: Vec<&SensePairScore> = list.scores.iter().collect();
                scores.sort_by(|a, b| b.score.total_cmp(&a.score));
                let lines: Vec<String> = scores
                    .iter()
                    .map(|s| format!("{:.6}  {}  {}", s.score, s.id1, s.id2))
                    .collect();
                write!(f, "{}", lines.join("\n"))
            }
            CommandOutput::Stats(report) => {
                let blocks: Vec<String> = report
                    .partitions
                    .iter()
                    .map(|s| {
                        format!(
                            "PoS: {}\n  #synsets: {}\n  #word senses: {}\n  #words: {}",
                            s.pos.plural_name(),
                            s.synsets,
                            s.word_senses,
                            s.words
                        )
                    })
                    .collect();
                write!(f, "{}", blocks.join("\n"))
            }
            CommandOutput::Diagnostics(report) if report.diagnostics.is_empty() => {
                write!(f, "No diagnostics")
            }
            CommandOutput::Diagnostics(report) => {
                let lines: Vec<String> = report.diagnostics.iter().map(|d| d.to_string()).collect();
                write!(f, "{}", lines.join("\n"))
            }
        }
    }
}

/// Render a result in the requested format.
pub fn render(result: &CommandOutput, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(result.to_string()),
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
    }
}

/// Print a result in the format selected on the command line.
pub fn output_result(result: &CommandOutput, args: &WnQueryArgs) -> Result<()> {
    println!("{}", render(result, args.output_format, args.pretty)?);
    Ok(())
}
