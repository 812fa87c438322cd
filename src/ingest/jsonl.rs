//! JSON Lines synset reader.
//!
//! Each non-blank line holds one [`SynsetRecord`] as a JSON object:
//! ```jsonl
//! {"id": "n1", "pos": "n", "synonyms": [{"literal": "dog", "sense": 1}], "pointers": [{"target": "n2", "relation": "hypernym"}]}
//! {"id": "n2", "pos": "n", "synonyms": [{"literal": "animal", "sense": 1}]}
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::error::{Result, WordNetError};
use crate::ingest::SynsetSource;
use crate::synset::SynsetRecord;

/// A synset source reading a JSON Lines file.
#[derive(Debug, Clone)]
pub struct JsonlSynsetReader {
    path: PathBuf,
}

impl JsonlSynsetReader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonlSynsetReader {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SynsetSource for JsonlSynsetReader {
    type Iter = JsonlRecordIterator<BufReader<File>>;

    fn records(&self) -> Result<Self::Iter> {
        let file = File::open(&self.path).map_err(|e| {
            WordNetError::Io(std::io::Error::new(
                e.kind(),
                format!("Could not open file: {} because: {e}", self.path.display()),
            ))
        })?;
        Ok(JsonlRecordIterator::new(BufReader::new(file)))
    }
}

/// Iterator over the records of a JSON Lines stream.
pub struct JsonlRecordIterator<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> JsonlRecordIterator<R> {
    pub fn new(reader: R) -> Self {
        JsonlRecordIterator {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for JsonlRecordIterator<R> {
    type Item = Result<(SynsetRecord, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = self.lines.next()?;
            self.line += 1;
            let text = match text {
                Ok(text) => text,
                Err(e) => return Some(Err(WordNetError::ingest(self.line, e.to_string()))),
            };

            if text.trim().is_empty() {
                continue;
            }

            let line = self.line;
            return Some(
                serde_json::from_str::<SynsetRecord>(&text)
                    .map(|record| (record, line))
                    .map_err(|e| WordNetError::ingest(line, e.to_string())),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_reads_records_with_line_numbers() {
        let input = "{\"id\":\"n1\",\"pos\":\"n\"}\n\n{\"id\":\"v1\",\"pos\":\"v\"}\n";
        let items: Vec<_> = JsonlRecordIterator::new(Cursor::new(input))
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].0.id, "n1");
        assert_eq!(items[0].1, 1);
        assert_eq!(items[1].0.id, "v1");
        assert_eq!(items[1].1, 3);
    }

    #[test]
    fn test_malformed_line_is_an_ingest_error() {
        let input = "{\"id\":\"n1\",\"pos\":\"n\"}\nnot json\n";
        let mut iter = JsonlRecordIterator::new(Cursor::new(input));
        assert!(iter.next().unwrap().is_ok());
        match iter.next().unwrap() {
            Err(WordNetError::Ingest { line, .. }) => assert_eq!(line, 2),
            other => panic!("Expected ingest error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_reports_line() {
        let input: &[u8] = b"{\"id\":\"n1\",\"pos\":\"n\"}\n{\"id\":\"n\xff\"}\n";
        let mut iter = JsonlRecordIterator::new(Cursor::new(input));
        assert!(iter.next().unwrap().is_ok());
        match iter.next().unwrap() {
            Err(WordNetError::Ingest { line, .. }) => assert_eq!(line, 2),
            other => panic!("Expected ingest error, got {other:?}"),
        }
    }

    #[test]
    fn test_reader_opens_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{\"id\":\"a1\",\"pos\":\"a\"}}").unwrap();

        let reader = JsonlSynsetReader::new(file.path());
        let records: Vec<_> = reader.records().unwrap().collect::<Result<_>>().unwrap();
        assert_eq!(records[0].0.pos, "a");
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let reader = JsonlSynsetReader::new("/nonexistent/wordnet.jsonl");
        assert!(matches!(reader.records(), Err(WordNetError::Io(_))));
    }
}
