// File: src/frequency.rs
use crate::error::{PortmanteauError, Result};
use log::{debug, info};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Selects the words of a `word,count` CSV list that are frequent enough.
///
/// The first row is a header and is discarded. Rows without exactly two
/// fields, with invalid UTF-8, or whose count is not an integer, are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyFilter {
    min_frequency: u64,
    stop_at_first_below: bool,
}

impl FrequencyFilter {
    /// Assumes the list is sorted by descending count and stops reading at the
    /// first row below `min_frequency`.
    pub fn new(min_frequency: u64) -> Self {
        Self { min_frequency, stop_at_first_below: true }
    }

    /// Reads every row instead. Same result on a sorted list.
    pub fn scan_all(mut self) -> Self {
        self.stop_at_first_below = false;
        self
    }

    pub fn load(&self, path: &Path) -> Result<HashSet<String>> {
        let file = File::open(path).map_err(|e| PortmanteauError::io(path, e))?;
        let words = self.filter_reader(file).map_err(|source| PortmanteauError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            "{} words at or above frequency {} in {}",
            words.len(),
            self.min_frequency,
            path.display()
        );
        Ok(words)
    }

    /// Lowercased words whose count is at least the threshold.
    pub fn filter_reader<R: Read>(&self, reader: R) -> csv::Result<HashSet<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut words = HashSet::new();
        for record in reader.byte_records() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line() as usize);
            let (word, count) = match parse_record(&record, line) {
                Ok(parsed) => parsed,
                Err(e) => {
                    debug!("skipping frequency row: {}", e);
                    continue;
                }
            };

            if count >= self.min_frequency {
                words.insert(word.to_lowercase());
            } else if self.stop_at_first_below {
                break;
            }
        }
        Ok(words)
    }
}

fn parse_record(record: &csv::ByteRecord, line: usize) -> Result<(&str, u64)> {
    if record.len() != 2 {
        return Err(PortmanteauError::malformed(
            line,
            format!("expected 2 fields, found {}", record.len()),
        ));
    }
    let word = utf8_field(&record[0], line)?;
    let count = utf8_field(&record[1], line)?;
    let count = count
        .parse::<u64>()
        .map_err(|e| PortmanteauError::malformed(line, format!("bad count {:?}: {}", count, e)))?;
    Ok((word, count))
}

fn utf8_field(field: &[u8], line: usize) -> Result<&str> {
    std::str::from_utf8(field)
        .map_err(|e| PortmanteauError::malformed(line, format!("field is not UTF-8: {}", e)))
}
