// File: src/core/index.rs
use crate::core::syllable::normalize;
use crate::core::trie::PronunciationTrie;
use crate::core::types::{EntryId, PronunciationEntry};
use crate::error::{PortmanteauError, Result};
use log::{debug, info};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Ordered multimap from normalized pronunciation to the admitted words
/// spelled that way. Built once from a dictionary of
/// `WORD<TAB>pron1, pron2` lines and read-only afterwards.
pub struct PronunciationIndex {
    entries: Vec<PronunciationEntry>,
    trie: PronunciationTrie,
}

impl PronunciationIndex {
    pub fn new() -> Self {
        Self { entries: Vec::new(), trie: PronunciationTrie::new() }
    }

    pub fn load(path: &Path, admitted: &HashSet<String>) -> Result<Self> {
        let file = File::open(path).map_err(|e| PortmanteauError::io(path, e))?;
        let index = Self::from_reader(BufReader::new(file), admitted)
            .map_err(|e| PortmanteauError::io(path, e))?;
        info!(
            "indexed {} pronunciations of {} words from {} ({} trie nodes)",
            index.len(),
            index.word_count(),
            path.display(),
            index.trie.node_count()
        );
        Ok(index)
    }

    /// Keeps only words whose lowercase form is in `admitted`. Lines that
    /// are not valid UTF-8 are skipped.
    pub fn from_reader<R: BufRead>(
        mut reader: R,
        admitted: &HashSet<String>,
    ) -> std::io::Result<Self> {
        let mut index = Self::new();
        let mut buf = Vec::new();
        let mut line_no = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;
            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    debug!("skipping dictionary line {}: not UTF-8: {}", line_no, e);
                    continue;
                }
            };
            // Headers and comments do not start with an uppercase letter.
            if !line.starts_with(|c: char| c.is_ascii_uppercase()) {
                continue;
            }
            let (word, variants) = match split_line(line, line_no) {
                Ok(parts) => parts,
                Err(e) => {
                    debug!("skipping dictionary line: {}", e);
                    continue;
                }
            };
            if !admitted.contains(&word.to_lowercase()) {
                continue;
            }
            for variant in variants.split(',') {
                let pronunciation = normalize(variant);
                if !pronunciation.is_empty() {
                    index.insert(&pronunciation, word);
                }
            }
        }
        Ok(index)
    }

    /// Appends `word` to the entry for `pronunciation`, creating it if needed.
    pub fn insert(&mut self, pronunciation: &str, word: &str) -> EntryId {
        let id = match self.trie.get(pronunciation) {
            Some(id) => id,
            None => {
                self.entries.push(PronunciationEntry {
                    pronunciation: pronunciation.to_string(),
                    words: Vec::new(),
                });
                let id = self.entries.len() - 1;
                self.trie.insert(pronunciation, id);
                id
            }
        };
        self.entries[id].words.push(word.to_string());
        id
    }

    pub fn get(&self, pronunciation: &str) -> Option<&PronunciationEntry> {
        self.trie.get(pronunciation).map(|id| &self.entries[id])
    }

    /// Entries whose pronunciation is a prefix of `text` at least `min_len`
    /// bytes long, longest first.
    pub fn prefixes_of<'a>(
        &'a self,
        text: &str,
        min_len: usize,
    ) -> impl Iterator<Item = &'a PronunciationEntry> + 'a {
        self.trie
            .prefixes_of(text, min_len)
            .into_iter()
            .map(move |(_, id)| &self.entries[id])
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, PronunciationEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total words across entries, homophones counted separately.
    pub fn word_count(&self) -> usize {
        self.entries.iter().map(|e| e.words.len()).sum()
    }
}

impl Default for PronunciationIndex {
    fn default() -> Self {
        Self::new()
    }
}

fn split_line(line: &str, line_no: usize) -> Result<(&str, &str)> {
    let mut parts = line.trim_end().split('\t');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(word), Some(variants), None) if !word.is_empty() => Ok((word, variants)),
        _ => Err(PortmanteauError::malformed(line_no, "expected WORD<TAB>pronunciations")),
    }
}
