// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Orthographic spelling as it appears in the phonetic dictionary, e.g. "SMOKE".
pub type Word = String;

/// A normalized IPA transcription: stress and length marks removed.
pub type Pronunciation = String;

/// Position of a pronunciation in the index, in first-insertion order.
pub type EntryId = usize;

/// One distinct pronunciation and every admitted word spelled with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronunciationEntry {
    pub pronunciation: Pronunciation,
    /// Homophones in dictionary order. Duplicates are kept.
    pub words: Vec<Word>,
}

/// A first word that supplies the whole first syllable, and the second word
/// whose onset it replaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePair {
    pub first: Word,
    pub second: Word,
}

impl std::fmt::Display for CandidatePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {}", self.first, self.second)
    }
}
