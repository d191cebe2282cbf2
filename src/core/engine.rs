use crate::core::index::PronunciationIndex;
use crate::core::matcher::PortmanteauMatcher;
use crate::core::sounds::{SoundConfig, SoundEquivalenceTable};
use crate::core::syllable::SyllableAnalyzer;
use crate::core::types::CandidatePair;
use crate::error::Result;
use crate::frequency::FrequencyFilter;
use log::info;
use std::path::Path;

// The batch pipeline: frequency list -> admitted words -> pronunciation index
// -> matcher. Everything is built once and only read afterwards.
pub struct PortmanteauEngine {
    pub index: PronunciationIndex,
    pub table: SoundEquivalenceTable,
    pub analyzer: SyllableAnalyzer,
}

impl PortmanteauEngine {
    /// Wraps an already built index.
    pub fn with_index(index: PronunciationIndex, sounds: &SoundConfig) -> Result<Self> {
        Ok(Self {
            index,
            table: SoundEquivalenceTable::from_groups(sounds.groups.iter().cloned())?,
            analyzer: SyllableAnalyzer::new(sounds.vowels.iter().copied()),
        })
    }

    pub fn from_files(
        sounds: &SoundConfig,
        filter: FrequencyFilter,
        dictionary_path: &Path,
        frequency_path: &Path,
    ) -> Result<Self> {
        // Validate the sound groups before touching the (large) inputs.
        let table = SoundEquivalenceTable::from_groups(sounds.groups.iter().cloned())?;
        let admitted = filter.load(frequency_path)?;
        let index = PronunciationIndex::load(dictionary_path, &admitted)?;
        Ok(Self {
            index,
            table,
            analyzer: SyllableAnalyzer::new(sounds.vowels.iter().copied()),
        })
    }

    pub fn matcher(&self) -> PortmanteauMatcher<'_> {
        PortmanteauMatcher::new(&self.index, &self.table, &self.analyzer)
    }

    pub fn find_pairs(&self) -> Result<Vec<CandidatePair>> {
        let pairs = self.matcher().find_pairs()?;
        info!("found {} candidate pairs", pairs.len());
        Ok(pairs)
    }
}
