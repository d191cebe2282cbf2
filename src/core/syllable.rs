// File: src/core/syllable.rs
use crate::core::sounds::ENGLISH_VOWELS;
use crate::error::{PortmanteauError, Result};
use std::collections::HashSet;

const PRIMARY_STRESS: char = 'ˈ';
const SECONDARY_STRESS: char = 'ˌ';
const LENGTH_MARK: char = 'ː';
const SCRIPT_G: char = 'ɡ';

/// Strips stress and length marks, which do not distinguish words here, and
/// spells IPA script /ɡ/ as the ASCII `g` the sound groups use.
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|&c| c != PRIMARY_STRESS && c != SECONDARY_STRESS && c != LENGTH_MARK)
        .map(|c| if c == SCRIPT_G { 'g' } else { c })
        .collect()
}

/// Finds onsets and syllable nuclei in normalized pronunciations.
#[derive(Debug, Clone)]
pub struct SyllableAnalyzer {
    vowels: HashSet<char>,
}

impl Default for SyllableAnalyzer {
    fn default() -> Self {
        Self::new(ENGLISH_VOWELS)
    }
}

impl SyllableAnalyzer {
    pub fn new(vowels: impl IntoIterator<Item = char>) -> Self {
        Self { vowels: vowels.into_iter().collect() }
    }

    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(&c)
    }

    /// The consonants before the first vowel. Empty for vowel-initial words.
    pub fn leading_cluster<'a>(&self, pron: &'a str) -> Result<&'a str> {
        pron.char_indices()
            .find(|&(_, c)| self.is_vowel(c))
            .map(|(i, _)| &pron[..i])
            .ok_or_else(|| PortmanteauError::NoVowelInPronunciation(pron.to_string()))
    }

    /// The part of `pron` a one-syllable first word may cover.
    ///
    /// A nucleus is a vowel at the start of the word or right after a
    /// consonant; the tail of a diphthong never counts. For a monosyllable
    /// this is the whole pronunciation. Otherwise it ends just before the
    /// final nucleus, keeping that syllable's onset. It always starts with
    /// [`leading_cluster`](Self::leading_cluster).
    pub fn main_form<'a>(&self, pron: &'a str) -> Result<&'a str> {
        let chars: Vec<(usize, char)> = pron.char_indices().collect();
        let first_vowel = chars
            .iter()
            .position(|&(_, c)| self.is_vowel(c))
            .ok_or_else(|| PortmanteauError::NoVowelInPronunciation(pron.to_string()))?;

        let mut last_nucleus = first_vowel;
        for i in (first_vowel + 1..chars.len()).rev() {
            if self.is_vowel(chars[i].1) && !self.is_vowel(chars[i - 1].1) {
                last_nucleus = i;
                break;
            }
        }

        if last_nucleus == first_vowel {
            Ok(pron)
        } else {
            Ok(&pron[..chars[last_nucleus].0])
        }
    }
}
