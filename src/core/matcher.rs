// File: src/core/matcher.rs
use crate::core::index::PronunciationIndex;
use crate::core::sounds::SoundEquivalenceTable;
use crate::core::syllable::SyllableAnalyzer;
use crate::core::types::{CandidatePair, PronunciationEntry};
use crate::error::Result;
use log::{debug, warn};

/// Searches a pronunciation index for ideal portmanteaus.
///
/// For a second word B with leading cluster C, every group-mate C' of C is
/// swapped in to form `C' + main_form(B)[len(C)..]`. Any indexed
/// pronunciation equal to a prefix of that string (at least as long as C')
/// is a one-syllable first word A, and (A, B) is emitted.
pub struct PortmanteauMatcher<'a> {
    index: &'a PronunciationIndex,
    table: &'a SoundEquivalenceTable,
    analyzer: &'a SyllableAnalyzer,
}

impl<'a> PortmanteauMatcher<'a> {
    pub fn new(
        index: &'a PronunciationIndex,
        table: &'a SoundEquivalenceTable,
        analyzer: &'a SyllableAnalyzer,
    ) -> Self {
        Self { index, table, analyzer }
    }

    /// All pairs, in index order. Fails only when a leading cluster has no
    /// sound group; vowel-less pronunciations are skipped with a warning.
    pub fn find_pairs(&self) -> Result<Vec<CandidatePair>> {
        let mut pairs = Vec::new();
        for entry in self.index.iter() {
            match self.pairs_for(entry, &mut pairs) {
                Ok(()) => {}
                Err(e) if e.is_skippable() => warn!("skipping {:?}: {}", entry.words, e),
                Err(e) => return Err(e),
            }
        }
        debug!("{} candidate pairs from {} pronunciations", pairs.len(), self.index.len());
        Ok(pairs)
    }

    /// Appends the pairs in which `second` supplies the second word.
    pub fn pairs_for(&self, second: &PronunciationEntry, out: &mut Vec<CandidatePair>) -> Result<()> {
        let pron = second.pronunciation.as_str();
        let onset = self.analyzer.leading_cluster(pron)?;
        let main = self.analyzer.main_form(pron)?;
        if onset == main {
            return Ok(());
        }

        let rest = &main[onset.len()..];
        for alt in self.table.equivalents_of(onset)? {
            let alt_main = format!("{alt}{rest}");
            for first in self.index.prefixes_of(&alt_main, alt.len()) {
                for first_word in &first.words {
                    for second_word in &second.words {
                        out.push(CandidatePair {
                            first: first_word.clone(),
                            second: second_word.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortmanteauError;

    fn index_of(entries: &[(&str, &str)]) -> PronunciationIndex {
        let mut index = PronunciationIndex::new();
        for &(pron, word) in entries {
            index.insert(pron, word);
        }
        index
    }

    /// `alt + main_form(pron)[len(onset)..]`, the string first words are
    /// matched against.
    fn substituted_form(analyzer: &SyllableAnalyzer, pron: &str, alt: &str) -> Result<String> {
        let onset = analyzer.leading_cluster(pron)?;
        let main = analyzer.main_form(pron)?;
        Ok(format!("{alt}{}", &main[onset.len()..]))
    }

    fn render(pairs: &[CandidatePair]) -> Vec<String> {
        pairs.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_swapped_onset_matches_whole_first_word() {
        let index = index_of(&[("smoʊk", "SMOKE"), ("broʊk", "BROKE")]);
        let table = SoundEquivalenceTable::from_groups(vec![vec!["sm", "br"]]).unwrap();
        let analyzer = SyllableAnalyzer::default();
        let pairs = PortmanteauMatcher::new(&index, &table, &analyzer).find_pairs().unwrap();
        assert_eq!(render(&pairs), ["BROKE + SMOKE", "SMOKE + BROKE"]);
    }

    #[test]
    fn test_first_word_covers_first_syllable_of_polysyllable() {
        // brɛkfəst -> main form brɛkf; swapping br for sp gives spɛkf.
        let index = index_of(&[("brɛkfəst", "BREAKFAST"), ("spɛk", "SPECK"), ("spɛ", "SPEH")]);
        let table = SoundEquivalenceTable::english();
        let analyzer = SyllableAnalyzer::default();
        let pairs = PortmanteauMatcher::new(&index, &table, &analyzer).find_pairs().unwrap();
        assert_eq!(render(&pairs), ["SPECK + BREAKFAST", "SPEH + BREAKFAST"]);
    }

    #[test]
    fn test_prefix_never_reaches_final_nucleus() {
        // The full swapped word spɛkfəst exists but lies past the main form.
        let index = index_of(&[("brɛkfəst", "BREAKFAST"), ("spɛkfəst", "SPECKFAST")]);
        let table = SoundEquivalenceTable::english();
        let analyzer = SyllableAnalyzer::default();
        let pairs = PortmanteauMatcher::new(&index, &table, &analyzer).find_pairs().unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_homophones_multiply() {
        let index = index_of(&[
            ("raɪt", "RIGHT"),
            ("raɪt", "WRITE"),
            ("hraɪt", "HRIGHT"),
        ]);
        let table = SoundEquivalenceTable::english();
        let analyzer = SyllableAnalyzer::default();
        let pairs = PortmanteauMatcher::new(&index, &table, &analyzer).find_pairs().unwrap();
        assert_eq!(
            render(&pairs),
            ["HRIGHT + RIGHT", "HRIGHT + WRITE", "RIGHT + HRIGHT", "WRITE + HRIGHT"]
        );
    }

    #[test]
    fn test_vowel_initial_word_pairs_with_h() {
        let index = index_of(&[("æt", "AT"), ("hæt", "HAT")]);
        let table = SoundEquivalenceTable::english();
        let analyzer = SyllableAnalyzer::default();
        let pairs = PortmanteauMatcher::new(&index, &table, &analyzer).find_pairs().unwrap();
        assert_eq!(render(&pairs), ["HAT + AT", "AT + HAT"]);
    }

    #[test]
    fn test_unrelated_onsets_do_not_pair() {
        let index = index_of(&[("kæt", "CAT"), ("təlɒɡ", "ALOG")]);
        let table = SoundEquivalenceTable::english();
        let analyzer = SyllableAnalyzer::default();
        let pairs = PortmanteauMatcher::new(&index, &table, &analyzer).find_pairs().unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_missing_cluster_group_is_fatal() {
        let index = index_of(&[("xʌk", "XUCK")]);
        let table = SoundEquivalenceTable::english();
        let analyzer = SyllableAnalyzer::default();
        let result = PortmanteauMatcher::new(&index, &table, &analyzer).find_pairs();
        assert!(matches!(result, Err(PortmanteauError::MissingClusterGroup(c)) if c == "x"));
    }

    #[test]
    fn test_vowelless_entry_is_skipped() {
        let index = index_of(&[("hm", "HMM"), ("æt", "AT"), ("hæt", "HAT")]);
        let table = SoundEquivalenceTable::english();
        let analyzer = SyllableAnalyzer::default();
        let pairs = PortmanteauMatcher::new(&index, &table, &analyzer).find_pairs().unwrap();
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_first_word_is_exact_prefix_of_substituted_form() {
        let index = index_of(&[
            ("brɛkfəst", "BREAKFAST"),
            ("spɛk", "SPECK"),
            ("blɛ", "BLEH"),
            ("smoʊk", "SMOKE"),
            ("snoʊ", "SNOW"),
        ]);
        let table = SoundEquivalenceTable::english();
        let analyzer = SyllableAnalyzer::default();
        let matcher = PortmanteauMatcher::new(&index, &table, &analyzer);
        let pairs = matcher.find_pairs().unwrap();
        assert!(!pairs.is_empty());

        let pron_of = |word: &str| {
            index
                .iter()
                .find(|e| e.words.iter().any(|w| w == word))
                .map(|e| e.pronunciation.clone())
                .unwrap()
        };
        for pair in &pairs {
            let first = pron_of(&pair.first);
            let second = pron_of(&pair.second);
            let onset = analyzer.leading_cluster(&second).unwrap();
            let alt = table
                .equivalents_of(onset)
                .unwrap()
                .iter()
                .find(|alt| {
                    substituted_form(&analyzer, &second, alt)
                        .map(|form| form.starts_with(&first) && first.len() >= alt.len())
                        .unwrap_or(false)
                });
            assert!(alt.is_some(), "{pair} is not an exact prefix match");
        }
    }

    #[test]
    fn test_matching_is_repeatable() {
        let index = index_of(&[("smoʊk", "SMOKE"), ("spoʊk", "SPOKE"), ("broʊk", "BROKE")]);
        let table = SoundEquivalenceTable::english();
        let analyzer = SyllableAnalyzer::default();
        let matcher = PortmanteauMatcher::new(&index, &table, &analyzer);
        assert_eq!(matcher.find_pairs().unwrap(), matcher.find_pairs().unwrap());
    }
}
