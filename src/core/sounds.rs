// File: src/core/sounds.rs
//! Primary sound groups.
//!
//! A primary sound group collects consonant clusters that may stand in for one
//! another at the start of a word. The built-in English groups were authored
//! with these rules:
//!
//! * the primary sound may be in either its fortis or lenis form;
//! * the primary sound is the last sound that is not an approximant or glottal;
//! * approximant + glottal combinations favor the approximant;
//! * a glide + non-glide approximant favors the non-glide approximant;
//! * two non-glide approximants favor the second sound;
//! * two glides favor the first sound;
//! * /h/ on its own shares a group with the empty cluster.
//!
//! Unusual clusters come from loan words and proper nouns in the CMU IPA
//! dictionary. Other dictionaries may need more groups, which is what
//! [`SoundConfig`] is for.

use crate::error::{PortmanteauError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const ENGLISH_VOWELS: [char; 15] = [
    'æ', 'ɑ', 'ɔ', 'ɪ', 'e', 'ɛ', 'ʌ', 'ʊ', 'ə', 'i', 'u', 'a', 'ɜ', 'o', 'ɝ',
];

pub const ENGLISH_SOUND_GROUPS: &[&[&str]] = &[
    &["m", "mj", "sm", "dm", "hm", "km", "mw", "mr", "ml", "mh", "ʃm", "smr", "zm"],
    &["n", "nj", "sn", "dn", "hn", "kn", "mn", "nw", "fn", "ʃn", "wn"],
    &[
        "p", "b", "pl", "bl", "pr", "br", "pw", "pj", "bj", "sp", "spl", "spr", "spj", "blw", "bw",
        "brw", "mb", "sb", "zb",
    ],
    &[
        "t", "d", "tr", "dr", "tw", "dw", "tj", "dj", "st", "str", "dh", "drw", "gd", "ndj", "nd",
        "ʃt", "stj", "tl", "zdr",
    ],
    &["tʃ", "dʒ", "tʃj", "tʃl", "tʃr", "tʃw", "dʒj", "dʒf", "dʒw"],
    &[
        "k", "g", "kl", "gl", "kr", "gr", "gw", "kw", "kj", "gj", "sk", "skl", "skr", "skw", "skj",
        "lks",
    ],
    &[
        "f", "v", "fl", "fr", "vw", "fj", "vj", "sf", "dv", "fw", "kv", "sv", "ʃv", "tv", "vl",
        "vr", "zv",
    ],
    &["θ", "ð", "θr", "θw", "θj", "fθ", "ðj"],
    &["s", "z", "sl", "sw", "sj", "zj", "ts", "dz", "fs", "ksj", "sh", "sr", "tsj", "zl", "zw"],
    &["ʃ", "ʒ", "ʃl", "ʃr", "ʃw", "ʃj", "ʒw", "pʃ"],
    &["h", ""],
    &["l", "lj", "hl", "lhj", "lw"],
    &["r", "hr", "rw", "rj"],
    &["j", "hj", "jw"],
    &["w", "hw"],
];

/// Vowel inventory and sound groups for one transcription convention.
///
/// Loaded from JSON; a missing key keeps the English default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SoundConfig {
    pub vowels: Vec<char>,
    pub groups: Vec<Vec<String>>,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self::english()
    }
}

impl SoundConfig {
    pub fn english() -> Self {
        Self {
            vowels: ENGLISH_VOWELS.to_vec(),
            groups: ENGLISH_SOUND_GROUPS
                .iter()
                .map(|group| group.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| PortmanteauError::io(path, e))?;
        serde_json::from_str(&content).map_err(|source| PortmanteauError::SoundConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Inverse lookup from a cluster to the other members of its group.
#[derive(Debug, Clone)]
pub struct SoundEquivalenceTable {
    alternates: HashMap<String, Vec<String>>,
}

impl SoundEquivalenceTable {
    /// Flattens the groups once. Each cluster may belong to a single group.
    pub fn from_groups<G, S>(groups: impl IntoIterator<Item = G>) -> Result<Self>
    where
        G: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut alternates = HashMap::new();
        for group in groups {
            let members: Vec<String> = group.into_iter().map(Into::into).collect();
            for (i, cluster) in members.iter().enumerate() {
                if alternates.contains_key(cluster) {
                    return Err(PortmanteauError::DuplicateCluster(cluster.clone()));
                }
                let others = members
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, other)| other.clone())
                    .collect();
                alternates.insert(cluster.clone(), others);
            }
        }

        if alternates.is_empty() {
            return Err(PortmanteauError::EmptySoundGroups);
        }
        Ok(Self { alternates })
    }

    pub fn english() -> Self {
        // The built-in groups are a partition, so this cannot fail.
        Self::from_groups(ENGLISH_SOUND_GROUPS.iter().map(|g| g.iter().copied()))
            .unwrap_or_else(|e| unreachable!("built-in sound groups are invalid: {e}"))
    }

    /// The other clusters in `cluster`'s group, in their configured order.
    pub fn equivalents_of(&self, cluster: &str) -> Result<&[String]> {
        self.alternates
            .get(cluster)
            .map(Vec::as_slice)
            .ok_or_else(|| PortmanteauError::MissingClusterGroup(cluster.to_string()))
    }

    /// Number of known clusters.
    pub fn len(&self) -> usize {
        self.alternates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternates.is_empty()
    }
}
