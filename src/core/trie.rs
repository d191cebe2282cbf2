// --- File: src/core/trie.rs
use crate::core::types::EntryId;
use std::collections::HashMap;

struct TrieNode {
    children: HashMap<char, usize>,
    entry_id: Option<EntryId>,
}

impl TrieNode {
    fn new() -> Self {
        Self { children: HashMap::new(), entry_id: None }
    }
}

/// Character trie over pronunciations, arena-allocated.
/// Answers "which stored pronunciations are prefixes of this string" in one walk.
pub struct PronunciationTrie {
    nodes: Vec<TrieNode>,
}

impl Default for PronunciationTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PronunciationTrie {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::new()] }
    }

    /// Maps `key` to `entry_id`, replacing any previous mapping.
    /// O(k) complexity where k is key length.
    pub fn insert(&mut self, key: &str, entry_id: EntryId) {
        let mut node_idx = 0;
        for c in key.chars() {
            node_idx = match self.nodes[node_idx].children.get(&c) {
                Some(&id) => id,
                None => {
                    let new_node_id = self.nodes.len();
                    self.nodes.push(TrieNode::new());
                    self.nodes[node_idx].children.insert(c, new_node_id);
                    new_node_id
                }
            };
        }
        self.nodes[node_idx].entry_id = Some(entry_id);
    }

    pub fn get(&self, key: &str) -> Option<EntryId> {
        let mut node_idx = 0;
        for c in key.chars() {
            node_idx = *self.nodes[node_idx].children.get(&c)?;
        }
        self.nodes[node_idx].entry_id
    }

    /// Every stored key that is a prefix of `text` and at least `min_len`
    /// bytes long, as `(prefix_len, entry_id)`, longest prefix first.
    pub fn prefixes_of(&self, text: &str, min_len: usize) -> Vec<(usize, EntryId)> {
        let mut found = Vec::new();
        let mut node_idx = 0;
        if min_len == 0 {
            if let Some(id) = self.nodes[0].entry_id {
                found.push((0, id));
            }
        }

        for (i, c) in text.char_indices() {
            match self.nodes[node_idx].children.get(&c) {
                Some(&next_idx) => node_idx = next_idx,
                None => break,
            }
            let end = i + c.len_utf8();
            if end >= min_len {
                if let Some(id) = self.nodes[node_idx].entry_id {
                    found.push((end, id));
                }
            }
        }

        found.reverse();
        found
    }

    /// Number of allocated nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
