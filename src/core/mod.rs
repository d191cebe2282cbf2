pub mod engine;
pub mod index;
pub mod matcher;
pub mod sounds;
pub mod syllable;
pub mod trie;
pub mod types;
