//! Heuristic declaration extractors.
//!
//! Each extractor is a pure function over explicit regions and returns a new
//! value. Missing idioms produce empty results, never errors.
//!
//! - `props`: property declarations and their precedence merge
//! - `emits`: event names
//! - `slots`: slot names
//! - `scan`: string/comment-aware bracket scanning shared by the above

pub mod emits;
pub mod props;
pub mod scan;
pub mod slots;

use std::collections::HashSet;

pub use emits::extract_events;
pub use props::extract_props;
pub use slots::extract_slots;

/// Insertion-ordered set of names.
#[derive(Debug, Default)]
pub struct NameSet {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl NameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` unless already present. Returns true if it was new.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_string());
        self.names.push(name.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}
