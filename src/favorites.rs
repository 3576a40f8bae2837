//! User-curated favorites
//!
//! A favorite is the exact content string of a prompt, matching the way the
//! database cards and the generator expose prompts for collection. Insertion
//! order is preserved so the persisted form round-trips exactly.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Favorites {
    items: Vec<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, prompt: &str) -> bool {
        self.items.iter().any(|p| p == prompt)
    }

    /// Returns true if the prompt was newly added.
    pub fn insert(&mut self, prompt: &str) -> bool {
        if self.contains(prompt) {
            return false;
        }
        self.items.push(prompt.to_string());
        true
    }

    /// Returns true if the prompt was present and removed.
    pub fn remove(&mut self, prompt: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p != prompt);
        self.items.len() != before
    }

    /// Idempotent toggle; returns the new membership state.
    pub fn toggle(&mut self, prompt: &str) -> bool {
        if self.remove(prompt) {
            false
        } else {
            self.items.push(prompt.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_unique() {
        let mut favorites = Favorites::new();
        assert!(favorites.insert("a"));
        assert!(!favorites.insert("a"));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut favorites = Favorites::new();
        favorites.insert("kept");

        assert!(favorites.toggle("x"));
        assert!(favorites.contains("x"));
        assert!(!favorites.toggle("x"));
        assert!(!favorites.contains("x"));

        // Unrelated entries survive the round trip
        assert!(favorites.contains("kept"));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut favorites = Favorites::new();
        favorites.insert("first");
        favorites.insert("second");
        favorites.insert("third");
        let collected: Vec<_> = favorites.iter().collect();
        assert_eq!(collected, vec!["first", "second", "third"]);
    }
}
