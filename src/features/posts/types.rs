use serde::Deserialize;
use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Ids of the posts the visitor has ticked. Lives only as long as the view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickedSet(BTreeSet<u64>);

impl TickedSet {
    /// Flips the mark on `id` and returns whether it is now ticked.
    pub fn toggle(&mut self, id: u64) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    pub fn contains(&self, id: u64) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut ticked = TickedSet::default();
        assert!(ticked.toggle(3));
        assert!(ticked.contains(3));
        assert_eq!(ticked.len(), 1);

        assert!(!ticked.toggle(3));
        assert!(!ticked.contains(3));
        assert!(ticked.is_empty());
    }

    #[test]
    fn ids_are_independent() {
        let mut ticked = TickedSet::default();
        ticked.toggle(1);
        ticked.toggle(2);
        ticked.toggle(1);
        assert!(!ticked.contains(1));
        assert!(ticked.contains(2));
    }
}
