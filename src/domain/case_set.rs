use std::collections::BTreeSet;
use std::fmt;

use unicase::UniCase;

/// A set of strings compared case-insensitively, keeping the original
/// casing of each entry for display.
///
/// Iteration is ordered case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseInsensitiveSet {
    items: BTreeSet<UniCase<String>>,
}

impl CaseInsensitiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `item`; a later spelling replaces an earlier one.
    pub fn add(&mut self, item: impl Into<String>) {
        let key = UniCase::new(item.into());
        self.items.replace(key);
    }

    /// Remove `item` regardless of its casing. Returns whether it was present.
    pub fn remove(&mut self, item: &str) -> bool {
        self.items.remove(&UniCase::new(item.to_string()))
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains(&UniCase::new(item.to_string()))
    }

    /// The original spelling stored for `item`.
    pub fn get(&self, item: &str) -> Option<&str> {
        self.items
            .get(&UniCase::new(item.to_string()))
            .map(|entry| entry.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|entry| entry.as_str())
    }
}

impl<S: Into<String>> FromIterator<S> for CaseInsensitiveSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = CaseInsensitiveSet::new();
        for item in iter {
            set.add(item);
        }
        set
    }
}

impl fmt::Display for CaseInsensitiveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<&str> = self.iter().collect();
        f.write_str(&items.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignores_case() {
        let set: CaseInsensitiveSet = ["Feat", "FIX"].into_iter().collect();
        assert!(set.contains("feat"));
        assert!(set.contains("FEAT"));
        assert!(set.contains("fix"));
        assert!(!set.contains("chore"));
    }

    #[test]
    fn test_get_returns_original_casing() {
        let set: CaseInsensitiveSet = ["Signed-off-by"].into_iter().collect();
        assert_eq!(set.get("signed-off-by"), Some("Signed-off-by"));
        assert_eq!(set.get("refs"), None);
    }

    #[test]
    fn test_add_replaces_spelling() {
        let mut set = CaseInsensitiveSet::new();
        set.add("refs");
        set.add("Refs");
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("REFS"), Some("Refs"));
    }

    #[test]
    fn test_remove() {
        let mut set: CaseInsensitiveSet = ["Refs", "Closes"].into_iter().collect();
        assert!(set.remove("REFS"));
        assert!(!set.remove("refs"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["Closes"]);
    }

    #[test]
    fn test_iteration_is_sorted_case_insensitively() {
        let set: CaseInsensitiveSet = ["b", "C", "a"].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["a", "b", "C"]);
        assert_eq!(set.to_string(), "a,b,C");
    }

    #[test]
    fn test_clone_is_independent() {
        let original: CaseInsensitiveSet = ["Refs"].into_iter().collect();
        let mut copy = original.clone();
        copy.remove("refs");
        assert!(original.contains("refs"));
        assert!(copy.is_empty());
    }
}
