/// Most-recent-first list of distinct location labels, capped at
/// [`RecentSearches::CAPACITY`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentSearches {
    labels: Vec<String>,
}

impl RecentSearches {
    pub const CAPACITY: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Return the list with `label` recorded.
    ///
    /// A label that is already present (exact, case-sensitive match) leaves
    /// the list as it was; it is not moved to the front.
    pub fn with_label(&self, label: &str) -> Self {
        if self.contains(label) {
            return self.clone();
        }

        let labels = std::iter::once(label.to_string())
            .chain(self.labels.iter().cloned())
            .take(Self::CAPACITY)
            .collect();

        Self { labels }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepends_new_labels() {
        let list = RecentSearches::new()
            .with_label("Paris, Île-de-France, France")
            .with_label("Tokyo, Tokyo, Japan");

        assert_eq!(list.as_slice(), ["Tokyo, Tokyo, Japan", "Paris, Île-de-France, France"]);
    }

    #[test]
    fn duplicate_is_not_reordered() {
        let list = RecentSearches::new()
            .with_label("Paris, France")
            .with_label("Rome, Lazio, Italy")
            .with_label("Paris, France");

        assert_eq!(list.as_slice(), ["Rome, Lazio, Italy", "Paris, France"]);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let list = RecentSearches::new()
            .with_label("Paris, France")
            .with_label("paris, France");

        assert_eq!(list.len(), 2);
    }

    #[test]
    fn keeps_five_most_recent() {
        let list = ["A", "B", "C", "D", "E", "F"]
            .iter()
            .fold(RecentSearches::new(), |list, label| list.with_label(label));

        assert_eq!(list.len(), RecentSearches::CAPACITY);
        assert_eq!(list.iter().collect::<Vec<_>>(), ["F", "E", "D", "C", "B"]);
        assert!(!list.contains("A"));
    }
}
