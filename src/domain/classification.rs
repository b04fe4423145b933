use std::fmt;

/// Impact of a commit on the version number.
///
/// Variants are declared from most to least severe, so the derived `Ord`
/// puts `Breaking` first and the most severe impact of a range is its minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    Breaking,
    Minor,
    Patch,
    Uncategorized,
}

impl Classification {
    pub const ALL: [Classification; 4] = [
        Classification::Breaking,
        Classification::Minor,
        Classification::Patch,
        Classification::Uncategorized,
    ];

    /// Most severe classification of a range; `Uncategorized` when empty.
    pub fn aggregate<I>(classifications: I) -> Classification
    where
        I: IntoIterator<Item = Classification>,
    {
        classifications
            .into_iter()
            .fold(Classification::Uncategorized, Classification::min)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Breaking => "breaking",
            Classification::Minor => "minor",
            Classification::Patch => "patch",
            Classification::Uncategorized => "uncategorized",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_order() {
        assert!(Classification::Breaking < Classification::Minor);
        assert!(Classification::Minor < Classification::Patch);
        assert!(Classification::Patch < Classification::Uncategorized);
    }

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(
            Classification::aggregate(Vec::new()),
            Classification::Uncategorized
        );
    }

    #[test]
    fn test_aggregate_picks_most_severe() {
        let impacts = [
            Classification::Patch,
            Classification::Uncategorized,
            Classification::Minor,
            Classification::Patch,
        ];
        assert_eq!(Classification::aggregate(impacts), Classification::Minor);

        let mut reversed = impacts;
        reversed.reverse();
        assert_eq!(Classification::aggregate(reversed), Classification::Minor);
    }

    #[test]
    fn test_aggregate_breaking_wins() {
        assert_eq!(
            Classification::aggregate(Classification::ALL.into_iter().rev()),
            Classification::Breaking
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Classification::Breaking.to_string(), "breaking");
        assert_eq!(Classification::Uncategorized.to_string(), "uncategorized");
    }
}
