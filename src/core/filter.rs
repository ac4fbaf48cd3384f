//! Office space category filter

use crate::core::catalog::OfficeSpace;

/// Token that disables filtering
pub const ALL_SPACES: &str = "all";

/// Filter button definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub token: &'static str,
    pub label: &'static str,
}

pub const SPACE_FILTERS: &[FilterOption] = &[
    FilterOption {
        token: ALL_SPACES,
        label: "All Spaces",
    },
    FilterOption {
        token: "private",
        label: "Private Offices",
    },
    FilterOption {
        token: "meeting",
        label: "Meeting Rooms",
    },
    FilterOption {
        token: "coworking",
        label: "Coworking",
    },
];

/// Selected category on the office spaces page
///
/// Holds the raw token. Tokens outside [`SPACE_FILTERS`] are accepted and
/// simply match by substring like any other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpaceFilter(String);

impl Default for SpaceFilter {
    fn default() -> Self {
        Self(ALL_SPACES.to_string())
    }
}

impl SpaceFilter {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }

    pub fn is_all(&self) -> bool {
        self.0 == ALL_SPACES
    }

    pub fn matches(&self, space: &OfficeSpace) -> bool {
        self.is_all() || space.id.contains(self.0.as_str())
    }

    /// Listings that pass the filter, in catalog order
    pub fn apply<'a>(&self, catalog: &'a [OfficeSpace]) -> Vec<&'a OfficeSpace> {
        catalog.iter().filter(|space| self.matches(space)).collect()
    }
}

impl From<&str> for SpaceFilter {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// Filter `catalog` by category token
///
/// `"all"` returns every listing. Any other token keeps the listings whose
/// id contains it; an unmatched token yields nothing.
pub fn filter_spaces<'a>(catalog: &'a [OfficeSpace], token: &str) -> Vec<&'a OfficeSpace> {
    let filtered = SpaceFilter::new(token).apply(catalog);
    tracing::debug!(token, shown = filtered.len(), "filtered office spaces");
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::OFFICE_SPACES;

    fn ids(spaces: &[&OfficeSpace]) -> Vec<&'static str> {
        spaces.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_all_returns_full_catalog() {
        let result = filter_spaces(OFFICE_SPACES, "all");
        assert_eq!(
            ids(&result),
            vec!["private-office", "meeting-room", "coworking-space"]
        );
    }

    #[test]
    fn test_token_matches_by_substring() {
        assert_eq!(ids(&filter_spaces(OFFICE_SPACES, "private")), vec!["private-office"]);
        assert_eq!(ids(&filter_spaces(OFFICE_SPACES, "meeting")), vec!["meeting-room"]);
        assert_eq!(
            ids(&filter_spaces(OFFICE_SPACES, "coworking")),
            vec!["coworking-space"]
        );
    }

    #[test]
    fn test_shared_substring_keeps_order() {
        // "o" appears in every id
        let result = filter_spaces(OFFICE_SPACES, "o");
        assert_eq!(
            ids(&result),
            vec!["private-office", "meeting-room", "coworking-space"]
        );
    }

    #[test]
    fn test_unknown_token_yields_nothing() {
        assert!(filter_spaces(OFFICE_SPACES, "rooftop").is_empty());
    }

    #[test]
    fn test_every_result_contains_token() {
        for option in SPACE_FILTERS.iter().filter(|o| o.token != ALL_SPACES) {
            for space in filter_spaces(OFFICE_SPACES, option.token) {
                assert!(space.id.contains(option.token));
            }
        }
    }

    #[test]
    fn test_default_filter_is_all() {
        let filter = SpaceFilter::default();
        assert!(filter.is_all());
        assert_eq!(filter.token(), "all");
        assert_eq!(filter.apply(OFFICE_SPACES).len(), OFFICE_SPACES.len());
    }

    #[test]
    fn test_empty_catalog() {
        assert!(filter_spaces(&[], "all").is_empty());
    }
}
