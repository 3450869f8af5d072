//! Deterministic query evaluation over entity collections

use serde::{Deserialize, Serialize};

use crate::Record;

/// A named categorical predicate over one record field
///
/// Implemented as a closed enum per screen so that every category is matched
/// exhaustively. The sentinel "no filter" state is the absence of the facet
/// from [`Query::filters`].
pub trait Facet<R> {
    /// Whether `record` passes this predicate
    fn matches(&self, record: &R) -> bool;
}

/// The current free-text term plus active categorical filters
///
/// A query is pure data: evaluating it against a collection is deterministic
/// and side-effect-free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query<F> {
    /// Free-text search term, matched case-insensitively by substring
    pub term: String,

    /// Active categorical filters, combined with logical AND
    pub filters: Vec<F>,
}

impl<F> Query<F> {
    /// Create an empty query that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a query with only a text term
    pub fn with_term(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            filters: Vec::new(),
        }
    }

    /// Whether this query matches every record unconditionally
    pub fn is_unfiltered(&self) -> bool {
        self.term.trim().is_empty() && self.filters.is_empty()
    }

    /// Compute the visible subset of `records`
    ///
    /// Returns every record, preserving original order, for which the text
    /// predicate AND all active facets hold. A term that is empty or
    /// whitespace-only matches everything. Linear in collection size; the
    /// collections involved are small enough that no index is warranted.
    pub fn evaluate<'a, R>(&self, records: impl IntoIterator<Item = &'a R>) -> Vec<&'a R>
    where
        R: Record + 'a,
        F: Facet<R>,
    {
        if self.is_unfiltered() {
            return records.into_iter().collect();
        }

        let term = self.term.trim().to_lowercase();
        records
            .into_iter()
            .filter(|record| {
                let text_ok = term.is_empty()
                    || record
                        .search_text()
                        .iter()
                        .any(|field| field.to_lowercase().contains(&term));
                text_ok && self.filters.iter().all(|facet| facet.matches(record))
            })
            .collect()
    }
}

impl<F> Default for Query<F> {
    fn default() -> Self {
        Self {
            term: String::new(),
            filters: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Profile {
        id: String,
        name: String,
        dept: &'static str,
        year: u32,
    }

    impl Profile {
        fn new(id: &str, name: &str, dept: &'static str, year: u32) -> Self {
            Self {
                id: id.to_string(),
                name: name.to_string(),
                dept,
                year,
            }
        }
    }

    impl Record for Profile {
        type Id = String;

        fn id(&self) -> &String {
            &self.id
        }

        fn search_text(&self) -> Vec<&str> {
            vec![&self.name, &self.id, self.dept]
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum ProfileFacet {
        Dept(&'static str),
        Year(u32),
    }

    impl Facet<Profile> for ProfileFacet {
        fn matches(&self, profile: &Profile) -> bool {
            match self {
                Self::Dept(dept) => profile.dept == *dept,
                Self::Year(year) => profile.year == *year,
            }
        }
    }

    fn roster() -> Vec<Profile> {
        vec![
            Profile::new("STU001", "Sarah Johnson", "CS", 3),
            Profile::new("STU002", "Michael Chen", "Business", 2),
            Profile::new("STU003", "Emily Rodriguez", "CS", 2),
        ]
    }

    #[test]
    fn test_empty_term_matches_all() {
        let roster = roster();
        let query: Query<ProfileFacet> = Query::new();
        let visible = query.evaluate(&roster);
        assert_eq!(visible.len(), roster.len());
    }

    #[test]
    fn test_whitespace_term_matches_all() {
        let roster = roster();
        let query: Query<ProfileFacet> = Query::with_term("   \t ");
        assert_eq!(query.evaluate(&roster).len(), roster.len());
    }

    #[test]
    fn test_substring_match_on_any_field() {
        let roster = roster();
        let query: Query<ProfileFacet> = Query::with_term("chen");
        let visible = query.evaluate(&roster);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "STU002");

        // Id fields are searched too
        let query: Query<ProfileFacet> = Query::with_term("stu00");
        assert_eq!(query.evaluate(&roster).len(), 3);
    }

    #[test]
    fn test_case_insensitive() {
        let roster = roster();
        let upper: Query<ProfileFacet> = Query::with_term("SARAH");
        let lower: Query<ProfileFacet> = Query::with_term("sarah");
        assert_eq!(upper.evaluate(&roster), lower.evaluate(&roster));
        assert_eq!(upper.evaluate(&roster).len(), 1);
    }

    #[test]
    fn test_categorical_filter() {
        let roster = roster();
        let query = Query {
            term: String::new(),
            filters: vec![ProfileFacet::Dept("CS")],
        };
        let visible = query.evaluate(&roster);
        let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["STU001", "STU003"]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let roster = roster();
        let both = Query {
            term: String::new(),
            filters: vec![ProfileFacet::Dept("CS"), ProfileFacet::Year(2)],
        };
        let dept_only = Query {
            term: String::new(),
            filters: vec![ProfileFacet::Dept("CS")],
        };
        let year_only = Query {
            term: String::new(),
            filters: vec![ProfileFacet::Year(2)],
        };

        let combined = both.evaluate(&roster);
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].id, "STU003");

        // Intersection of the single-facet results
        let dept_ids: Vec<&str> = dept_only.evaluate(&roster).iter().map(|p| p.id.as_str()).collect();
        let year_ids: Vec<&str> = year_only.evaluate(&roster).iter().map(|p| p.id.as_str()).collect();
        for profile in &combined {
            assert!(dept_ids.contains(&profile.id.as_str()));
            assert!(year_ids.contains(&profile.id.as_str()));
        }
    }

    #[test]
    fn test_order_preserved_under_filtering() {
        let roster = roster();
        let query: Query<ProfileFacet> = Query::with_term("o");
        let visible = query.evaluate(&roster);

        // Result is a subsequence of the input in the original order
        let mut cursor = roster.iter();
        for found in visible {
            assert!(cursor.any(|p| p == found));
        }
    }

    #[test]
    fn test_term_and_filter_combine() {
        let roster = roster();
        let query = Query {
            term: "emily".to_string(),
            filters: vec![ProfileFacet::Dept("CS")],
        };
        let visible = query.evaluate(&roster);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "STU003");

        let query = Query {
            term: "emily".to_string(),
            filters: vec![ProfileFacet::Dept("Business")],
        };
        assert!(query.evaluate(&roster).is_empty());
    }
}
