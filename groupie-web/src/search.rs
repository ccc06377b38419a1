//! Artist name search over the catalog

use crate::catalog::{Catalog, Entry};

/// Shown when a query matches nothing
pub const NO_MATCHES_MESSAGE: &str = "No artists found matching your query.";

/// Outcome of one search request
#[derive(Debug)]
pub struct SearchResult<'a> {
    pub query: String,
    pub matches: Vec<Entry<'a>>,
    pub empty_message: Option<&'static str>,
}

impl<'a> SearchResult<'a> {
    pub fn new(query: String, matches: Vec<Entry<'a>>) -> Self {
        let empty_message = matches.is_empty().then_some(NO_MATCHES_MESSAGE);
        Self {
            query,
            matches,
            empty_message,
        }
    }
}

/// Case-insensitive substring match on artist name, in catalog order
pub fn search<'a>(query: &str, catalog: &'a Catalog) -> Vec<Entry<'a>> {
    let needle = query.to_lowercase();
    catalog
        .entries()
        .filter(|entry| entry.artist.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::artist;

    fn names<'a>(entries: &[Entry<'a>]) -> Vec<&'a str> {
        entries.iter().map(|e| e.artist.name.as_str()).collect()
    }

    fn catalog() -> Catalog {
        Catalog::from_artists(vec![
            artist(1, "Test Artist", ""),
            artist(2, "Another Artist", ""),
            artist(3, "The Testers", ""),
        ])
    }

    #[test]
    fn test_search_case_insensitive() {
        let catalog = catalog();
        assert_eq!(names(&search("test", &catalog)), vec!["Test Artist", "The Testers"]);
        assert_eq!(names(&search("TEST", &catalog)), vec!["Test Artist", "The Testers"]);
    }

    #[test]
    fn test_search_two_artist_catalog() {
        let catalog = Catalog::from_artists(vec![
            artist(1, "Test Artist", ""),
            artist(2, "Another Artist", ""),
        ]);
        let matches = search("test", &catalog);
        assert_eq!(names(&matches), vec!["Test Artist"]);
        assert_eq!(matches[0].ordinal, 1);
    }

    #[test]
    fn test_search_preserves_catalog_order() {
        let catalog = catalog();
        let matches = search("artist", &catalog);
        assert_eq!(names(&matches), vec!["Test Artist", "Another Artist"]);
        assert_eq!(matches[1].ordinal, 2);
    }

    #[test]
    fn test_search_no_matches() {
        let catalog = catalog();
        let result = SearchResult::new("zzz".to_string(), search("zzz", &catalog));
        assert!(result.matches.is_empty());
        assert_eq!(result.empty_message, Some(NO_MATCHES_MESSAGE));
    }

    #[test]
    fn test_search_with_matches_has_no_message() {
        let catalog = catalog();
        let result = SearchResult::new("another".to_string(), search("another", &catalog));
        assert_eq!(result.matches.len(), 1);
        assert!(result.empty_message.is_none());
    }
}
