//! Landing-Page Search Filter
//!
//! Search-as-you-type over the full link list. The filter only activates
//! once the query reaches [`MIN_QUERY_LEN`] characters; shorter queries
//! yield an empty result set and the caller prompts the user to keep
//! typing. Matching is a case-insensitive substring test against the link
//! name only (never the URL), and results keep the store's order; there
//! is no ranking.

use crate::store::Link;

/// Queries shorter than this return no results.
pub const MIN_QUERY_LEN: usize = 3;

/// True once the query is long enough for the filter to activate.
pub fn query_is_active(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_LEN
}

/// Filter `links` down to those whose name contains `query`,
/// case-insensitively, preserving order.
pub fn filter(links: &[Link], query: &str) -> Vec<Link> {
    if !query_is_active(query) {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    links
        .iter()
        .filter(|link| link.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn link(name: &str, url: &str) -> Link {
        let now = Utc::now();
        Link {
            id: Uuid::new_v4(),
            name: name.to_string(),
            url: url.to_string(),
            owner: "Ann".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn sample() -> Vec<Link> {
        vec![
            link("Rust Book", "https://doc.rust-lang.org/book"),
            link("Docs Hub", "https://docs.test"),
            link("recipes", "https://food.test/rustic"),
        ]
    }

    #[test]
    fn short_queries_yield_nothing() {
        let links = sample();
        assert!(filter(&links, "").is_empty());
        assert!(filter(&links, "ru").is_empty());
        assert!(!query_is_active("ru"));
        assert!(query_is_active("rus"));
    }

    #[test]
    fn match_is_case_insensitive() {
        let links = sample();
        let hits = filter(&links, "RUST");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Rust Book");
    }

    #[test]
    fn matches_name_only_never_url() {
        let links = sample();
        // "rustic" appears in a URL but in no name.
        assert!(filter(&links, "rustic").is_empty());
        // "doc" appears in two names; the URL-only occurrence does not count.
        assert_eq!(filter(&links, "doc").len(), 1);
    }

    #[test]
    fn order_is_preserved() {
        let links = vec![link("abc one", "https://1.test"), link("two abc", "https://2.test")];
        let hits = filter(&links, "abc");
        assert_eq!(hits[0].name, "abc one");
        assert_eq!(hits[1].name, "two abc");
    }
}
