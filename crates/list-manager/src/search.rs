//! Client-side Search
//!
//! Case-insensitive substring matching over a record's search fields.

use crate::record::Record;

/// True when `term` is empty or appears in at least one search field.
pub fn matches<R: Record>(record: &R, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Indices of matching items, in their original order.
pub fn filter<R: Record>(items: &[R], term: &str) -> Vec<usize> {
    if term.is_empty() {
        return (0..items.len()).collect();
    }
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches(*item, term))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        id: u32,
        question: String,
        user: Option<String>,
    }

    impl Record for Row {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }

        fn search_fields(&self) -> Vec<&str> {
            let mut fields = vec![self.question.as_str()];
            if let Some(user) = &self.user {
                fields.push(user);
            }
            fields
        }
    }

    fn row(id: u32, question: &str, user: Option<&str>) -> Row {
        Row { id, question: question.to_string(), user: user.map(str::to_string) }
    }

    #[test]
    fn test_case_insensitive_match() {
        let r = row(1, "How was your Day?", None);
        assert!(matches(&r, "DAY"));
        assert!(matches(&r, "your d"));
        assert!(!matches(&r, "week"));
    }

    #[test]
    fn test_matches_nested_optional_field() {
        let r = row(1, "Dinner together", Some("Priya"));
        assert!(matches(&r, "pri"));
        let r = row(2, "Dinner together", None);
        assert!(!matches(&r, "pri"));
    }

    #[test]
    fn test_filter_preserves_order() {
        let items = vec![
            row(1, "talk", None),
            row(2, "walk", None),
            row(3, "cook", None),
            row(4, "TALK again", None),
        ];
        let hits: Vec<u32> = filter(&items, "alk").into_iter().map(|i| items[i].id).collect();
        assert_eq!(hits, vec![1, 2, 4]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = vec![row(1, "alpha", None), row(2, "beta", None)];
        assert_eq!(filter(&items, "a"), filter(&items, "a"));
        assert_eq!(filter(&items, ""), vec![0, 1]);
    }
}
