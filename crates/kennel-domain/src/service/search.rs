//! Text search over records
//!
//! A record matches when any of its searchable fields contains the query,
//! ignoring case. The empty query matches everything.

use crate::model::dog::Dog;
use crate::model::program::Program;

/// Something with text fields a user can search.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;

    fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl Searchable for Dog {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name(), self.breed()]
    }
}

impl Searchable for Program {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name(), self.objectives(), self.description()]
    }
}

/// Keep the records matching `query`, in their original order.
pub fn search<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_query(query))
        .cloned()
        .collect()
}
