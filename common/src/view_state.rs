//! What the result area shows for a given query and filter result.

use crate::university::University;


#[derive(Debug, Clone, PartialEq)]
pub enum SearchView {
    /// No query entered yet.
    Prompt,
    /// A query was entered and nothing matched it.
    NoMatch { query: String },
    Cards(Vec<University>),
}

impl SearchView {
    pub fn resolve(query: &str, filtered: Vec<University>) -> Self {
        if query.is_empty() {
            SearchView::Prompt
        } else if filtered.is_empty() {
            SearchView::NoMatch { query: query.to_string() }
        } else {
            SearchView::Cards(filtered)
        }
    }

    pub fn no_record_message(query: &str) -> String {
        format!("No university record exists with country name \"{query}\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn uni(name: &str) -> University {
        University { name: name.to_string(), country: Some("France".to_string()), domains: vec![], web_pages: vec![] }
    }

    #[test]
    fn empty_query_is_prompt_even_with_records() {
        assert_eq!(SearchView::resolve("", vec![uni("A"), uni("B")]), SearchView::Prompt);
        assert_eq!(SearchView::resolve("", vec![]), SearchView::Prompt);
    }

    #[test]
    fn non_empty_query_without_records_is_no_match() {
        assert_eq!(
            SearchView::resolve("Middle Earth", vec![]),
            SearchView::NoMatch { query: "Middle Earth".to_string() }
        );
    }

    #[test]
    fn matching_records_become_cards_in_order() {
        assert_eq!(SearchView::resolve("fr", vec![uni("B"), uni("A")]), SearchView::Cards(vec![uni("B"), uni("A")]));
    }

    #[test]
    fn no_record_message_echoes_query() {
        assert_eq!(
            SearchView::no_record_message("Middle Earth"),
            "No university record exists with country name \"Middle Earth\""
        );
    }

    #[test]
    fn whitespace_query_is_not_the_prompt() {
        assert_eq!(SearchView::resolve(" ", vec![]), SearchView::NoMatch { query: " ".to_string() });
    }
}
