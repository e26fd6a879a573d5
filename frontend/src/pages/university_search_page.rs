//! The only page: search field above the matching university cards.

use common::filter::filter_by_country;
use common::view_state::SearchView;
use dioxus::prelude::*;

use crate::api::dataset_api::load_dataset;
use crate::components::search_input::SearchInput;
use crate::components::search_results::SearchResults;

#[component]
pub fn UniversitySearchPage() -> Element {
    // no reactive reads inside, so this runs once per mount
    let dataset = use_resource(move || load_dataset());
    let mut search_query = use_signal(String::new);

    let search_view = use_memo(move || {
        let query = search_query.read().clone();
        let dataset = dataset.read();
        let records = match &*dataset {
            Some(Some(records)) => Some(records.as_slice()),
            _ => None,
        };
        let filtered = filter_by_country(records, &query).into_iter().cloned().collect();
        SearchView::resolve(&query, filtered)
    });

    rsx! {
        document::Title { "University Finder" }
        div {
            id: "x-university-search-page",
            style: "padding: 20px;",
            SearchInput { on_query: move |q: String| search_query.set(q) }
            SearchResults { view: search_view() }
        }
    }
}
