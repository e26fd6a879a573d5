//! Result area below the search field.

use common::app_const::SEARCH_LABEL;
use common::view_state::SearchView;
use dioxus::prelude::*;

use crate::components::university_card::UniversityCard;

#[component]
pub fn SearchResults(view: SearchView) -> Element {
    match view {
        SearchView::Prompt => rsx! {
            div {
                class: "x-placeholder-message",
                h1 { "{SEARCH_LABEL}" }
            }
        },
        SearchView::NoMatch { query } => {
            let message = SearchView::no_record_message(&query);
            rsx! {
                div {
                    class: "x-placeholder-message",
                    "{message}"
                }
            }
        }
        SearchView::Cards(records) => rsx! {
            div {
                id: "x-university-card-list",
                style: "
                    display: flex;
                    flex-wrap: wrap;
                ",
                // names are not unique in the public dataset
                for (index, university) in records.into_iter().enumerate() {
                    UniversityCard {
                        key: "{index}-{university.name}",
                        index,
                        university,
                    }
                }
            }
        },
    }
}
