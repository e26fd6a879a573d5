//! Debounced country search field.

use common::app_const::{SEARCH_DEBOUNCE_MS, SEARCH_LABEL};
use common::debounce::DebounceGate;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};
use gloo_timers::future::TimeoutFuture;

/// Calls `on_query` with the field value once typing has paused for
/// `SEARCH_DEBOUNCE_MS`. Values typed in between are dropped.
#[component]
pub fn SearchInput(on_query: EventHandler<String>) -> Element {
    let mut gate = use_signal(DebounceGate::default);

    let search_oninput = move |event: Event<FormData>| {
        let value = event.value();
        let ticket = gate.write().arm();
        spawn(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if gate.peek().is_current(ticket) {
                on_query.call(value);
            }
        });
    };

    rsx! {
        div {
            id: "x-search-input-box",
            style: "
                display: flex;
                flex-direction: column;
                gap: 4px;
                width: 100%;
                margin-bottom: 20px;
                box-sizing: border-box;
            ",
            label {
                r#for: "x-country-search",
                style: "font-size: 14px; color: rgba(0, 0, 0, 0.6);",
                "{SEARCH_LABEL}"
            }
            div {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 10px;
                    width: 100%;
                    padding: 14px;
                    border: 1px solid rgba(0, 0, 0, 0.23);
                    border-radius: 4px;
                    background-color: white;
                    box-sizing: border-box;
                ",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
                input {
                    id: "x-country-search",
                    r#type: "text",
                    placeholder: "{SEARCH_LABEL}",
                    style: "
                        flex: 1;
                        border: none;
                        outline: none;
                        background: transparent;
                        color: #111827;
                        font-size: 16px;
                        font-family: Roboto, sans-serif;
                    ",
                    oninput: search_oninput,
                }
            }
        }
    }
}
