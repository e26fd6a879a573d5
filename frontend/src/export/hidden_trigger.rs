use common::hidden_trigger::{HiddenTrigger, InlineDisplay};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::js_error::describe;

pub(super) struct ButtonStyle(HtmlElement);

impl InlineDisplay for ButtonStyle {
    fn inline_display(&self) -> String {
        self.0.style().get_property_value("display").unwrap_or_default()
    }

    fn set_inline_display(&self, value: &str) -> Result<(), String> {
        self.0.style().set_property("display", value).map_err(|e| describe(&e))
    }

    fn remove_inline_display(&self) -> Result<(), String> {
        self.0.style().remove_property("display").map(|_| ()).map_err(|e| describe(&e))
    }
}

/// Hides the first button inside `card`. A card without a button is
/// captured as is.
pub(super) fn hide_button_in(card: &Element) -> HiddenTrigger<ButtonStyle> {
    let button = card
        .query_selector("button")
        .ok()
        .flatten()
        .and_then(|b| b.dyn_into::<HtmlElement>().ok())
        .map(ButtonStyle);
    HiddenTrigger::hide(button)
}
