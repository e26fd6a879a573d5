//! Loading of the static university dataset.

use common::app_const::DATASET_URL;
use common::dataset::{check_status, loaded_or_absent, parse_dataset};
use common::errors::FetchError;
use common::university::University;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::js_error::describe;

pub async fn fetch_dataset() -> Result<Vec<University>, FetchError> {
    let window = web_sys::window().ok_or_else(|| FetchError::Network("no browser window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_str(DATASET_URL))
        .await
        .map_err(|e| FetchError::Network(describe(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| FetchError::Network(describe(&e)))?;

    check_status(response.status())?;

    let body_promise = response.text().map_err(|e| FetchError::Network(describe(&e)))?;
    let body = JsFuture::from(body_promise)
        .await
        .map_err(|e| FetchError::Network(describe(&e)))?
        .as_string()
        .unwrap_or_default();

    parse_dataset(&body)
}

/// Loads the dataset, logging instead of returning failures.
/// `None` means the dataset is absent.
pub async fn load_dataset() -> Option<Vec<University>> {
    let result = fetch_dataset()
        .await
        .inspect(|records| dioxus::logger::tracing::info!("Loaded {} university records from {}", records.len(), DATASET_URL))
        .inspect_err(|e| dioxus::logger::tracing::error!("There has been a problem loading {}: {}", DATASET_URL, e));
    loaded_or_absent(result)
}
