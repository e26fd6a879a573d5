use common::errors::ExportError;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlAnchorElement};

use crate::js_error::describe;

/// Starts a client-side download of `href` through a detached anchor.
pub(super) fn trigger_download(document: &Document, href: &str, file_name: &str) -> Result<(), ExportError> {
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| ExportError::Download(describe(&e)))?
        .dyn_into()
        .map_err(|e| ExportError::Download(describe(&e)))?;
    anchor.set_href(href);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}
