//! Export of a rendered card as a downloaded JPEG.

mod download;
mod hidden_trigger;
mod rasterize;

use common::card_export::export_file_name;
use common::errors::ExportError;
use dioxus::logger::tracing;


/// Captures the card with DOM id `card_id` without its own download button
/// and downloads it as `<record_name>.jpeg`.
pub async fn export_card(card_id: &str, record_name: &str) -> Result<(), ExportError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ExportError::NoWindow)?;
    let card = document
        .get_element_by_id(card_id)
        .ok_or_else(|| ExportError::CardNotFound(card_id.to_string()))?;

    // restored on drop, whatever happens below
    let _hidden = hidden_trigger::hide_button_in(&card);

    let data_url = rasterize::to_jpeg_data_url(&card).await?;
    let file_name = export_file_name(record_name);
    download::trigger_download(&document, &data_url, &file_name)?;
    tracing::info!("Exported card {} as {}", card_id, file_name);
    Ok(())
}
