//! Button exporting its card as an image.

use common::app_const::DOWNLOAD_BUTTON_LABEL;
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::md_file_icons::MdFileDownload};

use crate::export::export_card;

#[component]
pub fn CardDownloadButton(card_id: ReadSignal<String>, record_name: ReadSignal<String>) -> Element {
    let do_download = move |_e: Event<MouseData>| {
        let card_id = card_id.read().clone();
        let record_name = record_name.read().clone();
        spawn(async move {
            if let Err(e) = export_card(&card_id, &record_name).await {
                tracing::error!("Failed to download image of {}: {}", card_id, e);
            }
        });
    };

    rsx! {
        button {
            style: "
                position: absolute;
                bottom: 10px;
                right: 10px;
                display: flex;
                align-items: center;
                gap: 6px;
                padding: 6px 16px;
                border: none;
                border-radius: 4px;
                background-color: #1976d2;
                color: white;
                font-size: 14px;
                font-weight: 500;
                text-transform: uppercase;
                cursor: pointer;
                box-shadow: 0 3px 1px -2px rgba(0,0,0,0.2), 0 2px 2px 0 rgba(0,0,0,0.14);
            ",
            class: "x-hover-shadow-background",
            onclick: do_download,
            Icon { icon: MdFileDownload, style: "width: 18px; height: 18px;" }
            "{DOWNLOAD_BUTTON_LABEL}"
        }
    }
}
