//! Card showing one university record.

use common::card_export::card_element_id;
use common::university::University;
use dioxus::prelude::*;

use crate::components::card_download_button::CardDownloadButton;

#[component]
pub fn UniversityCard(index: usize, university: University) -> Element {
    let card_id = card_element_id(index);
    let country = university.country_label().to_string();
    let domains = university.joined_domains();
    let web_page = university.primary_web_page().map(str::to_string);

    rsx! {
        div {
            id: "{card_id}",
            class: "x-university-card",
            style: "
                width: 30%;
                margin: 10px;
                padding: 10px;
                border: 1px solid #ccc;
                position: relative;
                background-color: white;
                box-sizing: border-box;
                padding-bottom: 56px;
            ",
            h5 {
                style: "font-size: 24px; font-weight: 400; margin: 0 0 12px 0;",
                "{university.name}"
            }
            p {
                style: "font-size: 16px; margin: 0 0 12px 0;",
                "Country: {country}"
            }
            p {
                style: "font-size: 14px; margin: 0;",
                "Domains: {domains}"
            }
            p {
                style: "font-size: 14px; margin: 0;",
                "Web Pages: "
                if let Some(web_page) = web_page {
                    a {
                        href: "{web_page}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{web_page}"
                    }
                }
            }
            CardDownloadButton { card_id: card_id.clone(), record_name: university.name.clone() }
        }
    }
}
