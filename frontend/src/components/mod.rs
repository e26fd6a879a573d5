pub mod error_boundary;
pub mod search_input;
pub mod search_results;
pub mod university_card;
pub mod card_download_button;
