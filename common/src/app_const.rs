//! Compile-time settings of the application.

/// Relative path of the static dataset, served from the frontend `public/` folder.
pub const DATASET_URL: &str = "/world_universities_and_domains.json";

/// Quiet period after the last keystroke before the query is applied.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Encoder quality passed to `canvas.toDataURL` for card exports.
pub const EXPORT_JPEG_QUALITY: f64 = 0.95;
pub const EXPORT_MIME_TYPE: &str = "image/jpeg";
pub const EXPORT_FILE_EXTENSION: &str = "jpeg";

pub const CARD_ID_PREFIX: &str = "card-";

pub const SEARCH_LABEL: &str = "Search by Country";
pub const DOWNLOAD_BUTTON_LABEL: &str = "Download";
