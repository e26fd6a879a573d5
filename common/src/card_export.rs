//! Naming of rendered cards and of the files exported from them.

use crate::app_const::{CARD_ID_PREFIX, EXPORT_FILE_EXTENSION};

/// Applied to the cloned card root after its computed style is inlined.
/// The image is sized to the border box, so the outer margin must not shift it.
pub const EXPORT_ROOT_STYLE_OVERRIDES: &[(&str, &str)] = &[("margin", "0")];

pub fn card_element_id(index: usize) -> String {
    format!("{CARD_ID_PREFIX}{index}")
}

/// `<record name>.jpeg`, the record name is kept verbatim.
pub fn export_file_name(record_name: &str) -> String {
    format!("{record_name}.{EXPORT_FILE_EXTENSION}")
}
