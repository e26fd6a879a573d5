//! Parsing of the static dataset document.

use crate::errors::FetchError;
use crate::university::University;

/// Parses the body of the dataset response.
/// The top-level value must be an array of records.
pub fn parse_dataset(body: &str) -> Result<Vec<University>, FetchError> {
    let records: Vec<University> = serde_json::from_str(body)?;
    Ok(records)
}

/// Accepts the 2xx range, like `Response.ok`.
pub fn check_status(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Status(status))
    }
}

/// Outcome of the load as the page keeps it: any failure leaves the dataset absent.
pub fn loaded_or_absent(result: Result<Vec<University>, FetchError>) -> Option<Vec<University>> {
    result.ok()
}
