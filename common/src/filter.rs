//! Country filter over the loaded dataset.

use crate::university::University;

/// Records whose country contains `query`, ignoring case, in dataset order.
/// An absent dataset yields nothing.
pub fn filter_by_country<'a>(dataset: Option<&'a [University]>, query: &str) -> Vec<&'a University> {
    let Some(records) = dataset else {
        return Vec::new();
    };
    let lowered_query = query.to_lowercase();
    records.iter().filter(|r| r.country_matches(&lowered_query)).collect()
}
