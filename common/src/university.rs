//! University record as found in the static dataset.

use serde::{Deserialize, Deserializer};
use serde_json::Value;


#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct University {
    pub name: String,
    // the dataset does not guarantee a text country on every row
    #[serde(default, deserialize_with = "text_or_none")]
    pub country: Option<String>,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub web_pages: Vec<String>,
}

fn text_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}

impl University {
    /// `lowered_query` must already be lower-cased.
    /// Records without a country never match.
    pub fn country_matches(&self, lowered_query: &str) -> bool {
        match &self.country {
            Some(country) => country.to_lowercase().contains(lowered_query),
            None => false,
        }
    }

    pub fn country_label(&self) -> &str {
        self.country.as_deref().unwrap_or_default()
    }

    pub fn joined_domains(&self) -> String {
        self.domains.join(", ")
    }

    pub fn primary_web_page(&self) -> Option<&str> {
        self.web_pages.first().map(String::as_str)
    }
}
