use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::utils::{deserialize_null_default, deserialize_number, deserialize_optional_number};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizedTitle {
    #[serde(default)]
    pub en: Option<String>,
    #[serde(default)]
    pub ar: Option<String>,
}

impl LocalizedTitle {
    /// First non-empty variant, English before Arabic, or `""`.
    pub fn display(&self) -> &str {
        [self.en.as_deref(), self.ar.as_deref()]
            .into_iter()
            .flatten()
            .find(|t| !t.is_empty())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: i32,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub title: LocalizedTitle,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(deserialize_with = "deserialize_number")]
    pub price: f64,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub price_sale: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn display_title(&self) -> &str {
        self.title.display()
    }

    /// Some backends stamp `updatedAt` with the creation time on insert, so
    /// only a differing timestamp counts as an update.
    pub fn was_updated(&self) -> Option<&DateTime<Utc>> {
        self.updated_at
            .as_ref()
            .filter(|updated| **updated != self.created_at)
    }
}
