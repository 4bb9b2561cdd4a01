use serde::{Deserialize, Serialize};

/// Whether the catalog tracks movies or series. Selects the listing endpoint
/// and the evaluation granularity (whole movie vs. per season).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Movies,
    Series,
}

/// Media-manager connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub enabled: bool,
    pub url: String,
    pub api_key: String,
    pub kind: CatalogKind,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: String::new(),
            api_key: String::new(),
            kind: CatalogKind::Movies,
        }
    }
}
