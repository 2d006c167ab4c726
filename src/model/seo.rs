use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::SiteError;

/// SEO copy served for one domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSeo {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

/// On-disk catalog: a required default record plus per-domain overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoCatalog {
    pub default: SiteSeo,
    #[serde(default)]
    pub domains: HashMap<String, SiteSeo>,
}

#[async_trait]
pub trait SeoStore: Send + Sync {
    async fn seo_for_domain(&self, domain: &str) -> Result<SiteSeo, SiteError>;
}

/// In-memory store backed by a JSON catalog loaded at startup.
#[derive(Debug, Clone)]
pub struct JsonSeoStore {
    catalog: SeoCatalog,
}

impl JsonSeoStore {
    #[must_use]
    pub fn new(catalog: SeoCatalog) -> Self {
        Self { catalog }
    }

    /// Load the catalog file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self, SiteError> {
        let raw = std::fs::read_to_string(path)?;
        let catalog: SeoCatalog = serde_json::from_str(&raw)?;
        Ok(Self::new(catalog))
    }
}

#[async_trait]
impl SeoStore for JsonSeoStore {
    async fn seo_for_domain(&self, domain: &str) -> Result<SiteSeo, SiteError> {
        // lookup is keyed by bare domain; callers may still pass host:port
        let bare = domain.split(':').next().unwrap_or(domain);
        Ok(self
            .catalog
            .domains
            .get(bare)
            .unwrap_or(&self.catalog.default)
            .clone())
    }
}
