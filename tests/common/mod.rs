use tgcn_site::config::SiteConfig;
use tgcn_site::model::seo::{JsonSeoStore, SeoCatalog};

pub const CATALOG_JSON: &str = r#"{
    "default": {
        "title": "Telegram中文版",
        "description": "安全、快速的即时通讯应用。",
        "keywords": "Telegram,电报,即时通讯"
    },
    "domains": {
        "example.com": {
            "title": "示例中文站",
            "description": "示例站点的描述。",
            "keywords": "示例,演示"
        }
    }
}"#;

#[must_use]
pub fn test_store() -> JsonSeoStore {
    let catalog: SeoCatalog = serde_json::from_str(CATALOG_JSON).unwrap();
    JsonSeoStore::new(catalog)
}

#[must_use]
pub fn production_config() -> SiteConfig {
    SiteConfig::from_values(Some("production".to_string()), None)
}

#[must_use]
pub fn dev_config() -> SiteConfig {
    SiteConfig::from_values(None, None)
}
