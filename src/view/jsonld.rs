use maud::{Markup, PreEscaped, html};
use serde_json::json;

use crate::meta::PageMetadata;

/// schema.org WebSite descriptor injected into the document head.
#[must_use]
pub fn render_json_ld(meta: &PageMetadata) -> Markup {
    let data = json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": meta.title_default,
        "url": meta.base_url,
        "description": meta.description,
        "inLanguage": "zh-CN",
    });
    html! {
        script type="application/ld+json" { (PreEscaped(data.to_string())) }
    }
}
