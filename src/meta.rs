use crate::config::{RunMode, SiteConfig};
use crate::error::SiteError;
use crate::model::seo::{SeoStore, SiteSeo};

/// Substituted when the request carries no Host header.
pub const DEFAULT_HOST: &str = "localhost:3001";

pub const OG_IMAGE_PATH: &str = "/og-image.png";
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;
pub const SITE_LOCALE: &str = "zh_CN";
pub const SITE_AUTHOR: &str = "Telegram Team";

/// Build `scheme://host` from the inbound Host header.
///
/// Host values are passed through verbatim; no format validation here.
#[must_use]
pub fn resolve_base_url(host: Option<&str>, mode: RunMode) -> String {
    let host = match host {
        Some(h) if !h.is_empty() => h,
        _ => DEFAULT_HOST,
    };
    let scheme = if mode == RunMode::Production {
        "https"
    } else {
        "http"
    };
    format!("{scheme}://{host}")
}

#[derive(Debug, Clone)]
pub struct OpenGraphImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone)]
pub struct OpenGraph {
    pub kind: &'static str,
    pub locale: &'static str,
    pub url: String,
    pub site_name: String,
    pub title: String,
    pub description: String,
    pub images: Vec<OpenGraphImage>,
}

#[derive(Debug, Clone)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct GoogleBotPolicy {
    pub index: bool,
    pub follow: bool,
    pub max_image_preview: &'static str,
    pub max_snippet: i32,
}

impl GoogleBotPolicy {
    #[must_use]
    pub fn as_meta_content(&self) -> String {
        format!(
            "{}, {}, max-image-preview:{}, max-snippet:{}",
            if self.index { "index" } else { "noindex" },
            if self.follow { "follow" } else { "nofollow" },
            self.max_image_preview,
            self.max_snippet
        )
    }
}

#[derive(Debug, Clone)]
pub struct RobotsPolicy {
    pub index: bool,
    pub follow: bool,
    pub googlebot: GoogleBotPolicy,
}

impl Default for RobotsPolicy {
    fn default() -> Self {
        Self {
            index: true,
            follow: true,
            googlebot: GoogleBotPolicy {
                index: true,
                follow: true,
                max_image_preview: "large",
                max_snippet: -1,
            },
        }
    }
}

impl RobotsPolicy {
    #[must_use]
    pub fn as_meta_content(&self) -> String {
        format!(
            "{}, {}",
            if self.index { "index" } else { "noindex" },
            if self.follow { "follow" } else { "nofollow" }
        )
    }
}

/// Everything the head renderer needs for one request.
#[derive(Debug, Clone)]
pub struct PageMetadata {
    pub base_url: String,
    pub title_default: String,
    pub title_template: String,
    pub description: String,
    pub keywords: String,
    pub author: &'static str,
    pub canonical: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: RobotsPolicy,
    pub google_verification: String,
}

impl PageMetadata {
    #[must_use]
    pub fn assemble(seo: &SiteSeo, base_url: &str, google_verification: &str) -> Self {
        let og_image_url = format!("{base_url}{OG_IMAGE_PATH}");
        Self {
            base_url: base_url.to_string(),
            title_default: seo.title.clone(),
            title_template: format!("%s | {}", seo.title),
            description: seo.description.clone(),
            keywords: seo.keywords.clone(),
            author: SITE_AUTHOR,
            canonical: base_url.to_string(),
            open_graph: OpenGraph {
                kind: "website",
                locale: SITE_LOCALE,
                url: base_url.to_string(),
                site_name: seo.title.clone(),
                title: seo.title.clone(),
                description: seo.description.clone(),
                images: vec![OpenGraphImage {
                    url: og_image_url.clone(),
                    width: OG_IMAGE_WIDTH,
                    height: OG_IMAGE_HEIGHT,
                    alt: seo.title.clone(),
                }],
            },
            twitter: TwitterCard {
                card: "summary_large_image",
                title: seo.title.clone(),
                description: seo.description.clone(),
                images: vec![og_image_url],
            },
            robots: RobotsPolicy::default(),
            google_verification: google_verification.to_string(),
        }
    }

    /// Root page uses the default title, sub-pages go through the template.
    #[must_use]
    pub fn page_title(&self, page: Option<&str>) -> String {
        match page {
            Some(name) => self.title_template.replace("%s", name),
            None => self.title_default.clone(),
        }
    }
}

/// Resolve the request host and domain-scoped SEO copy into page metadata.
///
/// # Errors
/// Returns an error if the store lookup fails.
pub async fn build_page_metadata(
    store: &dyn SeoStore,
    host: Option<&str>,
    config: &SiteConfig,
) -> Result<PageMetadata, SiteError> {
    let base_url = resolve_base_url(host, config.run_mode);
    let domain = host.unwrap_or(DEFAULT_HOST);
    let seo = store.seo_for_domain(domain).await?;
    Ok(PageMetadata::assemble(
        &seo,
        &base_url,
        &config.google_verification,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_seo() -> SiteSeo {
        SiteSeo {
            title: "Telegram中文版".to_string(),
            description: "安全、快速的即时通讯应用".to_string(),
            keywords: "Telegram,电报,即时通讯".to_string(),
        }
    }

    #[test]
    fn production_host_gets_https() {
        assert_eq!(
            resolve_base_url(Some("example.com"), RunMode::Production),
            "https://example.com"
        );
    }

    #[test]
    fn missing_host_falls_back_to_local_default() {
        assert_eq!(
            resolve_base_url(None, RunMode::Development),
            "http://localhost:3001"
        );
        assert_eq!(
            resolve_base_url(Some(""), RunMode::Development),
            "http://localhost:3001"
        );
    }

    #[test]
    fn malformed_host_passes_through_verbatim() {
        assert_eq!(
            resolve_base_url(Some("not a host!"), RunMode::Development),
            "http://not a host!"
        );
    }

    #[test]
    fn title_template_suffixes_site_title() {
        let meta = PageMetadata::assemble(&sample_seo(), "https://example.com", "");
        assert_eq!(meta.title_default, "Telegram中文版");
        assert_eq!(meta.title_template, "%s | Telegram中文版");
        assert_eq!(meta.page_title(None), "Telegram中文版");
        assert_eq!(meta.page_title(Some("博客")), "博客 | Telegram中文版");
    }

    #[test]
    fn og_image_is_base_url_plus_fixed_path() {
        let meta = PageMetadata::assemble(&sample_seo(), "https://example.com", "");
        assert_eq!(meta.open_graph.images.len(), 1);
        let image = &meta.open_graph.images[0];
        assert_eq!(image.url, "https://example.com/og-image.png");
        assert_eq!((image.width, image.height), (1200, 630));
        assert_eq!(meta.twitter.images, vec!["https://example.com/og-image.png"]);

        let meta = PageMetadata::assemble(&sample_seo(), "http://other.example", "");
        assert_eq!(
            meta.open_graph.images[0].url,
            "http://other.example/og-image.png"
        );
    }

    #[test]
    fn verification_token_carried_through() {
        let meta = PageMetadata::assemble(&sample_seo(), "https://example.com", "tok-123");
        assert_eq!(meta.google_verification, "tok-123");
        let meta = PageMetadata::assemble(&sample_seo(), "https://example.com", "");
        assert_eq!(meta.google_verification, "");
    }

    #[test]
    fn robots_policy_directives() {
        let robots = RobotsPolicy::default();
        assert_eq!(robots.as_meta_content(), "index, follow");
        assert_eq!(
            robots.googlebot.as_meta_content(),
            "index, follow, max-image-preview:large, max-snippet:-1"
        );
    }
}
