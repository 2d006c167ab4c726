use maud::{Markup, html};

use crate::meta::PageMetadata;

/// Render the metadata block emitted inside `<head>`.
#[must_use]
pub fn render_head_meta(meta: &PageMetadata, page: Option<&str>) -> Markup {
    html! {
        title { (meta.page_title(page)) }
        meta name="description" content=(meta.description);
        meta name="keywords" content=(meta.keywords);
        meta name="author" content=(meta.author);
        link rel="canonical" href=(meta.canonical);
        meta property="og:type" content=(meta.open_graph.kind);
        meta property="og:locale" content=(meta.open_graph.locale);
        meta property="og:url" content=(meta.open_graph.url);
        meta property="og:site_name" content=(meta.open_graph.site_name);
        meta property="og:title" content=(meta.open_graph.title);
        meta property="og:description" content=(meta.open_graph.description);
        @for image in &meta.open_graph.images {
            meta property="og:image" content=(image.url);
            meta property="og:image:width" content=(image.width);
            meta property="og:image:height" content=(image.height);
            meta property="og:image:alt" content=(image.alt);
        }
        meta name="twitter:card" content=(meta.twitter.card);
        meta name="twitter:title" content=(meta.twitter.title);
        meta name="twitter:description" content=(meta.twitter.description);
        @for image in &meta.twitter.images {
            meta name="twitter:image" content=(image);
        }
        meta name="robots" content=(meta.robots.as_meta_content());
        meta name="googlebot" content=(meta.robots.googlebot.as_meta_content());
        @if !meta.google_verification.is_empty() {
            meta name="google-site-verification" content=(meta.google_verification);
        }
    }
}
