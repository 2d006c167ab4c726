use actix_web::http::header;
use actix_web::web::Data;
use actix_web::{HttpRequest, HttpResponse};
use maud::Markup;

use crate::config::SiteConfig;
use crate::meta::{PageMetadata, build_page_metadata};
use crate::model::seo::JsonSeoStore;
use crate::view::{layout, pages};

fn request_host(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
}

async fn page_metadata(
    req: &HttpRequest,
    store: &JsonSeoStore,
    config: &SiteConfig,
) -> Result<PageMetadata, actix_web::Error> {
    build_page_metadata(store, request_host(req), config)
        .await
        .map_err(|e| {
            tracing::error!("seo lookup failed: {e}");
            actix_web::error::ErrorInternalServerError(e)
        })
}

fn html_response(markup: Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(markup.into_string())
}

pub async fn home(
    req: HttpRequest,
    store: Data<JsonSeoStore>,
    config: Data<SiteConfig>,
) -> Result<HttpResponse, actix_web::Error> {
    let meta = page_metadata(&req, store.get_ref(), config.get_ref()).await?;
    let markup = layout::render_page(&meta, None, pages::render_home(&meta));
    Ok(html_response(markup))
}

pub async fn blog(
    req: HttpRequest,
    store: Data<JsonSeoStore>,
    config: Data<SiteConfig>,
) -> Result<HttpResponse, actix_web::Error> {
    let meta = page_metadata(&req, store.get_ref(), config.get_ref()).await?;
    let markup = layout::render_page(&meta, Some("博客"), pages::render_blog());
    Ok(html_response(markup))
}

pub async fn download(
    req: HttpRequest,
    store: Data<JsonSeoStore>,
    config: Data<SiteConfig>,
) -> Result<HttpResponse, actix_web::Error> {
    let meta = page_metadata(&req, store.get_ref(), config.get_ref()).await?;
    let markup = layout::render_page(&meta, Some("下载"), pages::render_download());
    Ok(html_response(markup))
}
