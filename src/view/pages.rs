use maud::{Markup, html};

use crate::meta::PageMetadata;

#[must_use]
pub fn render_home(meta: &PageMetadata) -> Markup {
    html! {
        div class="tl_page_body" {
            div class="container" {
                section class="tl_main_hero" {
                    h1 { (meta.title_default) }
                    p class="tl_main_lead" { (meta.description) }
                    a class="btn btn-primary" href="/download" { "立即下载" }
                }
            }
        }
    }
}

#[must_use]
pub fn render_blog() -> Markup {
    html! {
        div class="tl_page_body" {
            div class="container" {
                h1 { "博客" }
                p { "产品动态与更新日志。" }
            }
        }
    }
}

#[must_use]
pub fn render_download() -> Markup {
    html! {
        div class="tl_page_body" {
            div class="container" {
                h1 { "下载" }
                ul class="tl_download_list" {
                    li { a href="https://telegram.org/dl/ios" target="_blank" rel="noopener noreferrer" { "iPhone/iPad" } }
                    li { a href="https://telegram.org/dl/web" target="_blank" rel="noopener noreferrer" { "网页版" } }
                }
            }
        }
    }
}
