use maud::{DOCTYPE, Markup, html};

use crate::meta::PageMetadata;
use crate::view::head::render_head_meta;
use crate::view::jsonld::render_json_ld;

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        href: "/",
        label: "首页",
    },
    NavLink {
        href: "/blog",
        label: "博客",
    },
    NavLink {
        href: "/download",
        label: "下载",
    },
];

pub const TWITTER_URL: &str = "https://twitter.com/telegram";

pub struct FooterLink {
    pub href: &'static str,
    pub label: &'static str,
    pub external: bool,
}

pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [FooterLink],
}

pub const FOOTER_ABOUT_HEADING: &str = "Telegram";
pub const FOOTER_ABOUT_TEXT: &str =
    "Telegram中文版是一款安全、快速的即时通讯应用，支持多设备同步、端到端加密，提供丰富的聊天功能和全球用户社群。";

pub const FOOTER_LINK_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        heading: "关于",
        links: &[
            FooterLink {
                href: "/blog",
                label: "博客",
                external: false,
            },
            FooterLink {
                href: "https://telegram.org/privacy",
                label: "隐私政策",
                external: true,
            },
        ],
    },
    FooterColumn {
        heading: "移动应用",
        links: &[
            FooterLink {
                href: "https://telegram.org/dl/ios",
                label: "iPhone/iPad",
                external: true,
            },
            FooterLink {
                href: "/download",
                label: "Android",
                external: false,
            },
        ],
    },
    FooterColumn {
        heading: "桌面应用",
        links: &[
            FooterLink {
                href: "/download",
                label: "PC/Mac/Linux",
                external: false,
            },
            FooterLink {
                href: "https://telegram.org/dl/web",
                label: "网页版",
                external: true,
            },
        ],
    },
];

/// The about blurb plus the three link columns.
pub const FOOTER_COLUMN_COUNT: usize = 1 + FOOTER_LINK_COLUMNS.len();

/// Full document shell around `content`.
#[must_use]
pub fn render_page(meta: &PageMetadata, page: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="zh-CN" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                link rel="icon" href="/favicon.svg" type="image/svg+xml";
                link rel="apple-touch-icon" sizes="180x180" href="/logo.png";
                link rel="manifest" href="/site.webmanifest";
                link href="/bootstrap.min.css" rel="stylesheet";
                link href="/telegram.css" rel="stylesheet" media="screen";
                link href="/style.css" rel="stylesheet" media="screen";
                (render_head_meta(meta, page))
                (render_json_ld(meta))
            }
            body {
                div class="tl_page_wrap" {
                    (render_header())
                    (content)
                    (render_footer())
                }
            }
        }
    }
}

#[must_use]
pub fn render_header() -> Markup {
    html! {
        div class="tl_page_head navbar navbar-static-top navbar navbar-tg" {
            div class="navbar-inner" {
                div class="container clearfix" {
                    ul class="nav navbar-nav navbar-right" {
                        li class="navbar-twitter" {
                            a href=(TWITTER_URL) target="_blank" rel="noopener noreferrer" {
                                i class="icon icon-twitter" {}
                                " 推特"
                            }
                        }
                    }
                    ul class="nav navbar-nav" id="main_menu" {
                        @for link in &NAV_LINKS {
                            li class=[(link.href == "/").then_some("active")] {
                                a href=(link.href) { (link.label) }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_footer() -> Markup {
    html! {
        div class="footer_wrap" {
            div class="footer_columns_wrap footer_desktop" {
                div class="footer_column footer_column_telegram" {
                    h5 { (FOOTER_ABOUT_HEADING) }
                    div class="footer_telegram_description" {
                        (FOOTER_ABOUT_TEXT)
                    }
                }
                @for column in &FOOTER_LINK_COLUMNS {
                    div class="footer_column" {
                        h5 { (column.heading) }
                        ul {
                            @for link in column.links {
                                li {
                                    a href=(link.href)
                                        target=[link.external.then_some("_blank")]
                                        rel=[link.external.then_some("noopener noreferrer")] {
                                        (link.label)
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seo::SiteSeo;

    fn sample_meta() -> PageMetadata {
        let seo = SiteSeo {
            title: "站点".to_string(),
            description: "描述".to_string(),
            keywords: "a,b".to_string(),
        };
        PageMetadata::assemble(&seo, "http://localhost:3001", "")
    }

    #[test]
    fn header_has_exactly_three_menu_links() {
        assert_eq!(NAV_LINKS.len(), 3);
        let markup = render_header().into_string();
        for link in &NAV_LINKS {
            assert!(markup.contains(&format!(r#"<a href="{}">{}</a>"#, link.href, link.label)));
        }
        assert!(markup.contains(TWITTER_URL));
    }

    #[test]
    fn footer_has_exactly_four_columns() {
        assert_eq!(FOOTER_COLUMN_COUNT, 4);
        let markup = render_footer().into_string();
        assert_eq!(markup.matches("<h5>").count(), 4);
        assert!(markup.contains("https://telegram.org/privacy"));
        assert!(markup.contains("https://telegram.org/dl/ios"));
        assert!(markup.contains("https://telegram.org/dl/web"));
    }

    #[test]
    fn shell_is_stable_regardless_of_content() {
        let meta = sample_meta();
        let empty = render_page(&meta, None, html! {}).into_string();
        let filled = render_page(&meta, None, html! { div { "正文" } }).into_string();
        for markup in [&empty, &filled] {
            assert!(markup.starts_with("<!DOCTYPE html>"));
            assert!(markup.contains(r#"<html lang="zh-CN">"#));
            assert_eq!(markup.matches(r#"id="main_menu""#).count(), 1);
            assert_eq!(markup.matches("<h5>").count(), 4);
        }
        assert!(filled.contains("正文"));
    }

    #[test]
    fn external_footer_links_open_in_new_tab() {
        let markup = render_footer().into_string();
        assert!(markup.contains(
            r#"<a href="https://telegram.org/privacy" target="_blank" rel="noopener noreferrer">"#
        ));
        assert!(markup.contains(r#"<a href="/download">"#));
    }
}
