//! The layout shell.
//!
//! Wraps rendered page content into a complete HTML document: sidebar built
//! from the navigation table, fixed header (breadcrumb trail, theme toggle,
//! download button), and a scrollable content region.

use std::fmt::Write;

use apd_nav::{Crumb, NAV};
use apd_renderer::escape_html;

/// Inline SVG symbol definitions referenced by sidebar icons.
const ICON_DEFS: &str = concat!(
    r#"<svg class="icon-defs" aria-hidden="true">"#,
    r#"<symbol id="icon-book" viewBox="0 0 16 16">"#,
    r#"<path d="M1 2.8C1 2.1 1.6 1.5 2.3 1.5H7c.6 0 1 .4 1 1v11c-.3-.4-.8-.6-1.3-.6H2.3A1.3 1.3 0 0 1 1 11.6Zm14 0c0-.7-.6-1.3-1.3-1.3H9c-.6 0-1 .4-1 1v11c.3-.4.8-.6 1.3-.6h4.4c.7 0 1.3-.6 1.3-1.3Z"/>"#,
    r#"</symbol>"#,
    r#"<symbol id="icon-download" viewBox="0 0 16 16">"#,
    r#"<path d="M7.25 1.5a.75.75 0 0 1 1.5 0v6.7l2-2a.75.75 0 1 1 1 1.1L8.5 10.6a.75.75 0 0 1-1 0L4.25 7.3a.75.75 0 1 1 1-1.1l2 2ZM2 11.25a.75.75 0 0 1 1.5 0v1.5c0 .4.3.75.75.75h7.5c.4 0 .75-.3.75-.75v-1.5a.75.75 0 0 1 1.5 0v1.5A2.25 2.25 0 0 1 11.75 15h-7.5A2.25 2.25 0 0 1 2 12.75Z"/>"#,
    r#"</symbol>"#,
    r#"<symbol id="icon-wrench" viewBox="0 0 16 16">"#,
    r#"<path d="M10.5 1a4.5 4.5 0 0 0-4.3 5.8L1.4 11.6a1.5 1.5 0 0 0 0 2.1l.9.9a1.5 1.5 0 0 0 2.1 0l4.8-4.8A4.5 4.5 0 0 0 15 5.5c0-.5-.1-1-.2-1.4l-2.6 2.6-2-.5-.5-2L12.4 1.2A4.6 4.6 0 0 0 10.5 1Z"/>"#,
    r#"</symbol>"#,
    r#"</svg>"#,
);

/// Sun/moon glyphs inside the theme toggle; the stylesheet shows one per
/// theme.
const THEME_TOGGLE: &str = concat!(
    r#"<button type="button" class="theme-toggle" aria-label="Toggle theme">"#,
    r#"<span class="theme-icon theme-icon-light">&#9728;</span>"#,
    r#"<span class="theme-icon theme-icon-dark">&#9790;</span>"#,
    r#"</button>"#,
);

/// Render a complete HTML document around page body content.
pub(crate) fn render_document(
    current_path: &str,
    crumbs: &[Crumb],
    title: &str,
    download_url: &str,
    version: &str,
    body_html: &str,
) -> String {
    let mut out = String::with_capacity(body_html.len() + 4096);

    out.push_str("<!doctype html>\n");
    out.push_str(r#"<html lang="en">"#);
    out.push_str("<head>");
    out.push_str(r#"<meta charset="utf-8">"#);
    out.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
    write!(
        out,
        "<title>{} | AutoPBI Documentation</title>",
        escape_html(title)
    )
    .unwrap();
    out.push_str(r#"<link rel="stylesheet" href="/assets/site.css">"#);
    // Applies the stored theme before first paint
    out.push_str(r#"<script src="/assets/theme.js"></script>"#);
    out.push_str("</head>");

    out.push_str("<body>");
    out.push_str(ICON_DEFS);
    out.push_str(r#"<div class="shell">"#);
    render_sidebar(current_path, version, &mut out);
    out.push_str(r#"<div class="shell-main">"#);
    render_header(crumbs, download_url, &mut out);
    write!(out, r#"<main class="content">{body_html}</main>"#).unwrap();
    out.push_str("</div></div>");
    out.push_str(r#"<script src="/assets/carousel.js" defer></script>"#);
    out.push_str("</body></html>");

    out
}

/// Render the sidebar: one group per section, exact-match active item.
fn render_sidebar(current_path: &str, version: &str, out: &mut String) {
    out.push_str(r#"<aside class="sidebar">"#);
    write!(
        out,
        concat!(
            r#"<div class="sidebar-header">"#,
            r#"<span class="site-name">AutoPBI</span>"#,
            r#"<span class="site-version">{}</span>"#,
            r#"</div>"#,
        ),
        escape_html(version)
    )
    .unwrap();

    out.push_str(r#"<nav class="sidebar-nav">"#);
    for section in NAV {
        write!(
            out,
            r#"<div class="nav-group"><span class="nav-group-label">{}</span><ul>"#,
            escape_html(section.title)
        )
        .unwrap();
        for item in section.items {
            let class = if item.is_active(current_path) {
                "nav-link active"
            } else {
                "nav-link"
            };
            out.push_str("<li>");
            write!(out, r#"<a class="{class}" href="{}">"#, escape_html(item.url)).unwrap();
            if let Some(icon) = item.icon {
                write!(
                    out,
                    r##"<svg class="nav-icon" aria-hidden="true"><use href="#{}"/></svg>"##,
                    icon.symbol()
                )
                .unwrap();
            }
            write!(out, "{}</a></li>", escape_html(item.title)).unwrap();
        }
        out.push_str("</ul></div>");
    }
    out.push_str("</nav></aside>");
}

/// Render the fixed header: sidebar toggle, breadcrumbs, theme toggle,
/// download button.
fn render_header(crumbs: &[Crumb], download_url: &str, out: &mut String) {
    out.push_str(r#"<header class="site-header">"#);
    out.push_str(concat!(
        r#"<button type="button" class="sidebar-toggle" aria-label="Toggle sidebar">"#,
        r#"&#9776;</button>"#,
    ));
    render_breadcrumbs(crumbs, out);
    out.push_str(r#"<div class="header-actions">"#);
    out.push_str(THEME_TOGGLE);
    write!(
        out,
        r#"<a class="download-button" href="{}" target="_blank" rel="noopener">Download</a>"#,
        escape_html(download_url)
    )
    .unwrap();
    out.push_str("</div></header>");
}

/// Render the breadcrumb trail.
///
/// Every entry but the last is a link; an entry without a url links to the
/// `"#"` placeholder. The last entry is plain text.
fn render_breadcrumbs(crumbs: &[Crumb], out: &mut String) {
    out.push_str(r#"<nav class="breadcrumbs" aria-label="Breadcrumb"><ol>"#);
    for (i, crumb) in crumbs.iter().enumerate() {
        if i + 1 < crumbs.len() {
            write!(
                out,
                r#"<li><a href="{}">{}</a></li>"#,
                escape_html(crumb.url.unwrap_or("#")),
                escape_html(crumb.name)
            )
            .unwrap();
            out.push_str(r#"<li class="separator" aria-hidden="true">/</li>"#);
        } else {
            write!(
                out,
                r#"<li aria-current="page">{}</li>"#,
                escape_html(crumb.name)
            )
            .unwrap();
        }
    }
    out.push_str("</ol></nav>");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sidebar(current: &str) -> String {
        let mut out = String::new();
        render_sidebar(current, "1.0.0", &mut out);
        out
    }

    fn breadcrumbs(crumbs: &[Crumb]) -> String {
        let mut out = String::new();
        render_breadcrumbs(crumbs, &mut out);
        out
    }

    #[test]
    fn test_sidebar_marks_exactly_one_item_active() {
        let html = sidebar("/features/publish");
        assert_eq!(html.matches(r#"class="nav-link active""#).count(), 1);

        // The active link is the matching one
        let active_at = html.find(r#"class="nav-link active""#).unwrap();
        let href_at = html[active_at..].find("/features/publish").unwrap();
        assert!(href_at < 60);
    }

    #[test]
    fn test_sidebar_unknown_path_marks_nothing() {
        let html = sidebar("/unknown");
        assert_eq!(html.matches(r#"class="nav-link active""#).count(), 0);
    }

    #[test]
    fn test_sidebar_no_prefix_activation() {
        let html = sidebar("/features");
        assert_eq!(html.matches(r#"class="nav-link active""#).count(), 0);
    }

    #[test]
    fn test_sidebar_renders_all_groups() {
        let html = sidebar("/introduction/home");
        for section in NAV {
            assert!(html.contains(section.title));
            for item in section.items {
                assert!(html.contains(item.url));
            }
        }
    }

    #[test]
    fn test_sidebar_sparse_icons() {
        let html = sidebar("/introduction/home");
        let icons = html.matches(r#"<svg class="nav-icon""#).count();
        let with_icon = NAV
            .iter()
            .flat_map(|s| s.items)
            .filter(|i| i.icon.is_some())
            .count();
        assert_eq!(icons, with_icon);
    }

    #[test]
    fn test_breadcrumbs_links_and_terminal_text() {
        let trail = [
            Crumb::link("Home", "/"),
            Crumb::link("Features", "/features"),
            Crumb::page("Bulk Publish"),
        ];
        let html = breadcrumbs(&trail);

        // N-1 links, one terminal text entry
        assert_eq!(html.matches("<a href=").count(), 2);
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
        assert!(html.contains(r#"<li aria-current="page">Bulk Publish</li>"#));
    }

    #[test]
    fn test_breadcrumb_without_url_gets_placeholder() {
        let trail = [Crumb::page("Features"), Crumb::page("Bulk Scan")];
        let html = breadcrumbs(&trail);

        assert!(html.contains(r##"<a href="#">Features</a>"##));
        assert!(html.contains(r#"<li aria-current="page">Bulk Scan</li>"#));
    }

    #[test]
    fn test_breadcrumb_single_entry_renders_text_only() {
        let html = breadcrumbs(&[Crumb::page("Home")]);
        assert_eq!(html.matches("<a href=").count(), 0);
        assert!(html.contains(r#"<li aria-current="page">Home</li>"#));
    }

    #[test]
    fn test_breadcrumb_names_escaped() {
        let html = breadcrumbs(&[Crumb::page("A < B")]);
        assert!(html.contains("A &lt; B"));
    }

    #[test]
    fn test_header_has_theme_toggle_and_download() {
        let mut out = String::new();
        render_header(
            &[Crumb::page("Home")],
            "https://example.com/releases",
            &mut out,
        );

        assert!(out.contains(r#"class="theme-toggle""#));
        assert!(
            out.contains(
                r#"<a class="download-button" href="https://example.com/releases" target="_blank" rel="noopener">Download</a>"#
            )
        );
    }

    #[test]
    fn test_document_wraps_body() {
        let html = render_document(
            "/introduction/home",
            &[
                Crumb::link("Introduction", "/introduction"),
                Crumb::page("What is AutoPBI?"),
            ],
            "What is AutoPBI?",
            apd_nav::DOWNLOAD_URL,
            "1.0.0",
            "<h3>What is AutoPBI?</h3>",
        );

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>What is AutoPBI? | AutoPBI Documentation</title>"));
        assert!(html.contains(r#"<main class="content"><h3>What is AutoPBI?</h3></main>"#));
        assert!(html.contains(r#"class="sidebar""#));
        assert!(html.contains(r#"class="breadcrumbs""#));
        assert!(html.ends_with("</body></html>"));
    }
}
