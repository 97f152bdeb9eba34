//! Page body rendering.
//!
//! Turns a [`PageSpec`] into body HTML: a fixed heading for static pages,
//! or the transformed contents of one markdown file (optionally preceded by
//! a carousel) for document pages.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use apd_renderer::{HtmlRenderer, escape_html};

use crate::registry::{Carousel, PageKind, PageSpec};

/// Error returned when page rendering fails.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// No page registered at the given url.
    #[error("page not found: {0}")]
    PageNotFound(String),
    /// Source file missing or unreadable.
    ///
    /// Not caught locally; the server's error boundary turns it into a
    /// response.
    #[error("cannot read content file {}: {source}", .path.display())]
    ContentFile {
        /// Path of the file that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Rendered page body, before the layout shell is applied.
#[derive(Clone, Debug)]
pub struct PageBody {
    /// Body HTML.
    pub html: String,
    /// Page title, for the document `<title>`.
    pub title: String,
}

/// Render the body of a page.
///
/// Static pages are pure; document pages perform exactly one file read.
pub(crate) fn render_body(content_root: &Path, spec: &PageSpec) -> Result<PageBody, RenderError> {
    match &spec.kind {
        PageKind::Static { heading } => Ok(PageBody {
            html: format!(
                r#"<h3 class="page-heading">{}</h3>"#,
                escape_html(heading)
            ),
            title: (*heading).to_owned(),
        }),
        PageKind::Document { file, carousel } => {
            let path = content_root.join(file);
            let markdown =
                std::fs::read_to_string(&path).map_err(|source| RenderError::ContentFile {
                    path: path.clone(),
                    source,
                })?;

            let result = HtmlRenderer::new()
                .with_title_extraction()
                .render_markdown(&markdown);

            let mut html = String::with_capacity(result.html.len() + 512);
            if let Some(carousel) = carousel {
                render_carousel(carousel, &mut html);
            }
            html.push_str(r#"<div class="prose">"#);
            html.push_str(&result.html);
            html.push_str("</div>");

            let title = result
                .title
                .or_else(|| spec.crumbs.last().map(|c| c.name.to_owned()))
                .unwrap_or_else(|| spec.url.to_owned());

            Ok(PageBody { html, title })
        }
    }
}

/// Emit carousel markup: numbered images in filename order, first eager.
fn render_carousel(carousel: &Carousel, out: &mut String) {
    write!(
        out,
        r#"<div class="carousel" data-count="{}">"#,
        carousel.count
    )
    .unwrap();
    out.push_str(concat!(
        r#"<button type="button" class="carousel-control carousel-prev" "#,
        r#"aria-label="Previous image" disabled>&#8249;</button>"#,
    ));
    out.push_str(r#"<div class="carousel-track">"#);
    for n in 1..=carousel.count {
        let loading = if n == 1 { "eager" } else { "lazy" };
        write!(
            out,
            r#"<img src="/media/{dir}/{n}.png" alt="{alt} ({n} of {count})" loading="{loading}">"#,
            dir = carousel.dir,
            alt = escape_html(carousel.alt),
            count = carousel.count,
        )
        .unwrap();
    }
    out.push_str("</div>");
    out.push_str(concat!(
        r#"<button type="button" class="carousel-control carousel-next" "#,
        r#"aria-label="Next image">&#8250;</button>"#,
    ));
    out.push_str("</div>");
}
