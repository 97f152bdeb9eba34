//! Site facade: url lookup, body rendering, layout shell.

use std::path::PathBuf;

use crate::layout;
use crate::page::{RenderError, render_body};
use crate::registry;

/// A fully rendered page.
#[derive(Clone, Debug)]
pub struct RenderedPage {
    /// Complete HTML document.
    pub html: String,
    /// Page title.
    pub title: String,
}

/// The documentation site.
///
/// Holds the handful of values that vary by deployment (content directory,
/// download url, version label); the page registry and navigation table are
/// process-wide statics. Safe to share across request handlers without
/// locking: nothing here is mutated after construction.
pub struct Site {
    content_root: PathBuf,
    download_url: String,
    version: String,
}

impl Site {
    /// Create a site reading document pages under `content_root`.
    #[must_use]
    pub fn new(content_root: PathBuf) -> Self {
        Self {
            content_root,
            download_url: apd_nav::DOWNLOAD_URL.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }

    /// Override the header download button target.
    #[must_use]
    pub fn with_download_url(mut self, url: impl Into<String>) -> Self {
        self.download_url = url.into();
        self
    }

    /// Override the version label shown in the sidebar.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Download url shown in the header.
    #[must_use]
    pub fn download_url(&self) -> &str {
        &self.download_url
    }

    /// Version label shown in the sidebar.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Render the page at `path` into a complete HTML document.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::PageNotFound`] for urls not in the registry and
    /// [`RenderError::ContentFile`] when a document page's source file cannot
    /// be read.
    pub fn render(&self, path: &str) -> Result<RenderedPage, RenderError> {
        let spec =
            registry::find(path).ok_or_else(|| RenderError::PageNotFound(path.to_owned()))?;

        let body = render_body(&self.content_root, spec)?;
        tracing::debug!(path, title = %body.title, "rendered page");

        let html = layout::render_document(
            path,
            spec.crumbs,
            &body.title,
            &self.download_url,
            &self.version,
            &body.html,
        );

        Ok(RenderedPage {
            html,
            title: body.title,
        })
    }
}
