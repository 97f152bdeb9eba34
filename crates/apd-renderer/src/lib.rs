//! Markdown to HTML rendering for the AutoPBI documentation site.
//!
//! Provides [`HtmlRenderer`], an event-driven renderer over pulldown-cmark
//! that produces semantic HTML5:
//!
//! - GFM tables (with per-column alignment), strikethrough, and task lists
//! - raw HTML passthrough, block and inline
//! - fenced code blocks emitted as `<pre><code class="language-…">` so a
//!   client-side highlighter can attach
//! - heading anchor ids with duplicate suffixing, a table of contents, and
//!   optional first-H1 title extraction
//!
//! # Example
//!
//! ```
//! use apd_renderer::HtmlRenderer;
//!
//! let result = HtmlRenderer::new()
//!     .with_title_extraction()
//!     .render_markdown("# Hello\n\n**Bold** text");
//! assert_eq!(result.title.as_deref(), Some("Hello"));
//! ```

mod renderer;
mod state;

pub use renderer::{HtmlRenderer, RenderResult};
pub use state::{TocEntry, escape_html};
