//! Rendering state helpers: headings, tables, code blocks, images.

use std::collections::HashMap;

use pulldown_cmark::Alignment;

/// Table of contents entry collected while rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TocEntry {
    /// Heading level (2-6).
    pub level: u8,
    /// Plain heading text, inline markup stripped.
    pub title: String,
    /// Anchor id, unique within the document.
    pub id: String,
}

/// Escape text for HTML element content and attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Derive an anchor id from heading text.
///
/// Lowercases, keeps alphanumerics, maps runs of anything else to a single
/// hyphen. Uniqueness is handled by [`HeadingState`].
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("section");
    }
    slug
}

/// Heading currently being collected.
struct CurrentHeading {
    level: u8,
    /// Plain text, for the ToC and the anchor id.
    text: String,
    /// Inline HTML, for the rendered tag body.
    html: String,
}

/// Tracks heading collection, anchor id uniqueness, ToC, and the title.
pub(crate) struct HeadingState {
    extract_title: bool,
    title: Option<String>,
    toc: Vec<TocEntry>,
    used_ids: HashMap<String, usize>,
    current: Option<CurrentHeading>,
}

impl HeadingState {
    pub(crate) fn new(extract_title: bool) -> Self {
        Self {
            extract_title,
            title: None,
            toc: Vec::new(),
            used_ids: HashMap::new(),
            current: None,
        }
    }

    pub(crate) fn start(&mut self, level: u8) {
        self.current = Some(CurrentHeading {
            level,
            text: String::new(),
            html: String::new(),
        });
    }

    pub(crate) fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        if let Some(current) = &mut self.current {
            current.text.push_str(text);
        }
    }

    pub(crate) fn push_html(&mut self, html: &str) {
        if let Some(current) = &mut self.current {
            current.html.push_str(html);
        }
    }

    /// Finish the current heading: record title/ToC and return
    /// `(level, id, inline html)` for the caller to emit.
    pub(crate) fn finish(&mut self) -> Option<(u8, String, String)> {
        let current = self.current.take()?;
        let text = current.text.trim().to_owned();
        let id = self.unique_id(&slugify(&text));

        if current.level == 1 {
            if self.extract_title && self.title.is_none() {
                self.title = Some(text);
            }
        } else {
            self.toc.push(TocEntry {
                level: current.level,
                title: text,
                id: id.clone(),
            });
        }

        Some((current.level, id, current.html))
    }

    /// Suffix duplicate ids: `faq`, `faq-1`, `faq-2`, …
    fn unique_id(&mut self, slug: &str) -> String {
        let count = self.used_ids.entry(slug.to_owned()).or_insert(0);
        let id = if *count == 0 {
            slug.to_owned()
        } else {
            format!("{slug}-{count}")
        };
        *count += 1;
        id
    }

    pub(crate) fn take_title(&mut self) -> Option<String> {
        self.title.take()
    }

    pub(crate) fn take_toc(&mut self) -> Vec<TocEntry> {
        std::mem::take(&mut self.toc)
    }
}

/// Tracks table alignment and head/body position.
#[derive(Default)]
pub(crate) struct TableState {
    alignments: Vec<Alignment>,
    in_head: bool,
    cell: usize,
}

impl TableState {
    pub(crate) fn start(&mut self, alignments: Vec<Alignment>) {
        self.alignments = alignments;
        self.in_head = false;
        self.cell = 0;
    }

    pub(crate) fn start_head(&mut self) {
        self.in_head = true;
        self.cell = 0;
    }

    pub(crate) fn end_head(&mut self) {
        self.in_head = false;
    }

    pub(crate) fn start_row(&mut self) {
        self.cell = 0;
    }

    pub(crate) fn next_cell(&mut self) {
        self.cell += 1;
    }

    pub(crate) fn is_in_head(&self) -> bool {
        self.in_head
    }

    /// Style attribute for the current cell, empty for unaligned columns.
    pub(crate) fn current_alignment_style(&self) -> &'static str {
        match self.alignments.get(self.cell) {
            Some(Alignment::Left) => r#" style="text-align: left""#,
            Some(Alignment::Center) => r#" style="text-align: center""#,
            Some(Alignment::Right) => r#" style="text-align: right""#,
            _ => "",
        }
    }
}

/// Collects fenced code block content until the closing fence.
#[derive(Default)]
pub(crate) struct CodeBlockState {
    active: bool,
    lang: Option<String>,
    content: String,
}

impl CodeBlockState {
    pub(crate) fn start(&mut self, lang: Option<String>) {
        self.active = true;
        self.lang = lang;
        self.content.clear();
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.content.push_str(text);
    }

    pub(crate) fn end(&mut self) -> (Option<String>, String) {
        self.active = false;
        (self.lang.take(), std::mem::take(&mut self.content))
    }
}

/// Collects image alt text between `Tag::Image` and `TagEnd::Image`.
#[derive(Default)]
pub(crate) struct ImageState {
    active: bool,
    alt: String,
}

impl ImageState {
    pub(crate) fn start(&mut self) {
        self.active = true;
        self.alt.clear();
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.alt.push_str(text);
    }

    pub(crate) fn end(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.alt)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_plain_unchanged() {
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Section Title"), "section-title");
        assert_eq!(slugify("Install npm!"), "install-npm");
        assert_eq!(slugify("  Spaced  out  "), "spaced-out");
        assert_eq!(slugify("Что это"), "что-это");
    }

    #[test]
    fn test_slugify_empty_falls_back() {
        assert_eq!(slugify("!!!"), "section");
    }

    #[test]
    fn test_heading_state_dedupes_ids() {
        let mut state = HeadingState::new(false);

        state.start(2);
        state.push_text("FAQ");
        let (_, id1, _) = state.finish().unwrap();

        state.start(2);
        state.push_text("FAQ");
        let (_, id2, _) = state.finish().unwrap();

        assert_eq!(id1, "faq");
        assert_eq!(id2, "faq-1");
    }

    #[test]
    fn test_heading_state_title_extraction() {
        let mut state = HeadingState::new(true);

        state.start(1);
        state.push_text("Document Title");
        state.push_html("Document Title");
        state.finish().unwrap();

        state.start(1);
        state.push_text("Second H1");
        state.finish().unwrap();

        assert_eq!(state.take_title().as_deref(), Some("Document Title"));
        // H1 headings never enter the ToC
        assert!(state.take_toc().is_empty());
    }

    #[test]
    fn test_table_state_alignment() {
        let mut table = TableState::default();
        table.start(vec![Alignment::Left, Alignment::None, Alignment::Right]);
        table.start_head();

        assert_eq!(
            table.current_alignment_style(),
            r#" style="text-align: left""#
        );
        table.next_cell();
        assert_eq!(table.current_alignment_style(), "");
        table.next_cell();
        assert_eq!(
            table.current_alignment_style(),
            r#" style="text-align: right""#
        );
    }
}
