//! Static navigation data for the AutoPBI documentation site.
//!
//! The navigation table is defined once as [`NAV`] and never mutated.
//! Sections and items are ordered; item urls are unique across the whole
//! table and are compared against the current request path by exact string
//! match to decide the active sidebar entry.
//!
//! A duplicate url in the table is a configuration defect, not a runtime
//! condition: [`validate`] is called once at startup (and from tests), never
//! per request.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::Serialize;

/// One sidebar group: a labelled, ordered list of leaf items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NavSection {
    /// Group label shown above the items.
    pub title: &'static str,
    /// Base url of the section (breadcrumb link target).
    pub url: &'static str,
    /// Ordered leaf items.
    pub items: &'static [NavItem],
}

/// One sidebar leaf entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NavItem {
    /// Display title.
    pub title: &'static str,
    /// Link target path; identity of the item within the table.
    pub url: &'static str,
    /// Optional symbolic icon reference. Sparse: most items have none.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub icon: Option<Icon>,
}

impl NavItem {
    const fn new(title: &'static str, url: &'static str) -> Self {
        Self {
            title,
            url,
            icon: None,
        }
    }

    const fn with_icon(title: &'static str, url: &'static str, icon: Icon) -> Self {
        Self {
            title,
            url,
            icon: Some(icon),
        }
    }

    /// Whether this item should be highlighted for the given request path.
    ///
    /// Exact string match only; `/features` does not activate
    /// `/features/publish`.
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        self.url == current_path
    }
}

/// Symbolic icon reference, resolved to an inline SVG symbol id by the
/// layout shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Icon {
    /// Open book, used for introductory material.
    Book,
    /// Downward arrow into a tray.
    Download,
    /// Wrench, used for development topics.
    Wrench,
}

impl Icon {
    /// SVG symbol id referenced from the sidebar markup.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Book => "icon-book",
            Self::Download => "icon-download",
            Self::Wrench => "icon-wrench",
        }
    }
}

/// One entry in the breadcrumb trail above page content.
///
/// The last entry of a trail is rendered as plain text; all preceding
/// entries render as links, falling back to a `"#"` placeholder when no
/// url is given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Crumb {
    /// Display name.
    pub name: &'static str,
    /// Link target; `None` renders as a non-navigating placeholder.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub url: Option<&'static str>,
}

impl Crumb {
    /// A crumb that links to `url`.
    #[must_use]
    pub const fn link(name: &'static str, url: &'static str) -> Self {
        Self {
            name,
            url: Some(url),
        }
    }

    /// A crumb with no link target.
    #[must_use]
    pub const fn page(name: &'static str) -> Self {
        Self { name, url: None }
    }
}

/// External link to the AutoPBI release downloads, shown as a header button.
///
/// Overridable through `[site] download_url` in `apd.toml`.
pub const DOWNLOAD_URL: &str = "https://github.com/autopbi/autopbi/releases/latest";

/// The navigation table.
pub static NAV: &[NavSection] = &[
    NavSection {
        title: "Introduction",
        url: "/introduction",
        items: &[
            NavItem::with_icon("What is AutoPBI?", "/introduction/home", Icon::Book),
            NavItem::new("Installation", "/introduction/installation"),
        ],
    },
    NavSection {
        title: "Features",
        url: "/features",
        items: &[
            NavItem::new("Authentication", "/features/authentication"),
            NavItem::new("Bulk Publish", "/features/publish"),
            NavItem::with_icon("Bulk Download", "/features/download", Icon::Download),
            NavItem::new("Bulk Delete", "/features/delete"),
            NavItem::new("Bulk Clone", "/features/clone"),
            NavItem::new("Bulk Scan", "/features/scan"),
            NavItem::new("Bulk Refresh", "/features/refresh"),
            NavItem::new("Bulk Takeover", "/features/takeover"),
        ],
    },
    NavSection {
        title: "Development",
        url: "/development",
        items: &[
            NavItem::new("Popup System", "/development/popup-system"),
            NavItem::with_icon("UI Components", "/development/ui-components", Icon::Wrench),
        ],
    },
];

/// Error returned by [`validate`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NavError {
    /// Two items in the table share the same url.
    #[error("duplicate navigation url: {0}")]
    DuplicateUrl(String),
    /// An item url does not start with `/`.
    #[error("navigation url must be absolute: {0}")]
    RelativeUrl(String),
}

/// Check table invariants: every item url absolute and unique table-wide.
///
/// # Errors
///
/// Returns the first offending url.
pub fn validate(sections: &[NavSection]) -> Result<(), NavError> {
    let mut seen = HashSet::new();
    for section in sections {
        for item in section.items {
            if !item.url.starts_with('/') {
                return Err(NavError::RelativeUrl(item.url.to_owned()));
            }
            if !seen.insert(item.url) {
                return Err(NavError::DuplicateUrl(item.url.to_owned()));
            }
        }
    }
    Ok(())
}

/// Url of the first leaf item, used as the `/` redirect target.
#[must_use]
pub fn first_page_url() -> &'static str {
    NAV.iter()
        .flat_map(|s| s.items)
        .map(|i| i.url)
        .next()
        .unwrap_or("/")
}
