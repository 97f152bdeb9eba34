//! The page registry: one entry per documentation topic.
//!
//! Pages come in two variants. Static pages render a fixed heading and
//! perform no I/O. Document pages read one co-located markdown file at
//! render time; some carry an image carousel above the content.
//!
//! Every registry url has a matching item in [`apd_nav::NAV`]; the tables
//! are kept in lockstep (checked by test below).

use apd_nav::Crumb;

/// Fixed-size image carousel rendered above document content.
///
/// Images use sequential numeric filenames under the media directory:
/// `{dir}/1.png` … `{dir}/{count}.png`. The first image is eagerly loaded,
/// the rest lazily. Controls step one image at a time and do not loop.
#[derive(Clone, Copy, Debug)]
pub struct Carousel {
    /// Directory under the media namespace holding the numbered images.
    pub dir: &'static str,
    /// Number of images.
    pub count: u8,
    /// Alt text prefix; the image number is appended.
    pub alt: &'static str,
}

/// Content source of a page.
#[derive(Clone, Copy, Debug)]
pub enum PageKind {
    /// A fixed heading, no I/O.
    Static {
        /// Heading text.
        heading: &'static str,
    },
    /// Body sourced from a markdown file relative to the content directory.
    Document {
        /// File path relative to the content directory.
        file: &'static str,
        /// Optional carousel rendered above the transformed content.
        carousel: Option<Carousel>,
    },
}

/// One documentation page.
#[derive(Clone, Copy, Debug)]
pub struct PageSpec {
    /// Request path, matched exactly.
    pub url: &'static str,
    /// Breadcrumb trail; the last entry is the current page.
    pub crumbs: &'static [Crumb],
    /// Content source.
    pub kind: PageKind,
}

/// All documentation pages.
pub static PAGES: &[PageSpec] = &[
    PageSpec {
        url: "/introduction/home",
        crumbs: &[
            Crumb::link("Introduction", "/introduction"),
            Crumb::page("What is AutoPBI?"),
        ],
        kind: PageKind::Static {
            heading: "What is AutoPBI?",
        },
    },
    PageSpec {
        url: "/introduction/installation",
        crumbs: &[
            Crumb::link("Introduction", "/introduction"),
            Crumb::page("Installation"),
        ],
        kind: PageKind::Static {
            heading: "Installation",
        },
    },
    PageSpec {
        url: "/features/authentication",
        crumbs: &[
            Crumb::link("Features", "/features"),
            Crumb::page("Authentication"),
        ],
        kind: PageKind::Static {
            heading: "Authentication",
        },
    },
    PageSpec {
        url: "/features/publish",
        crumbs: &[
            Crumb::link("Features", "/features"),
            Crumb::page("Bulk Publish"),
        ],
        kind: PageKind::Static {
            heading: "Bulk Publish",
        },
    },
    PageSpec {
        url: "/features/download",
        crumbs: &[
            Crumb::link("Features", "/features"),
            Crumb::page("Bulk Download"),
        ],
        kind: PageKind::Static {
            heading: "Bulk Download",
        },
    },
    PageSpec {
        url: "/features/delete",
        crumbs: &[
            Crumb::link("Features", "/features"),
            Crumb::page("Bulk Delete"),
        ],
        kind: PageKind::Static {
            heading: "Bulk Delete",
        },
    },
    PageSpec {
        url: "/features/clone",
        crumbs: &[
            Crumb::link("Features", "/features"),
            Crumb::page("Bulk Clone"),
        ],
        kind: PageKind::Static {
            heading: "Bulk Clone",
        },
    },
    PageSpec {
        url: "/features/scan",
        crumbs: &[Crumb::link("Features", "/features"), Crumb::page("Bulk Scan")],
        kind: PageKind::Static {
            heading: "Bulk Scan",
        },
    },
    PageSpec {
        url: "/features/refresh",
        crumbs: &[
            Crumb::link("Features", "/features"),
            Crumb::page("Bulk Refresh"),
        ],
        kind: PageKind::Static {
            heading: "Bulk Refresh",
        },
    },
    PageSpec {
        url: "/features/takeover",
        crumbs: &[
            Crumb::link("Features", "/features"),
            Crumb::page("Bulk Takeover"),
        ],
        kind: PageKind::Static {
            heading: "Bulk Takeover",
        },
    },
    PageSpec {
        url: "/development/popup-system",
        crumbs: &[
            Crumb::link("Development", "/development"),
            Crumb::page("Popup System"),
        ],
        kind: PageKind::Document {
            file: "development/popup-system.md",
            carousel: None,
        },
    },
    PageSpec {
        url: "/development/ui-components",
        crumbs: &[
            Crumb::link("Development", "/development"),
            Crumb::page("UI Components"),
        ],
        kind: PageKind::Document {
            file: "development/ui-components.md",
            carousel: Some(Carousel {
                dir: "ui-components",
                count: 7,
                alt: "AutoPBI interface screenshot",
            }),
        },
    },
];

/// Look up a page by request path (exact match).
#[must_use]
pub fn find(url: &str) -> Option<&'static PageSpec> {
    PAGES.iter().find(|p| p.url == url)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_find_known_page() {
        let page = find("/features/publish").unwrap();
        assert_eq!(page.url, "/features/publish");
        assert!(matches!(
            page.kind,
            PageKind::Static {
                heading: "Bulk Publish"
            }
        ));
    }

    #[test]
    fn test_find_unknown_page() {
        assert!(find("/features").is_none());
        assert!(find("/nope").is_none());
    }

    #[test]
    fn test_page_urls_unique() {
        let mut seen = HashSet::new();
        for page in PAGES {
            assert!(seen.insert(page.url), "duplicate page url: {}", page.url);
        }
    }

    #[test]
    fn test_every_nav_item_has_a_page() {
        for section in apd_nav::NAV {
            for item in section.items {
                assert!(
                    find(item.url).is_some(),
                    "nav item {} has no page",
                    item.url
                );
            }
        }
    }

    #[test]
    fn test_every_page_has_a_nav_item() {
        for page in PAGES {
            let in_nav = apd_nav::NAV
                .iter()
                .flat_map(|s| s.items)
                .any(|i| i.url == page.url);
            assert!(in_nav, "page {} missing from navigation", page.url);
        }
    }

    #[test]
    fn test_crumbs_end_unlinked() {
        for page in PAGES {
            let last = page.crumbs.last().unwrap();
            assert!(
                last.url.is_none(),
                "terminal crumb of {} must not link",
                page.url
            );
        }
    }
}
