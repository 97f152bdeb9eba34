//! Frontend asset serving for the AutoPBI documentation site.
//!
//! One API for both asset modes:
//!
//! - **`embed` feature on**: assets are compiled into the binary via
//!   `rust-embed` (release packaging)
//! - **`embed` feature off**: assets are read from `assets/` at runtime
//!   (development)

use std::borrow::Cow;

/// Embedded assets (only available with the `embed` feature).
#[cfg(feature = "embed")]
#[derive(rust_embed::RustEmbed)]
#[folder = "../../assets"]
#[prefix = ""]
struct Assets;

/// Directory for filesystem-based asset serving (dev mode).
#[cfg(not(feature = "embed"))]
const DEV_DIR: &str = "assets";

/// Get an asset by path (relative to `assets/`).
///
/// Returns the file contents if the asset exists, `None` otherwise.
#[cfg(feature = "embed")]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(path).map(|f| f.data)
}

/// Get an asset by path (relative to `assets/`).
///
/// Returns the file contents if the asset exists, `None` otherwise.
#[cfg(not(feature = "embed"))]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    // Reject traversal before touching the filesystem
    if path.split('/').any(|seg| seg == "..") {
        return None;
    }
    let full_path = std::path::Path::new(DEV_DIR).join(path);
    std::fs::read(&full_path).ok().map(Cow::Owned)
}

/// MIME type string for the given file path.
#[must_use]
pub fn mime_for(path: &str) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_known_types() {
        assert_eq!(mime_for("site.css"), "text/css");
        assert_eq!(mime_for("theme.js"), "text/javascript");
        assert_eq!(mime_for("shot.png"), "image/png");
    }

    #[test]
    fn test_mime_for_unknown_type() {
        assert_eq!(mime_for("file.unknown_ext_xyz"), "application/octet-stream");
    }

    #[test]
    fn test_get_nonexistent_asset() {
        assert!(get("nonexistent_file_that_does_not_exist.txt").is_none());
    }

    #[cfg(not(feature = "embed"))]
    #[test]
    fn test_get_rejects_traversal() {
        assert!(get("../Cargo.toml").is_none());
    }
}
