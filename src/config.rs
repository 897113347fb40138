//! Deployment configuration.
//!
//! The site is published to two targets: the custom domain (served from the
//! root) and GitHub Pages (served under the project path). The target is
//! picked at compile time with the `gh-pages` feature; everything else about
//! the build is identical.

/// Canonical origin embedded in absolute URLs.
pub fn site_origin() -> &'static str {
    "https://villadesk-ribean.com"
}

#[cfg(feature = "gh-pages")]
pub fn base_path() -> &'static str {
    "/vilakarib/"
}

#[cfg(not(feature = "gh-pages"))]
pub fn base_path() -> &'static str {
    "/"
}

/// Output subdirectory holding bundled media.
pub fn asset_dir() -> &'static str {
    "assets"
}

/// Joins the base path, asset directory and a relative media path into a
/// site-rooted URL.
pub fn asset_url(path: &str) -> String {
    format!(
        "{}{}/{}",
        base_path(),
        asset_dir(),
        path.trim_start_matches('/')
    )
}

/// Router basename, `None` when the site lives at the domain root.
pub fn basename() -> Option<String> {
    let base = base_path();
    if base == "/" {
        None
    } else {
        Some(base.trim_end_matches('/').to_string())
    }
}
