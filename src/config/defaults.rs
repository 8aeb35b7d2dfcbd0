// SPDX-License-Identifier: MPL-2.0
//! Built-in defaults for the configuration file.
//!
//! The gallery table mirrors the portfolio site the viewer was written for;
//! a `settings.toml` with its own `[[galleries]]` entries replaces it wholesale.

use super::GalleryConfig;

/// Base URL the asset probes run against when `[source]` is absent.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Candidate file extensions, probed in this order.
pub const CANDIDATE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Minimum horizontal displacement, in logical pixels, for a drag to count
/// as a swipe gesture.
pub const SWIPE_THRESHOLD: f32 = 50.0;

pub fn default_base_url() -> Option<String> {
    Some(DEFAULT_BASE_URL.to_string())
}

/// The built-in gallery catalog, used when the config file defines none.
pub fn default_galleries() -> Vec<GalleryConfig> {
    [
        ("bitsys", "BiTSys", 20, "images/projects/bitsys"),
        ("enrollment", "Enrollment System", 19, "images/projects/enrollment"),
        ("template", "Website Template Design", 6, "images/projects/template"),
        ("ppt-bitsys", "BiTSys.ppt", 12, "images/designs/ppt-bitsys"),
        ("ppt-debriment", "Debriment.ppt", 16, "images/designs/ppt-debriment"),
        ("visual", "Visual Design", 10, "images/designs/visual"),
        ("certs", "Certifications", 6, "images/certifications"),
    ]
    .into_iter()
    .map(|(key, title, count, prefix)| GalleryConfig {
        key: key.to_string(),
        title: title.to_string(),
        count,
        prefix: prefix.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_seven_galleries() {
        let galleries = default_galleries();
        assert_eq!(galleries.len(), 7);
        assert_eq!(galleries[0].key, "bitsys");
        assert_eq!(galleries[0].count, 20);
    }

    #[test]
    fn certs_gallery_has_six_items() {
        let galleries = default_galleries();
        let certs = galleries
            .iter()
            .find(|g| g.key == "certs")
            .expect("certs gallery missing");
        assert_eq!(certs.count, 6);
        assert_eq!(certs.prefix, "images/certifications");
    }

    #[test]
    fn extensions_are_probed_png_first() {
        assert_eq!(CANDIDATE_EXTENSIONS, ["png", "jpg", "jpeg"]);
    }
}
