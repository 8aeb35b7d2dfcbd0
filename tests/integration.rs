// SPDX-License-Identifier: MPL-2.0
//! End-to-end flow over the non-UI layers: config -> catalog -> session,
//! plus the resolution contract against a scripted probe.

use folio_lens::config::{self, Config, GalleryConfig};
use folio_lens::error::Result;
use folio_lens::gallery::resolve::{self, Resolution};
use folio_lens::gallery::session::ShowAction;
use folio_lens::gallery::{Catalog, GallerySession};
use folio_lens::net::ExistenceProbe;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::tempdir;

/// Probe that answers "exists" for exactly one URL and counts every call.
#[derive(Clone)]
struct CountingProbe {
    hit: String,
    calls: Arc<AtomicUsize>,
}

impl CountingProbe {
    fn new(hit: &str) -> Self {
        Self {
            hit: hit.to_string(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ExistenceProbe for CountingProbe {
    fn exists(&self, url: &str) -> impl Future<Output = Result<bool>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let result = Ok(url == self.hit);
        async move { result }
    }
}

fn session_from_config(config: &Config) -> GallerySession {
    GallerySession::new(Catalog::from_table(&config.gallery_table()))
}

#[test]
fn configured_galleries_drive_the_session() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let config = Config {
        galleries: vec![GalleryConfig {
            key: "plates".to_string(),
            title: "Plates".to_string(),
            count: 3,
            prefix: "images/plates".to_string(),
        }],
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("failed to save config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    let mut session = session_from_config(&loaded);

    let request = session.open("plates").expect("plates should open");
    assert_eq!(request.base_path, "images/plates/1");
    assert_eq!(session.position(), Some((1, 3)));

    // The built-in galleries are replaced, not merged.
    assert!(session.catalog().get("certs").is_none());
}

#[test]
fn default_config_exposes_the_builtin_catalog() {
    let mut session = session_from_config(&Config::default());

    session.open("certs").expect("certs should open");
    assert_eq!(session.position(), Some((1, 6)));

    session.show(-1);
    assert_eq!(session.position(), Some((6, 6)));
    session.show(6);
    assert_eq!(session.position(), Some((1, 6)));
}

#[tokio::test]
async fn second_resolution_is_served_from_cache() {
    let mut session = session_from_config(&Config::default());
    let probe = CountingProbe::new("https://x/images/certifications/1.jpg");
    let candidates = resolve::candidate_urls("https://x", "images/certifications/1");

    let opened = session.open("certs").expect("certs should open");
    assert_eq!(opened.action, ShowAction::Probe);

    let resolution = resolve::probe(probe.clone(), candidates).await;
    session.complete_probe("images/certifications/1", resolution);
    let probes_after_first = probe.calls();
    assert_eq!(probes_after_first, 2, "png missed, jpg hit");

    // Navigating away and back must not probe again.
    session.show(1);
    let back = session.show(0).expect("show should plan");
    assert_eq!(
        back.action,
        ShowAction::Display {
            url: "https://x/images/certifications/1.jpg".to_string()
        }
    );
    assert_eq!(probe.calls(), probes_after_first);
}

#[tokio::test]
async fn unresolvable_item_plans_the_fallback_chain() {
    let mut session = session_from_config(&Config::default());
    let probe = CountingProbe::new("nothing-matches");
    let candidates = resolve::candidate_urls("https://x", "images/certifications/1");

    session.open("certs");
    let resolution = resolve::probe(probe, candidates).await;
    assert_eq!(resolution, Resolution::NotFound);
    session.complete_probe("images/certifications/1", resolution);

    let request = session.replan_current().expect("viewer is open");
    assert_eq!(request.action, ShowAction::Fallback);
}
