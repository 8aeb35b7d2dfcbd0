// SPDX-License-Identifier: MPL-2.0
//! Lazy resolution of extension-less base paths to concrete asset URLs.
//!
//! Each base path is probed against the candidate extensions in order with a
//! lightweight existence check; the first hit wins. Results are cached for
//! the lifetime of the process and entries are write-once: once a base path
//! has resolved (or failed to), repeated resolution never re-probes.
//!
//! A transport error during probing abandons the remaining candidates and
//! records the path as not found. The authoritative fallback for such paths
//! is a real download attempt per candidate, in [`crate::net::fetch_first`].

use crate::config::CANDIDATE_EXTENSIONS;
use crate::net::ExistenceProbe;
use std::collections::{HashMap, HashSet};

/// Outcome of resolving one base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A candidate URL answered the existence check.
    Found(String),
    /// No candidate answered, or a probe failed in transit.
    NotFound,
}

impl Resolution {
    pub fn url(&self) -> Option<&str> {
        match self {
            Resolution::Found(url) => Some(url),
            Resolution::NotFound => None,
        }
    }
}

/// Candidate URLs for a base path, in probe order.
pub fn candidate_urls(base_url: &str, base_path: &str) -> Vec<String> {
    CANDIDATE_EXTENSIONS
        .iter()
        .map(|ext| format!("{}/{}.{}", base_url, base_path, ext))
        .collect()
}

/// Probes the candidates in order and returns the first hit.
///
/// A transport error is a fail-fast signal: the remaining candidates are not
/// tried and the path resolves to [`Resolution::NotFound`].
pub async fn probe<P: ExistenceProbe>(prober: P, candidates: Vec<String>) -> Resolution {
    for url in candidates {
        match prober.exists(&url).await {
            Ok(true) => return Resolution::Found(url),
            Ok(false) => continue,
            Err(err) => {
                log::warn!("existence probe failed for {}: {}", url, err);
                return Resolution::NotFound;
            }
        }
    }
    Resolution::NotFound
}

/// Write-once resolution cache with in-flight probe de-duplication.
#[derive(Debug, Default)]
pub struct ResolveCache {
    entries: HashMap<String, Resolution>,
    pending: HashSet<String>,
}

impl ResolveCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, base_path: &str) -> Option<&Resolution> {
        self.entries.get(base_path)
    }

    /// Claims a probe for `base_path`. Returns `false` when the path is
    /// already resolved or a probe is already in flight, so at most one
    /// probe per key ever runs.
    pub fn begin_probe(&mut self, base_path: &str) -> bool {
        if self.entries.contains_key(base_path) || self.pending.contains(base_path) {
            return false;
        }
        self.pending.insert(base_path.to_string());
        true
    }

    pub fn probe_pending(&self, base_path: &str) -> bool {
        self.pending.contains(base_path)
    }

    /// Records a probe result. The first write for a key wins; the recorded
    /// resolution is returned either way.
    pub fn complete(&mut self, base_path: &str, resolution: Resolution) -> &Resolution {
        self.pending.remove(base_path);
        self.entries
            .entry(base_path.to_string())
            .or_insert(resolution)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::{Arc, Mutex};

    /// Scripted existence probe recording every URL it is asked about.
    #[derive(Clone, Default)]
    struct ScriptedProbe {
        exists: HashMap<String, bool>,
        fail: HashMap<String, bool>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedProbe {
        fn with_existing(urls: &[&str]) -> Self {
            Self {
                exists: urls.iter().map(|u| (u.to_string(), true)).collect(),
                ..Self::default()
            }
        }

        fn failing_on(mut self, url: &str) -> Self {
            self.fail.insert(url.to_string(), true);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl ExistenceProbe for ScriptedProbe {
        fn exists(&self, url: &str) -> impl Future<Output = Result<bool>> + Send {
            self.calls.lock().unwrap().push(url.to_string());
            let result = if self.fail.get(url).copied().unwrap_or(false) {
                Err(Error::Http("network unreachable".to_string()))
            } else {
                Ok(self.exists.get(url).copied().unwrap_or(false))
            };
            async move { result }
        }
    }

    #[test]
    fn candidates_follow_extension_order() {
        let urls = candidate_urls("https://folio.example", "images/certifications/3");
        assert_eq!(
            urls,
            vec![
                "https://folio.example/images/certifications/3.png",
                "https://folio.example/images/certifications/3.jpg",
                "https://folio.example/images/certifications/3.jpeg",
            ]
        );
    }

    #[tokio::test]
    async fn probe_stops_at_first_hit() {
        let prober = ScriptedProbe::with_existing(&["https://x/a.jpg"]);
        let candidates = vec![
            "https://x/a.png".to_string(),
            "https://x/a.jpg".to_string(),
            "https://x/a.jpeg".to_string(),
        ];
        let resolution = probe(prober.clone(), candidates).await;
        assert_eq!(resolution, Resolution::Found("https://x/a.jpg".to_string()));
        // The jpeg candidate was never asked about.
        assert_eq!(prober.calls(), vec!["https://x/a.png", "https://x/a.jpg"]);
    }

    #[tokio::test]
    async fn probe_exhaustion_resolves_not_found() {
        let prober = ScriptedProbe::default();
        let candidates = candidate_urls("https://x", "a");
        assert_eq!(probe(prober.clone(), candidates).await, Resolution::NotFound);
        assert_eq!(prober.calls().len(), 3);
    }

    #[tokio::test]
    async fn probe_fails_fast_on_transport_error() {
        // A transport failure on the first candidate abandons the rest, even
        // though the second candidate would have answered.
        let prober =
            ScriptedProbe::with_existing(&["https://x/a.jpg"]).failing_on("https://x/a.png");
        let candidates = candidate_urls("https://x", "a");
        assert_eq!(probe(prober.clone(), candidates).await, Resolution::NotFound);
        assert_eq!(prober.calls(), vec!["https://x/a.png"]);
    }

    #[test]
    fn cache_entries_are_write_once() {
        let mut cache = ResolveCache::new();
        assert!(cache.begin_probe("a"));
        cache.complete("a", Resolution::Found("https://x/a.png".to_string()));

        // A late duplicate completion must not overwrite the recorded result.
        let recorded = cache.complete("a", Resolution::NotFound);
        assert_eq!(recorded.url(), Some("https://x/a.png"));
    }

    #[test]
    fn begin_probe_deduplicates_in_flight_keys() {
        let mut cache = ResolveCache::new();
        assert!(cache.begin_probe("a"));
        assert!(!cache.begin_probe("a"), "second probe for a pending key");
        assert!(cache.probe_pending("a"));

        cache.complete("a", Resolution::NotFound);
        assert!(!cache.probe_pending("a"));
        assert!(!cache.begin_probe("a"), "probe for a resolved key");
    }
}
