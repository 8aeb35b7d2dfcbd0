// SPDX-License-Identifier: MPL-2.0
//! Navigation session over a gallery catalog.
//!
//! A `GallerySession` owns the navigation cursor and the resolution cache,
//! so multiple independent sessions can coexist (one per mounted viewer).
//! Every show bumps a request sequence number; completions carry it back and
//! stale ones are discarded for display, which closes the race where a slow
//! resolve overwrites the image the user has since navigated to.

use super::resolve::{ResolveCache, Resolution};
use super::{wrap_index, Catalog, Gallery};

/// What the caller must do next to get the requested image on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowAction {
    /// The base path has resolved; fetch and display this URL.
    Display { url: String },
    /// The base path is known missing; run the load-based fallback chain
    /// over the candidate extensions.
    Fallback,
    /// No cache entry and no probe in flight; this request claimed the
    /// probe, so issue the existence checks.
    Probe,
    /// A probe for this base path is already in flight; wait for it.
    Wait,
}

/// One display request, tagged with the sequence number that gates stale
/// completions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowRequest {
    pub seq: u64,
    pub base_path: String,
    pub action: ShowAction,
}

#[derive(Debug, Clone)]
struct ActiveGallery {
    key: String,
    index: usize,
}

/// Gallery navigation state: catalog, cursor, and resolution cache.
#[derive(Debug, Default)]
pub struct GallerySession {
    catalog: Catalog,
    active: Option<ActiveGallery>,
    cache: ResolveCache,
    seq: u64,
}

impl GallerySession {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            active: None,
            cache: ResolveCache::new(),
            seq: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_gallery(&self) -> Option<&Gallery> {
        let active = self.active.as_ref()?;
        self.catalog.get(&active.key)
    }

    /// 1-indexed position and total of the current item, when open.
    pub fn position(&self) -> Option<(usize, usize)> {
        let active = self.active.as_ref()?;
        let gallery = self.catalog.get(&active.key)?;
        Some((active.index + 1, gallery.len()))
    }

    pub fn index(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.index)
    }

    /// Base path of the current item, when open.
    pub fn current_base(&self) -> Option<&str> {
        let active = self.active.as_ref()?;
        let gallery = self.catalog.get(&active.key)?;
        gallery.base_items().get(active.index).map(String::as_str)
    }

    /// Whether `seq` still refers to the latest show request.
    pub fn is_current(&self, seq: u64) -> bool {
        self.seq == seq
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Opens the gallery `key` at item 0. An unknown key is a silent no-op
    /// and returns `None`; the session stays closed.
    pub fn open(&mut self, key: &str) -> Option<ShowRequest> {
        let gallery = self.catalog.get(key)?;
        if gallery.is_empty() {
            return None;
        }
        self.active = Some(ActiveGallery {
            key: key.to_string(),
            index: 0,
        });
        self.advance(0)
    }

    /// Closes the viewer and clears the cursor. The resolution cache is kept
    /// for the lifetime of the session.
    pub fn close(&mut self) {
        self.active = None;
    }

    /// Shows the item at `raw` (any signed integer; reduced by wraparound).
    pub fn show(&mut self, raw: i64) -> Option<ShowRequest> {
        self.active.as_ref()?;
        self.advance(raw)
    }

    /// Shows the item `delta` steps away from the current one.
    pub fn step(&mut self, delta: i64) -> Option<ShowRequest> {
        let index = self.active.as_ref()?.index as i64;
        self.advance(index + delta)
    }

    /// Records a finished probe. The cache is write-once per key, so late or
    /// duplicate completions cannot clobber an earlier result; the recorded
    /// resolution is returned.
    pub fn complete_probe(&mut self, base_path: &str, resolution: Resolution) -> Resolution {
        self.cache.complete(base_path, resolution).clone()
    }

    /// Re-plans the current item without bumping the sequence number. Used
    /// after a probe completes to turn the recorded resolution into a
    /// display or fallback action.
    pub fn replan_current(&mut self) -> Option<ShowRequest> {
        let base_path = self.current_base()?.to_string();
        let action = self.action_for(&base_path);
        Some(ShowRequest {
            seq: self.seq,
            base_path,
            action,
        })
    }

    fn advance(&mut self, raw: i64) -> Option<ShowRequest> {
        let len = self.active_gallery()?.len();
        let index = wrap_index(raw, len);
        if let Some(active) = self.active.as_mut() {
            active.index = index;
        }
        self.seq += 1;
        self.replan_current()
    }

    fn action_for(&mut self, base_path: &str) -> ShowAction {
        match self.cache.get(base_path) {
            Some(Resolution::Found(url)) => ShowAction::Display { url: url.clone() },
            Some(Resolution::NotFound) => ShowAction::Fallback,
            None => {
                if self.cache.begin_probe(base_path) {
                    ShowAction::Probe
                } else {
                    ShowAction::Wait
                }
            }
        }
    }
}
