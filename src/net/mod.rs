// SPDX-License-Identifier: MPL-2.0
//! HTTP access to the gallery's static assets.
//!
//! Existence checks go through the [`ExistenceProbe`] trait so the resolve
//! logic can be exercised against scripted probes in tests; the production
//! implementation is [`AssetClient`], a thin wrapper over a shared
//! `reqwest::Client`.

use crate::error::Result;
use crate::gallery::resolve;
use crate::media::{self, ImageData};
use std::future::Future;

/// Lightweight "does this URL exist" check. HEAD-shaped: no body download.
pub trait ExistenceProbe {
    /// `Ok(true)` when the asset exists, `Ok(false)` when the server answers
    /// negatively, `Err` on transport failure.
    fn exists(&self, url: &str) -> impl Future<Output = Result<bool>> + Send;
}

/// Downloads and decodes one image. The fallback chain runs against this
/// seam so its ordering is testable without a server.
pub trait ImageFetcher {
    fn fetch_image(&self, url: &str) -> impl Future<Output = Result<ImageData>> + Send;
}

/// Cloneable HTTP client bound to the asset base URL.
#[derive(Debug, Clone)]
pub struct AssetClient {
    http: reqwest::Client,
    base_url: String,
}

impl AssetClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Candidate URLs for a base path, in probe order.
    pub fn candidates(&self, base_path: &str) -> Vec<String> {
        resolve::candidate_urls(&self.base_url, base_path)
    }

    /// Downloads and decodes the image at `url`.
    pub async fn fetch_image(&self, url: &str) -> Result<ImageData> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        media::decode_image(&bytes)
    }
}

impl ImageFetcher for AssetClient {
    fn fetch_image(&self, url: &str) -> impl Future<Output = Result<ImageData>> + Send {
        AssetClient::fetch_image(self, url)
    }
}

impl ExistenceProbe for AssetClient {
    fn exists(&self, url: &str) -> impl Future<Output = Result<bool>> + Send {
        // Probes bypass intermediary caches so a freshly uploaded asset
        // is seen on the next resolution.
        let request = self
            .http
            .head(url)
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send();
        async move {
            let response = request.await?;
            Ok(response.status().is_success())
        }
    }
}

/// Load-based fallback: downloads each candidate in order and returns the
/// first one that decodes, together with its URL. Exhaustion is
/// [`crate::error::Error::Missing`].
pub async fn fetch_first<F: ImageFetcher>(
    fetcher: F,
    candidates: Vec<String>,
) -> Result<(String, ImageData)> {
    for url in candidates {
        match fetcher.fetch_image(&url).await {
            Ok(image) => return Ok((url, image)),
            Err(err) => {
                log::debug!("fallback candidate {} failed: {}", url, err);
            }
        }
    }
    Err(crate::error::Error::Missing)
}
