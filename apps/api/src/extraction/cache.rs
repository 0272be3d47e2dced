//! Content-addressed extraction cache.
//!
//! Identical `(resume, job)` pairs must always produce identical scoring
//! inputs, so extraction results are memoized under a SHA-256 of both texts.
//! The cache is bounded and owned by application state; the scoring core never
//! sees it.

use std::sync::Arc;

use async_trait::async_trait;
use moka::sync::Cache;
use sha2::{Digest, Sha256};
use tracing::debug;

use super::{Extraction, RequirementExtractor};
use crate::errors::AppError;

/// SHA-256 over both texts, length-prefixed so that the split point matters.
pub fn cache_key(resume_text: &str, job_description: &str) -> String {
    let mut hasher = Sha256::new();
    for part in [resume_text, job_description] {
        hasher.update((part.len() as u64).to_le_bytes());
        hasher.update(part.as_bytes());
    }
    format!("{:x}", hasher.finalize())
}

/// Bounded in-memory map from content hash to extraction result.
#[derive(Clone)]
pub struct ExtractionCache {
    cache: Cache<String, Arc<Extraction>>,
}

impl ExtractionCache {
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    pub fn get(&self, key: &str) -> Option<Arc<Extraction>> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, extraction: Arc<Extraction>) {
        self.cache.insert(key, extraction);
    }

    /// Approximate; moka applies pending writes lazily.
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Decorator that memoizes any extractor. Failed extractions are not cached.
pub struct CachingExtractor<E> {
    inner: E,
    cache: ExtractionCache,
}

impl<E: RequirementExtractor> CachingExtractor<E> {
    pub fn new(inner: E, cache: ExtractionCache) -> Self {
        Self { inner, cache }
    }

    pub fn cache(&self) -> &ExtractionCache {
        &self.cache
    }
}

#[async_trait]
impl<E: RequirementExtractor> RequirementExtractor for CachingExtractor<E> {
    async fn extract(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<Extraction, AppError> {
        let key = cache_key(resume_text, job_description);
        if let Some(hit) = self.cache.get(&key) {
            debug!(key = %&key[..12], "extraction cache hit");
            return Ok((*hit).clone());
        }

        debug!(key = %&key[..12], "extraction cache miss");
        let extraction = self.inner.extract(resume_text, job_description).await?;
        self.cache.insert(key, Arc::new(extraction.clone()));
        Ok(extraction)
    }
}
