//! Feed repository: fixture loading, infinite pagination, deletion, and
//! the on-disk cache fallback.
//!
//! The repository owns the immutable template cards parsed from a fixture.
//! Pages beyond the first are synthesized by cloning templates with
//! derived ids, so the feed scrolls forever without the fixture growing.

mod fixture;

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::model::{CardId, FeedCard, FeedError, FeedTab};
use fixture::parse_fixture;

/// Bundled default fixture, used when no `--fixture` path is given.
const DEFAULT_FIXTURE: &str = include_str!("../../assets/feed_data.json");

/// Template store for the five feed tabs.
#[derive(Debug, Clone)]
pub struct FeedRepository {
    templates: [Vec<FeedCard>; 5],
}

impl FeedRepository {
    /// Parse a repository straight from fixture JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Parse`] when the document is structurally
    /// invalid or contains no parseable cards at all.
    pub fn from_json(raw: &str) -> Result<Self, FeedError> {
        let parsed = parse_fixture(raw)?;
        if parsed.skipped > 0 {
            warn!(skipped = parsed.skipped, "fixture entries skipped");
        }
        Ok(Self {
            templates: parsed.templates,
        })
    }

    /// Repository from the bundled default fixture.
    pub fn from_embedded() -> Result<Self, FeedError> {
        Self::from_json(DEFAULT_FIXTURE)
    }

    /// Load a repository with cache fallback.
    ///
    /// The fixture comes from `fixture_path` when given, otherwise from the
    /// bundled default. On success the raw JSON is mirrored to
    /// `cache_path` (best effort). If the fixture is unreadable or
    /// unparseable the cache is tried instead; if that also fails the
    /// result is [`FeedError::NoData`].
    pub fn load(fixture_path: Option<&Path>, cache_path: Option<&Path>) -> Result<Self, FeedError> {
        match Self::read_fixture(fixture_path) {
            Ok((raw, repo)) => {
                if let Some(cache) = cache_path {
                    write_cache(cache, &raw);
                }
                info!(
                    source = %fixture_path.map_or("embedded".to_string(), |p| p.display().to_string()),
                    "feed fixture loaded"
                );
                Ok(repo)
            }
            Err(error) => {
                warn!(%error, "fixture unavailable, trying cache");
                let Some(cache) = cache_path else {
                    return Err(error);
                };
                match Self::read_cache(cache) {
                    Ok(repo) => {
                        info!(path = %cache.display(), "feed loaded from cache");
                        Ok(repo)
                    }
                    Err(cache_error) => {
                        warn!(error = %cache_error, "cache fallback failed");
                        Err(FeedError::NoData)
                    }
                }
            }
        }
    }

    fn read_fixture(fixture_path: Option<&Path>) -> Result<(String, Self), FeedError> {
        let raw = match fixture_path {
            Some(path) => fs::read_to_string(path).map_err(|source| FeedError::Read {
                path: path.to_path_buf(),
                source,
            })?,
            None => DEFAULT_FIXTURE.to_string(),
        };
        let repo = Self::from_json(&raw)?;
        Ok((raw, repo))
    }

    fn read_cache(cache: &Path) -> Result<Self, FeedError> {
        let raw = fs::read_to_string(cache).map_err(|source| FeedError::Read {
            path: cache.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// One page of cards for `tab`.
    ///
    /// Page 1 is the template list verbatim. Later pages synthesize
    /// `page_size` clones with derived ids (`{template}_p{page}_i{index}`)
    /// and reseeded image urls, cycling through the templates. A tab with
    /// no templates yields an empty page.
    pub fn page(&self, tab: FeedTab, page_no: usize, page_size: usize) -> Vec<FeedCard> {
        let templates = &self.templates[tab.index()];
        if templates.is_empty() {
            return Vec::new();
        }
        if page_no <= 1 {
            return templates.clone();
        }
        debug!(%tab, page_no, page_size, "synthesizing feed page");
        (0..page_size)
            .map(|index| templates[index % templates.len()].paged_clone(page_no, index))
            .collect()
    }

    /// Delete a template by id from every tab that carries it.
    ///
    /// Pagination clones are synthesized from templates, so deleting a
    /// clone id here is a no-op (returns `false`); the caller removes
    /// clones from its own card list.
    pub fn delete(&mut self, id: &CardId) -> bool {
        let mut removed = false;
        for list in &mut self.templates {
            let before = list.len();
            list.retain(|card| card.id() != id);
            removed |= list.len() != before;
        }
        if removed {
            info!(card = %id, "template deleted");
        }
        removed
    }

    /// Number of templates behind `tab`.
    pub fn template_count(&self, tab: FeedTab) -> usize {
        self.templates[tab.index()].len()
    }
}

/// Best-effort cache write; failures are logged, never fatal.
fn write_cache(path: &Path, raw: &str) {
    if let Some(parent) = path.parent() {
        if let Err(error) = fs::create_dir_all(parent) {
            warn!(path = %path.display(), %error, "cannot create cache directory");
            return;
        }
    }
    match fs::write(path, raw) {
        Ok(()) => debug!(path = %path.display(), "feed cache written"),
        Err(error) => warn!(path = %path.display(), %error, "cannot write feed cache"),
    }
}

// ===== Tests =====
