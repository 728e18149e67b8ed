//! Mutual-fund scheme directory.
//!
//! A lazily-loaded, process-lifetime catalog of scheme codes and names,
//! supporting fuzzy lookup of a free-text fund name. The catalog is fetched
//! at most once; a failed load is sticky and silently degrades every later
//! lookup to "not found" until the process restarts.
//!
//! Lookup is a first-match linear scan over the catalog in source order, not
//! a ranked search. Callers persist the scheme code a match produces, so the
//! match order is load-bearing and must stay reproducible.

mod mfapi_catalog;

pub use mfapi_catalog::MfapiCatalog;

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use tokio::sync::RwLock;

use crate::errors::QuoteError;
use crate::models::SchemeRecord;

/// Source of the full scheme catalog.
///
/// Implemented over HTTP by [`MfapiCatalog`]; tests substitute a fixed
/// in-memory list.
#[async_trait]
pub trait SchemeCatalog: Send + Sync {
    /// Fetch every scheme, in the provider's listing order.
    async fn fetch_all(&self) -> Result<Vec<SchemeRecord>, QuoteError>;
}

/// Load state of the directory, observable for diagnostics and tests.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadState {
    /// No lookup has needed the catalog yet.
    NotLoaded,
    /// The catalog was fetched and memoized.
    Loaded,
    /// The one permitted fetch failed; lookups return nothing until restart.
    LoadFailed,
}

enum DirectoryState {
    NotLoaded,
    Loaded(Arc<[SchemeRecord]>),
    LoadFailed,
}

/// Lazily-initialized scheme directory.
pub struct SchemeDirectory {
    catalog: Option<Arc<dyn SchemeCatalog>>,
    state: RwLock<DirectoryState>,
}

impl SchemeDirectory {
    /// Create a directory that loads from `catalog` on first use.
    pub fn new(catalog: Arc<dyn SchemeCatalog>) -> Self {
        Self {
            catalog: Some(catalog),
            state: RwLock::new(DirectoryState::NotLoaded),
        }
    }

    /// Create a directory pre-populated with `records`, never fetching.
    pub fn with_records(records: Vec<SchemeRecord>) -> Self {
        Self {
            catalog: None,
            state: RwLock::new(DirectoryState::Loaded(records.into())),
        }
    }

    /// Current load state.
    pub async fn load_state(&self) -> LoadState {
        match &*self.state.read().await {
            DirectoryState::NotLoaded => LoadState::NotLoaded,
            DirectoryState::Loaded(_) => LoadState::Loaded,
            DirectoryState::LoadFailed => LoadState::LoadFailed,
        }
    }

    /// Find the first scheme matching a free-text query.
    ///
    /// Matching, in order, first match wins:
    /// 1. every lower-cased whitespace token longer than 2 characters must
    ///    appear as a substring of the lower-cased scheme name;
    /// 2. failing that, the first name containing the whole lower-cased
    ///    query contiguously;
    /// 3. otherwise `None`.
    pub async fn find_scheme(&self, query: &str) -> Option<SchemeRecord> {
        let records = self.records().await?;
        let matched = find_first_match(&records, query);
        match &matched {
            Some(record) => debug!(
                "scheme query '{}' matched {} '{}'",
                query, record.scheme_code, record.scheme_name
            ),
            None => debug!("scheme query '{}' matched nothing", query),
        }
        matched
    }

    /// Return the memoized catalog, fetching it on first use.
    ///
    /// The write lock is held across the fetch, so the catalog endpoint is
    /// hit at most once per process lifetime even under concurrent lookups.
    async fn records(&self) -> Option<Arc<[SchemeRecord]>> {
        {
            let state = self.state.read().await;
            match &*state {
                DirectoryState::Loaded(records) => return Some(records.clone()),
                DirectoryState::LoadFailed => return None,
                DirectoryState::NotLoaded => {}
            }
        }

        let mut state = self.state.write().await;
        // Another task may have finished loading while we waited.
        match &*state {
            DirectoryState::Loaded(records) => return Some(records.clone()),
            DirectoryState::LoadFailed => return None,
            DirectoryState::NotLoaded => {}
        }

        match self.catalog.as_ref()?.fetch_all().await {
            Ok(list) => {
                debug!("scheme catalog loaded: {} records", list.len());
                let records: Arc<[SchemeRecord]> = list.into();
                *state = DirectoryState::Loaded(records.clone());
                Some(records)
            }
            Err(err) => {
                warn!(
                    "scheme catalog load failed, mutual fund name lookups disabled: {}",
                    err
                );
                *state = DirectoryState::LoadFailed;
                None
            }
        }
    }
}

fn find_first_match(records: &[SchemeRecord], query: &str) -> Option<SchemeRecord> {
    let lower_query = query.to_lowercase();
    let terms: Vec<&str> = lower_query
        .split_whitespace()
        .filter(|term| term.len() > 2)
        .collect();

    let token_match = records.iter().find(|record| {
        let name = record.scheme_name.to_lowercase();
        terms.iter().all(|term| name.contains(term))
    });

    match token_match {
        Some(record) => Some(record.clone()),
        None => records
            .iter()
            .find(|record| record.scheme_name.to_lowercase().contains(&lower_query))
            .cloned(),
    }
}
