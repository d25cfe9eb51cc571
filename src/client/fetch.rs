//! Guarded initial load for the client cache.

use super::store::WorkspaceStore;
use crate::project::services::WorkspaceView;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by workspace fetchers.
#[derive(Debug, Clone, Error)]
#[error("failed to fetch workspaces: {0}")]
pub struct FetchError(Arc<dyn std::error::Error + Send + Sync>);

impl FetchError {
    /// Wraps a transport failure.
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }
}

/// Transport contract for loading the authenticated user's workspaces.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkspaceFetcher: Send + Sync {
    /// Fetches every workspace the authenticated user belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the request fails.
    async fn fetch_workspaces(&self) -> Result<Vec<WorkspaceView>, FetchError>;
}

/// A workspace store paired with its fetch transport.
pub struct ClientCache<F>
where
    F: WorkspaceFetcher,
{
    store: WorkspaceStore,
    fetcher: Arc<F>,
}

impl<F> ClientCache<F>
where
    F: WorkspaceFetcher,
{
    /// Creates a cache around an empty store.
    #[must_use]
    pub const fn new(store: WorkspaceStore, fetcher: Arc<F>) -> Self {
        Self { store, fetcher }
    }

    /// Returns the underlying store for reads.
    #[must_use]
    pub const fn store(&self) -> &WorkspaceStore {
        &self.store
    }

    /// Returns the underlying store for local mutations.
    pub const fn store_mut(&mut self) -> &mut WorkspaceStore {
        &mut self.store
    }

    /// Performs the initial load once per session.
    ///
    /// Re-invocations while loaded or in flight are no-ops. A failed
    /// fetch is logged and resolves to an empty collection — callers
    /// cannot distinguish "no workspaces" from "fetch failed", matching
    /// the product's established behavior.
    pub async fn load(&mut self) {
        if self.store.is_loaded() || self.store.is_loading() {
            return;
        }
        self.store.begin_load();
        match self.fetcher.fetch_workspaces().await {
            Ok(workspaces) => self.store.finish_load(workspaces),
            Err(err) => {
                tracing::warn!(error = %err, "workspace fetch failed, resolving to empty");
                self.store.finish_load(Vec::new());
            }
        }
    }
}
