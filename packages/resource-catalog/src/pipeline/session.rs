//! Catalog session - the entry point tying feed, session store and view.
//!
//! The feed load is the only suspension point. Once it succeeds, every
//! selection re-runs the synchronous pipeline in full. A failed load returns
//! an error and no view is built.
//!
//! ```rust,ignore
//! use resource_catalog::{CatalogConfig, CatalogSession, FileFeed, MemorySessionStore};
//!
//! let mut session = CatalogSession::open(
//!     FileFeed::new("assets/data/resources.json"),
//!     MemorySessionStore::new(),
//!     CatalogConfig::default(),
//! )
//! .await?;
//!
//! let render = session.select("breathing");
//! if render.is_empty() {
//!     let everything = session.view_all()?;
//! }
//! ```

use tracing::{error, info};

use crate::error::Result;
use crate::pipeline::view::{CatalogView, Render};
use crate::traits::feed::ResourceFeed;
use crate::traits::session::SessionStore;
use crate::types::config::CatalogConfig;
use crate::types::resource::Resource;
use crate::types::selection::FilterSelection;

/// A loaded catalog bound to a session store.
pub struct CatalogSession<F: ResourceFeed, S: SessionStore> {
    feed: F,
    store: S,
    config: CatalogConfig,
    resources: Vec<Resource>,
    view: CatalogView,
}

impl<F: ResourceFeed, S: SessionStore> CatalogSession<F, S> {
    /// Load the feed, read flow answers from the store and build the view.
    pub async fn open(feed: F, store: S, config: CatalogConfig) -> Result<Self> {
        let resources = feed.load().await.map_err(|e| {
            error!(feed = %feed.name(), error = %e, "Error loading resources");
            e
        })?;

        let flow = store.load_flow_answers(&config.session_key)?;
        info!(
            feed = %feed.name(),
            resources = resources.len(),
            guided = flow.is_some(),
            "Opened catalog session"
        );

        let view = CatalogView::build(&resources, flow, &config);
        Ok(Self {
            feed,
            store,
            config,
            resources,
            view,
        })
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Raw resources as loaded, before sorting and merging.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Select a filter value and render.
    pub fn select(&mut self, value: impl Into<FilterSelection>) -> Render {
        self.view.select(value)
    }

    /// Render the current selection.
    pub fn render(&self) -> Render {
        self.view.render()
    }

    /// Recovery action: forget the flow answers and show the full catalog.
    pub fn view_all(&mut self) -> Result<Render> {
        self.store.clear_flow_answers(&self.config.session_key)?;
        info!("Cleared flow answers, showing all resources");

        self.view = CatalogView::build(&self.resources, None, &self.config);
        Ok(self.view.render())
    }

    /// Reload the feed and re-read the session, resetting the selection.
    ///
    /// On failure the current view is left untouched.
    pub async fn reload(&mut self) -> Result<Render> {
        let resources = self.feed.load().await.map_err(|e| {
            error!(feed = %self.feed.name(), error = %e, "Error reloading resources");
            e
        })?;
        let flow = self.store.load_flow_answers(&self.config.session_key)?;

        self.view = CatalogView::build(&resources, flow, &self.config);
        self.resources = resources;
        Ok(self.view.render())
    }
}
