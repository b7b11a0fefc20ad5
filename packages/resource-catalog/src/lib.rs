//! Resource Catalog Library
//!
//! Turns a flat JSON list of curated resources (articles, videos) plus the
//! optional answers of a short guided questionnaire into the exact cards and
//! filter buttons a catalog page shows.
//!
//! # Pipeline
//!
//! raw resources → sort → normalize (merge duplicate titles) → flow filter
//! (role, language, category) → {filter catalog} and {secondary filter} →
//! visible list → presentation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use resource_catalog::{CatalogConfig, CatalogSession, FileFeed, FileSessionStore};
//!
//! let mut session = CatalogSession::open(
//!     FileFeed::new("assets/data/resources.json"),
//!     FileSessionStore::new(".catalog-session.json"),
//!     CatalogConfig::default(),
//! )
//! .await?;
//!
//! let render = session.select("all");
//! println!("{}", render.summary.title);
//! ```
//!
//! # Modules
//!
//! - [`types`] - Resources, flow answers, selections, configuration
//! - [`traits`] - Feed and session storage abstractions
//! - [`pipeline`] - Normalizer, filters, catalog builder, summarizer, view
//! - [`feeds`] - File and HTTP feeds
//! - [`stores`] - Memory and file session stores
//! - [`quiz`] - The guided flow that produces flow answers
//! - [`testing`] - Mock feed and sample data

pub mod error;
pub mod feeds;
pub mod pipeline;
pub mod quiz;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{CatalogError, FlowError, SessionError};
pub use traits::{
    feed::{parse_feed, ResourceFeed},
    session::SessionStore,
};
pub use types::{
    config::{CatalogConfig, MergePolicy, DEFAULT_SESSION_KEY},
    flow::{FlowAnswers, FlowLanguage, Role},
    normalized::{normalize_title, NormalizedResource},
    resource::{Resource, TagSet},
    selection::{FilterMode, FilterSelection, ViewState, ALL},
};

// Re-export pipeline components
pub use pipeline::{
    apply_flow_filters, apply_secondary_filter, build_catalog, normalize, renormalize,
    sort_by_title, summarize, CatalogSession, CatalogView, FilterBar, FilterButton, Render,
    ResultSummary, TopicLabels,
};

pub use feeds::{feed_for, FileFeed, HttpFeed};
pub use quiz::{BackOutcome, FlowOutcome, GuidedFlow, QuizStep};
pub use stores::{FileSessionStore, MemorySessionStore};
pub use testing::MockFeed;
