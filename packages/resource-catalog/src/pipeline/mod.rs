//! Catalog pipeline - the core of the library.
//!
//! The pipeline runs, in order:
//! - Sort and normalize (merge duplicate titles)
//! - Flow context filter (role, language, category)
//! - Catalog build (filter values for the mode)
//! - Secondary filter (the active selection)
//! - Summary (title/subtitle) and zero-result fallback

pub mod catalog;
pub mod flow_filter;
pub mod labels;
pub mod normalize;
pub mod secondary;
pub mod session;
pub mod summary;
pub mod view;

pub use catalog::build_catalog;
pub use flow_filter::{apply_flow_filters, matches_flow};
pub use labels::{category_label, filter_button_label, humanize, title_case, TopicLabels};
pub use normalize::{normalize, renormalize, sort_by_title};
pub use secondary::{apply_secondary_filter, matches_selection};
pub use session::CatalogSession;
pub use summary::{filters_heading, summarize, ResultSummary};
pub use view::{
    CatalogView, FilterBar, FilterButton, Render, NO_RESULTS_HINT, NO_RESULTS_TITLE,
    VIEW_ALL_LABEL,
};
