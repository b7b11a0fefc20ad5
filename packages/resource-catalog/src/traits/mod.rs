//! Core trait abstractions for the resource catalog.
//!
//! Applications implement these to supply the resource feed and the
//! session storage the guided flow writes to.

pub mod feed;
pub mod session;
