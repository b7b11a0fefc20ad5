//! Data types for the resource catalog.

pub mod config;
pub mod flow;
pub mod normalized;
pub mod resource;
pub mod selection;
