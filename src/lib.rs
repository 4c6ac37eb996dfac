//! School Finder - school recommendations for the department of Guatemala
//!
//! Collects a family's preferences, asks a text completion API for three
//! school recommendations and a web search API for supporting results.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{recommendation_prompt, search_query, top_results, SchoolFinder};
pub use crate::models::{SearchCriteria, SearchOutcome, ResultBlock};
pub use crate::services::{CompletionClient, SearchClient, UpstreamError};
