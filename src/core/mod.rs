// Core exports
pub mod display;
pub mod finder;
pub mod prompt;

pub use display::{top_results, ADVISORY_NOTE, RESULTS_SHOWN};
pub use finder::SchoolFinder;
pub use prompt::{criteria_summary, recommendation_prompt, search_query};
