// Service exports
pub mod completion;
pub mod search;
pub mod upstream;

pub use completion::CompletionClient;
pub use search::SearchClient;
pub use upstream::UpstreamError;
