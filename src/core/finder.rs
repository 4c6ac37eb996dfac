use crate::core::{display::top_results, prompt};
use crate::models::{SearchCriteria, SearchOutcome};
use crate::services::{CompletionClient, SearchClient, UpstreamError};
use std::sync::Arc;
use tracing::Instrument;

/// Runs one submission end to end
///
/// # Flow
/// 1. Build the recommendation prompt and the search query
/// 2. Ask the completion API for recommendations
/// 3. Run the web search
/// 4. Keep the top organic results
///
/// The calls are strictly sequential; the first failure ends the submission
/// and nothing partial is returned. There are no retries.
#[derive(Clone)]
pub struct SchoolFinder {
    completion: Arc<CompletionClient>,
    search: Arc<SearchClient>,
}

impl SchoolFinder {
    pub fn new(completion: Arc<CompletionClient>, search: Arc<SearchClient>) -> Self {
        Self { completion, search }
    }

    pub async fn find(&self, criteria: &SearchCriteria) -> Result<SearchOutcome, UpstreamError> {
        let request_id = uuid::Uuid::new_v4();
        let span = tracing::info_span!("school_search", %request_id);

        async {
            tracing::info!(
                "Searching schools near {} (age {}, budget Q{})",
                criteria.location.as_str(),
                criteria.age,
                criteria.budget
            );

            tracing::info!("Buscando recomendaciones...");
            let recommendations = self
                .completion
                .get_recommendations(&prompt::recommendation_prompt(criteria))
                .await?;

            tracing::info!("Buscando información adicional...");
            let search = self
                .search
                .search_schools(&prompt::search_query(criteria))
                .await?;
            let results = top_results(&search)?;

            tracing::info!(
                "Search complete: {} chars of recommendations, {} results",
                recommendations.len(),
                results.len()
            );

            Ok::<_, UpstreamError>(SearchOutcome {
                recommendations,
                results,
            })
        }
        .instrument(span)
        .await
    }
}
