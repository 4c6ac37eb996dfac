use crate::models::{ResultBlock, SearchOutcome};
use crate::services::UpstreamError;
use serde_json::Value;

/// Number of organic results shown under the recommendations
pub const RESULTS_SHOWN: usize = 3;

/// Advisory note shown below every result page
pub const ADVISORY_NOTE: &str = "Nota: Esta aplicación proporciona recomendaciones basadas en la información proporcionada. \
Te recomendamos investigar más a fondo y contactar directamente a los colegios para obtener información más precisa y actualizada.";

/// Take the first three organic results from a search response
///
/// A missing `organic` key yields no results. Entries are copied verbatim.
pub fn top_results(search: &Value) -> Result<Vec<ResultBlock>, UpstreamError> {
    let organic = match search.get("organic") {
        None => return Ok(Vec::new()),
        Some(value) => value
            .as_array()
            .ok_or_else(|| UpstreamError::Response("organic is not an array".into()))?,
    };

    organic
        .iter()
        .take(RESULTS_SHOWN)
        .map(|entry| {
            serde_json::from_value(entry.clone())
                .map_err(|e| UpstreamError::Response(format!("Malformed organic result: {}", e)))
        })
        .collect()
}

impl ResultBlock {
    pub fn to_markdown(&self) -> String {
        format!(
            "**{}**\n\n{}\n\n[Más información]({})\n\n---",
            self.title, self.snippet, self.link
        )
    }
}

impl SearchOutcome {
    /// Full result page as Markdown
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str("## Recomendaciones de la IA:\n\n");
        out.push_str(&self.recommendations);
        out.push_str("\n\n## Resultados de búsqueda adicionales:\n\n");
        for block in &self.results {
            out.push_str(&block.to_markdown());
            out.push_str("\n\n");
        }
        out.push_str(ADVISORY_NOTE);
        out
    }
}
