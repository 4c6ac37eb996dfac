use actix_web::{http::header, web, HttpRequest, HttpResponse, Responder};
use validator::Validate;
use crate::core::SchoolFinder;
use crate::models::{ErrorResponse, HealthResponse, SearchCriteria, MUNICIPALITIES};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub finder: SchoolFinder,
}

/// Configure the JSON API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/municipalities", web::get().to(list_municipalities))
        .route("/schools/search", web::post().to(search_schools));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Municipalities accepted as a primary location
async fn list_municipalities() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "municipalities": MUNICIPALITIES,
        "count": MUNICIPALITIES.len(),
    }))
}

fn wants_markdown(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map_or(false, |accept| accept.contains("text/markdown"))
}

/// Search schools endpoint
///
/// POST /api/v1/schools/search
///
/// Request body:
/// ```json
/// {
///   "sex": "female",
///   "age": 6,
///   "budget": 25000,
///   "location": {"municipality": "Mixco"},
///   "otherLocations": ["Villa Nueva"],
///   "maxDistanceKm": 10,
///   "bilingual": true,
///   "transport": false,
///   "religion": "catholic",
///   "activities": ["sports", "music"]
/// }
/// ```
///
/// Responds with JSON, or with the Markdown page when `Accept` asks for `text/markdown`.
async fn search_schools(
    state: web::Data<AppState>,
    req: web::Json<SearchCriteria>,
    http_req: HttpRequest,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.finder.find(&req).await {
        Ok(outcome) if wants_markdown(&http_req) => HttpResponse::Ok()
            .content_type("text/markdown; charset=utf-8")
            .body(outcome.to_markdown()),
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(e) => {
            tracing::error!("School search failed: {}", e);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: "Upstream request failed".to_string(),
                message: e.to_string(),
                status_code: 502,
            })
        }
    }
}
