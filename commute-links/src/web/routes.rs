//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::refresh::{RefreshController, RefreshOutcome, Visibility};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/links", get(refresh_links))
        .route("/api/links", get(api_links))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The link page, generated on load.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut controller = state.controller();
    controller.mount();

    let template = IndexTemplate {
        page: PageView::from_controller(&controller),
    };
    render(&template).map(Html)
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Called by the page script on every `visibilitychange`.
///
/// A hidden page gets `204 No Content` and nothing is generated.
async fn refresh_links(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<RefreshRequest>,
) -> Result<Response, AppError> {
    let visibility = req
        .visibility
        .as_deref()
        .map(str::parse::<Visibility>)
        .transpose()
        .map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?
        .unwrap_or(Visibility::Visible);

    let mut controller = state.controller();
    if controller.on_visibility_change(visibility) == RefreshOutcome::Skipped {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    tracing::debug!(%visibility, "refreshed links");

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = LinksFragmentTemplate {
            page: PageView::from_controller(&controller),
        };
        Ok(Html(render(&template)?).into_response())
    } else {
        Ok(Json(links_response(&controller)).into_response())
    }
}

/// Current links as JSON.
async fn api_links(State(state): State<AppState>) -> Json<LinksResponse> {
    let mut controller = state.controller();
    controller.mount();
    Json(links_response(&controller))
}

/// Unknown paths.
async fn not_found() -> Response {
    let template = ErrorTemplate {
        title: "Not found".to_string(),
        message: "このページはありません。".to_string(),
    };
    match render(&template) {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => e.into_response(),
    }
}

fn links_response(controller: &RefreshController) -> LinksResponse {
    let now = controller.displayed_time();
    LinksResponse {
        time: now.map(format_display_time).unwrap_or_default(),
        generated_at: now
            .map(|t| t.format("%Y-%m-%dT%H:%M:%S").to_string())
            .unwrap_or_default(),
        links: controller.board().clone(),
    }
}

fn render(template: &impl Template) -> Result<String, AppError> {
    template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                tracing::warn!(%message, "bad request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal { message } => {
                tracing::error!(%message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
