// Pet Adoption - Web Server
// HTML pages for the two routes plus a JSON API, both backed by Screen

use crate::catalog::Catalog;
use crate::html::render_page;
use crate::pet::PetId;
use crate::route::Route;
use crate::screen::{overview_rows, render, PetDetail, PetRow, Screen};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state. The catalog is read-only, so no lock.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

/// API Response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

// ============================================================================
// Page Handlers
// ============================================================================

fn page(screen: Screen) -> Response {
    let status = if screen.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    (status, Html(render_page(&screen))).into_response()
}

/// GET / - Overview page
async fn overview_page(State(state): State<AppState>) -> Response {
    page(render(&Route::Overview, &state.catalog))
}

/// GET /pet/:petId - Detail page
async fn detail_page(State(state): State<AppState>, Path(pet_id): Path<PetId>) -> Response {
    page(render(&Route::Detail(pet_id), &state.catalog))
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/pets - All pets as overview rows
async fn list_pets(State(state): State<AppState>) -> Json<ApiResponse<Vec<PetRow>>> {
    Json(ApiResponse::ok(overview_rows(&state.catalog)))
}

/// GET /api/pets/:petId - One pet's detail
async fn get_pet(State(state): State<AppState>, Path(pet_id): Path<PetId>) -> Response {
    match state.catalog.by_id(pet_id) {
        Ok(pet) => (StatusCode::OK, Json(ApiResponse::ok(PetDetail::from(pet)))).into_response(),
        Err(e) => {
            tracing::warn!(pet_id, "{}", e);
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<PetDetail>::err(e.to_string())),
            )
                .into_response()
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn app(catalog: Arc<Catalog>) -> Router {
    let state = AppState { catalog };

    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/pets", get(list_pets))
        .route("/pets/:petId", get(get_pet))
        .with_state(state.clone());

    Router::new()
        .route("/", get(overview_page))
        .route("/pet/:petId", get(detail_page))
        .with_state(state)
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    async fn get_response(uri: &str) -> (StatusCode, String) {
        let app = app(Arc::new(Catalog::builtin()));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_overview_page() {
        let (status, body) = get_response("/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Aaliyah"));
        assert!(body.contains("href=\"/pet/5\""));
    }

    #[tokio::test]
    async fn test_detail_page() {
        let (status, body) = get_response("/pet/1").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Max"));
        assert!(body.contains("Beagle"));
    }

    #[tokio::test]
    async fn test_detail_page_not_found() {
        let (status, body) = get_response("/pet/99").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Pet not found"));
    }

    #[tokio::test]
    async fn test_detail_page_bad_id() {
        let (status, _) = get_response("/pet/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_api_health() {
        let (status, body) = get_response("/api/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": "OK"}));
    }

    #[tokio::test]
    async fn test_api_list_pets() {
        let (status, body) = get_response("/api/pets").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let rows = json["data"].as_array().unwrap();
        let ids: Vec<u64> = rows.iter().map(|r| r["id"].as_u64().unwrap()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_api_get_pet() {
        let (status, body) = get_response("/api/pets/5").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["data"]["name"], "Maja");
        assert_eq!(json["data"]["breed"], "Labrador");
    }

    #[tokio::test]
    async fn test_api_get_pet_not_found() {
        let (status, body) = get_response("/api/pets/42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "pet #42 not found");
        assert!(json.get("data").is_none());
    }
}
