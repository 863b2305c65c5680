//! HTTP routes exposing datasets, facets and filtered results.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, Request, State, rejection::JsonRejection},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use common::{
    dataset::Language,
    search_query::{Facet, FilterState},
    search_result::{DatasetSummary, FacetValueSets, SearchResultFacets, SearchResultQuestions},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    api::{
        list_datasets::list_datasets,
        search::{
            SearchForResultsHitCountResponse, search_facet_counts, search_facet_values, search_for_results,
            search_for_results_hit_count,
        },
    },
    dataset_utils::dataset_store::{DatasetStore, StoredDataset},
};


#[derive(Clone)]
pub struct AppState {
    store: Arc<DatasetStore>,
}

impl AppState {
    pub fn new(store: DatasetStore) -> Self {
        Self { store: Arc::new(store) }
    }

    fn dataset(&self, language: &str) -> Result<&StoredDataset, ApiError> {
        let language: Language = language.parse().map_err(|e| ApiError::not_found(format!("{e}")))?;
        self.store
            .get(language)
            .ok_or_else(|| ApiError::not_found(format!("No dataset loaded for language {language}")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    pub code: u16,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self { message: message.into(), code: StatusCode::NOT_FOUND.as_u16() }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self { message: rejection.body_text(), code: rejection.status().as_u16() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: u64,
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/api/datasets", get(list_datasets_handler))
        .route("/api/datasets/{language}/facets", get(facet_values_handler))
        .route("/api/datasets/{language}/search", post(search_handler))
        .route("/api/datasets/{language}/hit_count", post(hit_count_handler))
        .route("/api/datasets/{language}/facet_counts/{facet}", post(facet_counts_handler))
        .layer(axum::middleware::from_fn(|request: Request, next: Next| async move {
            let method = request.method().clone();
            let path = request.uri().path().to_string();
            let res = next.run(request).await;
            debug!("{} {} -> {}", method, path, res.status());
            res
        }))
        .with_state(state)
}

async fn list_datasets_handler(State(state): State<AppState>) -> Json<Vec<DatasetSummary>> {
    Json(list_datasets(&state.store))
}

async fn facet_values_handler(
    State(state): State<AppState>,
    Path(language): Path<String>,
) -> Result<Json<FacetValueSets>, ApiError> {
    let stored = state.dataset(&language)?;
    Ok(Json(search_facet_values(stored)))
}

async fn search_handler(
    State(state): State<AppState>,
    Path(language): Path<String>,
    Query(params): Query<PageParams>,
    payload: Result<Json<FilterState>, JsonRejection>,
) -> Result<Json<SearchResultQuestions>, ApiError> {
    let Json(query) = payload?;
    let stored = state.dataset(&language)?;
    Ok(Json(search_for_results(stored, query, params.page)))
}

async fn hit_count_handler(
    State(state): State<AppState>,
    Path(language): Path<String>,
    payload: Result<Json<FilterState>, JsonRejection>,
) -> Result<Json<SearchForResultsHitCountResponse>, ApiError> {
    let Json(query) = payload?;
    let stored = state.dataset(&language)?;
    let total_count = search_for_results_hit_count(stored, &query);
    Ok(Json(SearchForResultsHitCountResponse { total_count }))
}

async fn facet_counts_handler(
    State(state): State<AppState>,
    Path((language, facet)): Path<(String, String)>,
    payload: Result<Json<FilterState>, JsonRejection>,
) -> Result<Json<SearchResultFacets>, ApiError> {
    let Json(query) = payload?;
    let stored = state.dataset(&language)?;
    let facet: Facet = facet.parse().map_err(|e| ApiError::not_found(format!("{e}")))?;
    Ok(Json(search_facet_counts(stored, &query, facet)))
}
