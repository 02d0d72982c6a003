//! HTTP request handlers for the salary service API.
//!
//! This module contains the handler functions for all API endpoints and
//! the router that wires them together.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_breakdown, compute_breakdown_from_net_with, parse_amount};
use crate::config::CorsSettings;
use crate::error::EngineError;
use crate::text::{reverse_words, sort_words};

use super::request::{AfterTaxIncomeQuery, PreTaxIncomeQuery, SentenceQuery};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/reverse-words", get(reverse_words_handler))
        .route("/sort-words", get(sort_words_handler))
        .route(
            "/calculate-after-tax-income",
            get(after_tax_income_handler),
        )
        .route(
            "/calculate-pre-tax-income-from-take-home",
            get(pre_tax_income_handler),
        )
        .with_state(state)
}

/// Creates the router with CORS and request tracing layers applied.
pub fn create_app(state: AppState, cors: &CorsSettings) -> Router {
    create_router(state)
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// Builds the CORS layer for the configured origins.
fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if settings.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

/// Handler for GET /.
async fn root_handler() -> StatusCode {
    StatusCode::OK
}

/// Handler for GET /reverse-words.
async fn reverse_words_handler(Query(query): Query<SentenceQuery>) -> Json<String> {
    Json(reverse_words(&query.sentence))
}

/// Handler for GET /sort-words.
async fn sort_words_handler(Query(query): Query<SentenceQuery>) -> Json<String> {
    Json(sort_words(&query.sentence))
}

/// Handler for GET /calculate-after-tax-income.
///
/// Computes the breakdown for the `annualBaseSalary` query parameter.
async fn after_tax_income_handler(
    State(state): State<AppState>,
    query: Result<Query<AfterTaxIncomeQuery>, QueryRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing after-tax income request");

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return query_rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = parse_amount(
        "annualBaseSalary",
        query.annual_base_salary.as_deref().unwrap_or_default(),
    )
    .and_then(|gross| compute_breakdown(state.schedule(), gross));

    match result {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                gross_salary = %breakdown.gross_salary,
                total_tax = %breakdown.taxes.total,
                net_income = %breakdown.net_income,
                duration_us = start_time.elapsed().as_micros(),
                "After-tax income calculated"
            );
            (StatusCode::OK, Json(breakdown)).into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /calculate-pre-tax-income-from-take-home.
///
/// Computes the breakdown for the gross salary that yields the
/// `postTaxSalary` query parameter, using the optional `strategy`.
async fn pre_tax_income_handler(
    State(state): State<AppState>,
    query: Result<Query<PreTaxIncomeQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pre-tax income request");

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return query_rejection_response(correlation_id, rejection),
    };
    let strategy = query.strategy.unwrap_or_default();

    let start_time = Instant::now();
    let result = parse_amount(
        "postTaxSalary",
        query.post_tax_salary.as_deref().unwrap_or_default(),
    )
    .and_then(|net| compute_breakdown_from_net_with(state.schedule(), net, strategy));

    match result {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                strategy = ?strategy,
                gross_salary = %breakdown.gross_salary,
                net_income = %breakdown.net_income,
                duration_us = start_time.elapsed().as_micros(),
                "Pre-tax income calculated"
            );
            (StatusCode::OK, Json(breakdown)).into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn query_rejection_response(correlation_id: Uuid, rejection: QueryRejection) -> Response {
    let body_text = rejection.body_text();
    warn!(
        correlation_id = %correlation_id,
        error = %body_text,
        "Query string rejected"
    );
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ApiError::validation_error(body_text)),
    )
        .into_response()
}
