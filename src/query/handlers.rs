use super::resolver::DrugIndexes;
use super::types::{
    DdiResponse, ENDPOINT_FULL_INTERACTIONS, ENDPOINT_INTERACTIONS, ENDPOINT_TARGETS,
    ErrorResponse, InteractionResult, PairParams, TargetResponse,
};
use super::validation::{QueryError, validate_pair};

use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::{Extension, Json, Router, routing::get};
use std::sync::Arc;

pub type Rejection = (StatusCode, Json<ErrorResponse>);

/// Raw query string as key/value pairs; repeated keys are resolved by `PairParams`.
pub type RawQuery = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// Builds the lookup router. Each endpoint is also served with a trailing slash.
pub fn router(indexes: Arc<DrugIndexes>) -> Router {
    Router::new()
        .route(ENDPOINT_TARGETS, get(handle_targets))
        .route(&format!("{}/", ENDPOINT_TARGETS), get(handle_targets))
        .route(ENDPOINT_INTERACTIONS, get(handle_interactions))
        .route(&format!("{}/", ENDPOINT_INTERACTIONS), get(handle_interactions))
        .route(ENDPOINT_FULL_INTERACTIONS, get(handle_full_interactions))
        .route(
            &format!("{}/", ENDPOINT_FULL_INTERACTIONS),
            get(handle_full_interactions),
        )
        .layer(Extension(indexes))
}

fn reject(err: QueryError) -> Rejection {
    tracing::debug!("Rejected lookup request: {}", err);
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            detail: err.to_string(),
        }),
    )
}

fn pair_params(query: RawQuery) -> Result<PairParams, Rejection> {
    match query {
        Ok(Query(pairs)) => Ok(PairParams::from_pairs(pairs)),
        Err(rejection) => Err(reject(QueryError::Malformed(rejection.body_text()))),
    }
}

/// Returns the shared receptor target(s) if both drugs bind the same target.
pub async fn handle_targets(
    query: RawQuery,
    Extension(indexes): Extension<Arc<DrugIndexes>>,
) -> Result<Json<TargetResponse>, Rejection> {
    let params = pair_params(query)?;
    let (drug1, drug2) = validate_pair(&params).map_err(reject)?;

    Ok(Json(TargetResponse::from(indexes.shared_targets(drug1, drug2))))
}

/// Returns conditions and PRR, highest first, if the pair has reported adverse events.
pub async fn handle_interactions(
    query: RawQuery,
    Extension(indexes): Extension<Arc<DrugIndexes>>,
) -> Result<Json<DdiResponse>, Rejection> {
    let params = pair_params(query)?;
    let (drug1, drug2) = validate_pair(&params).map_err(reject)?;

    Ok(Json(DdiResponse::from(
        indexes.ranked_conditions(drug1, drug2),
    )))
}

/// Returns both shared targets and ranked conditions for the pair.
pub async fn handle_full_interactions(
    query: RawQuery,
    Extension(indexes): Extension<Arc<DrugIndexes>>,
) -> Result<Json<InteractionResult>, Rejection> {
    let params = pair_params(query)?;
    let (drug1, drug2) = validate_pair(&params).map_err(reject)?;

    Ok(Json(indexes.resolve(drug1, drug2)))
}
