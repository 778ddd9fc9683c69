use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::AppState;
use crate::error::Result;
use crate::signup::{Reply, RequestBody};

/// Handler to sign an account up.
///
/// Body parsing failures surface as the transport 400 envelope; everything
/// past parsing is the sign-up pipeline's own [`Reply`].
pub async fn handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RequestBody>, JsonRejection>,
) -> Result<Reply> {
    let Json(body) = payload?;

    Ok(state.signup.handle(&body).await)
}
