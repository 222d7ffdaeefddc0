use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::{LoginRequestBody, LoginResponse};
use crate::errors::LoginError;

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequestBody>,
) -> Result<impl IntoResponse, LoginError> {
    let token = state.issuer.login(&request.user, &request.pass).await?;

    Ok((StatusCode::OK, Json(LoginResponse { token })))
}
