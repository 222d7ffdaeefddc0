use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::app_state::AppState;
use crate::domain::AuthenticatedIdentity;
use crate::errors::UnauthorizedError;

/// Gate for the configured protected routes.
///
/// Laid over the whole router; which paths it gates comes from the declared
/// protected-prefix list in config rather than from registration order, so a
/// misordered route cannot end up accidentally unprotected.
///
/// Per request: extract a strict `Bearer <token>` credential, decode it, and
/// either attach the resulting identity to the request or reject with one
/// uniform 401. The codec's fine-grained failure kinds go to the debug log
/// only; the client must not be able to tell a bad signature from an expired
/// token.
pub async fn access_guard(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    if !state.config.is_protected_route(&path) {
        return next.run(request).await;
    }

    // Missing header, wrong scheme, and empty token all land here.
    let Some(token) = bearer_token(request.headers()) else {
        log::debug!("rejected request to {path}: no bearer token");
        return UnauthorizedError.into_response();
    };

    match state.token_codec.decode(token) {
        Ok(claims) => {
            request
                .extensions_mut()
                .insert(AuthenticatedIdentity::from_claims(claims));
            next.run(request).await
        }
        Err(err) => {
            log::debug!("rejected token for {path}: {err}");
            UnauthorizedError.into_response()
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    if token.is_empty() {
        return None;
    }
    Some(token)
}
