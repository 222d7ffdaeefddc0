use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::domain::AuthenticatedIdentity;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct BalanceResponse {
    pub user: String,
    pub balance: String,
    pub status: String,
}

/// Only reachable once the access guard reached `Authorized`; the
/// `Extension` extractor is the typed accessor for the identity the guard
/// attached. Its absence would be a routing bug, not a client error.
pub async fn balance(
    Extension(identity): Extension<AuthenticatedIdentity>,
) -> Json<BalanceResponse> {
    let user = identity.display_name().unwrap_or_default().to_owned();

    Json(BalanceResponse {
        user,
        balance: "$1,000,000".to_owned(),
        status: "Access Granted".to_owned(),
    })
}
