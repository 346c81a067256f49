use axum::{routing::post, Json, Router};
use tracing::{info, instrument};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse},
        services::authenticate,
    },
    db::DbConn,
    error::{ApiError, AppJson},
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

#[instrument(skip(conn, payload))]
pub async fn login(
    DbConn(mut conn): DbConn,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    payload.validate()?;
    let user = authenticate(&mut conn, &payload.username_or_email, &payload.password).await?;

    info!(user_id = user.user_id, "user logged in");
    Ok(Json(LoginResponse {
        ok: true,
        user: user.into(),
    }))
}
