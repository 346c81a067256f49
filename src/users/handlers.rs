use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::password::spawn_hash_password,
    db::DbConn,
    error::{ApiError, AppJson, AppPath},
    state::AppState,
    users::{
        dto::{CreateUserRequest, UserResponse},
        repo_types::{NewUser, User},
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/:id", get(get_user))
}

#[instrument(skip(conn, payload))]
pub async fn create_user(
    DbConn(mut conn): DbConn,
    AppJson(mut payload): AppJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    payload.normalize_and_validate()?;

    if User::find_by_username_or_email(&mut conn, &payload.username, &payload.email)
        .await?
        .is_some()
    {
        warn!("registration rejected: username or email taken");
        return Err(ApiError::Conflict);
    }

    let password_hash = spawn_hash_password(payload.password.clone()).await?;

    let new = NewUser {
        username: &payload.username,
        firstname: &payload.firstname,
        lastname: &payload.lastname,
        date_of_birth: payload.date_of_birth,
        email: &payload.email,
        password_hash: &password_hash,
    };
    let user = User::create(&mut conn, &new)
        .await
        .map_err(registration_insert_error)?;

    info!(user_id = user.user_id, username = %user.username, "user registered");
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// A unique violation here means a concurrent registration won the race
/// after our existence check; report it like any other clash.
pub fn registration_insert_error(err: sqlx::Error) -> ApiError {
    match err {
        sqlx::Error::Database(e) if e.is_unique_violation() => {
            warn!("registration rejected: unique constraint");
            ApiError::Conflict
        }
        other => other.into(),
    }
}

#[instrument(skip(conn))]
pub async fn get_user(
    DbConn(mut conn): DbConn,
    AppPath(user_id): AppPath<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = User::find_by_id(&mut conn, user_id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;
    Ok(Json(user.into()))
}
