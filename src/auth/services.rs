use sqlx::SqliteConnection;
use tracing::{debug, warn};

use crate::auth::password::{spawn_dummy_verify, spawn_password_matches};
use crate::error::ApiError;
use crate::users::{dto::normalize_email, repo_types::User};

/// Check credentials against the stored hash.
///
/// An unknown identifier still pays for one Argon2 verification (against the
/// dummy hash) so both failure paths cost about the same and return the same
/// error.
pub async fn authenticate(
    conn: &mut SqliteConnection,
    username_or_email: &str,
    password: &str,
) -> Result<User, ApiError> {
    let email = normalize_email(username_or_email);
    let user = User::find_by_username_or_email(conn, username_or_email, &email).await?;

    let Some(user) = user else {
        spawn_dummy_verify(password.to_owned()).await;
        warn!("login failed: unknown account");
        return Err(ApiError::InvalidCredentials);
    };

    if !spawn_password_matches(password.to_owned(), user.password_hash.clone()).await {
        warn!(user_id = user.user_id, "login failed: bad password");
        return Err(ApiError::InvalidCredentials);
    }

    debug!(user_id = user.user_id, "credentials verified");
    Ok(user)
}
