use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::users::dto::UserResponse;
use crate::validation::check_length;

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        check_length("password", &self.password, 8, 72)
    }
}

/// Response returned after a successful login. No token is issued.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub user: UserResponse,
}
