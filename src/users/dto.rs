use serde::{Deserialize, Serialize};
use time::Date;

use crate::error::ApiError;
use crate::users::repo_types::User;
use crate::validation::{check_length, is_valid_email};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    #[serde(rename = "dateOfBirth", with = "iso_date")]
    pub date_of_birth: Date,
    pub email: String,
    pub password: String,
}

impl CreateUserRequest {
    /// Trims and lower-cases the email, then checks every field.
    pub fn normalize_and_validate(&mut self) -> Result<(), ApiError> {
        self.email = normalize_email(&self.email);

        check_length("username", &self.username, 3, 50)?;
        check_length("firstname", &self.firstname, 1, 50)?;
        check_length("lastname", &self.lastname, 1, 50)?;
        check_length("email", &self.email, 3, 100)?;
        if !is_valid_email(&self.email) {
            return Err(ApiError::Validation("email is not a valid email address".into()));
        }
        check_length("password", &self.password, 8, 72)?;
        Ok(())
    }
}

pub(crate) fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct UserResponse {
    pub user_id: i64,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    #[serde(rename = "dateOfBirth", with = "iso_date")]
    pub date_of_birth: Date,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
            firstname: user.firstname,
            lastname: user.lastname,
            date_of_birth: user.date_of_birth,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn request() -> CreateUserRequest {
        serde_json::from_value(serde_json::json!({
            "username": "ann",
            "firstname": "Ann",
            "lastname": "Lee",
            "dateOfBirth": "1990-04-12",
            "email": "  Ann@Example.COM ",
            "password": "hunter2hunter2",
        }))
        .expect("valid body")
    }

    #[test]
    fn parses_iso_date_of_birth() {
        assert_eq!(request().date_of_birth, date!(1990 - 04 - 12));
    }

    #[test]
    fn rejects_non_iso_date() {
        let parsed = serde_json::from_value::<CreateUserRequest>(serde_json::json!({
            "username": "ann",
            "firstname": "Ann",
            "lastname": "Lee",
            "dateOfBirth": "12/04/1990",
            "email": "ann@example.com",
            "password": "hunter2hunter2",
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn normalizes_email() {
        let mut req = request();
        req.normalize_and_validate().expect("valid");
        assert_eq!(req.email, "ann@example.com");
    }

    #[test]
    fn rejects_short_password_and_long_password() {
        let mut req = request();
        req.password = "short".into();
        assert!(matches!(req.normalize_and_validate(), Err(ApiError::Validation(_))));

        let mut req = request();
        req.password = "x".repeat(73);
        assert!(req.normalize_and_validate().is_err());
    }

    #[test]
    fn rejects_bad_email() {
        let mut req = request();
        req.email = "not-an-email".into();
        assert!(req.normalize_and_validate().is_err());
    }

    #[test]
    fn response_never_carries_credentials() {
        let user = User {
            user_id: 7,
            username: "ann".into(),
            firstname: "Ann".into(),
            lastname: "Lee".into(),
            date_of_birth: date!(1990 - 04 - 12),
            email: "ann@example.com".into(),
            password_hash: "$argon2id$secret".into(),
        };
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(json["dateOfBirth"], "1990-04-12");
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
        assert!(!json.to_string().contains("argon2"));
    }
}
