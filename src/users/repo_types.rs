use sqlx::FromRow;
use time::Date;

/// User record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub date_of_birth: Date,
    pub email: String,
    pub password_hash: String, // Argon2 PHC string, never leaves this struct
}

/// Column values for a new row; `password_hash` is already derived.
#[derive(Debug)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub firstname: &'a str,
    pub lastname: &'a str,
    pub date_of_birth: Date,
    pub email: &'a str,
    pub password_hash: &'a str,
}
