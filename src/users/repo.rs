use crate::users::repo_types::{NewUser, User};
use sqlx::SqliteConnection;

impl User {
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        user_id: i64,
    ) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, username, firstname, lastname, date_of_birth, email, password_hash
            FROM tbl_user
            WHERE user_id = ?1
            "#,
        )
        .bind(user_id)
        .fetch_optional(conn)
        .await
    }

    /// One query for both fields, so callers cannot tell which one matched.
    pub async fn find_by_username_or_email(
        conn: &mut SqliteConnection,
        username: &str,
        email: &str,
    ) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, username, firstname, lastname, date_of_birth, email, password_hash
            FROM tbl_user
            WHERE username = ?1 OR email = ?2
            LIMIT 1
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_optional(conn)
        .await
    }

    pub async fn create(conn: &mut SqliteConnection, new: &NewUser<'_>) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO tbl_user
                (username, firstname, lastname, date_of_birth, email, password_hash)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING user_id, username, firstname, lastname, date_of_birth, email, password_hash
            "#,
        )
        .bind(new.username)
        .bind(new.firstname)
        .bind(new.lastname)
        .bind(new.date_of_birth)
        .bind(new.email)
        .bind(new.password_hash)
        .fetch_one(conn)
        .await
    }
}
