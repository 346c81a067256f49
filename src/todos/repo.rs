use crate::todos::repo_types::{Todo, TodoPatch};
use sqlx::SqliteConnection;

impl Todo {
    pub async fn create(conn: &mut SqliteConnection, title: &str) -> sqlx::Result<Todo> {
        sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (title, completed)
            VALUES (?1, 0)
            RETURNING id, title, completed
            "#,
        )
        .bind(title)
        .fetch_one(conn)
        .await
    }

    /// Newest first.
    pub async fn list(conn: &mut SqliteConnection) -> sqlx::Result<Vec<Todo>> {
        sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, title, completed
            FROM todos
            ORDER BY id DESC
            "#,
        )
        .fetch_all(conn)
        .await
    }

    pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<Option<Todo>> {
        sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, title, completed
            FROM todos
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(conn)
        .await
    }

    /// Applies the patch in one statement; `None` when no row has `id`.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: i64,
        patch: &TodoPatch,
    ) -> sqlx::Result<Option<Todo>> {
        sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos
            SET title = COALESCE(?1, title),
                completed = COALESCE(?2, completed)
            WHERE id = ?3
            RETURNING id, title, completed
            "#,
        )
        .bind(patch.title.as_deref())
        .bind(patch.completed)
        .bind(id)
        .fetch_optional(conn)
        .await
    }

    /// Returns whether a row was removed.
    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
