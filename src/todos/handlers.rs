use axum::{http::StatusCode, routing::get, Json, Router};
use tracing::{info, instrument};

use crate::{
    db::DbConn,
    error::{ApiError, AppJson, AppPath},
    state::AppState,
    todos::{
        dto::{CreateTodoRequest, UpdateTodoRequest},
        repo_types::Todo,
    },
};

pub fn todo_routes() -> Router<AppState> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/:id",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
}

#[instrument(skip(conn, payload))]
pub async fn create_todo(
    DbConn(mut conn): DbConn,
    AppJson(payload): AppJson<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    payload.validate()?;
    let todo = Todo::create(&mut conn, &payload.title).await?;
    info!(todo_id = todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

#[instrument(skip(conn))]
pub async fn list_todos(DbConn(mut conn): DbConn) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = Todo::list(&mut conn).await?;
    Ok(Json(todos))
}

#[instrument(skip(conn))]
pub async fn get_todo(
    DbConn(mut conn): DbConn,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Todo>, ApiError> {
    let todo = Todo::find_by_id(&mut conn, id)
        .await?
        .ok_or(ApiError::NotFound("Todo"))?;
    Ok(Json(todo))
}

#[instrument(skip(conn, payload))]
pub async fn update_todo(
    DbConn(mut conn): DbConn,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<UpdateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    let patch = payload.into_patch()?;
    let todo = Todo::update(&mut conn, id, &patch)
        .await?
        .ok_or(ApiError::NotFound("Todo"))?;
    info!(todo_id = todo.id, "todo updated");
    Ok(Json(todo))
}

#[instrument(skip(conn))]
pub async fn delete_todo(
    DbConn(mut conn): DbConn,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, ApiError> {
    if !Todo::delete(&mut conn, id).await? {
        return Err(ApiError::NotFound("Todo"));
    }
    info!(todo_id = id, "todo deleted");
    Ok(StatusCode::NO_CONTENT)
}
