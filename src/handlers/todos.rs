use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    error::Result,
    middleware_layer::auth::CurrentUser,
    models::todo::Todo,
    services::todos as todos_service,
    state::AppState,
    validation::todos::*,
};

/// The request payload for creating or replacing a task.
#[derive(Deserialize, Debug)]
pub struct TodoRequest {
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub complete: bool,
}

/// Lists the caller's tasks.
#[axum::debug_handler]
pub async fn list_todos(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<Todo>>> {
    let todos = todos_service::list_for_user(&state.db, user.id).await?;
    Ok(Json(todos))
}

/// Gets one of the caller's tasks by id.
#[axum::debug_handler]
pub async fn get_todo(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(todo_id): Path<i32>,
) -> Result<Json<Todo>> {
    validate_todo_id(todo_id)?;

    let todo = todos_service::get_for_user(&state.db, user.id, todo_id).await?;
    Ok(Json(todo))
}

/// Creates a task owned by the caller.
#[axum::debug_handler]
pub async fn create_todo(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<TodoRequest>,
) -> Result<impl IntoResponse> {
    validate_title(&payload.title)?;
    validate_description(&payload.description)?;
    validate_priority(payload.priority)?;

    let todo = todos_service::create_for_user(
        &state.db,
        user.id,
        payload.title,
        payload.description,
        payload.priority,
        payload.complete,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(todo)))
}

/// Replaces all mutable fields of one of the caller's tasks.
#[axum::debug_handler]
pub async fn update_todo(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(todo_id): Path<i32>,
    Json(payload): Json<TodoRequest>,
) -> Result<StatusCode> {
    validate_todo_id(todo_id)?;
    validate_title(&payload.title)?;
    validate_description(&payload.description)?;
    validate_priority(payload.priority)?;

    todos_service::update_for_user(
        &state.db,
        user.id,
        todo_id,
        payload.title,
        payload.description,
        payload.priority,
        payload.complete,
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes one of the caller's tasks.
#[axum::debug_handler]
pub async fn delete_todo(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(todo_id): Path<i32>,
) -> Result<StatusCode> {
    validate_todo_id(todo_id)?;

    todos_service::delete_for_user(&state.db, user.id, todo_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
