use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use crate::{
    error::{AppError, Result},
    middleware_layer::auth::CurrentUser,
    models::todo::Todo,
    services::todos as todos_service,
    state::AppState,
    validation::todos::validate_todo_id,
};

/// Lists every task across all users. Admin role required.
#[axum::debug_handler]
pub async fn list_all_todos(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<Todo>>> {
    if user.role != "admin" {
        return Err(AppError::Unauthorized);
    }

    let todos = todos_service::list_all(&state.db).await?;
    Ok(Json(todos))
}

/// Deletes any task regardless of owner. Admin role required.
#[axum::debug_handler]
pub async fn delete_any_todo(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(todo_id): Path<i32>,
) -> Result<StatusCode> {
    validate_todo_id(todo_id)?;

    if user.role != "admin" {
        return Err(AppError::Unauthorized);
    }

    todos_service::delete_any(&state.db, todo_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
