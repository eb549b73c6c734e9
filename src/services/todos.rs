use sqlx::PgPool;

use crate::{
    error::{AppError, Result},
    models::todo::Todo,
    repositories::todo as todo_repo,
};

/// Lists all tasks owned by a user.
///
/// # Arguments
///
/// * `db` - The database connection pool.
/// * `user_id` - The ID of the owning user.
///
/// # Returns
///
/// A `Result` containing a `Vec<Todo>`.
pub async fn list_for_user(db: &PgPool, user_id: i32) -> Result<Vec<Todo>> {
    todo_repo::list_by_owner(db, user_id).await
}

/// Gets a single task owned by a user.
///
/// # Arguments
///
/// * `db` - The database connection pool.
/// * `user_id` - The ID of the owning user.
/// * `todo_id` - The ID of the task.
///
/// # Returns
///
/// A `Result` containing the `Todo`, or `NotFound` if it does not
/// exist or belongs to someone else.
pub async fn get_for_user(db: &PgPool, user_id: i32, todo_id: i32) -> Result<Todo> {
    todo_repo::find_owned(db, user_id, todo_id)
        .await?
        .ok_or(AppError::NotFound)
}

/// Creates a task owned by a user.
///
/// # Arguments
///
/// * `db` - The database connection pool.
/// * `user_id` - The ID of the owning user.
/// * `title` - The task's title.
/// * `description` - The task's description.
/// * `priority` - The task's priority.
/// * `complete` - Whether the task is complete.
///
/// # Returns
///
/// A `Result` containing the created `Todo`.
pub async fn create_for_user(
    db: &PgPool,
    user_id: i32,
    title: String,
    description: String,
    priority: i32,
    complete: bool,
) -> Result<Todo> {
    let todo = todo_repo::create(db, user_id, &title, &description, priority, complete).await?;

    tracing::info!("✅ Todo {} created for user {}", todo.id, user_id);
    Ok(todo)
}

/// Replaces all mutable fields of a task owned by a user.
///
/// # Arguments
///
/// * `db` - The database connection pool.
/// * `user_id` - The ID of the owning user.
/// * `todo_id` - The ID of the task.
/// * `title` - The new title.
/// * `description` - The new description.
/// * `priority` - The new priority.
/// * `complete` - The new completion flag.
///
/// # Returns
///
/// A `Result<()>`, `NotFound` if no owned task matched.
#[allow(clippy::too_many_arguments)]
pub async fn update_for_user(
    db: &PgPool,
    user_id: i32,
    todo_id: i32,
    title: String,
    description: String,
    priority: i32,
    complete: bool,
) -> Result<()> {
    let updated =
        todo_repo::update_owned(db, user_id, todo_id, &title, &description, priority, complete)
            .await?;

    if updated == 0 {
        return Err(AppError::NotFound);
    }

    Ok(())
}

/// Deletes a task owned by a user.
///
/// # Arguments
///
/// * `db` - The database connection pool.
/// * `user_id` - The ID of the owning user.
/// * `todo_id` - The ID of the task.
///
/// # Returns
///
/// A `Result<()>`, `NotFound` if no owned task matched.
pub async fn delete_for_user(db: &PgPool, user_id: i32, todo_id: i32) -> Result<()> {
    let deleted = todo_repo::delete_owned(db, user_id, todo_id).await?;

    if deleted == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!("🗑️ Todo {} deleted by user {}", todo_id, user_id);
    Ok(())
}

/// Lists every task in the system, for the admin surface.
///
/// # Arguments
///
/// * `db` - The database connection pool.
///
/// # Returns
///
/// A `Result` containing a `Vec<Todo>`.
pub async fn list_all(db: &PgPool) -> Result<Vec<Todo>> {
    todo_repo::list_all(db).await
}

/// Deletes any task regardless of owner, for the admin surface.
///
/// # Arguments
///
/// * `db` - The database connection pool.
/// * `todo_id` - The ID of the task.
///
/// # Returns
///
/// A `Result<()>`, `NotFound` if no task matched.
pub async fn delete_any(db: &PgPool, todo_id: i32) -> Result<()> {
    let deleted = todo_repo::delete_any(db, todo_id).await?;

    if deleted == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!("🗑️ Todo {} deleted by admin", todo_id);
    Ok(())
}
