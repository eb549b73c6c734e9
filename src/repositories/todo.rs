use sqlx::PgPool;

use crate::{error::Result, models::todo::Todo};

/// Lists all tasks owned by the given user, oldest first.
///
/// # Arguments
///
/// * `db` - The database connection pool.
/// * `owner_id` - The id of the owning user.
///
/// # Returns
///
/// A `Result` containing a `Vec<Todo>`.
pub async fn list_by_owner(db: &PgPool, owner_id: i32) -> Result<Vec<Todo>> {
    let todos = sqlx::query_as::<_, Todo>(
        r#"
        SELECT id, title, description, priority, complete, owner_id
        FROM todos
        WHERE owner_id = $1
        ORDER BY id ASC
        "#,
    )
    .bind(owner_id)
    .fetch_all(db)
    .await?;

    Ok(todos)
}

/// Lists every task regardless of owner, oldest first.
///
/// # Arguments
///
/// * `db` - The database connection pool.
///
/// # Returns
///
/// A `Result` containing a `Vec<Todo>`.
pub async fn list_all(db: &PgPool) -> Result<Vec<Todo>> {
    let todos = sqlx::query_as::<_, Todo>(
        r#"
        SELECT id, title, description, priority, complete, owner_id
        FROM todos
        ORDER BY id ASC
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(todos)
}

/// Finds a task by id, scoped to its owner.
///
/// # Arguments
///
/// * `db` - The database connection pool.
/// * `owner_id` - The id of the owning user.
/// * `todo_id` - The id of the task.
///
/// # Returns
///
/// A `Result` containing an `Option<Todo>`.
pub async fn find_owned(db: &PgPool, owner_id: i32, todo_id: i32) -> Result<Option<Todo>> {
    let todo = sqlx::query_as::<_, Todo>(
        r#"
        SELECT id, title, description, priority, complete, owner_id
        FROM todos
        WHERE id = $1 AND owner_id = $2
        "#,
    )
    .bind(todo_id)
    .bind(owner_id)
    .fetch_optional(db)
    .await?;

    Ok(todo)
}

/// Inserts a new task owned by the given user.
///
/// # Arguments
///
/// * `db` - The database connection pool.
/// * `owner_id` - The id of the owning user.
/// * `title` - The task's title.
/// * `description` - The task's description.
/// * `priority` - The task's priority.
/// * `complete` - Whether the task is complete.
///
/// # Returns
///
/// A `Result` containing the created `Todo`.
pub async fn create(
    db: &PgPool,
    owner_id: i32,
    title: &str,
    description: &str,
    priority: i32,
    complete: bool,
) -> Result<Todo> {
    let todo = sqlx::query_as::<_, Todo>(
        r#"
        INSERT INTO todos (title, description, priority, complete, owner_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, description, priority, complete, owner_id
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(priority)
    .bind(complete)
    .bind(owner_id)
    .fetch_one(db)
    .await?;

    Ok(todo)
}

/// Replaces all four mutable fields of an owned task in one statement.
///
/// # Arguments
///
/// * `db` - The database connection pool.
/// * `owner_id` - The id of the owning user.
/// * `todo_id` - The id of the task.
/// * `title` - The new title.
/// * `description` - The new description.
/// * `priority` - The new priority.
/// * `complete` - The new completion flag.
///
/// # Returns
///
/// A `Result` containing the number of rows updated (0 when the task
/// does not exist or is owned by someone else).
#[allow(clippy::too_many_arguments)]
pub async fn update_owned(
    db: &PgPool,
    owner_id: i32,
    todo_id: i32,
    title: &str,
    description: &str,
    priority: i32,
    complete: bool,
) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE todos
        SET title = $1, description = $2, priority = $3, complete = $4
        WHERE id = $5 AND owner_id = $6
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(priority)
    .bind(complete)
    .bind(todo_id)
    .bind(owner_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected())
}

/// Deletes a task by id, scoped to its owner.
///
/// # Arguments
///
/// * `db` - The database connection pool.
/// * `owner_id` - The id of the owning user.
/// * `todo_id` - The id of the task.
///
/// # Returns
///
/// A `Result` containing the number of rows deleted.
pub async fn delete_owned(db: &PgPool, owner_id: i32, todo_id: i32) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM todos
        WHERE id = $1 AND owner_id = $2
        "#,
    )
    .bind(todo_id)
    .bind(owner_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected())
}

/// Deletes a task by id regardless of owner. Admin use only; the role
/// gate lives in the handler.
///
/// # Arguments
///
/// * `db` - The database connection pool.
/// * `todo_id` - The id of the task.
///
/// # Returns
///
/// A `Result` containing the number of rows deleted.
pub async fn delete_any(db: &PgPool, todo_id: i32) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM todos
        WHERE id = $1
        "#,
    )
    .bind(todo_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected())
}
