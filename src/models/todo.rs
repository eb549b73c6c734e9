use serde::Serialize;
use sqlx::FromRow;

/// A task row as persisted in the `todos` table.
#[derive(FromRow, Serialize, Clone, Debug)]
pub struct Todo {
    /// The unique identifier for the task.
    pub id: i32,
    /// The task's title.
    pub title: String,
    /// The task's description.
    pub description: String,
    /// The task's priority, 1 (lowest) to 5 (highest).
    pub priority: i32,
    /// Whether the task is complete.
    pub complete: bool,
    /// The id of the user who owns the task.
    pub owner_id: i32,
}
