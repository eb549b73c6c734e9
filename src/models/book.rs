use serde::Serialize;

/// A book record held only in process memory; lost on restart.
#[derive(Serialize, Clone, Debug)]
pub struct Book {
    /// The unique identifier for the book, assigned by the shelf.
    pub id: i32,
    /// The book's title.
    pub title: String,
    /// The book's author.
    pub author: String,
    /// The book's description.
    pub description: String,
    /// The book's rating, 1 to 5.
    pub rating: i32,
    /// The year the book was published, if known.
    pub published_date: Option<i32>,
}
