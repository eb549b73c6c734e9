use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, Result},
    models::book::Book,
    services::catalog::Bookshelf,
    validation::books::*,
};

/// The request payload for creating or replacing a book.
///
/// `id` is ignored on create (the catalog assigns one) and required to
/// locate the record on update.
#[derive(Deserialize, Debug)]
pub struct BookRequest {
    #[serde(default)]
    pub id: Option<i32>,
    pub title: String,
    pub author: String,
    pub description: String,
    pub rating: i32,
    #[serde(default)]
    pub published_date: Option<i32>,
}

/// The query parameters for filtering books by rating.
#[derive(Deserialize)]
pub struct RatingQuery {
    pub book_rating: i32,
}

/// Lists every book in the catalog.
#[axum::debug_handler]
pub async fn list_books(State(catalog): State<Bookshelf>) -> Json<Vec<Book>> {
    Json(catalog.list().await)
}

/// Gets a single book by id.
#[axum::debug_handler]
pub async fn get_book(
    State(catalog): State<Bookshelf>,
    Path(book_id): Path<i32>,
) -> Result<Json<Book>> {
    validate_book_id(book_id)?;

    let book = catalog.find(book_id).await.ok_or(AppError::NotFound)?;
    Ok(Json(book))
}

/// Lists books matching the given rating exactly.
#[axum::debug_handler]
pub async fn list_books_by_rating(
    State(catalog): State<Bookshelf>,
    Query(query): Query<RatingQuery>,
) -> Result<Json<Vec<Book>>> {
    validate_rating(query.book_rating)?;

    Ok(Json(catalog.find_by_rating(query.book_rating).await))
}

/// Lists books published in the given year.
#[axum::debug_handler]
pub async fn list_books_by_published_date(
    State(catalog): State<Bookshelf>,
    Path(published_date): Path<i32>,
) -> Json<Vec<Book>> {
    Json(catalog.find_by_published_date(published_date).await)
}

/// Adds a book to the catalog.
#[axum::debug_handler]
pub async fn create_book(
    State(catalog): State<Bookshelf>,
    Json(payload): Json<BookRequest>,
) -> Result<impl IntoResponse> {
    validate_title(&payload.title)?;
    validate_author(&payload.author)?;
    validate_description(&payload.description)?;
    validate_rating(payload.rating)?;

    let book = catalog
        .create(
            payload.title,
            payload.author,
            payload.description,
            payload.rating,
            payload.published_date,
        )
        .await;

    Ok((StatusCode::CREATED, Json(book)))
}

/// Replaces the book whose id matches the payload.
#[axum::debug_handler]
pub async fn update_book(
    State(catalog): State<Bookshelf>,
    Json(payload): Json<BookRequest>,
) -> Result<StatusCode> {
    validate_title(&payload.title)?;
    validate_author(&payload.author)?;
    validate_description(&payload.description)?;
    validate_rating(payload.rating)?;

    // A payload without an id can never match a stored book.
    let id = payload.id.ok_or(AppError::NotFound)?;

    catalog
        .update(Book {
            id,
            title: payload.title,
            author: payload.author,
            description: payload.description,
            rating: payload.rating,
            published_date: payload.published_date,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Removes a book by id. Succeeds whether or not the book exists.
#[axum::debug_handler]
pub async fn delete_book(
    State(catalog): State<Bookshelf>,
    Path(book_id): Path<i32>,
) -> Result<StatusCode> {
    validate_book_id(book_id)?;

    catalog.delete(book_id).await;

    Ok(StatusCode::NO_CONTENT)
}
