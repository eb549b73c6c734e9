use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

pub mod config;
pub mod db;
pub mod error;
pub mod state;

pub mod crypto {
    pub mod jwt;
}

pub mod models {
    pub mod book;
    pub mod todo;
    pub mod user;
}

pub mod repositories {
    pub mod todo;
    pub mod user;
}

pub mod services {
    pub mod auth;
    pub mod catalog;
    pub mod todos;
}

pub mod handlers {
    pub mod admin;
    pub mod auth;
    pub mod books;
    pub mod todos;
    pub mod user;
}

pub mod middleware_layer {
    pub mod auth;
}

pub mod validation {
    pub mod auth;
    pub mod books;
    pub mod todos;
}

use services::catalog::Bookshelf;
use state::AppState;

/// Builds the application router.
///
/// Three route groups are merged: the open authentication endpoints,
/// the token-guarded task/admin/user endpoints, and the open book
/// catalog (which carries its own in-memory state).
pub fn app(state: AppState, catalog: Bookshelf) -> Router {
    let auth_routes = Router::new()
        .route("/auth/", post(handlers::auth::register))
        .route("/auth/token", post(handlers::auth::login))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/todos/", get(handlers::todos::list_todos))
        .route("/todos/todo", post(handlers::todos::create_todo))
        .route(
            "/todos/todo/{todo_id}",
            get(handlers::todos::get_todo)
                .put(handlers::todos::update_todo)
                .delete(handlers::todos::delete_todo),
        )
        .route("/admin/todo", get(handlers::admin::list_all_todos))
        .route(
            "/admin/todo/{todo_id}",
            delete(handlers::admin::delete_any_todo),
        )
        .route("/user/", get(handlers::user::get_current_user))
        .route("/user/password", put(handlers::user::change_password))
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware_layer::auth::require_auth,
        ))
        .with_state(state);

    let book_routes = Router::new()
        .route(
            "/books",
            get(handlers::books::list_books)
                .post(handlers::books::create_book)
                .put(handlers::books::update_book),
        )
        .route("/books/", get(handlers::books::list_books_by_rating))
        .route(
            "/books/{book_id}",
            get(handlers::books::get_book).delete(handlers::books::delete_book),
        )
        .route(
            "/books/publish/{published_date}",
            get(handlers::books::list_books_by_published_date),
        )
        .with_state(catalog);

    Router::new()
        .merge(auth_routes)
        .merge(protected_routes)
        .merge(book_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true))
                .on_request(DefaultOnRequest::default().level(Level::DEBUG))
                .on_response(DefaultOnResponse::default().level(Level::DEBUG))
                .on_failure(DefaultOnFailure::default().level(Level::ERROR)),
        )
}
