//! Library Handlers - 书库浏览

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::domain::book::BookId;
use crate::infrastructure::http::dto::{ApiResponse, BookResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

pub async fn list_books(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Vec<BookResponse>>> {
    let books = state
        .library
        .list()
        .into_iter()
        .map(|book| {
            let media_id = state.codec.book_media_id(book.id);
            BookResponse::from_record(book, media_id)
        })
        .collect();

    Json(ApiResponse::success(books))
}

pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<u64>,
) -> Result<Json<ApiResponse<BookResponse>>, ApiError> {
    let id = BookId::new(book_id);
    let book = state
        .library
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("Book not found: {}", id)))?;

    let media_id = state.codec.book_media_id(id);
    Ok(Json(ApiResponse::success(BookResponse::from_record(book, media_id))))
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use tower::util::ServiceExt;

    use crate::infrastructure::http::state::test_support::{read_json, TestApp};

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_list_books_includes_media_ids() {
        let app = TestApp::new();
        let response = app.router().oneshot(get("/api/library")).await.unwrap();

        let body = read_json(response).await;
        let books = body["data"].as_array().unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0]["id"], 7);
        assert_eq!(books[0]["media_id"], "content://test.books/book/7");
        assert_eq!(books[1]["title"], "Dune");
    }

    #[tokio::test]
    async fn test_get_missing_book_is_not_found() {
        let app = TestApp::new();
        let response = app.router().oneshot(get("/api/library/999")).await.unwrap();

        let body = read_json(response).await;
        assert_eq!(body["errno"], 404);
    }

    #[tokio::test]
    async fn test_get_book() {
        let app = TestApp::new();
        let response = app.router().oneshot(get("/api/library/42")).await.unwrap();

        let body = read_json(response).await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["author"], "Frank Herbert");
        assert_eq!(body["data"]["chapter_count"], 48);
    }
}
