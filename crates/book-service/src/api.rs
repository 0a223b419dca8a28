use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::models::{seed_books, Book};

pub async fn health() -> &'static str {
    "OK"
}

pub async fn list_books() -> Json<Vec<Book>> {
    Json(seed_books())
}

pub async fn get_book(Path(id): Path<Uuid>) -> Result<Json<Book>, StatusCode> {
    seed_books()
        .into_iter()
        .find(|book| book.id == id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Diagnostics endpoint: reports which machine answered, useful when
/// several instances sit behind the discovery directory.
pub async fn instance_hostname() -> String {
    let host = hostname::get()
        .unwrap_or_else(|_| std::ffi::OsString::from("unknown"))
        .to_string_lossy()
        .to_string();
    format!("hostname: {} - pid: {}", host, std::process::id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/health", get(health))
            .route("/api/books", get(list_books))
            .route("/api/books/hostname", get(instance_hostname))
            .route("/api/books/{id}", get(get_book))
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"OK");
    }

    #[tokio::test]
    async fn test_list_books_returns_full_catalog() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/books")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let books: Vec<Book> = serde_json::from_slice(&body).unwrap();
        assert_eq!(books.len(), seed_books().len());
    }

    #[tokio::test]
    async fn test_get_book_by_id() {
        let expected = seed_books().remove(0);

        let response = app()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/books/{}", expected.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let book: Book = serde_json::from_slice(&body).unwrap();
        assert_eq!(book.id, expected.id);
        assert_eq!(book.title, expected.title);
    }

    #[tokio::test]
    async fn test_unknown_book_is_404() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/books/00000000-0000-0000-0000-000000000000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
