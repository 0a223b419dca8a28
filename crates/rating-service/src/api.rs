use axum::extract::Path;
use axum::Json;
use uuid::Uuid;

use crate::models::{seed_ratings, Rating};

pub async fn health() -> &'static str {
    "OK"
}

pub async fn list_ratings() -> Json<Vec<Rating>> {
    Json(seed_ratings())
}

/// Exact-match lookup; a book nobody has rated gets an empty list, not 404.
pub async fn ratings_for_book(Path(book_id): Path<Uuid>) -> Json<Vec<Rating>> {
    let ratings = seed_ratings()
        .into_iter()
        .filter(|rating| rating.book_id == book_id)
        .collect();
    Json(ratings)
}
