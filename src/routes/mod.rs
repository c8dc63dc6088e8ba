pub mod games;
pub mod health;
pub mod orders;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/games", post(games::create_game))
        .route("/games/{id}", get(games::get_game).delete(games::delete_game))
        .route("/games/{id}/words", post(games::submit_word))
        .route("/games/{id}/new-word", post(games::new_word))
        .route("/games/{id}/start-over", post(games::start_over))
        .route("/orders/types", get(orders::list_types))
        .route("/orders/quote", post(orders::quote))
        .route("/orders/cost", get(orders::cost))
}
