use axum::{routing::get, Router};

use crate::handlers::news;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(news::get_news))
        .route("/search", get(news::search_news))
        .route("/filters", get(news::get_filters))
}
