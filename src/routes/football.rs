use axum::{routing::get, Router};

use crate::handlers::football;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    // One wildcard route; the handler dispatches on the trailing path.
    Router::new().route("/*endpoint", get(football::dispatch))
}
