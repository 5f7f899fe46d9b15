use axum::{routing::post, Router};

use crate::handlers::tts;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(tts::synthesize))
}
