mod posts;
mod root;

use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(posts::new())
        .merge(root::new())
        .fallback(root::handler_404)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
