use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::events::adapters::inbound::http as event_http;
use crate::modules::tickets::adapters::inbound::http as ticket_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(event_http::routes())
        .merge(ticket_http::routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
