use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::modules::events::core::event::EventRegistration;
use crate::shared::core::outcome::Outcome;
use crate::shell::state::AppState;

const INVALID_ID: &str = "The event ID must be a positive integer.";
const INVALID_DATA: &str = "The event data provided is invalid.";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/event", get(list).post(create))
        .route("/api/event/{id}", get(get_by_id).put(update).delete(delete))
}

fn not_found(event_id: i32) -> Response {
    (StatusCode::NOT_FOUND, format!("No event found with ID {event_id}.")).into_response()
}

fn server_error(action: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("An unexpected error occurred while {action}. Please try again later."),
    )
        .into_response()
}

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    match state.events.list_all().await {
        Ok(events) => Json(events).into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to retrieve events");
            server_error("retrieving events")
        }
    }
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    if id <= 0 {
        return (StatusCode::BAD_REQUEST, INVALID_ID).into_response();
    }
    match state.events.get_by_id(id).await {
        Ok(Some(event)) => Json(event).into_response(),
        Ok(None) => not_found(id),
        Err(error) => {
            tracing::error!(event_id = id, %error, "failed to retrieve event");
            server_error("retrieving the event")
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<EventRegistration>, JsonRejection>,
) -> impl IntoResponse {
    let registration = body.ok().map(|Json(registration)| registration);
    match state.events.create(registration).await {
        Outcome::Applied => StatusCode::CREATED.into_response(),
        Outcome::InvalidInput => (StatusCode::BAD_REQUEST, INVALID_DATA).into_response(),
        outcome => {
            tracing::warn!(?outcome, "failed to create the event");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create the event due to a server error.",
            )
                .into_response()
        }
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Result<Json<EventRegistration>, JsonRejection>,
) -> impl IntoResponse {
    if id <= 0 {
        return (StatusCode::BAD_REQUEST, INVALID_ID).into_response();
    }
    let Ok(Json(registration)) = body else {
        return (StatusCode::BAD_REQUEST, INVALID_DATA).into_response();
    };
    match state.events.update(id, registration).await {
        Ok(Outcome::Applied) => (StatusCode::OK, "Event was updated successfully.").into_response(),
        Ok(Outcome::NotFound) => {
            tracing::warn!(event_id = id, "no event found to update");
            not_found(id)
        }
        Ok(outcome) => {
            tracing::warn!(event_id = id, ?outcome, "failed to update the event");
            server_error("updating the event")
        }
        Err(error) => {
            tracing::error!(event_id = id, %error, "failed to update the event");
            server_error("updating the event")
        }
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    if id <= 0 {
        return (StatusCode::BAD_REQUEST, INVALID_ID).into_response();
    }
    match state.events.delete(id).await {
        Ok(Outcome::Applied) => (StatusCode::OK, "Event was deleted successfully.").into_response(),
        Ok(Outcome::NotFound) => {
            tracing::warn!(event_id = id, "no event found to delete");
            not_found(id)
        }
        Ok(outcome) => {
            tracing::warn!(event_id = id, ?outcome, "failed to delete the event");
            server_error("deleting the event")
        }
        Err(error) => {
            tracing::error!(event_id = id, %error, "failed to delete the event");
            server_error("deleting the event")
        }
    }
}
