use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::modules::tickets::core::ticket::TicketRegistration;
use crate::shared::core::outcome::Outcome;
use crate::shell::state::AppState;

const INVALID_ID: &str = "The ticket ID must be a positive integer.";
const INVALID_DATA: &str = "The ticket data provided is invalid.";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/ticket", get(list).post(create))
        .route("/api/ticket/{id}", get(get_by_id).put(update).delete(delete))
        .route("/api/ticket/event/{event_id}", get(list_by_event))
}

fn not_found(ticket_id: i32) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        format!("No ticket found with ID {ticket_id}."),
    )
        .into_response()
}

fn server_error(action: &str) -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("An unexpected error occurred while {action}. Please try again later."),
    )
        .into_response()
}

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    match state.tickets.list_all().await {
        Ok(tickets) => Json(tickets).into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to retrieve tickets");
            server_error("retrieving tickets")
        }
    }
}

pub async fn list_by_event(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
) -> impl IntoResponse {
    if event_id <= 0 {
        return (StatusCode::BAD_REQUEST, "The event ID must be a positive integer.").into_response();
    }
    match state.tickets.list_by_event_id(event_id).await {
        Ok(tickets) => Json(tickets).into_response(),
        Err(error) => {
            tracing::error!(event_id, %error, "failed to retrieve tickets for event");
            server_error("retrieving tickets")
        }
    }
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    if id <= 0 {
        return (StatusCode::BAD_REQUEST, INVALID_ID).into_response();
    }
    match state.tickets.get_by_id(id).await {
        Ok(Some(ticket)) => Json(ticket).into_response(),
        Ok(None) => not_found(id),
        Err(error) => {
            tracing::error!(ticket_id = id, %error, "failed to retrieve ticket");
            server_error("retrieving the ticket")
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<TicketRegistration>, JsonRejection>,
) -> impl IntoResponse {
    let registration = body.ok().map(|Json(registration)| registration);
    match state.tickets.create(registration).await {
        Outcome::Applied => StatusCode::CREATED.into_response(),
        Outcome::InvalidInput => (StatusCode::BAD_REQUEST, INVALID_DATA).into_response(),
        outcome => {
            tracing::warn!(?outcome, "failed to create the ticket");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create the ticket due to a server error.",
            )
                .into_response()
        }
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Result<Json<TicketRegistration>, JsonRejection>,
) -> impl IntoResponse {
    if id <= 0 {
        return (StatusCode::BAD_REQUEST, INVALID_ID).into_response();
    }
    let Ok(Json(registration)) = body else {
        return (StatusCode::BAD_REQUEST, INVALID_DATA).into_response();
    };
    match state.tickets.update(id, registration).await {
        Ok(Outcome::Applied) => (StatusCode::OK, "Ticket was updated successfully.").into_response(),
        Ok(Outcome::NotFound) => {
            tracing::warn!(ticket_id = id, "no ticket found to update");
            not_found(id)
        }
        Ok(outcome) => {
            tracing::warn!(ticket_id = id, ?outcome, "failed to update the ticket");
            server_error("updating the ticket")
        }
        Err(error) => {
            tracing::error!(ticket_id = id, %error, "failed to update the ticket");
            server_error("updating the ticket")
        }
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    if id <= 0 {
        return (StatusCode::BAD_REQUEST, INVALID_ID).into_response();
    }
    match state.tickets.delete(id).await {
        Ok(Outcome::Applied) => (StatusCode::OK, "Ticket was deleted successfully.").into_response(),
        Ok(Outcome::NotFound) => {
            tracing::warn!(ticket_id = id, "no ticket found to delete");
            not_found(id)
        }
        Ok(outcome) => {
            tracing::warn!(ticket_id = id, ?outcome, "failed to delete the ticket");
            server_error("deleting the ticket")
        }
        Err(error) => {
            tracing::error!(ticket_id = id, %error, "failed to delete the ticket");
            server_error("deleting the ticket")
        }
    }
}
