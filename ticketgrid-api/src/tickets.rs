use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use ticketgrid_core::{BookingRequest, BookingResult, Customer, Ticket};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ticket/book", put(book_ticket))
        .route("/ticket/{id}", get(get_ticket))
        .route("/customer/{id}", get(get_customer))
}

/// PUT /ticket/book
///
/// Always replies 200: the outcome lives in the `bookTicketResult` tag, and
/// a failed booking is a structured `BOOKING_ERROR` outcome, never a
/// transport-level failure.
async fn book_ticket(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> Json<BookingResult> {
    Json(state.booking.book_request(request))
}

/// GET /ticket/{id} — snapshot of a ticket's stored state.
async fn get_ticket(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Ticket>, AppError> {
    state
        .tickets
        .get(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("ticket {} not found", id)))
}

/// GET /customer/{id} — who a claimant id refers to.
async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Customer>, AppError> {
    state
        .customers
        .get(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("customer {} not found", id)))
}
