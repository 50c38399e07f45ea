use serde::{Deserialize, Serialize};

use crate::{CustomerId, TicketId};

/// One booking attempt: which ticket, for which customer. Transient; built
/// per attempt and echoed back unchanged in the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub ticket_id: TicketId,
    pub customer_id: CustomerId,
}

impl BookingRequest {
    pub fn new(ticket_id: TicketId, customer_id: CustomerId) -> Self {
        Self {
            ticket_id,
            customer_id,
        }
    }
}

/// Terminal outcome of a booking attempt. The wire strings are the external
/// result contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookTicketResult {
    TicketBooked,
    TicketNotAvailable,
    BookingError,
}

impl BookTicketResult {
    pub fn label(&self) -> &'static str {
        match self {
            BookTicketResult::TicketBooked => "Ticket booked",
            BookTicketResult::TicketNotAvailable => "Ticket not available",
            BookTicketResult::BookingError => "Error while booking",
        }
    }
}

/// Outcome plus the originating request, returned synchronously to the
/// caller. An error outcome has the same shape as a success; callers branch
/// on the tag, never on a transport fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResult {
    pub booking_request: BookingRequest,
    pub book_ticket_result: BookTicketResult,
}

impl BookingResult {
    pub fn new(booking_request: BookingRequest, book_ticket_result: BookTicketResult) -> Self {
        Self {
            booking_request,
            book_ticket_result,
        }
    }
}
