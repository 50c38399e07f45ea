use std::sync::Arc;

use ticketgrid_core::{BookTicketResult, BookingRequest, BookingResult, CustomerId, TicketId};
use ticketgrid_store::TicketGrid;
use tracing::{error, info};

/// Books one ticket for one customer. The ticket's entry is locked for the
/// duration of the grid invocation; this service holds no locks of its own.
///
/// `book` is the error boundary of the system: every store fault is caught
/// here and mapped to a `BOOKING_ERROR` outcome, so a result always comes
/// back and the caller branches on the tag alone.
pub struct BookingService {
    tickets: Arc<TicketGrid>,
}

impl BookingService {
    pub fn new(tickets: Arc<TicketGrid>) -> Self {
        Self { tickets }
    }

    pub fn book_request(&self, request: BookingRequest) -> BookingResult {
        self.book(request.ticket_id, request.customer_id)
    }

    /// One attempt, one outcome. No retries: a contention loss is final for
    /// this attempt.
    pub fn book(&self, ticket_id: TicketId, customer_id: CustomerId) -> BookingResult {
        let request = BookingRequest::new(ticket_id, customer_id);

        let outcome = self.tickets.invoke(ticket_id, move |ticket| {
            if ticket.available {
                ticket.available = false;
                ticket.holder = Some(customer_id);
                BookTicketResult::TicketBooked
            } else {
                BookTicketResult::TicketNotAvailable
            }
        });

        match outcome {
            Ok(result) => {
                if result == BookTicketResult::TicketBooked {
                    info!(ticket_id, customer_id, "ticket booked");
                }
                BookingResult::new(request, result)
            }
            Err(err) => {
                error!(ticket_id, customer_id, %err, "booking attempt failed");
                BookingResult::new(request, BookTicketResult::BookingError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticketgrid_store::{populate, GridMap};

    fn service_with_tickets(count: u64) -> (BookingService, Arc<TicketGrid>) {
        let grid = Arc::new(GridMap::with_shards(16));
        populate::seed_tickets(&grid, count);
        (BookingService::new(Arc::clone(&grid)), grid)
    }

    #[test]
    fn first_attempt_wins_and_records_the_holder() {
        let (service, tickets) = service_with_tickets(10);

        let result = service.book(5, 42);
        assert_eq!(result.book_ticket_result, BookTicketResult::TicketBooked);
        assert_eq!(result.booking_request, BookingRequest::new(5, 42));

        let ticket = tickets.get(5).unwrap();
        assert!(!ticket.available);
        assert_eq!(ticket.holder, Some(42));
    }

    #[test]
    fn later_attempts_observe_held_and_do_not_write() {
        let (service, tickets) = service_with_tickets(10);

        assert_eq!(
            service.book(5, 1).book_ticket_result,
            BookTicketResult::TicketBooked
        );
        assert_eq!(
            service.book(5, 2).book_ticket_result,
            BookTicketResult::TicketNotAvailable
        );
        assert_eq!(
            service.book(5, 3).book_ticket_result,
            BookTicketResult::TicketNotAvailable
        );

        // The loser attempts left the winner's state untouched.
        let ticket = tickets.get(5).unwrap();
        assert!(!ticket.available);
        assert_eq!(ticket.holder, Some(1));
    }

    #[test]
    fn missing_ticket_maps_to_a_booking_error_outcome() {
        let (service, _tickets) = service_with_tickets(10);

        let result = service.book(999, 42);
        assert_eq!(result.book_ticket_result, BookTicketResult::BookingError);
        assert_eq!(result.booking_request, BookingRequest::new(999, 42));
    }

    #[test]
    fn unrelated_tickets_book_independently() {
        let (service, _tickets) = service_with_tickets(10);

        assert_eq!(
            service.book(1, 100).book_ticket_result,
            BookTicketResult::TicketBooked
        );
        assert_eq!(
            service.book(2, 100).book_ticket_result,
            BookTicketResult::TicketBooked
        );
    }
}
