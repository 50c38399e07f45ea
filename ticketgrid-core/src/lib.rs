pub mod booking;
pub mod customer;
pub mod ticket;

pub use booking::{BookTicketResult, BookingRequest, BookingResult};
pub use customer::Customer;
pub use ticket::Ticket;

/// Ticket identifiers are plain integers assigned at population time.
pub type TicketId = u64;

/// Customer identifiers are plain integers assigned at population time.
pub type CustomerId = u64;
