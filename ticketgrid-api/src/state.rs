use std::sync::Arc;

use ticketgrid_booking::BookingService;
use ticketgrid_store::{CustomerGrid, TicketGrid};

#[derive(Clone)]
pub struct AppState {
    pub booking: Arc<BookingService>,
    pub tickets: Arc<TicketGrid>,
    pub customers: Arc<CustomerGrid>,
}
