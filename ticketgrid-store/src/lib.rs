pub mod app_config;
pub mod grid;
pub mod populate;

pub use grid::{GridMap, StoreError};

use ticketgrid_core::{Customer, Ticket};

/// The ticket side of the grid.
pub type TicketGrid = GridMap<Ticket>;

/// The customer side of the grid.
pub type CustomerGrid = GridMap<Customer>;
