use ticketgrid_core::{Customer, Ticket};
use tracing::debug;

use crate::{CustomerGrid, TicketGrid};

/// Bulk-insert tickets with ids `1..=count`, all available, no holder.
/// Administrative action: runs before any booking traffic.
pub fn seed_tickets(grid: &TicketGrid, count: u64) {
    for id in 1..=count {
        grid.insert(id, Ticket::new(id));
    }
    debug!(count, "ticket grid populated");
}

/// Bulk-insert customers with ids `1..=count`.
pub fn seed_customers(grid: &CustomerGrid, count: u64) {
    for id in 1..=count {
        grid.insert(id, Customer::new(id));
    }
    debug!(count, "customer grid populated");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridMap;

    #[test]
    fn seeded_tickets_start_available_with_no_holder() {
        let grid = GridMap::with_shards(16);
        seed_tickets(&grid, 1_000);

        assert_eq!(grid.len(), 1_000);
        let ticket = grid.get(500).unwrap();
        assert_eq!(ticket.id, 500);
        assert!(ticket.available);
        assert!(ticket.holder.is_none());
        assert!(grid.get(1_001).is_none());
    }

    #[test]
    fn seeded_customers_cover_the_full_id_range() {
        let grid = GridMap::with_shards(16);
        seed_customers(&grid, 250);

        assert_eq!(grid.len(), 250);
        assert_eq!(grid.get(1).unwrap().id, 1);
        assert_eq!(grid.get(250).unwrap().id, 250);
    }

    #[test]
    fn clear_then_reseed_resets_the_grid() {
        let grid = GridMap::with_shards(16);
        seed_tickets(&grid, 10);
        grid.clear();
        assert!(grid.is_empty());
        seed_tickets(&grid, 5);
        assert_eq!(grid.len(), 5);
    }
}
