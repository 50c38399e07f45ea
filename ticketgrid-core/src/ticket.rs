use serde::{Deserialize, Serialize};

use crate::{CustomerId, TicketId};

/// A single bookable ticket held in the grid.
///
/// Invariant: `available == false` implies `holder` is the id of the one
/// customer whose booking attempt won; `available == true` implies `holder`
/// is `None`. Only the booking mutator ever changes either field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub available: bool,
    pub holder: Option<CustomerId>,
}

impl Ticket {
    pub fn new(id: TicketId) -> Self {
        Self {
            id,
            available: true,
            holder: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ticket_is_available_with_no_holder() {
        let ticket = Ticket::new(7);
        assert_eq!(ticket.id, 7);
        assert!(ticket.available);
        assert!(ticket.holder.is_none());
    }
}
