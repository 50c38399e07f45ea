use serde::{Deserialize, Serialize};

use crate::CustomerId;

/// A customer attempting to book tickets. Read-only from the booking path;
/// the registry exists to describe who is claiming, nothing more.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub display_name: Option<String>,
}

impl Customer {
    pub fn new(id: CustomerId) -> Self {
        Self {
            id,
            display_name: None,
        }
    }
}
