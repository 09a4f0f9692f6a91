//! Client record.

use crate::clock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a client.
pub type ClientId = Uuid;

/// A paying customer that projects can be linked to.
///
/// Clients are referenced by `Project::client_id` but do not own projects;
/// deleting a client unlinks its projects without deleting them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

impl Client {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        company: impl Into<String>,
        phone: Option<String>,
        address: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            company: company.into(),
            phone,
            address,
            created_at: clock::now_rfc3339(),
        }
    }
}
