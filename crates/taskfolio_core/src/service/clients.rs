//! Client mutations.

use crate::model::client::{Client, ClientId};
use crate::service::{ServiceResult, WorkspaceService};
use crate::snapshot::SnapshotStore;

/// Field-wise update for [`Client`].
///
/// `None` leaves a field unchanged; `Some(None)` clears a nullable field.
#[derive(Debug, Clone, Default)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub phone: Option<Option<String>>,
    pub address: Option<Option<String>>,
}

impl<S: SnapshotStore> WorkspaceService<S> {
    pub fn add_client(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        company: impl Into<String>,
        phone: Option<String>,
        address: Option<String>,
    ) -> ServiceResult<Client> {
        let client = Client::new(name, email, company, phone, address);
        self.workspace_mut().clients.push(client.clone());
        self.persist()?;
        Ok(client)
    }

    /// Merges `patch` into the client; silent no-op for an unknown id.
    pub fn update_client(&mut self, id: ClientId, patch: ClientPatch) -> ServiceResult<()> {
        if let Some(client) = self.workspace_mut().client_mut(id) {
            if let Some(name) = patch.name {
                client.name = name;
            }
            if let Some(email) = patch.email {
                client.email = email;
            }
            if let Some(company) = patch.company {
                client.company = company;
            }
            if let Some(phone) = patch.phone {
                client.phone = phone;
            }
            if let Some(address) = patch.address {
                client.address = address;
            }
        }
        self.persist()
    }

    /// Deletes the client and unlinks every project that referenced it.
    /// Projects themselves are never deleted here.
    pub fn delete_client(&mut self, id: ClientId) -> ServiceResult<()> {
        let workspace = self.workspace_mut();
        workspace.clients.retain(|client| client.id != id);
        for project in workspace
            .projects
            .iter_mut()
            .filter(|project| project.client_id == Some(id))
        {
            project.client_id = None;
        }
        self.persist()
    }
}
