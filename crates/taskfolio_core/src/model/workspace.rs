//! The in-memory entity container.
//!
//! # Responsibility
//! - Hold the five entity collections for one session.
//! - Provide by-id lookups and the seeded first-run state.
//!
//! # Invariants
//! - Collections preserve insertion order; only `Task::order` carries
//!   semantic ordering.
//! - The container is mutated exclusively through `service::WorkspaceService`.

use crate::model::client::{Client, ClientId};
use crate::model::member::{Member, MemberId};
use crate::model::project::{Project, ProjectId};
use crate::model::task::{Task, TaskId};
use crate::model::time_entry::{TimeEntry, TimeEntryId};
use serde::{Deserialize, Serialize};

/// Whole application state, serialized as one snapshot unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub members: Vec<Member>,
    pub clients: Vec<Client>,
    pub time_entries: Vec<TimeEntry>,
}

impl Workspace {
    /// Returns the state a fresh deployment starts from: empty collections
    /// plus the four default team members.
    pub fn first_run() -> Self {
        Self {
            members: seed_members(),
            ..Self::default()
        }
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn project_mut(&mut self, id: ProjectId) -> Option<&mut Project> {
        self.projects.iter_mut().find(|project| project.id == id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn member_mut(&mut self, id: MemberId) -> Option<&mut Member> {
        self.members.iter_mut().find(|member| member.id == id)
    }

    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.iter().find(|client| client.id == id)
    }

    pub fn client_mut(&mut self, id: ClientId) -> Option<&mut Client> {
        self.clients.iter_mut().find(|client| client.id == id)
    }

    pub fn time_entry(&self, id: TimeEntryId) -> Option<&TimeEntry> {
        self.time_entries.iter().find(|entry| entry.id == id)
    }

    pub fn time_entry_mut(&mut self, id: TimeEntryId) -> Option<&mut TimeEntry> {
        self.time_entries.iter_mut().find(|entry| entry.id == id)
    }
}

fn seed_members() -> Vec<Member> {
    vec![
        seed_member("Alice Johnson", "alice@company.com", 150.0, "Senior Architect"),
        seed_member("Bob Smith", "bob@company.com", 120.0, "Project Manager"),
        seed_member("Carol Davis", "carol@company.com", 100.0, "Designer"),
        seed_member("David Wilson", "david@company.com", 80.0, "Junior Engineer"),
    ]
}

fn seed_member(name: &str, email: &str, hourly_rate: f64, role: &str) -> Member {
    Member::new(
        name,
        Some(email.to_string()),
        Some(hourly_rate),
        Some(role.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::Workspace;

    #[test]
    fn first_run_seeds_four_members_and_nothing_else() {
        let workspace = Workspace::first_run();
        assert_eq!(workspace.members.len(), 4);
        assert!(workspace.projects.is_empty());
        assert!(workspace.tasks.is_empty());
        assert!(workspace.clients.is_empty());
        assert!(workspace.time_entries.is_empty());

        let rates: Vec<Option<f64>> = workspace
            .members
            .iter()
            .map(|member| member.hourly_rate)
            .collect();
        assert_eq!(
            rates,
            vec![Some(150.0), Some(120.0), Some(100.0), Some(80.0)]
        );
    }

    #[test]
    fn seed_member_ids_are_unique() {
        let workspace = Workspace::first_run();
        for (index, member) in workspace.members.iter().enumerate() {
            for other in &workspace.members[index + 1..] {
                assert_ne!(member.id, other.id);
            }
        }
    }

    #[test]
    fn lookup_returns_none_for_unknown_ids() {
        let workspace = Workspace::first_run();
        assert!(workspace.project(uuid::Uuid::new_v4()).is_none());
        assert!(workspace.task(uuid::Uuid::new_v4()).is_none());
        assert!(workspace.client(uuid::Uuid::new_v4()).is_none());
    }
}
