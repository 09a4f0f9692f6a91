//! Team member mutations.

use crate::model::member::{Member, MemberId, DEFAULT_HOURLY_RATE};
use crate::service::{ServiceResult, WorkspaceService};
use crate::snapshot::SnapshotStore;

/// Field-wise update for [`Member`].
///
/// `None` leaves a field unchanged; `Some(None)` clears a nullable field.
#[derive(Debug, Clone, Default)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub email: Option<Option<String>>,
    pub avatar: Option<Option<String>>,
    pub hourly_rate: Option<Option<f64>>,
    pub role: Option<Option<String>>,
}

impl<S: SnapshotStore> WorkspaceService<S> {
    /// Creates a member; an omitted hourly rate defaults to
    /// [`DEFAULT_HOURLY_RATE`].
    pub fn add_member(
        &mut self,
        name: impl Into<String>,
        email: Option<String>,
        hourly_rate: Option<f64>,
        role: Option<String>,
    ) -> ServiceResult<Member> {
        let member = Member::new(
            name,
            email,
            Some(hourly_rate.unwrap_or(DEFAULT_HOURLY_RATE)),
            role,
        );
        self.workspace_mut().members.push(member.clone());
        self.persist()?;
        Ok(member)
    }

    /// Merges `patch` into the member; silent no-op for an unknown id.
    pub fn update_member(&mut self, id: MemberId, patch: MemberPatch) -> ServiceResult<()> {
        if let Some(member) = self.workspace_mut().member_mut(id) {
            if let Some(name) = patch.name {
                member.name = name;
            }
            if let Some(email) = patch.email {
                member.email = email;
            }
            if let Some(avatar) = patch.avatar {
                member.avatar = avatar;
            }
            if let Some(hourly_rate) = patch.hourly_rate {
                member.hourly_rate = hourly_rate;
            }
            if let Some(role) = patch.role {
                member.role = role;
            }
        }
        self.persist()
    }

    /// Deletes the member and unassigns every task that referenced them.
    /// The member's time entries stay untouched; their `member_id` may now
    /// dangle, which readers treat as a zero-rate member.
    pub fn delete_member(&mut self, id: MemberId) -> ServiceResult<()> {
        let workspace = self.workspace_mut();
        workspace.members.retain(|member| member.id != id);
        for task in workspace
            .tasks
            .iter_mut()
            .filter(|task| task.assignee_id == Some(id))
        {
            task.assignee_id = None;
        }
        self.persist()
    }
}
