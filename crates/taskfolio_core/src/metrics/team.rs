//! Member load, capacity and performance figures.

use crate::model::member::MemberId;
use crate::model::project::ProjectId;
use crate::model::workspace::Workspace;
use std::cmp::Ordering;

/// Open-task count treated as a fully loaded member.
pub const TASKS_AT_FULL_CAPACITY: usize = 5;

/// Weekly hours one member is assumed to have available.
pub const WEEKLY_MEMBER_CAPACITY_HOURS: f64 = 40.0;

/// Number of incomplete tasks assigned to the member.
pub fn member_task_count(workspace: &Workspace, member_id: MemberId) -> usize {
    workspace
        .tasks
        .iter()
        .filter(|task| task.assignee_id == Some(member_id) && !task.complete)
        .count()
}

/// Member load in percent of [`TASKS_AT_FULL_CAPACITY`], clamped to 100.
pub fn member_capacity(workspace: &Workspace, member_id: MemberId) -> u8 {
    (member_task_count(workspace, member_id) * 100 / TASKS_AT_FULL_CAPACITY).min(100) as u8
}

/// Sum of the member's logged hours, optionally restricted to an inclusive
/// date range. Bounds are ISO date strings compared lexicographically.
pub fn member_hours(
    workspace: &Workspace,
    member_id: MemberId,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> f64 {
    workspace
        .time_entries
        .iter()
        .filter(|entry| entry.member_id == member_id)
        .filter(|entry| start_date.map_or(true, |start| entry.date.as_str() >= start))
        .filter(|entry| end_date.map_or(true, |end| entry.date.as_str() <= end))
        .map(|entry| entry.hours)
        .sum()
}

/// Picks the member with the fewest open tasks; ties go to the member listed
/// first. Returns `None` when no members exist.
///
/// The project argument is accepted for call-site symmetry but does not
/// influence the choice; assignment is load-based only.
pub fn best_assignee(workspace: &Workspace, _project_id: ProjectId) -> Option<MemberId> {
    let mut best: Option<(MemberId, usize)> = None;
    for member in &workspace.members {
        let load = member_task_count(workspace, member.id);
        let replace = match best {
            Some((_, best_load)) => load < best_load,
            None => true,
        };
        if replace {
            best = Some((member.id, load));
        }
    }
    best.map(|(member_id, _)| member_id)
}

/// Hours/revenue breakdown for one member.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberPerformance {
    pub member_id: MemberId,
    pub total_hours: f64,
    pub billable_hours: f64,
    /// Billable share of logged hours in percent; 0 with no hours.
    pub billable_pct: f64,
    /// Billable hours times the member's hourly rate; 0 without a rate.
    pub revenue: f64,
    pub active_tasks: usize,
    pub capacity: u8,
}

/// Returns the member's performance figures, or `None` for an unknown id.
pub fn member_performance(
    workspace: &Workspace,
    member_id: MemberId,
) -> Option<MemberPerformance> {
    let member = workspace.member(member_id)?;

    let mut total_hours = 0.0;
    let mut billable_hours = 0.0;
    for entry in workspace
        .time_entries
        .iter()
        .filter(|entry| entry.member_id == member_id)
    {
        total_hours += entry.hours;
        if entry.billable {
            billable_hours += entry.hours;
        }
    }

    let billable_pct = if total_hours > 0.0 {
        billable_hours / total_hours * 100.0
    } else {
        0.0
    };

    Some(MemberPerformance {
        member_id,
        total_hours,
        billable_hours,
        billable_pct,
        revenue: billable_hours * member.hourly_rate.unwrap_or(0.0),
        active_tasks: member_task_count(workspace, member_id),
        capacity: member_capacity(workspace, member_id),
    })
}

/// Team-wide rollup of [`MemberPerformance`] rows.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamPerformance {
    /// Per-member rows sorted by total hours, busiest first.
    pub members: Vec<MemberPerformance>,
    pub total_hours: f64,
    pub billable_hours: f64,
    /// Billable share across all logged hours in percent; 0 with no hours.
    pub avg_billable_pct: f64,
    pub revenue: f64,
}

pub fn team_performance(workspace: &Workspace) -> TeamPerformance {
    let mut members: Vec<MemberPerformance> = workspace
        .members
        .iter()
        .filter_map(|member| member_performance(workspace, member.id))
        .collect();
    members.sort_by(|a, b| {
        b.total_hours
            .partial_cmp(&a.total_hours)
            .unwrap_or(Ordering::Equal)
    });

    let total_hours: f64 = members.iter().map(|row| row.total_hours).sum();
    let billable_hours: f64 = members.iter().map(|row| row.billable_hours).sum();
    let revenue: f64 = members.iter().map(|row| row.revenue).sum();
    let avg_billable_pct = if total_hours > 0.0 {
        billable_hours / total_hours * 100.0
    } else {
        0.0
    };

    TeamPerformance {
        members,
        total_hours,
        billable_hours,
        avg_billable_pct,
        revenue,
    }
}
