//! Workspace-wide dashboard numbers.

use crate::clock;
use crate::metrics::schedule::overdue_tasks_as_of;
use crate::metrics::team::WEEKLY_MEMBER_CAPACITY_HOURS;
use crate::model::project::ProjectStatus;
use crate::model::workspace::Workspace;

/// Aggregate figures shown on the dashboard header.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectStats {
    pub total_projects: usize,
    pub active_projects: usize,
    pub completed_projects: usize,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub overdue_tasks: usize,
    /// Mean of stored project progress values, rounded; 0 without projects.
    pub avg_progress: u8,
    /// Sum of all project budgets.
    pub total_revenue: f64,
    /// Sum of all logged hours, billable or not.
    pub total_hours: f64,
    /// Logged hours against `members * 40h` in percent, rounded; may exceed
    /// 100 when the team overruns the assumed capacity. 0 without members.
    pub utilization_rate: u32,
}

/// Computes [`ProjectStats`] with overdue counted against `today`.
pub fn project_stats_as_of(workspace: &Workspace, today: &str) -> ProjectStats {
    let active_projects = workspace
        .projects
        .iter()
        .filter(|project| project.status == ProjectStatus::InProgress)
        .count();
    let completed_projects = workspace
        .projects
        .iter()
        .filter(|project| project.status == ProjectStatus::Completed)
        .count();
    let completed_tasks = workspace.tasks.iter().filter(|task| task.complete).count();

    let avg_progress = if workspace.projects.is_empty() {
        0
    } else {
        let progress_sum: f64 = workspace
            .projects
            .iter()
            .map(|project| f64::from(project.progress))
            .sum();
        (progress_sum / workspace.projects.len() as f64).round() as u8
    };

    let total_revenue: f64 = workspace
        .projects
        .iter()
        .map(|project| project.budget.unwrap_or(0.0))
        .sum();
    let total_hours: f64 = workspace.time_entries.iter().map(|entry| entry.hours).sum();

    let total_capacity = workspace.members.len() as f64 * WEEKLY_MEMBER_CAPACITY_HOURS;
    let utilization_rate = if total_capacity > 0.0 {
        (total_hours / total_capacity * 100.0).round() as u32
    } else {
        0
    };

    ProjectStats {
        total_projects: workspace.projects.len(),
        active_projects,
        completed_projects,
        total_tasks: workspace.tasks.len(),
        completed_tasks,
        overdue_tasks: overdue_tasks_as_of(workspace, today).len(),
        avg_progress,
        total_revenue,
        total_hours,
        utilization_rate,
    }
}

/// Computes [`ProjectStats`] against today's date.
pub fn project_stats(workspace: &Workspace) -> ProjectStats {
    project_stats_as_of(workspace, &clock::today())
}
