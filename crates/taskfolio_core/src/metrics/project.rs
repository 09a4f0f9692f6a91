//! Per-project derived figures: progress, hours, cost, revenue and budget
//! health.

use crate::model::project::{Project, ProjectId};
use crate::model::task::{Task, TaskId};
use crate::model::time_entry::TimeEntry;
use crate::model::workspace::Workspace;

/// Budget usage above which a project counts as at risk, in percent.
pub const BUDGET_AT_RISK_PCT: f64 = 80.0;

/// Tasks of one project, sorted ascending by display order.
pub fn project_tasks(workspace: &Workspace, project_id: ProjectId) -> Vec<&Task> {
    let mut tasks: Vec<&Task> = workspace
        .tasks
        .iter()
        .filter(|task| task.project_id == project_id)
        .collect();
    tasks.sort_by_key(|task| task.order);
    tasks
}

/// Completed-task ratio in percent: 0 without tasks, else
/// `round(100 * completed / total)`.
pub fn project_progress(workspace: &Workspace, project_id: ProjectId) -> u8 {
    let mut total = 0usize;
    let mut completed = 0usize;
    for task in workspace.tasks.iter().filter(|task| task.project_id == project_id) {
        total += 1;
        if task.complete {
            completed += 1;
        }
    }

    if total == 0 {
        return 0;
    }
    (100.0 * completed as f64 / total as f64).round() as u8
}

/// Sum of hours logged against the project's tasks.
pub fn project_hours(workspace: &Workspace, project_id: ProjectId) -> f64 {
    project_entries(workspace, project_id)
        .map(|entry| entry.hours)
        .sum()
}

/// Labor cost of the project: hours multiplied by each logging member's
/// hourly rate. Entries whose member is gone or unpriced contribute 0.
pub fn project_cost(workspace: &Workspace, project_id: ProjectId) -> f64 {
    project_entries(workspace, project_id)
        .map(|entry| entry.hours * member_rate(workspace, entry))
        .sum()
}

/// Revenue figure for the project. The budget field is the revenue proxy;
/// billable hours are deliberately not consulted here.
pub fn project_revenue(workspace: &Workspace, project_id: ProjectId) -> f64 {
    workspace
        .project(project_id)
        .and_then(|project| project.budget)
        .unwrap_or(0.0)
}

/// Time entries logged against one task.
pub fn task_time_entries(workspace: &Workspace, task_id: TaskId) -> Vec<&TimeEntry> {
    workspace
        .time_entries
        .iter()
        .filter(|entry| entry.task_id == task_id)
        .collect()
}

/// Budget/cost breakdown backing the project budget panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectBudgetReport {
    pub budget: f64,
    pub cost: f64,
    /// `budget - cost`; negative when the budget is exceeded.
    pub remaining: f64,
    /// `cost / budget` in percent; 0 when no budget is set.
    pub budget_used_pct: f64,
    pub total_hours: f64,
    pub billable_hours: f64,
    pub non_billable_hours: f64,
    pub billable_cost: f64,
    pub non_billable_cost: f64,
}

pub fn project_budget_report(workspace: &Workspace, project_id: ProjectId) -> ProjectBudgetReport {
    let budget = workspace
        .project(project_id)
        .and_then(|project| project.budget)
        .unwrap_or(0.0);
    let cost = project_cost(workspace, project_id);
    let total_hours = project_hours(workspace, project_id);

    let mut billable_hours = 0.0;
    let mut billable_cost = 0.0;
    for entry in project_entries(workspace, project_id).filter(|entry| entry.billable) {
        billable_hours += entry.hours;
        billable_cost += entry.hours * member_rate(workspace, entry);
    }

    let budget_used_pct = if budget > 0.0 {
        cost / budget * 100.0
    } else {
        0.0
    };

    ProjectBudgetReport {
        budget,
        cost,
        remaining: budget - cost,
        budget_used_pct,
        total_hours,
        billable_hours,
        non_billable_hours: total_hours - billable_hours,
        billable_cost,
        non_billable_cost: cost - billable_cost,
    }
}

/// Budgeted projects whose cost has reached [`BUDGET_AT_RISK_PCT`] of the
/// budget. Projects without a budget never appear, whatever their cost.
pub fn projects_at_risk(workspace: &Workspace) -> Vec<&Project> {
    workspace
        .projects
        .iter()
        .filter(|project| {
            project.budget.map_or(false, |budget| budget > 0.0)
                && project_budget_report(workspace, project.id).budget_used_pct
                    >= BUDGET_AT_RISK_PCT
        })
        .collect()
}

fn project_entries<'ws>(
    workspace: &'ws Workspace,
    project_id: ProjectId,
) -> impl Iterator<Item = &'ws TimeEntry> {
    workspace.time_entries.iter().filter(move |entry| {
        workspace
            .tasks
            .iter()
            .any(|task| task.id == entry.task_id && task.project_id == project_id)
    })
}

fn member_rate(workspace: &Workspace, entry: &TimeEntry) -> f64 {
    workspace
        .member(entry.member_id)
        .and_then(|member| member.hourly_rate)
        .unwrap_or(0.0)
}
