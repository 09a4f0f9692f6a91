//! Derived read-only views over the workspace.
//!
//! # Responsibility
//! - Compute progress, cost, revenue, hours, capacity, schedule and
//!   cross-entity aggregates from the current entity collections.
//!
//! # Invariants
//! - Every function is pure: same workspace in, same numbers out, nothing
//!   cached and nothing mutated.
//! - Zero-denominator cases (no tasks, no members, no revenue, no budget)
//!   return 0 instead of NaN or infinity.

pub mod client;
pub mod dashboard;
pub mod project;
pub mod schedule;
pub mod team;

pub use client::{client_projects, client_revenue, client_revenue_rollup, ClientRevenue};
pub use dashboard::{project_stats, project_stats_as_of, ProjectStats};
pub use project::{
    project_budget_report, project_cost, project_hours, project_progress, project_revenue,
    project_tasks, projects_at_risk, task_time_entries, ProjectBudgetReport,
};
pub use schedule::{
    overdue_tasks, overdue_tasks_as_of, upcoming_tasks, upcoming_tasks_within,
};
pub use team::{
    best_assignee, member_capacity, member_hours, member_performance, member_task_count,
    team_performance, MemberPerformance, TeamPerformance,
};
