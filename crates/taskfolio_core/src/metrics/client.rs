//! Per-client revenue aggregates.

use crate::metrics::project::project_cost;
use crate::model::client::ClientId;
use crate::model::project::{Project, ProjectStatus};
use crate::model::workspace::Workspace;
use std::cmp::Ordering;

/// Projects linked to one client.
pub fn client_projects(workspace: &Workspace, client_id: ClientId) -> Vec<&Project> {
    workspace
        .projects
        .iter()
        .filter(|project| project.client_id == Some(client_id))
        .collect()
}

/// Revenue and profitability rollup for one client.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientRevenue {
    pub client_id: ClientId,
    /// Sum of linked project budgets.
    pub revenue: f64,
    /// Sum of linked project labor costs.
    pub cost: f64,
    /// `revenue - cost`; negative when the work outran the budgets.
    pub profit: f64,
    /// `profit / revenue` in percent; 0 when there is no revenue.
    pub margin_pct: f64,
    pub project_count: usize,
    pub active_projects: usize,
    pub completed_projects: usize,
}

pub fn client_revenue(workspace: &Workspace, client_id: ClientId) -> ClientRevenue {
    let projects = client_projects(workspace, client_id);

    let revenue: f64 = projects
        .iter()
        .map(|project| project.budget.unwrap_or(0.0))
        .sum();
    let cost: f64 = projects
        .iter()
        .map(|project| project_cost(workspace, project.id))
        .sum();
    let profit = revenue - cost;
    let margin_pct = if revenue > 0.0 {
        profit / revenue * 100.0
    } else {
        0.0
    };

    ClientRevenue {
        client_id,
        revenue,
        cost,
        profit,
        margin_pct,
        project_count: projects.len(),
        active_projects: projects
            .iter()
            .filter(|project| project.status == ProjectStatus::InProgress)
            .count(),
        completed_projects: projects
            .iter()
            .filter(|project| project.status == ProjectStatus::Completed)
            .count(),
    }
}

/// Revenue summaries for every client with at least one linked project,
/// sorted by revenue, highest first.
pub fn client_revenue_rollup(workspace: &Workspace) -> Vec<ClientRevenue> {
    let mut rollup: Vec<ClientRevenue> = workspace
        .clients
        .iter()
        .map(|client| client_revenue(workspace, client.id))
        .filter(|summary| summary.project_count > 0)
        .collect();
    rollup.sort_by(|a, b| {
        b.revenue
            .partial_cmp(&a.revenue)
            .unwrap_or(Ordering::Equal)
    });
    rollup
}

#[cfg(test)]
mod tests {
    use super::{client_revenue, client_revenue_rollup};
    use crate::model::client::Client;
    use crate::model::project::Project;
    use crate::model::workspace::Workspace;

    #[test]
    fn margin_is_zero_without_revenue() {
        let mut workspace = Workspace::default();
        let client = Client::new("Acme", "acme@example.com", "Acme Inc", None, None);
        let client_id = client.id;
        workspace.clients.push(client);
        workspace
            .projects
            .push(Project::new("Unbudgeted", None, None, Some(client_id), None));

        let summary = client_revenue(&workspace, client_id);
        assert_eq!(summary.revenue, 0.0);
        assert_eq!(summary.margin_pct, 0.0);
        assert_eq!(summary.project_count, 1);
    }

    #[test]
    fn rollup_skips_clients_without_projects_and_sorts_by_revenue() {
        let mut workspace = Workspace::default();
        let idle = Client::new("Idle", "idle@example.com", "Idle Co", None, None);
        let small = Client::new("Small", "small@example.com", "Small Co", None, None);
        let big = Client::new("Big", "big@example.com", "Big Co", None, None);
        let small_id = small.id;
        let big_id = big.id;
        workspace.clients.push(idle);
        workspace.clients.push(small);
        workspace.clients.push(big);

        workspace
            .projects
            .push(Project::new("S", None, None, Some(small_id), Some(500.0)));
        workspace
            .projects
            .push(Project::new("B", None, None, Some(big_id), Some(2000.0)));

        let rollup = client_revenue_rollup(&workspace);
        let ids: Vec<_> = rollup.iter().map(|summary| summary.client_id).collect();
        assert_eq!(ids, vec![big_id, small_id]);
    }
}
