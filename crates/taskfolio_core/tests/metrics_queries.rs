use rusqlite::Connection;
use taskfolio_core::clock;
use taskfolio_core::db::open_db_in_memory;
use taskfolio_core::metrics;
use taskfolio_core::{Priority, SqliteSnapshotStore, WorkspaceService};

fn service(conn: &Connection) -> WorkspaceService<SqliteSnapshotStore<'_>> {
    WorkspaceService::load(SqliteSnapshotStore::new(conn)).unwrap()
}

#[test]
fn cost_uses_member_rates_and_revenue_uses_the_budget() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let senior = service
        .add_member("Senior", None, Some(100.0), None)
        .unwrap();
    let junior = service.add_member("Junior", None, Some(50.0), None).unwrap();

    let project = service
        .add_project("Budgeted", None, None, None, Some(1000.0))
        .unwrap();
    let task = service
        .add_task(project.id, "work", None, Priority::default(), None)
        .unwrap();
    service
        .add_time_entry(task.id, senior.id, 4.0, "2026-02-01", None, None)
        .unwrap();
    service
        .add_time_entry(task.id, junior.id, 4.0, "2026-02-02", None, None)
        .unwrap();

    let workspace = service.workspace();
    assert_eq!(metrics::project_cost(workspace, project.id), 600.0);
    assert_eq!(metrics::project_revenue(workspace, project.id), 1000.0);
    assert_eq!(metrics::project_hours(workspace, project.id), 8.0);

    let report = metrics::project_budget_report(workspace, project.id);
    assert_eq!(report.remaining, 400.0);
    assert_eq!(report.budget_used_pct, 60.0);
    assert_eq!(report.billable_hours, 8.0);
    assert_eq!(report.non_billable_hours, 0.0);
}

#[test]
fn budget_report_splits_billable_and_non_billable() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let member = service.add_member("M", None, Some(100.0), None).unwrap();
    let project = service.add_project("P", None, None, None, None).unwrap();
    let task = service
        .add_task(project.id, "work", None, Priority::default(), None)
        .unwrap();
    service
        .add_time_entry(task.id, member.id, 3.0, "2026-02-01", None, Some(true))
        .unwrap();
    service
        .add_time_entry(task.id, member.id, 1.0, "2026-02-01", None, Some(false))
        .unwrap();

    let report = metrics::project_budget_report(service.workspace(), project.id);
    assert_eq!(report.budget, 0.0);
    assert_eq!(report.budget_used_pct, 0.0);
    assert_eq!(report.total_hours, 4.0);
    assert_eq!(report.billable_hours, 3.0);
    assert_eq!(report.non_billable_hours, 1.0);
    assert_eq!(report.billable_cost, 300.0);
    assert_eq!(report.non_billable_cost, 100.0);
}

#[test]
fn member_hours_honors_the_inclusive_date_range() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let member = service.add_member("M", None, None, None).unwrap();
    let project = service.add_project("P", None, None, None, None).unwrap();
    let task = service
        .add_task(project.id, "work", None, Priority::default(), None)
        .unwrap();
    for (date, hours) in [
        ("2026-01-31", 1.0),
        ("2026-02-01", 2.0),
        ("2026-02-10", 4.0),
        ("2026-02-11", 8.0),
    ] {
        service
            .add_time_entry(task.id, member.id, hours, date, None, None)
            .unwrap();
    }

    let workspace = service.workspace();
    assert_eq!(metrics::member_hours(workspace, member.id, None, None), 15.0);
    assert_eq!(
        metrics::member_hours(workspace, member.id, Some("2026-02-01"), Some("2026-02-10")),
        6.0
    );
    assert_eq!(
        metrics::member_hours(workspace, member.id, Some("2026-02-01"), None),
        14.0
    );
    assert_eq!(
        metrics::member_hours(workspace, member.id, None, Some("2026-01-31")),
        1.0
    );
}

#[test]
fn capacity_is_clamped_and_overdue_skips_completed_tasks() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let member = service.add_member("Busy", None, None, None).unwrap();
    let project = service.add_project("P", None, None, None, None).unwrap();
    for index in 0..10 {
        service
            .add_task(
                project.id,
                format!("t{index}"),
                Some(member.id),
                Priority::default(),
                Some("2000-01-01".to_string()),
            )
            .unwrap();
    }

    assert_eq!(metrics::member_capacity(service.workspace(), member.id), 100);

    // Complete half of them: load drops to 5, capacity exactly 100.
    let ids: Vec<_> = service.workspace().tasks[..5]
        .iter()
        .map(|task| task.id)
        .collect();
    for id in ids {
        service.toggle_task(id).unwrap();
    }
    assert_eq!(metrics::member_task_count(service.workspace(), member.id), 5);
    assert_eq!(metrics::member_capacity(service.workspace(), member.id), 100);

    // Every due date is far in the past, but completed tasks never count.
    assert_eq!(metrics::overdue_tasks(service.workspace()).len(), 5);
}

#[test]
fn upcoming_tasks_use_an_inclusive_day_window() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let project = service.add_project("P", None, None, None, None).unwrap();
    for due in [
        clock::today(),
        clock::today_plus(7),
        clock::today_plus(8),
        clock::today_plus(-1),
    ] {
        service
            .add_task(project.id, due.clone(), None, Priority::default(), Some(due))
            .unwrap();
    }

    let upcoming = metrics::upcoming_tasks(service.workspace(), 7);
    let dates: Vec<&str> = upcoming
        .iter()
        .filter_map(|task| task.due_date.as_deref())
        .collect();
    assert_eq!(dates, vec![clock::today(), clock::today_plus(7)]);

    assert_eq!(metrics::overdue_tasks(service.workspace()).len(), 1);
}

#[test]
fn best_assignee_picks_the_least_loaded_member() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let busy = service.add_member("Busy", None, None, None).unwrap();
    let idle = service.add_member("Idle", None, None, None).unwrap();
    let project = service.add_project("P", None, None, None, None).unwrap();
    service
        .add_task(project.id, "t", Some(busy.id), Priority::default(), None)
        .unwrap();

    // The four seed members are tied with the new idle member at zero open
    // tasks; the first listed wins.
    let first_seed = service.workspace().members[0].id;
    assert_eq!(
        metrics::best_assignee(service.workspace(), project.id),
        Some(first_seed)
    );
    assert_ne!(
        metrics::best_assignee(service.workspace(), project.id),
        Some(idle.id)
    );
}

#[test]
fn project_stats_aggregates_the_whole_workspace() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let project_a = service
        .add_project("A", None, None, None, Some(1000.0))
        .unwrap();
    let project_b = service
        .add_project("B", None, None, None, Some(500.0))
        .unwrap();

    let done = service
        .add_task(project_a.id, "done", None, Priority::default(), None)
        .unwrap();
    service
        .add_task(project_a.id, "open", None, Priority::default(), None)
        .unwrap();
    let only = service
        .add_task(project_b.id, "only", None, Priority::default(), None)
        .unwrap();
    service.toggle_task(done.id).unwrap();
    service.toggle_task(only.id).unwrap();

    let member = service.workspace().members[0].id;
    service
        .add_time_entry(done.id, member, 16.0, "2026-02-01", None, None)
        .unwrap();

    let stats = metrics::project_stats(service.workspace());
    assert_eq!(stats.total_projects, 2);
    assert_eq!(stats.active_projects, 1);
    assert_eq!(stats.completed_projects, 1);
    assert_eq!(stats.total_tasks, 3);
    assert_eq!(stats.completed_tasks, 2);
    // Progress 50 and 100 -> mean 75.
    assert_eq!(stats.avg_progress, 75);
    assert_eq!(stats.total_revenue, 1500.0);
    assert_eq!(stats.total_hours, 16.0);
    // Four seed members at 40h each: 16 / 160 = 10%.
    assert_eq!(stats.utilization_rate, 10);
}

#[test]
fn team_performance_counts_only_billable_revenue() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let rated = service.add_member("Rated", None, Some(200.0), None).unwrap();
    let unrated = service
        .add_member(
            "Unrated",
            None,
            Some(taskfolio_core::DEFAULT_HOURLY_RATE),
            None,
        )
        .unwrap();
    let project = service.add_project("P", None, None, None, None).unwrap();
    let task = service
        .add_task(project.id, "work", None, Priority::default(), None)
        .unwrap();

    service
        .add_time_entry(task.id, rated.id, 5.0, "2026-02-01", None, Some(true))
        .unwrap();
    service
        .add_time_entry(task.id, rated.id, 5.0, "2026-02-01", None, Some(false))
        .unwrap();
    service
        .add_time_entry(task.id, unrated.id, 2.0, "2026-02-01", None, Some(true))
        .unwrap();

    let rated_row = metrics::member_performance(service.workspace(), rated.id).unwrap();
    assert_eq!(rated_row.total_hours, 10.0);
    assert_eq!(rated_row.billable_hours, 5.0);
    assert_eq!(rated_row.billable_pct, 50.0);
    assert_eq!(rated_row.revenue, 1000.0);

    let team = metrics::team_performance(service.workspace());
    assert_eq!(team.total_hours, 12.0);
    assert_eq!(team.billable_hours, 7.0);
    assert_eq!(team.revenue, 1200.0);
    // Rows are sorted busiest-first; the rated member leads.
    assert_eq!(team.members[0].member_id, rated.id);

    assert!(metrics::member_performance(service.workspace(), uuid::Uuid::new_v4()).is_none());
}

#[test]
fn client_revenue_reports_profit_and_margin() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let member = service.add_member("M", None, Some(100.0), None).unwrap();
    let client = service
        .add_client("Acme", "acme@example.com", "Acme Inc", None, None)
        .unwrap();
    let project = service
        .add_project("Engagement", None, None, Some(client.id), Some(2000.0))
        .unwrap();
    let task = service
        .add_task(project.id, "work", None, Priority::default(), None)
        .unwrap();
    service
        .add_time_entry(task.id, member.id, 6.0, "2026-02-01", None, None)
        .unwrap();

    let summary = metrics::client_revenue(service.workspace(), client.id);
    assert_eq!(summary.revenue, 2000.0);
    assert_eq!(summary.cost, 600.0);
    assert_eq!(summary.profit, 1400.0);
    assert_eq!(summary.margin_pct, 70.0);
    assert_eq!(summary.project_count, 1);
    assert_eq!(summary.active_projects, 1);
}

#[test]
fn projects_at_risk_requires_a_budget() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let member = service.add_member("M", None, Some(100.0), None).unwrap();
    let risky = service
        .add_project("Risky", None, None, None, Some(1000.0))
        .unwrap();
    let safe = service
        .add_project("Safe", None, None, None, Some(1000.0))
        .unwrap();
    let unbudgeted = service.add_project("Free", None, None, None, None).unwrap();

    for (project_id, hours) in [(risky.id, 8.0), (safe.id, 1.0), (unbudgeted.id, 50.0)] {
        let task = service
            .add_task(project_id, "work", None, Priority::default(), None)
            .unwrap();
        service
            .add_time_entry(task.id, member.id, hours, "2026-02-01", None, None)
            .unwrap();
    }

    let at_risk = metrics::projects_at_risk(service.workspace());
    let ids: Vec<_> = at_risk.iter().map(|project| project.id).collect();
    assert_eq!(ids, vec![risky.id]);
}

#[test]
fn task_time_entries_filters_by_task() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let member = service.workspace().members[0].id;
    let project = service.add_project("P", None, None, None, None).unwrap();
    let first = service
        .add_task(project.id, "first", None, Priority::default(), None)
        .unwrap();
    let second = service
        .add_task(project.id, "second", None, Priority::default(), None)
        .unwrap();
    service
        .add_time_entry(first.id, member, 1.0, "2026-02-01", None, None)
        .unwrap();
    service
        .add_time_entry(second.id, member, 2.0, "2026-02-01", None, None)
        .unwrap();

    let entries = metrics::task_time_entries(service.workspace(), first.id);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].hours, 1.0);
}
