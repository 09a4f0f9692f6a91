//! Domain model for projects, tasks, team members, clients and time entries.
//!
//! # Responsibility
//! - Define the plain data records held by the in-memory [`workspace::Workspace`].
//! - Keep records behavior-free; mutation rules live in `service` and derived
//!   views live in `metrics`.
//!
//! # Invariants
//! - Every record carries a stable id generated at creation and never reused.
//! - A `Task` is owned by its `Project`; a `TimeEntry` is owned by its `Task`.
//! - `Member` and `Client` are referenced, never owned.

pub mod client;
pub mod member;
pub mod project;
pub mod task;
pub mod time_entry;
pub mod workspace;
