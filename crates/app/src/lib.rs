//! `invoicehub-app` — view controller and application state.
//!
//! Replaces the DOM-event style with an explicit state struct: user
//! actions become typed draft commands or async operations on [`App`],
//! every failure is captured at the operation boundary as a user-visible
//! notice, and nothing needs a rendering environment to test.

pub mod app;

pub use app::{App, DashboardData, Notice, Screen};
