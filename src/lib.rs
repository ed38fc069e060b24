//! Library exports for reuse in tests.
/// Application directory helpers.
pub mod app_dirs;
/// View state behind the Process/Cancel buttons.
pub mod controller;
/// Logging setup.
pub mod logging;
/// Egui window for the process demo.
pub mod ui;
/// Background runner for the simulated task.
pub mod worker;
