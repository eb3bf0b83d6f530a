// src/lib.rs

//! Scaffolding engine behind the `make-day` binary: copies a template tree
//! into a numbered day directory, rewriting the day placeholder.

pub mod app_controller;
pub mod engine;
pub mod ui;

// Re-export a narrow, testable API surface
pub use engine::{
    config::{ScaffoldConfig, ScaffoldConfigBuilder},
    day::DayName,
    model::{EntryKind, ScaffoldReport},
    scaffold::{plan_scaffold, scaffold},
};
