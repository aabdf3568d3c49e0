//! FactoAtlas Portal Library
//!
//! A TUI employee self-service portal: navigation state machine,
//! activity aggregation, and their rendering.

// Module declarations
pub mod app;
pub mod common;
pub mod config;
pub mod core;
pub mod data;
pub mod tui;

// Re-export main entry point
pub use app::run;
