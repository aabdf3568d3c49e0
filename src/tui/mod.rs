//! TUI presentation layer
//!
//! Organized into focused submodules:
//!
//! - `runner`: Entry point and event loop
//! - `event`: Terminal event handling
//! - `layout`: Layout calculation
//! - `render`: Frame rendering (composition root)
//! - `theme`: Palette and icon lookup
//! - `terminal`: Terminal setup/restore
//! - `widgets`: Reusable UI components

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub use runner::run;
