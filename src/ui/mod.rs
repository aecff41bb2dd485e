//! UI layer: application shell, App orchestrator, palette view and colors.

pub mod app;
pub mod colors;
pub mod palette_view;
pub mod shell;
pub mod view;
