//! Engine sub-modules: color formatting, palette state, the controller and
//! its revert timer.

pub mod controller;
pub mod format;
pub mod palette;
pub mod revert;
