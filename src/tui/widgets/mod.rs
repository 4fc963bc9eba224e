//! TUI widgets for sortviz
//!
//! Reusable UI components for the terminal interface.

pub mod bars;
pub mod panels;

pub use bars::BarsWidget;
pub use panels::{build_info_lines, build_stats_line};
