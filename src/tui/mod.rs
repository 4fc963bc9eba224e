//! Terminal UI for the visualizer, built on ratatui/crossterm.

pub mod app;
pub mod help;
pub mod status_footer;
pub mod theme;
pub mod ui;
pub mod view;
pub mod visualizer;
pub mod widgets;

pub use app::App;
pub use theme::{current_theme, Theme};
pub use view::ViewState;
pub use visualizer::{key_action, run, Action, Status, Visualizer};
