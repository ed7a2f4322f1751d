//! Widget Studio application
//!
//! The eframe shell that renders studio state and feeds user input back into
//! the store as events.

mod app;
mod canvas_view;
mod dashboard_view;
mod editor_panels;
mod ui;

pub use app::{CONFIG_ENV, ConfigLoadError, StudioApp, load_config, read_config};
pub use ui::{LeftTab, Screen, UiAction, UiState, render_ui};
