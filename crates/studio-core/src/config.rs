//! Studio configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{StudioError, StudioResult};

/// How numeric geometry typed into the properties form is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormInputPolicy {
    /// Width and height obey the same floor as interactive resize.
    #[default]
    Clamp,
    /// Values are stored exactly as typed.
    Raw,
}

/// Tunable behavior of the studio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// How long a first delete click on a group stays armed.
    pub delete_confirm_window_ms: u64,
    /// How long the "last group" error flag stays visible.
    pub delete_error_window_ms: u64,
    /// Delay before the dashboard preview animation restarts.
    pub preview_replay_delay_ms: u64,
    /// Size of a newly added widget, in virtual units.
    pub new_widget_size: (i32, i32),
    /// Position of the first added widget, in virtual units.
    pub new_widget_origin: (i32, i32),
    /// Diagonal offset applied per existing widget when adding.
    pub new_widget_stagger: i32,
    /// Geometry form input policy.
    pub form_input_policy: FormInputPolicy,
    /// Resize handle hit radius in screen pixels.
    pub handle_hit_tolerance: f64,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            delete_confirm_window_ms: 3000,
            delete_error_window_ms: 2000,
            preview_replay_delay_ms: 100,
            new_widget_size: (400, 300),
            new_widget_origin: (100, 100),
            new_widget_stagger: 20,
            form_input_policy: FormInputPolicy::Clamp,
            handle_hit_tolerance: 10.0,
        }
    }
}

impl StudioConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> StudioResult<Self> {
        serde_json::from_str(json).map_err(|e| StudioError::Config(e.to_string()))
    }

    pub fn delete_confirm_window(&self) -> Duration {
        Duration::from_millis(self.delete_confirm_window_ms)
    }

    pub fn delete_error_window(&self) -> Duration {
        Duration::from_millis(self.delete_error_window_ms)
    }

    pub fn preview_replay_delay(&self) -> Duration {
        Duration::from_millis(self.preview_replay_delay_ms)
    }
}
