//! The eframe application: owns the store and applies UI actions each frame.

use std::path::{Path, PathBuf};
use std::time::Duration;

use studio_core::timer::Instant;
use studio_core::{Studio, StudioConfig, StudioError};

use crate::ui::{UiAction, UiState, render_ui};

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "WIDGET_STUDIO_CONFIG";

/// Errors that can occur while loading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] StudioError),
}

/// Read and parse a config file.
pub fn read_config(path: &Path) -> Result<StudioConfig, ConfigLoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(StudioConfig::from_json(&json)?)
}

/// Load the config named by [`CONFIG_ENV`], falling back to defaults.
pub fn load_config() -> StudioConfig {
    let Some(path) = std::env::var_os(CONFIG_ENV) else {
        return StudioConfig::default();
    };
    let path = PathBuf::from(path);
    match read_config(&path) {
        Ok(config) => {
            log::info!("Loaded config from {}", path.display());
            config
        }
        Err(err) => {
            log::warn!("{}; using default config", err);
            StudioConfig::default()
        }
    }
}

/// Main application state.
pub struct StudioApp {
    studio: Studio,
    ui_state: UiState,
}

impl StudioApp {
    pub fn new(config: StudioConfig) -> Self {
        Self {
            studio: Studio::new(config),
            ui_state: UiState::default(),
        }
    }

    fn handle_action(&mut self, action: UiAction, now: Instant) {
        match action {
            UiAction::Studio(event) => match self.studio.dispatch(event, now) {
                Ok(()) => {}
                // Stray pointer events after a release are expected.
                Err(StudioError::NoActiveDrag) => {}
                // Already queued as a notice.
                Err(err) if err.is_guard_rail() => {}
                Err(err) => log::warn!("{}", err),
            },
            UiAction::SwitchScreen(screen) => {
                log::debug!("Switching to {:?}", screen);
                self.ui_state.screen = screen;
            }
            UiAction::SetLeftTab(tab) => self.ui_state.left_tab = tab,
            UiAction::BeginPresetRename => {
                if let Some(preset) = self.studio.presets().active() {
                    self.ui_state.preset_rename = Some((preset.id, preset.name.clone()));
                }
            }
            UiAction::DismissNotices => self.ui_state.toasts.clear(),
        }
    }

    fn collect_notices(&mut self, now: Instant) {
        for notice in self.studio.take_notices() {
            self.ui_state.push_toast(notice, now);
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.studio.tick(now);
        self.collect_notices(now);
        self.ui_state.expire_toasts(now);

        let actions = render_ui(ctx, &self.studio, &mut self.ui_state, now);
        for action in actions {
            self.handle_action(action, now);
        }
        self.collect_notices(now);

        // Wake up for the next timer or toast expiry even without input.
        let deadlines = [self.studio.next_deadline(), self.ui_state.next_toast_expiry()];
        if let Some(deadline) = deadlines.into_iter().flatten().min() {
            let wait = deadline.saturating_duration_since(now);
            ctx.request_repaint_after(wait.max(Duration::from_millis(1)));
        }
    }
}
