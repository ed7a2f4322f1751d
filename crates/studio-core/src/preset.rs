//! Named snapshots of the canvas widget list.
//!
//! Exactly one preset is active. The canvas editor always holds the active
//! preset's widgets; the stored copy is refreshed ("flushed") before any
//! switch so changing presets never loses the outgoing layout.
//!
//! Deleting takes two clicks on the same preset within the confirmation
//! window, like group deletion on the dashboard.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

use crate::canvas::CanvasEditor;
use crate::config::StudioConfig;
use crate::error::{StudioError, StudioResult};
use crate::timer::{DeleteOutcome, Instant, Scheduler, TimerId};
use crate::widget::Widget;

/// Unique identifier for a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetId(pub Uuid);

impl PresetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PresetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "preset-{}", self.0.simple())
    }
}

/// A named widget layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: PresetId,
    pub name: String,
    pub widgets: Vec<Widget>,
}

impl Preset {
    pub fn new(name: impl Into<String>, widgets: Vec<Widget>) -> Self {
        Self {
            id: PresetId::new(),
            name: name.into(),
            widgets,
        }
    }
}

/// The list of presets and which one is loaded into the canvas.
#[derive(Debug)]
pub struct PresetLibrary {
    presets: Vec<Preset>,
    active: PresetId,
    delete_armed: Option<(PresetId, TimerId)>,
    timers: Scheduler<()>,
    confirm_window: Duration,
}

impl PresetLibrary {
    /// Create a library with a single preset, which becomes active.
    pub fn new(config: &StudioConfig, first: Preset) -> Self {
        Self {
            active: first.id,
            presets: vec![first],
            delete_armed: None,
            timers: Scheduler::new(),
            confirm_window: config.delete_confirm_window(),
        }
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn get(&self, id: PresetId) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == id)
    }

    pub fn active_id(&self) -> PresetId {
        self.active
    }

    pub fn active(&self) -> Option<&Preset> {
        self.get(self.active)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Store the canvas widgets into the active preset.
    fn flush(&mut self, canvas: &CanvasEditor) {
        let widgets = canvas.snapshot();
        match self.presets.iter_mut().find(|p| p.id == self.active) {
            Some(preset) => preset.widgets = widgets,
            None => {
                log::warn!("Active preset {} missing, re-adding it", self.active);
                self.presets.push(Preset {
                    id: self.active,
                    name: format!("프리셋 {}", self.presets.len() + 1),
                    widgets,
                });
            }
        }
    }

    /// Switch to another preset, saving the current canvas first.
    pub fn load(&mut self, id: PresetId, canvas: &mut CanvasEditor) -> StudioResult<()> {
        if self.get(id).is_none() {
            return Err(StudioError::UnknownPreset(id));
        }
        self.flush(canvas);
        let widgets = self.get(id).map(|p| p.widgets.clone()).unwrap_or_default();
        canvas.replace_widgets(widgets);
        log::debug!("Switched preset {} -> {}", self.active, id);
        self.active = id;
        Ok(())
    }

    /// Save the current canvas, then start a new empty preset.
    pub fn create(&mut self, canvas: &mut CanvasEditor) -> PresetId {
        self.flush(canvas);
        let preset = Preset::new(format!("프리셋 {}", self.presets.len() + 1), Vec::new());
        let id = preset.id;
        self.presets.push(preset);
        canvas.replace_widgets(Vec::new());
        self.active = id;
        log::debug!("Created preset {}", id);
        id
    }

    // --- Timers ---

    /// Disarm an expired delete confirmation.
    pub fn tick(&mut self, now: Instant) {
        if !self.timers.poll(now).is_empty() {
            log::debug!("Preset delete confirmation expired");
            self.delete_armed = None;
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Cancel the pending confirmation.
    pub fn teardown(&mut self) {
        self.timers.cancel_all();
        self.delete_armed = None;
    }

    // --- Delete ---

    /// Whether a delete of `id` is waiting for its confirming click.
    pub fn is_delete_armed(&self, id: PresetId) -> bool {
        matches!(self.delete_armed, Some((armed, _)) if armed == id)
    }

    /// Handle a delete click on `id` at time `now`.
    ///
    /// The last remaining preset cannot be deleted. Otherwise the first click
    /// arms the delete and a second click on the same preset inside the
    /// confirmation window removes it. Deleting the active preset loads the
    /// first remaining one.
    pub fn delete(
        &mut self,
        id: PresetId,
        canvas: &mut CanvasEditor,
        now: Instant,
    ) -> StudioResult<DeleteOutcome<Preset>> {
        self.tick(now);

        if self.presets.len() <= 1 {
            log::warn!("Refusing to delete the last preset");
            return Err(StudioError::LastPresetRequired);
        }
        let index = self
            .presets
            .iter()
            .position(|p| p.id == id)
            .ok_or(StudioError::UnknownPreset(id))?;

        match self.delete_armed.take() {
            Some((armed, timer)) if armed == id => {
                self.timers.cancel(timer);
                let removed = self.presets.remove(index);
                if self.active == id {
                    let next = &self.presets[0];
                    self.active = next.id;
                    canvas.replace_widgets(next.widgets.clone());
                }
                log::debug!("Deleted preset {}", id);
                Ok(DeleteOutcome::Deleted(removed))
            }
            previous => {
                if let Some((_, timer)) = previous {
                    self.timers.cancel(timer);
                }
                let timer = self.timers.schedule(now, self.confirm_window, ());
                self.delete_armed = Some((id, timer));
                Ok(DeleteOutcome::Armed)
            }
        }
    }

    /// Save the current canvas into the active preset.
    pub fn save(&mut self, canvas: &CanvasEditor) {
        self.flush(canvas);
        log::info!("Saved preset {}", self.active);
    }

    /// Rename a preset.
    pub fn rename(&mut self, id: PresetId, name: &str) -> StudioResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StudioError::EmptyName);
        }
        let preset = self
            .presets
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StudioError::UnknownPreset(id))?;
        preset.name = name.to_string();
        Ok(())
    }
}
