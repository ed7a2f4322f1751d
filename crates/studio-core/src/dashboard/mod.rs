//! Dashboard state: preset groups, the active-group dropdown and the preview.

mod dropdown;
mod editor;
mod group;
mod layout;

pub use dropdown::GroupDropdown;
pub use editor::{GroupEditor, RenameDraft};
pub use group::{ConditionId, ConditionPreset, GroupId, PresetGroup, PROTECTED_CONDITIONS};
pub use layout::{LayoutMode, PreviewState};

use crate::config::StudioConfig;
use crate::timer::Instant;

/// Everything the settings dashboard owns.
#[derive(Debug)]
pub struct Dashboard {
    pub editor: GroupEditor,
    pub dropdown: GroupDropdown,
    pub preview: PreviewState,
}

impl Dashboard {
    /// Create a dashboard with one default group.
    pub fn new(config: &StudioConfig) -> Self {
        Self {
            editor: GroupEditor::new(config, PresetGroup::new("기본 그룹")),
            dropdown: GroupDropdown::new(),
            preview: PreviewState::new(config.preview_replay_delay()),
        }
    }

    pub fn set_layout_mode(&mut self, mode: LayoutMode, now: Instant) {
        self.preview.set_mode(mode, now);
    }

    pub fn replay_preview(&mut self, now: Instant) {
        self.preview.replay(now);
    }

    pub fn tick(&mut self, now: Instant) {
        self.editor.tick(now);
        self.preview.tick(now);
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        [self.editor.next_deadline(), self.preview.next_deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    pub fn teardown(&mut self) {
        self.editor.teardown();
        self.preview.teardown();
        self.dropdown.dismiss();
    }
}
