//! The studio state owner and its closed event set.
//!
//! Views never mutate state directly. They render from the accessors on
//! [`Studio`] and send [`StudioEvent`]s through [`Studio::dispatch`].

use kurbo::{Point, Rect, Vec2};

use crate::canvas::CanvasEditor;
use crate::config::StudioConfig;
use crate::dashboard::{ConditionId, Dashboard, GroupId, LayoutMode};
use crate::error::{StudioError, StudioResult};
use crate::geometry::{CanvasViewport, RectField};
use crate::preset::{Preset, PresetId, PresetLibrary};
use crate::timer::Instant;
use crate::widget::{Corner, SettingsPatch, Widget, WidgetId, WidgetKind};

/// Message shown after a preset save.
pub const SAVED_NOTICE: &str = "현재 프리셋이 저장되었습니다.";

/// Every input the studio accepts.
///
/// Geometry deltas in `Move` and `Resize` are in virtual canvas units.
/// Pointer positions in the `Pointer*` events are in screen pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum StudioEvent {
    // Canvas editor
    Select(WidgetId),
    BackgroundClick,
    Move { id: WidgetId, delta: Vec2 },
    Resize { id: WidgetId, handle: Corner, delta: Vec2 },
    /// Start a drag. `canvas` is the rendered canvas rect at gesture start.
    PointerDown {
        widget: WidgetId,
        handle: Option<Corner>,
        pointer: Point,
        canvas: Rect,
    },
    PointerMove { pointer: Point },
    PointerUp,
    AddWidget(WidgetKind),
    DeleteWidget(WidgetId),
    ToggleVisible(WidgetId),
    UpdateSettings { id: WidgetId, patch: SettingsPatch },
    SetRectField { id: WidgetId, field: RectField, value: i32 },

    // Presets
    LoadPreset(PresetId),
    CreatePreset,
    DeletePreset(PresetId),
    SavePreset,
    RenamePreset { id: PresetId, name: String },

    // Preset groups
    /// `Some` is the inline form, `None` the modal.
    AddGroup(Option<String>),
    BeginInlineAdd,
    EditInlineAdd(String),
    CommitInlineAdd,
    CancelInlineAdd,
    DeleteGroup(GroupId),
    RenameGroup { id: GroupId, name: String },
    BeginRename(GroupId),
    EditRenameDraft(String),
    CommitRename,
    CancelRename,
    ReorderGroup { from: GroupId, to: GroupId },
    ToggleGroupDropdown,
    SelectGroupDraft(GroupId),
    CommitGroupSelection,
    DismissGroupDropdown,
    AddConditionPreset,
    DeleteConditionPreset(ConditionId),
    EditConditionPreset { id: ConditionId, text: String },
    ToggleConditionPreset(ConditionId),

    // Preview
    SetLayoutMode(LayoutMode),
    ReplayPreview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// A user-facing message produced by an event.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

/// Owner of all studio state.
#[derive(Debug)]
pub struct Studio {
    config: StudioConfig,
    canvas: CanvasEditor,
    presets: PresetLibrary,
    dashboard: Dashboard,
    notices: Vec<Notice>,
}

impl Studio {
    /// Create the initial state: one preset holding the starter alert, selected.
    pub fn new(config: StudioConfig) -> Self {
        let starter = Widget::starter();
        let starter_id = starter.id;
        let mut canvas = CanvasEditor::with_widgets(&config, vec![starter]);
        canvas.set_selected(Some(starter_id));
        let presets = PresetLibrary::new(&config, Preset::new("기본 프리셋", canvas.snapshot()));
        let dashboard = Dashboard::new(&config);
        log::info!("Studio ready with preset {}", presets.active_id());

        Self {
            config,
            canvas,
            presets,
            dashboard,
            notices: Vec::new(),
        }
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn canvas(&self) -> &CanvasEditor {
        &self.canvas
    }

    pub fn presets(&self) -> &PresetLibrary {
        &self.presets
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Drain queued notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Apply one event at time `now`.
    ///
    /// Guard-rail refusals are queued as warning notices and also returned.
    pub fn dispatch(&mut self, event: StudioEvent, now: Instant) -> StudioResult<()> {
        // Deadlines passed before this event take effect first.
        self.tick(now);

        let result = self.apply(event, now);
        if let Err(err) = &result {
            if err.is_guard_rail() {
                self.notices.push(Notice::warning(err.to_string()));
            } else {
                log::debug!("Event rejected: {}", err);
            }
        }
        result
    }

    fn apply(&mut self, event: StudioEvent, now: Instant) -> StudioResult<()> {
        let canvas = &mut self.canvas;
        let dashboard = &mut self.dashboard;

        match event {
            StudioEvent::Select(id) => canvas.select(id)?,
            StudioEvent::BackgroundClick => canvas.background_click(),
            StudioEvent::Move { id, delta } => {
                canvas.move_by(id, delta)?;
            }
            StudioEvent::Resize { id, handle, delta } => {
                canvas.resize_by(id, handle, delta)?;
            }
            StudioEvent::PointerDown {
                widget,
                handle,
                pointer,
                canvas: screen,
            } => canvas.begin_drag(widget, handle, pointer, &CanvasViewport::new(screen))?,
            StudioEvent::PointerMove { pointer } => {
                canvas.drag_to(pointer)?;
            }
            StudioEvent::PointerUp => {
                canvas.end_drag().ok_or(StudioError::NoActiveDrag)?;
            }
            StudioEvent::AddWidget(kind) => {
                canvas.add_widget(kind);
            }
            StudioEvent::DeleteWidget(id) => {
                canvas.delete_widget(id)?;
            }
            StudioEvent::ToggleVisible(id) => {
                canvas.toggle_visible(id)?;
            }
            StudioEvent::UpdateSettings { id, patch } => canvas.update_settings(id, patch)?,
            StudioEvent::SetRectField { id, field, value } => {
                canvas.set_rect_field(id, field, value)?;
            }

            StudioEvent::LoadPreset(id) => self.presets.load(id, canvas)?,
            StudioEvent::CreatePreset => {
                self.presets.create(canvas);
            }
            StudioEvent::DeletePreset(id) => {
                self.presets.delete(id, canvas, now)?;
            }
            StudioEvent::SavePreset => {
                self.presets.save(canvas);
                self.notices.push(Notice::info(SAVED_NOTICE));
            }
            StudioEvent::RenamePreset { id, name } => self.presets.rename(id, &name)?,

            StudioEvent::AddGroup(name) => {
                dashboard.editor.add_group(name.as_deref());
            }
            StudioEvent::BeginInlineAdd => dashboard.editor.begin_inline_add(),
            StudioEvent::EditInlineAdd(text) => dashboard.editor.edit_inline_add(text),
            StudioEvent::CommitInlineAdd => {
                dashboard.editor.commit_inline_add();
            }
            StudioEvent::CancelInlineAdd => dashboard.editor.cancel_inline_add(),
            StudioEvent::DeleteGroup(id) => {
                dashboard.editor.delete_group(id, now)?;
            }
            StudioEvent::RenameGroup { id, name } => dashboard.editor.rename_group(id, &name)?,
            StudioEvent::BeginRename(id) => dashboard.editor.begin_rename(id)?,
            StudioEvent::EditRenameDraft(text) => dashboard.editor.edit_rename(text),
            StudioEvent::CommitRename => dashboard.editor.commit_rename()?,
            StudioEvent::CancelRename => dashboard.editor.cancel_rename(),
            StudioEvent::ReorderGroup { from, to } => {
                dashboard.editor.reorder(from, to)?;
            }
            StudioEvent::ToggleGroupDropdown => {
                let committed = dashboard.editor.active_id();
                dashboard.dropdown.toggle(committed);
            }
            StudioEvent::SelectGroupDraft(id) => {
                if dashboard.editor.group(id).is_none() {
                    return Err(StudioError::UnknownGroup(id));
                }
                dashboard.dropdown.select_draft(id);
            }
            StudioEvent::CommitGroupSelection => {
                dashboard.dropdown.commit(&mut dashboard.editor)?;
            }
            StudioEvent::DismissGroupDropdown => dashboard.dropdown.dismiss(),
            StudioEvent::AddConditionPreset => {
                dashboard.editor.add_condition()?;
            }
            StudioEvent::DeleteConditionPreset(id) => dashboard.editor.delete_condition(id)?,
            StudioEvent::EditConditionPreset { id, text } => dashboard.editor.edit_condition(id, text)?,
            StudioEvent::ToggleConditionPreset(id) => {
                dashboard.editor.toggle_condition(id)?;
            }

            StudioEvent::SetLayoutMode(mode) => dashboard.set_layout_mode(mode, now),
            StudioEvent::ReplayPreview => dashboard.replay_preview(now),
        }
        Ok(())
    }

    /// Fire every timer due at `now`.
    pub fn tick(&mut self, now: Instant) {
        self.presets.tick(now);
        self.dashboard.tick(now);
    }

    /// When the next timer is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        [self.presets.next_deadline(), self.dashboard.next_deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    /// Cancel all timers and release any pointer capture.
    pub fn teardown(&mut self) {
        self.presets.teardown();
        self.dashboard.teardown();
        self.canvas.end_drag();
    }
}

impl Default for Studio {
    fn default() -> Self {
        Self::new(StudioConfig::default())
    }
}

impl Drop for Studio {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{MIN_WIDGET_SIZE, WidgetRect};
    use crate::input::PointerCapture;
    use crate::widget::CATEGORIES;
    use std::time::Duration;

    fn studio() -> Studio {
        Studio::default()
    }

    fn full_canvas() -> Rect {
        Rect::new(0.0, 0.0, 1920.0, 1080.0)
    }

    #[test]
    fn test_initial_state() {
        let studio = studio();
        assert_eq!(studio.presets().len(), 1);
        assert_eq!(studio.presets().active().unwrap().name, "기본 프리셋");
        assert_eq!(studio.canvas().len(), 1);

        let starter = &studio.canvas().widgets()[0];
        assert_eq!(studio.canvas().selected_id(), Some(starter.id));
        assert_eq!(starter.rect, WidgetRect::new(320, 180, 640, 360));
        assert_eq!(studio.dashboard().editor.groups().len(), 1);
    }

    #[test]
    fn test_select_unknown_widget_fails_without_notice() {
        let mut studio = studio();
        let id = WidgetId::new();
        let err = studio.dispatch(StudioEvent::Select(id), Instant::now()).unwrap_err();
        assert_eq!(err, StudioError::UnknownWidget(id));
        assert!(studio.take_notices().is_empty());
    }

    #[test]
    fn test_add_three_delete_selected_second_clears_selection() {
        let mut studio = studio();
        let now = Instant::now();
        studio.dispatch(StudioEvent::CreatePreset, now).unwrap();

        for kind in [WidgetKind::TextAlert, WidgetKind::Roulette, WidgetKind::Poll] {
            studio.dispatch(StudioEvent::AddWidget(kind), now).unwrap();
        }
        let second = studio.canvas().widgets()[1].id;
        studio.dispatch(StudioEvent::Select(second), now).unwrap();
        studio.dispatch(StudioEvent::DeleteWidget(second), now).unwrap();

        assert_eq!(studio.canvas().len(), 2);
        assert_eq!(studio.canvas().selected_id(), None);
    }

    #[test]
    fn test_resize_event_scenario() {
        let mut studio = studio();
        let now = Instant::now();
        studio.dispatch(StudioEvent::CreatePreset, now).unwrap();
        studio.dispatch(StudioEvent::AddWidget(WidgetKind::TextAlert), now).unwrap();
        let id = studio.canvas().widgets()[0].id;

        studio
            .dispatch(
                StudioEvent::SetRectField {
                    id,
                    field: RectField::Width,
                    value: 200,
                },
                now,
            )
            .unwrap();
        studio
            .dispatch(
                StudioEvent::SetRectField {
                    id,
                    field: RectField::Height,
                    value: 150,
                },
                now,
            )
            .unwrap();
        studio
            .dispatch(
                StudioEvent::Resize {
                    id,
                    handle: Corner::TopLeft,
                    delta: Vec2::new(-30.0, 10.0),
                },
                now,
            )
            .unwrap();

        assert_eq!(studio.canvas().widget(id).unwrap().rect, WidgetRect::new(70, 110, 230, 140));
    }

    #[test]
    fn test_pointer_drag_acquires_and_releases_capture() {
        let mut studio = studio();
        let now = Instant::now();
        let id = studio.canvas().widgets()[0].id;
        // Canvas rendered at half size: one screen pixel is two units.
        let canvas = Rect::new(0.0, 0.0, 960.0, 540.0);

        studio
            .dispatch(
                StudioEvent::PointerDown {
                    widget: id,
                    handle: None,
                    pointer: Point::new(200.0, 100.0),
                    canvas,
                },
                now,
            )
            .unwrap();
        assert!(studio.canvas().capture().is_captured());

        studio
            .dispatch(
                StudioEvent::PointerMove {
                    pointer: Point::new(210.3, 95.0),
                },
                now,
            )
            .unwrap();
        let rect = studio.canvas().widget(id).unwrap().rect;
        assert_eq!((rect.x, rect.y), (341, 170));

        studio.dispatch(StudioEvent::PointerUp, now).unwrap();
        assert!(!studio.canvas().capture().is_captured());

        let err = studio.dispatch(StudioEvent::PointerUp, now).unwrap_err();
        assert_eq!(err, StudioError::NoActiveDrag);
    }

    #[test]
    fn test_drop_releases_capture() {
        let mut studio = studio();
        let id = studio.canvas().widgets()[0].id;
        studio
            .dispatch(
                StudioEvent::PointerDown {
                    widget: id,
                    handle: Some(Corner::BottomRight),
                    pointer: Point::new(960.0, 540.0),
                    canvas: full_canvas(),
                },
                Instant::now(),
            )
            .unwrap();

        let capture: PointerCapture = studio.canvas().capture().clone();
        assert!(capture.is_captured());
        drop(studio);
        assert!(!capture.is_captured());
    }

    #[test]
    fn test_resize_never_below_floor() {
        let mut studio = studio();
        let now = Instant::now();
        let id = studio.canvas().widgets()[0].id;

        for corner in Corner::ALL {
            studio
                .dispatch(
                    StudioEvent::Resize {
                        id,
                        handle: corner,
                        delta: Vec2::new(5000.0, -5000.0),
                    },
                    now,
                )
                .unwrap();
            studio
                .dispatch(
                    StudioEvent::Resize {
                        id,
                        handle: corner,
                        delta: Vec2::new(-5000.0, 5000.0),
                    },
                    now,
                )
                .unwrap();
            let rect = studio.canvas().widget(id).unwrap().rect;
            assert!(rect.width >= MIN_WIDGET_SIZE);
            assert!(rect.height >= MIN_WIDGET_SIZE);
        }
    }

    #[test]
    fn test_switching_preset_flushes_outgoing() {
        let mut studio = studio();
        let now = Instant::now();
        let first = studio.presets().active_id();

        studio.dispatch(StudioEvent::AddWidget(WidgetKind::Quest), now).unwrap();
        let before_switch = studio.canvas().snapshot();

        studio.dispatch(StudioEvent::CreatePreset, now).unwrap();
        assert!(studio.canvas().is_empty());
        assert_eq!(studio.presets().get(first).unwrap().widgets, before_switch);

        studio.dispatch(StudioEvent::LoadPreset(first), now).unwrap();
        assert_eq!(studio.canvas().widgets(), before_switch.as_slice());
        assert_eq!(studio.canvas().selected_id(), None);
    }

    #[test]
    fn test_last_preset_delete_refused_with_notice() {
        let mut studio = studio();
        let id = studio.presets().active_id();

        let err = studio.dispatch(StudioEvent::DeletePreset(id), Instant::now()).unwrap_err();
        assert_eq!(err, StudioError::LastPresetRequired);
        assert_eq!(studio.presets().len(), 1);

        let notices = studio.take_notices();
        assert_eq!(notices, vec![Notice::warning("최소 1개의 프리셋이 필요합니다.")]);
        assert!(studio.take_notices().is_empty());
    }

    #[test]
    fn test_preset_delete_needs_confirming_click() {
        let mut studio = studio();
        let now = Instant::now();
        let first = studio.presets().active_id();
        studio.dispatch(StudioEvent::CreatePreset, now).unwrap();

        studio.dispatch(StudioEvent::DeletePreset(first), now).unwrap();
        assert_eq!(studio.presets().len(), 2);
        assert!(studio.presets().is_delete_armed(first));
        assert_eq!(studio.next_deadline(), Some(now + Duration::from_secs(3)));

        studio
            .dispatch(StudioEvent::DeletePreset(first), now + Duration::from_secs(1))
            .unwrap();
        assert_eq!(studio.presets().len(), 1);
        assert!(studio.presets().get(first).is_none());
        assert!(studio.take_notices().is_empty());
    }

    #[test]
    fn test_empty_rename_commit_warns_and_stays_open() {
        let mut studio = studio();
        let now = Instant::now();
        let group = studio.dashboard().editor.active_id();

        studio.dispatch(StudioEvent::BeginRename(group), now).unwrap();
        studio.dispatch(StudioEvent::EditRenameDraft("  ".into()), now).unwrap();
        let err = studio.dispatch(StudioEvent::CommitRename, now).unwrap_err();

        assert_eq!(err, StudioError::EmptyName);
        assert_eq!(studio.take_notices(), vec![Notice::warning("이름을 입력하세요.")]);
        assert!(studio.dashboard().editor.rename_draft().is_some());
        assert_eq!(studio.dashboard().editor.active_group().unwrap().name, "기본 그룹");
    }

    #[test]
    fn test_save_preset_notice() {
        let mut studio = studio();
        studio.dispatch(StudioEvent::SavePreset, Instant::now()).unwrap();
        assert_eq!(studio.take_notices(), vec![Notice::info(SAVED_NOTICE)]);
    }

    #[test]
    fn test_group_two_step_delete_through_dispatch() {
        let mut studio = studio();
        let now = Instant::now();
        studio.dispatch(StudioEvent::AddGroup(Some("이벤트".into())), now).unwrap();
        let id = studio.dashboard().editor.groups()[1].id;

        studio.dispatch(StudioEvent::DeleteGroup(id), now).unwrap();
        assert_eq!(studio.dashboard().editor.groups().len(), 2);

        let later = now + Duration::from_secs(3);
        studio.tick(later);
        assert!(!studio.dashboard().editor.is_delete_armed(id));

        studio.dispatch(StudioEvent::DeleteGroup(id), later).unwrap();
        studio
            .dispatch(StudioEvent::DeleteGroup(id), later + Duration::from_secs(1))
            .unwrap();
        assert_eq!(studio.dashboard().editor.groups().len(), 1);
    }

    #[test]
    fn test_minimum_lengths_hold() {
        let mut studio = studio();
        let now = Instant::now();
        let group = studio.dashboard().editor.active_id();
        let preset = studio.presets().active_id();

        for _ in 0..3 {
            assert!(studio.dispatch(StudioEvent::DeleteGroup(group), now).is_err());
            assert!(studio.dispatch(StudioEvent::DeletePreset(preset), now).is_err());
        }
        assert_eq!(studio.dashboard().editor.groups().len(), 1);
        assert_eq!(studio.presets().len(), 1);
        assert_eq!(studio.take_notices().len(), 6);
    }

    #[test]
    fn test_group_dropdown_draft_then_commit() {
        let mut studio = studio();
        let now = Instant::now();
        let first = studio.dashboard().editor.active_id();
        studio.dispatch(StudioEvent::AddGroup(Some("b".into())), now).unwrap();
        let second = studio.dashboard().editor.groups()[1].id;

        studio.dispatch(StudioEvent::ToggleGroupDropdown, now).unwrap();
        studio.dispatch(StudioEvent::SelectGroupDraft(second), now).unwrap();
        studio.dispatch(StudioEvent::DismissGroupDropdown, now).unwrap();
        assert_eq!(studio.dashboard().editor.active_id(), first);

        studio.dispatch(StudioEvent::SelectGroupDraft(second), now).unwrap();
        studio.dispatch(StudioEvent::CommitGroupSelection, now).unwrap();
        assert_eq!(studio.dashboard().editor.active_id(), second);
    }

    #[test]
    fn test_condition_presets_protected() {
        let mut studio = studio();
        let now = Instant::now();
        let original = studio.dashboard().editor.active_group().unwrap().presets.clone();

        for preset in &original {
            let err = studio
                .dispatch(StudioEvent::DeleteConditionPreset(preset.id), now)
                .unwrap_err();
            assert!(matches!(err, StudioError::ProtectedCondition(_)));
        }

        studio.dispatch(StudioEvent::AddConditionPreset, now).unwrap();
        let added = studio.dashboard().editor.active_group().unwrap().presets[2].id;
        studio
            .dispatch(
                StudioEvent::EditConditionPreset {
                    id: added,
                    text: "50,000원 이상".into(),
                },
                now,
            )
            .unwrap();
        studio.dispatch(StudioEvent::DeleteConditionPreset(added), now).unwrap();

        assert_eq!(studio.dashboard().editor.active_group().unwrap().presets, original);
    }

    #[test]
    fn test_layout_mode_replay_and_teardown() {
        let mut studio = studio();
        let now = Instant::now();

        studio.dispatch(StudioEvent::SetLayoutMode(LayoutMode::PreviewOnly), now).unwrap();
        assert_eq!(studio.next_deadline(), Some(now + Duration::from_millis(100)));
        studio.tick(now + Duration::from_millis(100));
        assert_eq!(studio.dashboard().preview.epoch(), 1);

        studio.dispatch(StudioEvent::ReplayPreview, now).unwrap();
        studio.teardown();
        assert_eq!(studio.next_deadline(), None);
    }

    #[test]
    fn test_every_catalog_kind_can_be_added() {
        let mut studio = studio();
        let now = Instant::now();
        let count = CATEGORIES.iter().map(|c| c.kinds().len()).sum::<usize>();

        for category in CATEGORIES {
            for &kind in category.kinds() {
                studio.dispatch(StudioEvent::AddWidget(kind), now).unwrap();
            }
        }
        assert_eq!(studio.canvas().len(), 1 + count);
    }
}
