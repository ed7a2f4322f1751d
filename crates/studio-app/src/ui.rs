//! Top-level UI: screen switching, preset bar, notices.

use std::time::Duration;

use egui::{Align2, Context, Vec2};
use studio_core::timer::Instant;
use studio_core::{Notice, NoticeLevel, PresetId, Studio, StudioEvent};
use studio_widgets::{ButtonVariant, TextButton, ToggleButton, card_frame, theme};

use crate::{canvas_view, dashboard_view, editor_panels};

/// How long a notice stays on screen.
const TOAST_LIFETIME: Duration = Duration::from_millis(2500);

/// Which screen is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Editor,
    Dashboard,
}

/// Tab in the editor's left panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeftTab {
    #[default]
    Widgets,
    Layers,
}

/// Actions returned by the UI for the app to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// Forward an event to the store.
    Studio(StudioEvent),
    SwitchScreen(Screen),
    SetLeftTab(LeftTab),
    /// Open the name editor for the active preset.
    BeginPresetRename,
    DismissNotices,
}

impl From<StudioEvent> for UiAction {
    fn from(event: StudioEvent) -> Self {
        UiAction::Studio(event)
    }
}

/// A notice with its expiry time.
#[derive(Debug, Clone)]
pub struct Toast {
    pub notice: Notice,
    pub expires_at: Instant,
}

/// View-only state that does not belong in the store.
pub struct UiState {
    pub screen: Screen,
    pub left_tab: LeftTab,
    /// Active preset name being edited.
    pub preset_rename: Option<(PresetId, String)>,
    pub toasts: Vec<Toast>,
    /// Sample donor shown in previews.
    pub preview_nickname: String,
    pub preview_amount: u64,
    /// Preview epoch last seen and when its animation started.
    pub preview_started: Option<(u64, Instant)>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            screen: Screen::default(),
            left_tab: LeftTab::default(),
            preset_rename: None,
            toasts: Vec::new(),
            preview_nickname: "후원자".to_string(),
            preview_amount: 10_000,
            preview_started: None,
        }
    }
}

impl UiState {
    pub fn push_toast(&mut self, notice: Notice, now: Instant) {
        self.toasts.push(Toast {
            notice,
            expires_at: now + TOAST_LIFETIME,
        });
    }

    pub fn expire_toasts(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    pub fn next_toast_expiry(&self) -> Option<Instant> {
        self.toasts.iter().map(|t| t.expires_at).min()
    }
}

/// Render all UI and return the triggered actions in order.
pub fn render_ui(ctx: &Context, studio: &Studio, ui_state: &mut UiState, now: Instant) -> Vec<UiAction> {
    let mut actions = Vec::new();

    actions.extend(render_top_bar(ctx, studio, ui_state));
    match ui_state.screen {
        Screen::Editor => {
            actions.extend(editor_panels::render_left_panel(ctx, studio, ui_state));
            actions.extend(editor_panels::render_properties_panel(ctx, studio));
            egui::CentralPanel::default()
                .frame(egui::Frame::new().fill(theme::BACKDROP))
                .show(ctx, |ui| {
                    actions.extend(canvas_view::render_canvas(ui, studio));
                });
        }
        Screen::Dashboard => {
            actions.extend(dashboard_view::render_dashboard(ctx, studio, ui_state, now));
        }
    }
    actions.extend(render_toasts(ctx, ui_state));

    actions
}

fn render_top_bar(ctx: &Context, studio: &Studio, ui_state: &mut UiState) -> Vec<UiAction> {
    let mut actions = Vec::new();

    egui::TopBottomPanel::top("top_bar")
        .frame(studio_widgets::panel_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing = Vec2::new(6.0, 0.0);
                ui.label(egui::RichText::new("Widget Studio").strong().color(theme::ACCENT));
                ui.add_space(12.0);

                for (screen, label) in [(Screen::Editor, "캔버스 편집"), (Screen::Dashboard, "알림 설정")] {
                    if ToggleButton::new(label, ui_state.screen == screen).min_width(80.0).show(ui) {
                        actions.push(UiAction::SwitchScreen(screen));
                    }
                }

                if ui_state.screen == Screen::Editor {
                    ui.add_space(16.0);
                    actions.extend(render_preset_bar(ui, studio, ui_state));
                }
            });
        });

    actions
}

fn render_preset_bar(ui: &mut egui::Ui, studio: &Studio, ui_state: &mut UiState) -> Vec<UiAction> {
    let mut actions = Vec::new();
    let presets = studio.presets();
    let active_id = presets.active_id();

    if let Some((id, draft)) = ui_state.preset_rename.as_mut() {
        let response = ui.add(egui::TextEdit::singleline(draft).desired_width(160.0));
        let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter || TextButton::primary("확인").show(ui) {
            actions.push(
                StudioEvent::RenamePreset {
                    id: *id,
                    name: draft.clone(),
                }
                .into(),
            );
            if !draft.trim().is_empty() {
                ui_state.preset_rename = None;
            }
        } else if TextButton::new("취소").show(ui) || ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            ui_state.preset_rename = None;
        }
        return actions;
    }

    let active_name = presets.active().map(|p| p.name.as_str()).unwrap_or_default();
    egui::ComboBox::from_id_salt("preset_select")
        .selected_text(active_name)
        .width(160.0)
        .show_ui(ui, |ui| {
            for preset in presets.presets() {
                if ui.selectable_label(preset.id == active_id, &preset.name).clicked() && preset.id != active_id {
                    actions.push(StudioEvent::LoadPreset(preset.id).into());
                }
            }
        });

    if TextButton::new("이름 변경").show(ui) {
        actions.push(UiAction::BeginPresetRename);
    }
    if TextButton::new("새 프리셋").show(ui) {
        actions.push(StudioEvent::CreatePreset.into());
    }
    if TextButton::primary("저장").shortcut("Ctrl+S").show(ui) {
        actions.push(StudioEvent::SavePreset.into());
    }
    let (label, variant) = if presets.is_delete_armed(active_id) {
        ("정말 삭제?", ButtonVariant::Danger)
    } else {
        ("삭제", ButtonVariant::Ghost)
    };
    if TextButton::new(label).variant(variant).show(ui) {
        actions.push(StudioEvent::DeletePreset(active_id).into());
    }

    if ui.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::S)) {
        actions.push(StudioEvent::SavePreset.into());
    }

    actions
}

fn render_toasts(ctx: &Context, ui_state: &UiState) -> Vec<UiAction> {
    let mut actions = Vec::new();
    if ui_state.toasts.is_empty() {
        return actions;
    }

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(Align2::CENTER_BOTTOM, Vec2::new(0.0, -24.0))
        .show(ctx, |ui| {
            card_frame().show(ui, |ui| {
                for toast in &ui_state.toasts {
                    let color = match toast.notice.level {
                        NoticeLevel::Info => theme::ACCENT,
                        NoticeLevel::Warning => theme::DANGER,
                    };
                    ui.label(egui::RichText::new(&toast.notice.message).color(color));
                }
                if ui.small_button("닫기").clicked() {
                    actions.push(UiAction::DismissNotices);
                }
            });
        });

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire() {
        let mut state = UiState::default();
        let now = Instant::now();
        state.push_toast(Notice::info("저장"), now);
        state.push_toast(Notice::warning("경고"), now + Duration::from_secs(1));

        assert_eq!(state.next_toast_expiry(), Some(now + TOAST_LIFETIME));
        state.expire_toasts(now + TOAST_LIFETIME);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].notice.level, NoticeLevel::Warning);
    }
}
