//! Alert settings dashboard: preset groups, condition presets, and preview.

use std::time::Duration;

use egui::{Align2, Context, CornerRadius, FontId, Key, Sense, Ui, Vec2};
use studio_core::dashboard::{GroupId, PresetGroup};
use studio_core::timer::Instant;
use studio_core::widget::AlertSettings;
use studio_core::{Dashboard, LayoutMode, Studio, StudioEvent};
use studio_widgets::{
    ButtonVariant, Switch, TextButton, ToggleButton, card_frame, list_row, panel_frame,
    parse_css_color, section_label, separator, theme,
};

use crate::ui::{UiAction, UiState};

/// Length of the preview entrance animation.
const PREVIEW_FADE: Duration = Duration::from_millis(600);

pub fn render_dashboard(ctx: &Context, studio: &Studio, ui_state: &mut UiState, now: Instant) -> Vec<UiAction> {
    let mut actions = Vec::new();
    let dashboard = studio.dashboard();

    egui::SidePanel::left("group_panel")
        .frame(panel_frame())
        .resizable(false)
        .exact_width(260.0)
        .show(ctx, |ui| {
            render_group_dropdown(ui, dashboard, &mut actions);
            separator(ui);
            render_group_list(ui, dashboard, &mut actions);
        });

    egui::CentralPanel::default()
        .frame(panel_frame().fill(theme::BACKDROP))
        .show(ctx, |ui| {
            render_layout_bar(ui, dashboard, &mut actions);
            ui.add_space(8.0);

            let mode = dashboard.preview.mode();
            match (mode.shows_settings(), mode.shows_preview()) {
                (true, true) => {
                    ui.columns(2, |columns| {
                        render_conditions(&mut columns[0], dashboard, &mut actions);
                        render_preview(&mut columns[1], studio, ui_state, now);
                    });
                }
                (true, false) => render_conditions(ui, dashboard, &mut actions),
                _ => render_preview(ui, studio, ui_state, now),
            }
        });

    actions
}

fn render_group_dropdown(ui: &mut Ui, dashboard: &Dashboard, actions: &mut Vec<UiAction>) {
    let editor = &dashboard.editor;
    let dropdown = &dashboard.dropdown;

    section_label(ui, "사용 중인 그룹");
    let active_name = editor.active_group().map(|g| g.name.as_str()).unwrap_or_default();
    let arrow = if dropdown.is_open() { "▲" } else { "▼" };
    let toggle = list_row(ui, active_name, arrow, false);
    if toggle.clicked() {
        actions.push(StudioEvent::ToggleGroupDropdown.into());
    }

    if !dropdown.is_open() {
        return;
    }

    let card = card_frame().show(ui, |ui| {
        for group in editor.groups() {
            let highlighted = dropdown.draft() == Some(group.id);
            if list_row(ui, &group.name, "", highlighted).clicked() {
                actions.push(StudioEvent::SelectGroupDraft(group.id).into());
            }
        }
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if TextButton::primary("선택").show(ui) {
                actions.push(StudioEvent::CommitGroupSelection.into());
            }
            if TextButton::new("닫기").show(ui) {
                actions.push(StudioEvent::DismissGroupDropdown.into());
            }
        });
    });

    // A click outside the open dropdown discards the draft.
    let clicked_outside = ui.input(|i| {
        i.pointer.primary_clicked()
            && i.pointer
                .interact_pos()
                .is_some_and(|p| !card.response.rect.contains(p) && !toggle.rect.contains(p))
    });
    if clicked_outside {
        actions.push(StudioEvent::DismissGroupDropdown.into());
    }
}

fn render_group_list(ui: &mut Ui, dashboard: &Dashboard, actions: &mut Vec<UiAction>) {
    let editor = &dashboard.editor;

    section_label(ui, "프리셋 그룹");
    if editor.delete_error_visible() {
        ui.label(egui::RichText::new("최소 1개의 그룹이 필요합니다.").color(theme::DANGER));
    }

    egui::ScrollArea::vertical().max_height(ui.available_height() - 80.0).show(ui, |ui| {
        for group in editor.groups() {
            render_group_row(ui, dashboard, group, actions);
        }
    });

    ui.add_space(8.0);
    match editor.inline_add_draft() {
        Some(draft) => {
            let mut value = draft.to_string();
            let response = ui.add(egui::TextEdit::singleline(&mut value).hint_text("그룹 이름"));
            if response.changed() {
                actions.push(StudioEvent::EditInlineAdd(value).into());
            }
            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            ui.horizontal(|ui| {
                if enter || TextButton::primary("추가").show(ui) {
                    actions.push(StudioEvent::CommitInlineAdd.into());
                }
                if TextButton::new("취소").show(ui) {
                    actions.push(StudioEvent::CancelInlineAdd.into());
                }
            });
        }
        None => {
            ui.horizontal(|ui| {
                if TextButton::new("+ 그룹 추가").show(ui) {
                    actions.push(StudioEvent::BeginInlineAdd.into());
                }
                if TextButton::new("새 그룹").shortcut("기본 이름").show(ui) {
                    actions.push(StudioEvent::AddGroup(None).into());
                }
            });
        }
    }
}

fn render_group_row(ui: &mut Ui, dashboard: &Dashboard, group: &PresetGroup, actions: &mut Vec<UiAction>) {
    let editor = &dashboard.editor;

    if let Some(rename) = editor.rename_draft().filter(|r| r.group == group.id) {
        let mut value = rename.draft.clone();
        let response = ui.add(egui::TextEdit::singleline(&mut value));
        if response.changed() {
            actions.push(StudioEvent::EditRenameDraft(value).into());
        }
        if !response.has_focus() && !response.lost_focus() {
            response.request_focus();
        }
        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            actions.push(StudioEvent::CommitRename.into());
        }
        if ui.input(|i| i.key_pressed(Key::Escape)) {
            actions.push(StudioEvent::CancelRename.into());
        }
        return;
    }

    let active = editor.active_id() == group.id;
    let hint = format!("조건 {}개", group.presets.len());
    let row = list_row(ui, &group.name, &hint, active);

    // Drag a row onto another to reorder.
    if row.drag_started() {
        egui::DragAndDrop::set_payload(ui.ctx(), group.id);
    }
    if let Some(from) = row.dnd_release_payload::<GroupId>() {
        actions.push(StudioEvent::ReorderGroup { from: *from, to: group.id }.into());
    }
    if row.dnd_hover_payload::<GroupId>().is_some_and(|from| *from != group.id) {
        ui.painter().hline(row.rect.x_range(), row.rect.top(), egui::Stroke::new(2.0, theme::ACCENT));
    }
    if row.double_clicked() {
        actions.push(StudioEvent::BeginRename(group.id).into());
    }

    ui.horizontal(|ui| {
        ui.add_space(12.0);
        if ui.small_button("이름 변경").clicked() {
            actions.push(StudioEvent::BeginRename(group.id).into());
        }
        let armed = editor.is_delete_armed(group.id);
        let (label, variant) = if armed {
            ("정말 삭제?", ButtonVariant::Danger)
        } else {
            ("삭제", ButtonVariant::Ghost)
        };
        if TextButton::new(label).variant(variant).show(ui) {
            actions.push(StudioEvent::DeleteGroup(group.id).into());
        }
    });
}

fn render_layout_bar(ui: &mut Ui, dashboard: &Dashboard, actions: &mut Vec<UiAction>) {
    ui.horizontal(|ui| {
        for mode in LayoutMode::ALL {
            if ToggleButton::new(mode.label(), dashboard.preview.mode() == mode)
                .min_width(96.0)
                .show(ui)
            {
                actions.push(StudioEvent::SetLayoutMode(mode).into());
            }
        }
        ui.add_space(12.0);
        if TextButton::new("다시 재생").show(ui) {
            actions.push(StudioEvent::ReplayPreview.into());
        }
    });
}

fn render_conditions(ui: &mut Ui, dashboard: &Dashboard, actions: &mut Vec<UiAction>) {
    let Some(group) = dashboard.editor.active_group() else {
        return;
    };

    card_frame().show(ui, |ui| {
        section_label(ui, &format!("{} · 조건 프리셋", group.name));
        ui.add_space(4.0);

        for (index, preset) in group.presets.iter().enumerate() {
            ui.horizontal(|ui| {
                let mut active = preset.active;
                if Switch::new(&mut active).show(ui) {
                    actions.push(StudioEvent::ToggleConditionPreset(preset.id).into());
                }

                let mut text = preset.condition.clone();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut text)
                        .hint_text("조건을 입력하세요")
                        .desired_width(ui.available_width() - 48.0),
                );
                if response.changed() {
                    actions.push(
                        StudioEvent::EditConditionPreset {
                            id: preset.id,
                            text,
                        }
                        .into(),
                    );
                }

                // The leading presets have no delete control.
                if PresetGroup::can_delete(index) && ui.small_button("삭제").clicked() {
                    actions.push(StudioEvent::DeleteConditionPreset(preset.id).into());
                }
            });
        }

        ui.add_space(4.0);
        if TextButton::new("+ 조건 추가").show(ui) {
            actions.push(StudioEvent::AddConditionPreset.into());
        }
    });
}

/// Opacity of the preview for the current epoch, restarting on each new epoch.
fn preview_opacity(ui_state: &mut UiState, epoch: u64, now: Instant) -> f32 {
    let started = match ui_state.preview_started {
        Some((seen, started)) if seen == epoch => started,
        _ => {
            ui_state.preview_started = Some((epoch, now));
            now
        }
    };
    let elapsed = now.saturating_duration_since(started);
    (elapsed.as_secs_f32() / PREVIEW_FADE.as_secs_f32()).clamp(0.0, 1.0)
}

fn render_preview(ui: &mut Ui, studio: &Studio, ui_state: &mut UiState, now: Instant) {
    let preview = &studio.dashboard().preview;

    card_frame().show(ui, |ui| {
        section_label(ui, "미리보기");
        ui.horizontal(|ui| {
            ui.add(egui::TextEdit::singleline(&mut ui_state.preview_nickname).desired_width(100.0));
            ui.add(egui::DragValue::new(&mut ui_state.preview_amount).speed(100.0).suffix("원"));
        });

        let (rect, _) = ui.allocate_exact_size(Vec2::new(ui.available_width(), 220.0), Sense::hover());
        ui.painter().rect_filled(rect, CornerRadius::same(6), theme::BACKDROP);
        if !preview.is_playing() {
            return;
        }

        let opacity = preview_opacity(ui_state, preview.epoch(), now);
        if opacity < 1.0 {
            ui.ctx().request_repaint();
        }

        let fallback = AlertSettings {
            template: "{닉네임}님이 {금액}원을 후원해 주셨어요!".to_string(),
            ..AlertSettings::default()
        };
        let alert = studio
            .canvas()
            .selected_widget()
            .and_then(|w| w.settings.alert())
            .unwrap_or(&fallback);

        let color = parse_css_color(&alert.font_color).unwrap_or(theme::TEXT);
        let message = alert.render_message(&ui_state.preview_nickname, ui_state.preview_amount);
        let rise = (1.0 - opacity) * 12.0;
        ui.painter().text(
            rect.center() + Vec2::new(0.0, rise),
            Align2::CENTER_CENTER,
            message,
            FontId::proportional((alert.font_size as f32 * 0.6).clamp(10.0, 40.0)),
            color.gamma_multiply(opacity),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_opacity_restarts_on_new_epoch() {
        let mut state = UiState::default();
        let now = Instant::now();

        assert_eq!(preview_opacity(&mut state, 0, now), 0.0);
        assert_eq!(preview_opacity(&mut state, 0, now + PREVIEW_FADE), 1.0);

        let later = now + Duration::from_secs(5);
        assert_eq!(preview_opacity(&mut state, 1, later), 0.0);
        assert!(preview_opacity(&mut state, 1, later + PREVIEW_FADE / 2) < 1.0);
    }
}
