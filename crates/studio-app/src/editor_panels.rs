//! Editor side panels: widget palette, layers list, and the properties form.

use egui::{Context, DragValue, Ui, Vec2};
use studio_core::widget::{
    AlertLayout, AlertSettings, AnimationIn, AnimationOut, CATEGORIES, FontFamily, TextAlign,
    TextAnimation, TtsVoice, WidgetSettings,
};
use studio_core::{RectField, SettingsPatch, Studio, StudioEvent, Widget, WidgetId};
use studio_widgets::{
    ButtonVariant, ColorSwatch, Switch, TextButton, ToggleButton, colors_match, form_row, list_row,
    panel_frame, parse_css_color, section_label, separator, theme, to_css_hex,
};

use crate::ui::{LeftTab, UiAction, UiState};

/// Quick picks offered next to color fields.
const QUICK_COLORS: &[(&str, &str)] = &[
    ("#ffffff", "흰색"),
    ("#18C9FF", "하늘"),
    ("#FACC15", "노랑"),
    ("#F472B6", "분홍"),
    ("#000000", "검정"),
];

pub fn render_left_panel(ctx: &Context, studio: &Studio, ui_state: &UiState) -> Vec<UiAction> {
    let mut actions = Vec::new();

    egui::SidePanel::left("left_panel")
        .frame(panel_frame())
        .resizable(false)
        .exact_width(220.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (tab, label) in [(LeftTab::Widgets, "위젯"), (LeftTab::Layers, "레이어")] {
                    if ToggleButton::new(label, ui_state.left_tab == tab).min_width(96.0).show(ui) {
                        actions.push(UiAction::SetLeftTab(tab));
                    }
                }
            });
            separator(ui);

            egui::ScrollArea::vertical().show(ui, |ui| match ui_state.left_tab {
                LeftTab::Widgets => render_palette(ui, &mut actions),
                LeftTab::Layers => render_layers(ui, studio, &mut actions),
            });
        });

    actions
}

fn render_palette(ui: &mut Ui, actions: &mut Vec<UiAction>) {
    for category in CATEGORIES {
        section_label(ui, category.title());
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = Vec2::new(4.0, 4.0);
            for &kind in category.kinds() {
                if TextButton::new(kind.display_name()).show(ui) {
                    actions.push(StudioEvent::AddWidget(kind).into());
                }
            }
        });
        ui.add_space(12.0);
    }
}

fn render_layers(ui: &mut Ui, studio: &Studio, actions: &mut Vec<UiAction>) {
    let canvas = studio.canvas();
    if canvas.is_empty() {
        ui.label(egui::RichText::new("위젯이 없습니다.").color(theme::TEXT_MUTED));
        return;
    }

    for widget in canvas.widgets() {
        let selected = canvas.selected_id() == Some(widget.id);
        let hint = if widget.visible { "" } else { "숨김" };
        if list_row(ui, &widget.name, hint, selected).clicked() {
            actions.push(StudioEvent::Select(widget.id).into());
        }
        ui.horizontal(|ui| {
            ui.add_space(12.0);
            let label = if widget.visible { "숨기기" } else { "보이기" };
            if ui.small_button(label).clicked() {
                actions.push(StudioEvent::ToggleVisible(widget.id).into());
            }
            if ui.small_button("삭제").clicked() {
                actions.push(StudioEvent::DeleteWidget(widget.id).into());
            }
        });
    }
}

pub fn render_properties_panel(ctx: &Context, studio: &Studio) -> Vec<UiAction> {
    let mut actions = Vec::new();

    egui::SidePanel::right("properties_panel")
        .frame(panel_frame())
        .resizable(false)
        .exact_width(300.0)
        .show(ctx, |ui| {
            let Some(widget) = studio.canvas().selected_widget() else {
                ui.label(egui::RichText::new("위젯을 선택하세요.").color(theme::TEXT_MUTED));
                return;
            };

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.label(egui::RichText::new(&widget.name).strong().size(15.0));
                ui.label(egui::RichText::new(widget.id.to_string()).small().color(theme::TEXT_MUTED));
                separator(ui);

                render_geometry(ui, widget, &mut actions);
                separator(ui);

                let mut patches = Vec::new();
                render_settings(ui, &widget.settings, &mut patches);
                actions.extend(patches.into_iter().map(|patch| {
                    UiAction::Studio(StudioEvent::UpdateSettings { id: widget.id, patch })
                }));

                separator(ui);
                if TextButton::new("위젯 삭제").variant(ButtonVariant::Danger).show(ui) {
                    actions.push(StudioEvent::DeleteWidget(widget.id).into());
                }
            });
        });

    actions
}

fn render_geometry(ui: &mut Ui, widget: &Widget, actions: &mut Vec<UiAction>) {
    section_label(ui, "위치 / 크기");
    for field in RectField::ALL {
        let mut value = widget.rect.get(field);
        form_row(ui, field.label(), |ui| {
            if ui.add(DragValue::new(&mut value).speed(1.0)).changed() {
                actions.push(set_field(widget.id, field, value));
            }
        });
    }

    let mut visible = widget.visible;
    form_row(ui, "표시", |ui| {
        if Switch::new(&mut visible).show(ui) {
            actions.push(StudioEvent::ToggleVisible(widget.id).into());
        }
    });
}

fn set_field(id: WidgetId, field: RectField, value: i32) -> UiAction {
    StudioEvent::SetRectField { id, field, value }.into()
}

fn render_settings(ui: &mut Ui, settings: &WidgetSettings, patches: &mut Vec<SettingsPatch>) {
    match settings {
        WidgetSettings::TextAlert(alert) => render_alert(ui, alert, patches),
        WidgetSettings::VoiceAlert(s) => {
            render_alert(ui, &s.alert, patches);
            section_label(ui, "음성");
            combo(ui, "voice", "목소리", s.voice, &TtsVoice::ALL, TtsVoice::label, SettingsPatch::Voice, patches);
            let mut read = s.read_message;
            form_row(ui, "메시지 읽기", |ui| {
                if Switch::new(&mut read).show(ui) {
                    patches.push(SettingsPatch::ReadMessage(read));
                }
            });
        }
        WidgetSettings::VideoAlert(s) => {
            render_alert(ui, &s.alert, patches);
            number(ui, "최대 영상 길이(초)", s.max_clip_secs, 1..=600, SettingsPatch::MaxClipSecs, patches);
        }
        WidgetSettings::MiniAlert(s) => {
            render_alert(ui, &s.alert, patches);
            let mut compact = s.compact;
            form_row(ui, "한 줄 표시", |ui| {
                if Switch::new(&mut compact).show(ui) {
                    patches.push(SettingsPatch::Compact(compact));
                }
            });
        }
        WidgetSettings::Roulette(s) => {
            section_label(ui, "룰렛");
            number(ui, "최소 금액", s.min_amount, 0..=10_000_000, SettingsPatch::MinAmount, patches);
            number(ui, "회전 시간(초)", s.spin_secs, 1..=60, SettingsPatch::SpinSecs, patches);
            lines(ui, "항목", &s.items, patches);
        }
        WidgetSettings::Poll(s) => {
            section_label(ui, "투표");
            text(ui, "제목", &s.title, SettingsPatch::Title, patches);
            lines(ui, "선택지", &s.options, patches);
            number(ui, "진행 시간(초)", s.duration_secs, 10..=3600, SettingsPatch::DurationSecs, patches);
        }
        WidgetSettings::Quest(s) => {
            section_label(ui, "퀘스트");
            text(ui, "제목", &s.title, SettingsPatch::Title, patches);
            number(ui, "목표 금액", s.goal_amount, 0..=100_000_000, SettingsPatch::GoalAmount, patches);
            number(ui, "진행 시간(초)", s.duration_secs, 10..=86_400, SettingsPatch::DurationSecs, patches);
        }
        WidgetSettings::LuckyBox(s) => {
            section_label(ui, "럭키박스");
            number(ui, "최소 금액", s.min_amount, 0..=10_000_000, SettingsPatch::MinAmount, patches);
            lines(ui, "상품", &s.prizes, patches);
        }
        WidgetSettings::Wishlist(s) => {
            render_alert(ui, &s.alert, patches);
            lines(ui, "위시리스트", &s.items, patches);
        }
        WidgetSettings::PictureAlert(s) => {
            render_alert(ui, &s.alert, patches);
            number(ui, "그림 표시(초)", s.canvas_secs, 1..=120, SettingsPatch::CanvasSecs, patches);
        }
        WidgetSettings::PlayAlert(s) => {
            render_alert(ui, &s.alert, patches);
            number(ui, "재생 시간(초)", s.play_secs, 1..=300, SettingsPatch::PlaySecs, patches);
        }
        WidgetSettings::Karaoke(s) => {
            render_alert(ui, &s.alert, patches);
            number(ui, "신청곡 제한", s.song_limit, 1..=50, SettingsPatch::SongLimit, patches);
        }
    }
}

fn render_alert(ui: &mut Ui, alert: &AlertSettings, patches: &mut Vec<SettingsPatch>) {
    section_label(ui, "알림");
    number(ui, "최소 금액", alert.min_amount, 0..=10_000_000, SettingsPatch::MinAmount, patches);

    form_row(ui, "레이아웃", |ui| {
        for layout in AlertLayout::ALL {
            if ToggleButton::new(layout.label(), alert.layout == layout).show(ui) {
                patches.push(SettingsPatch::Layout(layout));
            }
        }
    });
    combo(ui, "anim_in", "등장 효과", alert.animation_in, &AnimationIn::ALL, AnimationIn::label, SettingsPatch::AnimationIn, patches);
    combo(ui, "anim_out", "퇴장 효과", alert.animation_out, &AnimationOut::ALL, AnimationOut::label, SettingsPatch::AnimationOut, patches);
    combo(ui, "text_anim", "글자 효과", alert.text_animation, &TextAnimation::ALL, TextAnimation::label, SettingsPatch::TextAnimation, patches);

    section_label(ui, "메시지");
    let mut template = alert.template.clone();
    if ui
        .add(egui::TextEdit::multiline(&mut template).desired_rows(2).desired_width(f32::INFINITY))
        .changed()
    {
        patches.push(SettingsPatch::Template(template));
    }
    ui.label(
        egui::RichText::new(format!("미리보기: {}", alert.render_message("후원자", 10_000)))
            .small()
            .color(theme::TEXT_MUTED),
    );
    number(ui, "표시 시간(초)", alert.duration_secs, 1..=60, SettingsPatch::DurationSecs, patches);

    section_label(ui, "글꼴");
    combo(ui, "font", "글꼴", alert.font_family, &FontFamily::ALL, FontFamily::label, SettingsPatch::FontFamily, patches);
    number(ui, "글자 크기", alert.font_size, 8..=200, SettingsPatch::FontSize, patches);
    form_row(ui, "정렬", |ui| {
        for align in TextAlign::ALL {
            if ToggleButton::new(align.label(), alert.text_align == align).show(ui) {
                patches.push(SettingsPatch::TextAlign(align));
            }
        }
    });
    color(ui, "글자 색", &alert.font_color, SettingsPatch::FontColor, patches);
    color(ui, "강조 색", &alert.highlight_color, SettingsPatch::HighlightColor, patches);

    section_label(ui, "소리");
    let mut volume = alert.sound_volume;
    form_row(ui, "볼륨", |ui| {
        if ui.add(egui::Slider::new(&mut volume, 0..=100)).changed() {
            patches.push(SettingsPatch::SoundVolume(volume));
        }
    });
}

#[allow(clippy::too_many_arguments)]
fn combo<T: Copy + PartialEq>(
    ui: &mut Ui,
    id: &str,
    label: &str,
    current: T,
    options: &[T],
    name: fn(T) -> &'static str,
    patch: fn(T) -> SettingsPatch,
    patches: &mut Vec<SettingsPatch>,
) {
    form_row(ui, label, |ui| {
        egui::ComboBox::from_id_salt(id)
            .selected_text(name(current))
            .show_ui(ui, |ui| {
                for &option in options {
                    if ui.selectable_label(option == current, name(option)).clicked() && option != current {
                        patches.push(patch(option));
                    }
                }
            });
    });
}

fn number<T: egui::emath::Numeric>(
    ui: &mut Ui,
    label: &str,
    current: T,
    range: std::ops::RangeInclusive<T>,
    patch: fn(T) -> SettingsPatch,
    patches: &mut Vec<SettingsPatch>,
) {
    let mut value = current;
    form_row(ui, label, |ui| {
        if ui.add(DragValue::new(&mut value).range(range)).changed() {
            patches.push(patch(value));
        }
    });
}

fn text(ui: &mut Ui, label: &str, current: &str, patch: fn(String) -> SettingsPatch, patches: &mut Vec<SettingsPatch>) {
    let mut value = current.to_string();
    form_row(ui, label, |ui| {
        if ui.text_edit_singleline(&mut value).changed() {
            patches.push(patch(value));
        }
    });
}

/// One entry per line.
fn lines(ui: &mut Ui, label: &str, items: &[String], patches: &mut Vec<SettingsPatch>) {
    section_label(ui, label);
    let mut value = items.join("\n");
    if ui
        .add(egui::TextEdit::multiline(&mut value).desired_rows(3).desired_width(f32::INFINITY))
        .changed()
    {
        patches.push(SettingsPatch::Items(split_lines(&value)));
    }
}

fn split_lines(value: &str) -> Vec<String> {
    value.lines().map(str::to_string).collect()
}

fn color(ui: &mut Ui, label: &str, current: &str, patch: fn(String) -> SettingsPatch, patches: &mut Vec<SettingsPatch>) {
    let parsed = parse_css_color(current);
    form_row(ui, label, |ui| {
        match parsed {
            Some(mut picked) => {
                let alpha = egui::color_picker::Alpha::Opaque;
                if egui::color_picker::color_edit_button_srgba(ui, &mut picked, alpha).changed() {
                    patches.push(patch(to_css_hex(picked)));
                }
            }
            None => {
                ColorSwatch::new(None, current).show(ui);
            }
        }
        let mut value = current.to_string();
        if ui.add(egui::TextEdit::singleline(&mut value).desired_width(72.0)).changed() {
            patches.push(patch(value));
        }
    });
    ui.horizontal(|ui| {
        ui.add_space(studio_widgets::sizing::LABEL_WIDTH);
        for &(css, name) in QUICK_COLORS {
            let swatch = parse_css_color(css);
            let selected = matches!((swatch, parsed), (Some(a), Some(b)) if colors_match(a, b));
            if ColorSwatch::new(swatch, name).selected(selected).show(ui).0 {
                patches.push(patch(css.to_string()));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_colors_survive_the_picker() {
        for &(css, _) in QUICK_COLORS {
            let color = parse_css_color(css).unwrap();
            assert!(css.eq_ignore_ascii_case(&to_css_hex(color)));
        }
    }

    #[test]
    fn test_split_lines_keeps_blank_entries() {
        assert_eq!(split_lines("꽝\n\n당첨"), vec!["꽝", "", "당첨"]);
        assert!(split_lines("").is_empty());
    }
}
