//! Button components: text buttons, segmented toggles, on/off switches.

use egui::{Align2, Color32, CornerRadius, CursorIcon, Sense, Stroke, StrokeKind, Ui, vec2};

use crate::{sizing, theme};

/// Visual weight of a [`TextButton`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled with the accent color
    Primary,
    /// Outlined, transparent until hovered
    #[default]
    Ghost,
    /// Filled red, for confirming destructive actions
    Danger,
}

/// A text button with optional shortcut hint.
pub struct TextButton<'a> {
    label: &'a str,
    shortcut: Option<&'a str>,
    variant: ButtonVariant,
    enabled: bool,
}

impl<'a> TextButton<'a> {
    /// Create a new ghost button.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            shortcut: None,
            variant: ButtonVariant::Ghost,
            enabled: true,
        }
    }

    /// Create a filled accent button.
    pub fn primary(label: &'a str) -> Self {
        Self::new(label).variant(ButtonVariant::Primary)
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Add a shortcut hint.
    pub fn shortcut(mut self, shortcut: &'a str) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font_id = egui::FontId::proportional(12.0);
        let galley = ui
            .painter()
            .layout_no_wrap(self.label.to_string(), font_id.clone(), Color32::PLACEHOLDER);
        let shortcut_width = if self.shortcut.is_some() { 40.0 } else { 0.0 };
        let size = vec2(galley.size().x + 20.0 + shortcut_width, sizing::CONTROL_HEIGHT);
        let sense = if self.enabled { Sense::click() } else { Sense::hover() };
        let (rect, response) = ui.allocate_exact_size(size, sense);

        if ui.is_rect_visible(rect) {
            let hovered = self.enabled && response.hovered();
            let (bg_color, text_color) = match self.variant {
                ButtonVariant::Primary if hovered => (theme::ACCENT.gamma_multiply(0.85), theme::PANEL_BG),
                ButtonVariant::Primary => (theme::ACCENT, theme::PANEL_BG),
                ButtonVariant::Danger if hovered => (theme::DANGER.gamma_multiply(0.85), Color32::WHITE),
                ButtonVariant::Danger => (theme::DANGER, Color32::WHITE),
                ButtonVariant::Ghost if hovered => (theme::HOVER_BG, theme::TEXT),
                ButtonVariant::Ghost => (Color32::TRANSPARENT, theme::TEXT),
            };
            let text_color = if self.enabled { text_color } else { theme::TEXT_MUTED.gamma_multiply(0.6) };

            let radius = CornerRadius::same(sizing::CORNER_RADIUS);
            ui.painter().rect_filled(rect, radius, bg_color);
            if self.variant == ButtonVariant::Ghost {
                ui.painter()
                    .rect_stroke(rect, radius, Stroke::new(1.0, theme::BORDER), StrokeKind::Inside);
            }

            ui.painter().text(
                egui::Pos2::new(rect.left() + 10.0, rect.center().y),
                Align2::LEFT_CENTER,
                self.label,
                font_id,
                text_color,
            );

            if let Some(shortcut) = self.shortcut {
                ui.painter().text(
                    egui::Pos2::new(rect.right() - 8.0, rect.center().y),
                    Align2::RIGHT_CENTER,
                    shortcut,
                    egui::FontId::proportional(11.0),
                    theme::TEXT_MUTED,
                );
            }
        }

        let clicked = self.enabled && response.clicked();
        if self.enabled {
            response.on_hover_cursor(CursorIcon::PointingHand);
        }
        clicked
    }
}

/// One segment of a mutually exclusive button group.
/// Filled with the accent color when selected.
pub struct ToggleButton<'a> {
    label: &'a str,
    selected: bool,
    min_width: Option<f32>,
}

impl<'a> ToggleButton<'a> {
    pub fn new(label: &'a str, selected: bool) -> Self {
        Self {
            label,
            selected,
            min_width: None,
        }
    }

    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font_id = egui::FontId::proportional(11.0);
        let galley = ui
            .painter()
            .layout_no_wrap(self.label.to_string(), font_id.clone(), Color32::PLACEHOLDER);
        let text_width = galley.size().x + 16.0;
        let width = self.min_width.map_or(text_width, |w| w.max(text_width));
        let (rect, response) = ui.allocate_exact_size(vec2(width, 24.0), Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                theme::ACCENT
            } else if response.hovered() {
                theme::HOVER_BG
            } else {
                theme::CARD_BG
            };
            let text_color = if self.selected { theme::PANEL_BG } else { theme::TEXT_MUTED };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            ui.painter()
                .text(rect.center(), Align2::CENTER_CENTER, self.label, font_id, text_color);
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// A pill-shaped on/off switch.
pub struct Switch<'a> {
    on: &'a mut bool,
}

impl<'a> Switch<'a> {
    pub fn new(on: &'a mut bool) -> Self {
        Self { on }
    }

    /// Show the switch. Returns true if it was flipped this frame.
    pub fn show(self, ui: &mut Ui) -> bool {
        let size = vec2(34.0, 18.0);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        if response.clicked() {
            *self.on = !*self.on;
        }

        if ui.is_rect_visible(rect) {
            let t = ui.ctx().animate_bool(response.id, *self.on);
            let track = if *self.on { theme::ACCENT } else { theme::BORDER };
            let radius = rect.height() / 2.0;
            ui.painter()
                .rect_filled(rect, CornerRadius::same(radius as u8), track);

            let x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), t);
            ui.painter()
                .circle_filled(egui::pos2(x, rect.center().y), radius - 3.0, Color32::WHITE);
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}
