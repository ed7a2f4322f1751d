//! List rows and frames.

use egui::{Color32, CornerRadius, CursorIcon, Frame, Margin, Pos2, Response, Sense, Stroke, Ui, vec2};

use crate::{sizing, theme};

/// A full-width selectable row with a label and optional trailing hint.
///
/// Returns the row's response so callers can attach context menus or
/// drag-and-drop.
pub fn list_row(ui: &mut Ui, label: &str, hint: &str, selected: bool) -> Response {
    let size = vec2(ui.available_width(), sizing::ROW_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());

    if ui.is_rect_visible(rect) {
        let bg_color = if selected {
            theme::SELECTED_BG
        } else if response.hovered() {
            theme::HOVER_BG
        } else {
            Color32::TRANSPARENT
        };
        ui.painter()
            .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);

        if selected {
            let bar = egui::Rect::from_min_size(rect.left_top(), vec2(3.0, rect.height()));
            ui.painter().rect_filled(bar, CornerRadius::same(2), theme::ACCENT);
        }

        ui.painter().text(
            Pos2::new(rect.left() + 12.0, rect.center().y),
            egui::Align2::LEFT_CENTER,
            label,
            egui::FontId::proportional(13.0),
            if selected { theme::ACCENT } else { theme::TEXT },
        );

        if !hint.is_empty() {
            ui.painter().text(
                Pos2::new(rect.right() - 12.0, rect.center().y),
                egui::Align2::RIGHT_CENTER,
                hint,
                egui::FontId::proportional(11.0),
                theme::TEXT_MUTED,
            );
        }
    }

    response.on_hover_cursor(CursorIcon::PointingHand)
}

/// Frame for side panels.
pub fn panel_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .stroke(Stroke::new(1.0, theme::BORDER))
        .inner_margin(Margin::same(12))
}

/// Frame for cards inside a panel, with a soft shadow.
pub fn card_frame() -> Frame {
    Frame::new()
        .fill(theme::CARD_BG)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 8,
            offset: [0, 2],
            color: Color32::from_black_alpha(60),
        })
        .inner_margin(Margin::same(10))
}
