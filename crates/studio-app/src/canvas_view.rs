//! The broadcast-frame canvas: paints widgets and turns pointer input into
//! drag events.

use egui::{Align2, Color32, CornerRadius, CursorIcon, FontId, Pos2, Sense, Stroke, StrokeKind, Ui};
use studio_core::widget::{WidgetCategory, corner_handles};
use studio_core::{CanvasViewport, Corner, Studio, StudioEvent, Widget};
use studio_widgets::theme;

use crate::ui::UiAction;

/// Gap between the broadcast frame and the panel edge, in pixels.
const FRAME_MARGIN: f32 = 16.0;
/// Side length of a painted resize handle, in pixels.
const HANDLE_SIZE: f32 = 8.0;

pub(crate) fn to_kurbo_rect(rect: egui::Rect) -> kurbo::Rect {
    kurbo::Rect::new(
        rect.min.x as f64,
        rect.min.y as f64,
        rect.max.x as f64,
        rect.max.y as f64,
    )
}

pub(crate) fn to_egui_rect(rect: kurbo::Rect) -> egui::Rect {
    egui::Rect::from_min_max(
        Pos2::new(rect.x0 as f32, rect.y0 as f32),
        Pos2::new(rect.x1 as f32, rect.y1 as f32),
    )
}

fn to_point(pos: Pos2) -> kurbo::Point {
    kurbo::Point::new(pos.x as f64, pos.y as f64)
}

fn to_pos(point: kurbo::Point) -> Pos2 {
    Pos2::new(point.x as f32, point.y as f32)
}

fn category_color(category: WidgetCategory) -> Color32 {
    match category {
        WidgetCategory::Alerts => theme::ACCENT,
        WidgetCategory::Engagement => Color32::from_rgb(167, 139, 250),
        WidgetCategory::Others => Color32::from_rgb(251, 191, 36),
    }
}

fn resize_cursor(corner: Corner) -> CursorIcon {
    match corner {
        Corner::TopLeft | Corner::BottomRight => CursorIcon::ResizeNwSe,
        Corner::TopRight | Corner::BottomLeft => CursorIcon::ResizeNeSw,
    }
}

/// Render the canvas into the remaining space and return pointer actions.
pub fn render_canvas(ui: &mut Ui, studio: &Studio) -> Vec<UiAction> {
    let mut actions = Vec::new();
    let canvas = studio.canvas();

    let available = ui.available_rect_before_wrap();
    let viewport = CanvasViewport::fit(to_kurbo_rect(available.shrink(FRAME_MARGIN)));
    let frame = to_egui_rect(viewport.screen);
    let response = ui.allocate_rect(available, Sense::click_and_drag());
    let painter = ui.painter_at(available);

    // Broadcast frame with a 10% grid
    painter.rect_filled(frame, CornerRadius::ZERO, Color32::from_rgb(17, 24, 39));
    let grid = Stroke::new(1.0, Color32::from_rgb(31, 41, 55));
    for i in 1..10 {
        let t = i as f32 / 10.0;
        let x = egui::lerp(frame.left()..=frame.right(), t);
        let y = egui::lerp(frame.top()..=frame.bottom(), t);
        painter.line_segment([Pos2::new(x, frame.top()), Pos2::new(x, frame.bottom())], grid);
        painter.line_segment([Pos2::new(frame.left(), y), Pos2::new(frame.right(), y)], grid);
    }
    painter.rect_stroke(frame, CornerRadius::ZERO, Stroke::new(1.0, theme::BORDER), StrokeKind::Outside);

    for widget in canvas.paint_order() {
        paint_widget(&painter, &viewport, widget, canvas.selected_id() == Some(widget.id));
    }

    if let Some(selected) = canvas.selected_widget().filter(|w| w.visible) {
        for handle in corner_handles(selected.rect) {
            let center = to_pos(viewport.virtual_to_screen(handle.position));
            let rect = egui::Rect::from_center_size(center, egui::vec2(HANDLE_SIZE, HANDLE_SIZE));
            painter.rect_filled(rect, CornerRadius::same(2), Color32::WHITE);
            painter.rect_stroke(rect, CornerRadius::same(2), Stroke::new(1.5, theme::ACCENT), StrokeKind::Middle);
        }
    }

    let tolerance = studio.config().handle_hit_tolerance;
    let (pressed, released, press_pos, latest_pos, moved) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.any_released(),
            i.pointer.press_origin(),
            i.pointer.latest_pos(),
            i.pointer.delta() != egui::Vec2::ZERO,
        )
    });

    if canvas.is_dragging() {
        // The capture follows the pointer anywhere in the window until release.
        if let Some(pos) = latest_pos.filter(|_| moved || released) {
            actions.push(StudioEvent::PointerMove { pointer: to_point(pos) }.into());
        }
        if released {
            actions.push(StudioEvent::PointerUp.into());
        }
        let cursor = canvas
            .drag_session()
            .and_then(|s| s.handle)
            .map_or(CursorIcon::Grabbing, resize_cursor);
        ui.ctx().set_cursor_icon(cursor);
        return actions;
    }

    if let Some(hover) = response.hover_pos() {
        let point = to_point(hover);
        if let Some(corner) = canvas.handle_at(point, &viewport, tolerance) {
            ui.ctx().set_cursor_icon(resize_cursor(corner));
        } else if canvas.widget_at(viewport.screen_to_virtual(point)).is_some() {
            ui.ctx().set_cursor_icon(CursorIcon::Grab);
        }
    }

    if pressed && response.hovered() {
        if let Some(pos) = press_pos {
            let pointer = to_point(pos);
            let screen = viewport.screen;
            let handle = canvas.handle_at(pointer, &viewport, tolerance);
            let target = match (handle, canvas.selected_id()) {
                (Some(corner), Some(id)) => Some((id, Some(corner))),
                _ => canvas
                    .widget_at(viewport.screen_to_virtual(pointer))
                    .map(|id| (id, None)),
            };
            match target {
                Some((widget, handle)) => actions.push(
                    StudioEvent::PointerDown {
                        widget,
                        handle,
                        pointer,
                        canvas: screen,
                    }
                    .into(),
                ),
                None => actions.push(StudioEvent::BackgroundClick.into()),
            }
        }
    }

    actions
}

fn paint_widget(painter: &egui::Painter, viewport: &CanvasViewport, widget: &Widget, selected: bool) {
    let rect = to_egui_rect(viewport.widget_to_screen(widget.rect));
    let color = category_color(widget.kind().category());

    painter.rect_filled(rect, CornerRadius::same(4), color.gamma_multiply(0.18));
    let stroke = if selected {
        Stroke::new(2.0, theme::ACCENT)
    } else {
        Stroke::new(1.0, color.gamma_multiply(0.6))
    };
    painter.rect_stroke(rect, CornerRadius::same(4), stroke, StrokeKind::Inside);

    let clip = painter.with_clip_rect(rect.intersect(painter.clip_rect()));
    clip.text(
        rect.left_top() + egui::vec2(8.0, 6.0),
        Align2::LEFT_TOP,
        &widget.name,
        FontId::proportional(13.0),
        theme::TEXT,
    );

    if let Some(alert) = widget.settings.alert() {
        let font_color = studio_widgets::parse_css_color(&alert.font_color).unwrap_or(theme::TEXT);
        clip.text(
            rect.center(),
            Align2::CENTER_CENTER,
            alert.render_message("후원자", 10_000),
            FontId::proportional(12.0),
            font_color,
        );
    }

    clip.text(
        rect.right_bottom() - egui::vec2(6.0, 4.0),
        Align2::RIGHT_BOTTOM,
        format!("{}×{}", widget.rect.width, widget.rect.height),
        FontId::monospace(10.0),
        theme::TEXT_MUTED,
    );
}
