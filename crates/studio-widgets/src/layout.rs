//! Layout helpers: separators, section labels, form rows.

use egui::{Stroke, Ui};

use crate::{sizing, theme};

/// Draw a horizontal separator line.
pub fn separator(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let y = rect.top() + 4.0;
    ui.painter().line_segment(
        [egui::Pos2::new(rect.left(), y), egui::Pos2::new(rect.right(), y)],
        Stroke::new(1.0, theme::BORDER),
    );
    ui.add_space(8.0);
}

/// Draw a section label (small, muted, uppercase-ish heading).
pub fn section_label(ui: &mut Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(11.0).strong().color(theme::TEXT_MUTED));
}

/// A labelled row: fixed-width label on the left, `add_contents` on the right.
pub fn form_row<R>(ui: &mut Ui, label: &str, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    ui.horizontal(|ui| {
        ui.add_sized(
            [sizing::LABEL_WIDTH, sizing::CONTROL_HEIGHT],
            egui::Label::new(egui::RichText::new(label).size(12.0).color(theme::TEXT_MUTED)),
        );
        add_contents(ui)
    })
    .inner
}
