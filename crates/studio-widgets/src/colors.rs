//! CSS hex colors and color swatches.

use egui::{Color32, CornerRadius, CursorIcon, Rect, Sense, Stroke, StrokeKind, Ui, vec2};

use crate::{sizing, theme};

/// Parse a CSS hex color: `#rgb`, `#rrggbb` or `#rrggbbaa`.
///
/// Returns `None` for anything else, including named colors.
pub fn parse_css_color(color: &str) -> Option<Color32> {
    let hex = color.trim().strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                rgb[i] = v * 17;
            }
            Some(Color32::from_rgb(rgb[0], rgb[1], rgb[2]))
        }
        6 => Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color32::from_rgba_unmultiplied(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            channel(6)?,
        )),
        _ => None,
    }
}

/// Format as `#RRGGBB`, dropping alpha.
pub fn to_css_hex(color: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}

/// Check if two colors match (ignoring alpha).
pub fn colors_match(a: Color32, b: Color32) -> bool {
    a.r() == b.r() && a.g() == b.g() && a.b() == b.b()
}

/// A clickable rounded color swatch.
///
/// Colors that fail to parse render as a crossed-out swatch.
pub struct ColorSwatch<'a> {
    color: Option<Color32>,
    tooltip: &'a str,
    selected: bool,
}

impl<'a> ColorSwatch<'a> {
    pub fn new(color: Option<Color32>, tooltip: &'a str) -> Self {
        Self {
            color,
            tooltip,
            selected: false,
        }
    }

    /// Build from a CSS string.
    pub fn css(color: &str, tooltip: &'a str) -> Self {
        Self::new(parse_css_color(color), tooltip)
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Show the swatch and return (clicked, rect).
    pub fn show(self, ui: &mut Ui) -> (bool, Rect) {
        let size = vec2(sizing::SMALL, sizing::SMALL);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let radius = CornerRadius::same(4);
            match self.color {
                Some(color) => {
                    ui.painter().rect_filled(rect, radius, color);
                }
                None => {
                    ui.painter().rect_filled(rect, radius, theme::CARD_BG);
                    ui.painter().line_segment(
                        [rect.left_bottom(), rect.right_top()],
                        Stroke::new(1.5, theme::DANGER),
                    );
                }
            }

            let border = if self.selected {
                Stroke::new(2.0, theme::ACCENT)
            } else {
                Stroke::new(1.0, theme::BORDER)
            };
            ui.painter().rect_stroke(rect, radius, border, StrokeKind::Outside);
        }

        let clicked = response.clicked();
        response
            .on_hover_text(self.tooltip)
            .on_hover_cursor(CursorIcon::PointingHand);
        (clicked, rect)
    }
}
