//! Reusable egui components for the widget studio.
//!
//! - **Buttons**: text buttons with variants, segmented toggles, on/off switches
//! - **Colors**: CSS hex parsing and formatting, color swatches
//! - **Menu**: list rows, panel and card frames
//! - **Layout**: section labels, separators, labelled form rows

pub mod buttons;
pub mod colors;
pub mod layout;
pub mod menu;

pub use buttons::{ButtonVariant, Switch, TextButton, ToggleButton};
pub use colors::{ColorSwatch, colors_match, parse_css_color, to_css_hex};
pub use layout::{form_row, section_label, separator};
pub use menu::{card_frame, list_row, panel_frame};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Swatch size
    pub const SMALL: f32 = 20.0;
    /// Standard control height
    pub const CONTROL_HEIGHT: f32 = 28.0;
    /// List row height
    pub const ROW_HEIGHT: f32 = 32.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 6;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 10;
    /// Width of the label column in form rows
    pub const LABEL_WIDTH: f32 = 96.0;
}

/// Dark studio palette.
pub mod theme {
    use egui::Color32;

    /// Primary text
    pub const TEXT: Color32 = Color32::from_rgb(226, 232, 240);
    /// Secondary text
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(148, 163, 184);
    /// Borders and separators
    pub const BORDER: Color32 = Color32::from_rgb(51, 65, 85);
    /// Brand accent (matches the default highlight color)
    pub const ACCENT: Color32 = Color32::from_rgb(24, 201, 255);
    /// Destructive actions
    pub const DANGER: Color32 = Color32::from_rgb(239, 68, 68);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(30, 41, 59);
    /// Selected row background
    pub const SELECTED_BG: Color32 = Color32::from_rgb(22, 58, 79);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(15, 23, 42);
    /// Card background, one step above panels
    pub const CARD_BG: Color32 = Color32::from_rgb(24, 33, 52);
    /// Canvas backdrop outside the broadcast frame
    pub const BACKDROP: Color32 = Color32::from_rgb(2, 6, 23);
}
