//! Overlay widgets placed on the virtual canvas.
//!
//! A widget is pure data: its kind is carried by the variant of its typed
//! settings, and UI state (selection, drag) lives in the canvas editor.

mod handles;
mod kind;
mod settings;

pub use handles::{Corner, Handle, corner_handles, hit_test_handle};
pub use kind::{CATEGORIES, WidgetCategory, WidgetKind};
pub use settings::{
    AlertLayout, AlertSettings, AnimationIn, AnimationOut, FontFamily, KaraokeSettings,
    LuckyBoxSettings, MiniAlertSettings, PictureAlertSettings, PlayAlertSettings, PollSettings,
    QuestSettings, RouletteSettings, SettingsPatch, TextAlign, TextAnimation, TtsVoice,
    VideoAlertSettings, VoiceAlertSettings, WidgetSettings, WishlistSettings, format_amount,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::geometry::WidgetRect;

/// Unique identifier for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(pub Uuid);

impl WidgetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w-{}", self.0.simple())
    }
}

/// A widget positioned in the 1920x1080 broadcast frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: WidgetId,
    pub name: String,
    pub rect: WidgetRect,
    pub visible: bool,
    pub settings: WidgetSettings,
}

impl Widget {
    /// Create a visible widget of the given kind with default settings.
    pub fn new(kind: WidgetKind, rect: WidgetRect) -> Self {
        Self {
            id: WidgetId::new(),
            name: kind.display_name().to_string(),
            rect,
            visible: true,
            settings: WidgetSettings::defaults_for(kind),
        }
    }

    /// The text donation alert every studio starts with.
    pub fn starter() -> Self {
        let alert = AlertSettings {
            min_amount: 1000,
            layout: AlertLayout::ImageTop,
            template: "{닉네임}님이 {금액}원을 후원해 주셨어요!".to_string(),
            ..AlertSettings::default()
        };
        Self {
            id: WidgetId::new(),
            name: WidgetKind::TextAlert.display_name().to_string(),
            rect: WidgetRect::new(320, 180, 640, 360),
            visible: true,
            settings: WidgetSettings::TextAlert(alert),
        }
    }

    pub fn kind(&self) -> WidgetKind {
        self.settings.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_widget_uses_kind_defaults() {
        let widget = Widget::new(WidgetKind::Roulette, WidgetRect::new(0, 0, 400, 300));
        assert_eq!(widget.kind(), WidgetKind::Roulette);
        assert_eq!(widget.name, "룰렛 후원");
        assert!(widget.visible);
    }

    #[test]
    fn test_starter_widget() {
        let widget = Widget::starter();
        assert_eq!(widget.kind(), WidgetKind::TextAlert);
        assert_eq!(widget.rect, WidgetRect::new(320, 180, 640, 360));
        let alert = widget.settings.alert().unwrap();
        assert_eq!(alert.min_amount, 1000);
        assert_eq!(alert.font_color, "#ffffff");
        assert_eq!(alert.highlight_color, "#18C9FF");
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(WidgetId::new(), WidgetId::new());
    }
}
