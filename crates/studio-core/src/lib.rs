//! Widget Studio Core Library
//!
//! Platform-agnostic state and editing logic for the widget studio: the
//! 1920x1080 overlay canvas editor, its presets, and the alert dashboard's
//! preset groups.

pub mod canvas;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod geometry;
pub mod input;
pub mod preset;
pub mod selection;
pub mod store;
pub mod timer;
pub mod widget;

pub use canvas::CanvasEditor;
pub use config::{FormInputPolicy, StudioConfig};
pub use dashboard::{Dashboard, GroupDropdown, GroupEditor, LayoutMode};
pub use error::{StudioError, StudioResult};
pub use geometry::{CanvasViewport, RectField, WidgetRect, MIN_WIDGET_SIZE, VIRTUAL_HEIGHT, VIRTUAL_WIDTH};
pub use input::{CaptureGuard, PointerCapture};
pub use preset::{Preset, PresetId, PresetLibrary};
pub use selection::{DragSession, apply_manipulation};
pub use store::{Notice, NoticeLevel, Studio, StudioEvent};
pub use timer::{DeleteOutcome, Scheduler, TimerId};
pub use widget::{Corner, Widget, WidgetCategory, WidgetId, WidgetKind, WidgetSettings, SettingsPatch};
