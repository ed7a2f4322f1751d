//! Error types shared by the studio state machines.

use thiserror::Error;

use crate::dashboard::{ConditionId, GroupId};
use crate::preset::PresetId;
use crate::widget::{WidgetId, WidgetKind};

/// Errors produced by studio operations.
///
/// The first two variants are guard rails that the UI reports to the user;
/// the rest describe stale ids or inputs that do not apply.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StudioError {
    #[error("최소 1개의 프리셋이 필요합니다.")]
    LastPresetRequired,
    #[error("최소 1개의 그룹이 필요합니다.")]
    LastGroupRequired,
    #[error("Widget not found: {0}")]
    UnknownWidget(WidgetId),
    #[error("Preset not found: {0}")]
    UnknownPreset(PresetId),
    #[error("Preset group not found: {0}")]
    UnknownGroup(GroupId),
    #[error("Condition preset not found: {0}")]
    UnknownCondition(ConditionId),
    #[error("Condition preset at index {0} is protected")]
    ProtectedCondition(usize),
    #[error("이름을 입력하세요.")]
    EmptyName,
    #[error("Setting `{field}` does not apply to {kind:?} widgets")]
    UnsupportedSetting { kind: WidgetKind, field: &'static str },
    #[error("No drag in progress")]
    NoActiveDrag,
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl StudioError {
    /// Whether this error is a guard rail the user should be told about,
    /// as opposed to a stale reference from the view.
    pub fn is_guard_rail(&self) -> bool {
        matches!(
            self,
            Self::LastPresetRequired | Self::LastGroupRequired | Self::EmptyName
        )
    }
}

/// Result type for studio operations.
pub type StudioResult<T> = Result<T, StudioError>;
