//! Preset groups and their condition presets.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{StudioError, StudioResult};

/// Number of leading condition presets in a group that cannot be deleted.
pub const PROTECTED_CONDITIONS: usize = 2;

/// Unique identifier for a preset group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub Uuid);

impl GroupId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GroupId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group-{}", self.0.simple())
    }
}

/// Unique identifier for a condition preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionId(pub Uuid);

impl ConditionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConditionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConditionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cond-{}", self.0.simple())
    }
}

/// One donation-condition rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionPreset {
    pub id: ConditionId,
    /// Free text, e.g. "1,000원 이상 후원 시".
    pub condition: String,
    pub active: bool,
}

impl ConditionPreset {
    pub fn new(condition: impl Into<String>, active: bool) -> Self {
        Self {
            id: ConditionId::new(),
            condition: condition.into(),
            active,
        }
    }
}

/// A named, ordered collection of condition presets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetGroup {
    pub id: GroupId,
    pub name: String,
    pub presets: Vec<ConditionPreset>,
}

impl PresetGroup {
    /// Create a group seeded with the two default conditions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: GroupId::new(),
            name: name.into(),
            presets: vec![
                ConditionPreset::new("기본 후원 알림", true),
                ConditionPreset::new("10,000원 이상 후원 시", false),
            ],
        }
    }

    /// Whether the condition at `index` may be deleted.
    pub fn can_delete(index: usize) -> bool {
        index >= PROTECTED_CONDITIONS
    }

    fn condition_mut(&mut self, id: ConditionId) -> StudioResult<&mut ConditionPreset> {
        self.presets
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StudioError::UnknownCondition(id))
    }

    /// Append a blank, active condition.
    pub fn add_condition(&mut self) -> ConditionId {
        let preset = ConditionPreset::new("", true);
        let id = preset.id;
        self.presets.push(preset);
        id
    }

    /// Remove a condition. The first two are protected.
    pub fn delete_condition(&mut self, id: ConditionId) -> StudioResult<ConditionPreset> {
        let index = self
            .presets
            .iter()
            .position(|p| p.id == id)
            .ok_or(StudioError::UnknownCondition(id))?;
        if !Self::can_delete(index) {
            return Err(StudioError::ProtectedCondition(index));
        }
        Ok(self.presets.remove(index))
    }

    pub fn edit_condition(&mut self, id: ConditionId, text: impl Into<String>) -> StudioResult<()> {
        self.condition_mut(id)?.condition = text.into();
        Ok(())
    }

    /// Flip a condition's active flag. Returns the new value.
    pub fn toggle_condition(&mut self, id: ConditionId) -> StudioResult<bool> {
        let preset = self.condition_mut(id)?;
        preset.active = !preset.active;
        Ok(preset.active)
    }
}
