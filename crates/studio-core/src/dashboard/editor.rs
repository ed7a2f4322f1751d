//! CRUD and ordering over preset groups, with guarded deletion.

use std::time::Duration;

use super::group::{ConditionId, GroupId, PresetGroup};
use crate::config::StudioConfig;
use crate::error::{StudioError, StudioResult};
use crate::timer::{DeleteOutcome, Instant, Scheduler, TimerId};

/// Deferred clears for the transient delete flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupTimer {
    ClearDeleteConfirm,
    ClearDeleteError,
}

/// A group name being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct RenameDraft {
    pub group: GroupId,
    pub draft: String,
}

/// Editing state for the preset group list.
#[derive(Debug)]
pub struct GroupEditor {
    groups: Vec<PresetGroup>,
    active: GroupId,
    rename: Option<RenameDraft>,
    inline_add: Option<String>,
    delete_armed: Option<(GroupId, TimerId)>,
    delete_error: Option<TimerId>,
    timers: Scheduler<GroupTimer>,
    confirm_window: Duration,
    error_window: Duration,
}

impl GroupEditor {
    /// Create an editor with one group, which becomes active.
    pub fn new(config: &StudioConfig, first: PresetGroup) -> Self {
        Self {
            active: first.id,
            groups: vec![first],
            rename: None,
            inline_add: None,
            delete_armed: None,
            delete_error: None,
            timers: Scheduler::new(),
            confirm_window: config.delete_confirm_window(),
            error_window: config.delete_error_window(),
        }
    }

    pub fn groups(&self) -> &[PresetGroup] {
        &self.groups
    }

    pub fn group(&self, id: GroupId) -> Option<&PresetGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    fn group_mut(&mut self, id: GroupId) -> StudioResult<&mut PresetGroup> {
        self.groups
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(StudioError::UnknownGroup(id))
    }

    pub fn active_id(&self) -> GroupId {
        self.active
    }

    pub fn active_group(&self) -> Option<&PresetGroup> {
        self.group(self.active)
    }

    /// Make `id` the active group.
    pub fn set_active(&mut self, id: GroupId) -> StudioResult<()> {
        if self.group(id).is_none() {
            return Err(StudioError::UnknownGroup(id));
        }
        self.active = id;
        Ok(())
    }

    // --- Timers ---

    /// Apply every deferred clear due at `now`.
    pub fn tick(&mut self, now: Instant) {
        for timer in self.timers.poll(now) {
            match timer {
                GroupTimer::ClearDeleteConfirm => {
                    log::debug!("Delete confirmation expired");
                    self.delete_armed = None;
                }
                GroupTimer::ClearDeleteError => self.delete_error = None,
            }
        }
    }

    /// Earliest pending deadline, for scheduling a repaint.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Cancel pending timers and drop transient flags.
    pub fn teardown(&mut self) {
        self.timers.cancel_all();
        self.delete_armed = None;
        self.delete_error = None;
    }

    // --- Delete ---

    /// Whether a delete of `id` is waiting for its confirming click.
    pub fn is_delete_armed(&self, id: GroupId) -> bool {
        matches!(self.delete_armed, Some((armed, _)) if armed == id)
    }

    /// Whether the "at least one group" error is showing.
    pub fn delete_error_visible(&self) -> bool {
        self.delete_error.is_some()
    }

    /// Handle a delete click on `id` at time `now`.
    ///
    /// Refused outright when only one group exists. Otherwise the first click
    /// arms the delete and a second click on the same group inside the
    /// confirmation window removes it.
    pub fn delete_group(&mut self, id: GroupId, now: Instant) -> StudioResult<DeleteOutcome<PresetGroup>> {
        self.tick(now);

        if self.groups.len() <= 1 {
            if let Some(previous) = self.delete_error.take() {
                self.timers.cancel(previous);
            }
            self.delete_error = Some(self.timers.schedule(now, self.error_window, GroupTimer::ClearDeleteError));
            log::warn!("Refusing to delete the last preset group");
            return Err(StudioError::LastGroupRequired);
        }

        let index = self
            .groups
            .iter()
            .position(|g| g.id == id)
            .ok_or(StudioError::UnknownGroup(id))?;

        match self.delete_armed.take() {
            Some((armed, timer)) if armed == id => {
                self.timers.cancel(timer);
                let removed = self.groups.remove(index);
                if self.active == id {
                    self.active = self.groups[0].id;
                }
                if self.rename.as_ref().is_some_and(|r| r.group == id) {
                    self.rename = None;
                }
                log::debug!("Deleted preset group {}", id);
                Ok(DeleteOutcome::Deleted(removed))
            }
            previous => {
                if let Some((_, timer)) = previous {
                    self.timers.cancel(timer);
                }
                let timer = self.timers.schedule(now, self.confirm_window, GroupTimer::ClearDeleteConfirm);
                self.delete_armed = Some((id, timer));
                Ok(DeleteOutcome::Armed)
            }
        }
    }

    // --- Add ---

    /// Append a new group.
    ///
    /// With a name this behaves like the inline form: a blank name silently
    /// adds nothing. Without a name (the modal) a default name is used and
    /// rename mode opens on the new group.
    pub fn add_group(&mut self, name: Option<&str>) -> Option<GroupId> {
        let (name, open_rename) = match name {
            Some(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                (name.to_string(), false)
            }
            None => (format!("새 그룹 {}", self.groups.len() + 1), true),
        };

        let group = PresetGroup::new(name);
        let id = group.id;
        if open_rename {
            self.rename = Some(RenameDraft {
                group: id,
                draft: group.name.clone(),
            });
        }
        self.groups.push(group);
        log::debug!("Added preset group {}", id);
        Some(id)
    }

    /// Draft text of the inline add form, if open.
    pub fn inline_add_draft(&self) -> Option<&str> {
        self.inline_add.as_deref()
    }

    pub fn begin_inline_add(&mut self) {
        self.inline_add = Some(String::new());
    }

    pub fn edit_inline_add(&mut self, text: impl Into<String>) {
        if let Some(draft) = self.inline_add.as_mut() {
            *draft = text.into();
        }
    }

    /// Submit the inline form. Closes it either way.
    pub fn commit_inline_add(&mut self) -> Option<GroupId> {
        let draft = self.inline_add.take()?;
        self.add_group(Some(&draft))
    }

    pub fn cancel_inline_add(&mut self) {
        self.inline_add = None;
    }

    // --- Rename ---

    pub fn rename_draft(&self) -> Option<&RenameDraft> {
        self.rename.as_ref()
    }

    /// Open rename mode with the group's current name as the draft.
    pub fn begin_rename(&mut self, id: GroupId) -> StudioResult<()> {
        let name = self.group(id).ok_or(StudioError::UnknownGroup(id))?.name.clone();
        self.rename = Some(RenameDraft { group: id, draft: name });
        Ok(())
    }

    pub fn edit_rename(&mut self, text: impl Into<String>) {
        if let Some(rename) = self.rename.as_mut() {
            rename.draft = text.into();
        }
    }

    /// Commit the draft. An empty draft leaves rename mode open.
    pub fn commit_rename(&mut self) -> StudioResult<()> {
        let Some(rename) = self.rename.as_ref() else {
            return Ok(());
        };
        let (id, draft) = (rename.group, rename.draft.clone());
        self.rename_group(id, &draft)?;
        self.rename = None;
        Ok(())
    }

    /// Close rename mode without changing the name.
    pub fn cancel_rename(&mut self) {
        self.rename = None;
    }

    /// Set a group's name directly.
    pub fn rename_group(&mut self, id: GroupId, name: &str) -> StudioResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StudioError::EmptyName);
        }
        self.group_mut(id)?.name = name.to_string();
        Ok(())
    }

    // --- Reorder ---

    /// Move the group `from` to the position currently held by `to`.
    ///
    /// Returns false when dropped onto itself.
    pub fn reorder(&mut self, from: GroupId, to: GroupId) -> StudioResult<bool> {
        if from == to {
            return Ok(false);
        }
        let from_index = self
            .groups
            .iter()
            .position(|g| g.id == from)
            .ok_or(StudioError::UnknownGroup(from))?;
        let to_index = self
            .groups
            .iter()
            .position(|g| g.id == to)
            .ok_or(StudioError::UnknownGroup(to))?;

        let group = self.groups.remove(from_index);
        self.groups.insert(to_index.min(self.groups.len()), group);
        Ok(true)
    }

    // --- Condition presets (active group only) ---

    pub fn add_condition(&mut self) -> StudioResult<ConditionId> {
        let active = self.active;
        Ok(self.group_mut(active)?.add_condition())
    }

    pub fn delete_condition(&mut self, id: ConditionId) -> StudioResult<()> {
        let active = self.active;
        self.group_mut(active)?.delete_condition(id).map(|_| ())
    }

    pub fn edit_condition(&mut self, id: ConditionId, text: impl Into<String>) -> StudioResult<()> {
        let active = self.active;
        self.group_mut(active)?.edit_condition(id, text)
    }

    pub fn toggle_condition(&mut self, id: ConditionId) -> StudioResult<bool> {
        let active = self.active;
        self.group_mut(active)?.toggle_condition(id)
    }
}
