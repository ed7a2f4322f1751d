//! Staged active-group selection.

use super::editor::GroupEditor;
use super::group::GroupId;
use crate::error::StudioResult;

/// Draft selection for the group dropdown.
///
/// While open, the dropdown holds a draft that is independent of the
/// committed active group. Only [`GroupDropdown::commit`] writes it back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupDropdown {
    draft: Option<GroupId>,
}

impl GroupDropdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// The highlighted group while open.
    pub fn draft(&self) -> Option<GroupId> {
        self.draft
    }

    /// Open, seeding the draft from the committed group.
    pub fn open(&mut self, committed: GroupId) {
        self.draft = Some(committed);
    }

    /// Open when closed, discard the draft when open.
    pub fn toggle(&mut self, committed: GroupId) {
        if self.is_open() {
            self.dismiss();
        } else {
            self.open(committed);
        }
    }

    /// Highlight `id`. Opens the dropdown first if it was closed.
    pub fn select_draft(&mut self, id: GroupId) {
        self.draft = Some(id);
    }

    /// Close without committing.
    pub fn dismiss(&mut self) {
        self.draft = None;
    }

    /// Write the draft to the editor's active group and close.
    ///
    /// Returns the newly active group, or `None` if the dropdown was closed.
    pub fn commit(&mut self, editor: &mut GroupEditor) -> StudioResult<Option<GroupId>> {
        let Some(draft) = self.draft.take() else {
            return Ok(None);
        };
        editor.set_active(draft)?;
        log::debug!("Active preset group set to {}", draft);
        Ok(Some(draft))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StudioConfig;
    use crate::dashboard::group::PresetGroup;

    fn editor() -> (GroupEditor, GroupId, GroupId) {
        let mut editor = GroupEditor::new(&StudioConfig::default(), PresetGroup::new("a"));
        let first = editor.active_id();
        let second = editor.add_group(Some("b")).unwrap();
        (editor, first, second)
    }

    #[test]
    fn test_open_seeds_from_committed() {
        let (editor, first, _) = editor();
        let mut dropdown = GroupDropdown::new();
        dropdown.open(editor.active_id());
        assert_eq!(dropdown.draft(), Some(first));
    }

    #[test]
    fn test_commit_applies_draft() {
        let (mut editor, _, second) = editor();
        let mut dropdown = GroupDropdown::new();
        dropdown.open(editor.active_id());
        dropdown.select_draft(second);

        assert_eq!(dropdown.commit(&mut editor).unwrap(), Some(second));
        assert_eq!(editor.active_id(), second);
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_close_without_confirm_keeps_active() {
        let (mut editor, first, second) = editor();
        let mut dropdown = GroupDropdown::new();

        dropdown.open(editor.active_id());
        dropdown.select_draft(second);
        dropdown.dismiss();
        assert_eq!(editor.active_id(), first);

        dropdown.toggle(editor.active_id());
        dropdown.select_draft(second);
        dropdown.toggle(editor.active_id());
        assert!(!dropdown.is_open());
        assert_eq!(editor.active_id(), first);

        // Committing a closed dropdown does nothing.
        assert_eq!(dropdown.commit(&mut editor).unwrap(), None);
        assert_eq!(editor.active_id(), first);
    }

    #[test]
    fn test_select_draft_opens() {
        let (_, _, second) = editor();
        let mut dropdown = GroupDropdown::new();
        dropdown.select_draft(second);
        assert!(dropdown.is_open());
    }
}
