//! State for the edit modal: at most one record being edited.

use crate::model::UserRecord;

/// Which field of the draft currently receives text input.
///
/// The id is the record's identity and is not editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    /// The name field.
    #[default]
    Name,
    /// The email field.
    Email,
    /// The role field.
    Role,
}

impl EditField {
    /// The next field in Tab order (wraps).
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Role,
            Self::Role => Self::Name,
        }
    }

    /// The previous field in Tab order (wraps).
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Role,
            Self::Email => Self::Name,
            Self::Role => Self::Email,
        }
    }
}

/// Edit buffer: a draft copy of one record plus the open-dialog flag.
///
/// # Cardinality
/// - When closed: 1 state (no draft)
/// - When open: one draft record and one focused field
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// The record being edited, present exactly while the dialog is open.
    draft: Option<UserRecord>,

    /// Field currently receiving text input.
    field: EditField,
}

impl EditorState {
    /// Create new editor state (closed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the edit dialog is open.
    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// Open the dialog with a draft copy of `record`, focusing the name
    /// field.
    pub fn open(&mut self, record: UserRecord) {
        self.draft = Some(record);
        self.field = EditField::Name;
    }

    /// Close the dialog, discarding any unsaved draft.
    pub fn close(&mut self) {
        self.draft = None;
    }

    /// Take the draft out, closing the dialog. Used on save.
    pub fn take_draft(&mut self) -> Option<UserRecord> {
        self.draft.take()
    }

    /// The current draft, if the dialog is open.
    pub fn draft(&self) -> Option<&UserRecord> {
        self.draft.as_ref()
    }

    /// The focused field.
    pub fn field(&self) -> EditField {
        self.field
    }

    /// Move focus to the next field (Tab).
    pub fn focus_next(&mut self) {
        self.field = self.field.next();
    }

    /// Move focus to the previous field (Shift+Tab).
    pub fn focus_prev(&mut self) {
        self.field = self.field.prev();
    }

    /// Append a character to the focused field. No-op while closed.
    pub fn input_char(&mut self, ch: char) {
        let field = self.field;
        if let Some(draft) = self.draft.as_mut() {
            Self::field_mut(draft, field).push(ch);
        }
    }

    /// Delete the last character of the focused field. No-op while closed
    /// or when the field is already empty.
    pub fn backspace(&mut self) {
        let field = self.field;
        if let Some(draft) = self.draft.as_mut() {
            Self::field_mut(draft, field).pop();
        }
    }

    fn field_mut(draft: &mut UserRecord, field: EditField) -> &mut String {
        match field {
            EditField::Name => &mut draft.name,
            EditField::Email => &mut draft.email,
            EditField::Role => &mut draft.role,
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;
