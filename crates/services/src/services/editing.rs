use db::models::{
    assignee::Assignee,
    task::{CellValue, Task, TaskField, UpdateTask},
};

/// The single cell currently in edit mode and its uncommitted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditingSession {
    row_id: String,
    field: TaskField,
    pending: CellValue,
}

impl EditingSession {
    /// Starts from the cell's current value on `task`.
    pub fn new(task: &Task, field: TaskField) -> Self {
        Self {
            row_id: task.id.clone(),
            field,
            pending: task.value(field),
        }
    }

    pub fn row_id(&self) -> &str {
        &self.row_id
    }

    pub fn field(&self) -> TaskField {
        self.field
    }

    pub fn pending(&self) -> &CellValue {
        &self.pending
    }

    pub fn is_cell(&self, row_id: &str, field: TaskField) -> bool {
        self.row_id == row_id && self.field == field
    }

    /// Replaces the pending text. Returns `false` for the assignees field, whose value only
    /// changes through the assignee picker.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        match &mut self.pending {
            CellValue::Text(pending) => {
                *pending = text.into();
                true
            }
            CellValue::Assignees(_) => false,
        }
    }

    pub fn pending_assignees(&self) -> Option<&[Assignee]> {
        self.pending.as_assignees()
    }

    pub(crate) fn set_assignees(&mut self, assignees: Vec<Assignee>) {
        if self.field == TaskField::Assignees {
            self.pending = CellValue::Assignees(assignees);
        }
    }

    /// The update to send on commit, or `None` when the pending value equals `current` and
    /// nothing needs saving. Comparison is by raw value, so `2025-01-02` and `2025-1-2` differ.
    pub fn changes(&self, current: &Task) -> Option<UpdateTask> {
        if current.value(self.field) == self.pending {
            return None;
        }
        UpdateTask::field(self.field, self.pending.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditingState {
    #[default]
    Idle,
    Editing(EditingSession),
}

impl EditingState {
    pub fn session(&self) -> Option<&EditingSession> {
        match self {
            EditingState::Idle => None,
            EditingState::Editing(session) => Some(session),
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut EditingSession> {
        match self {
            EditingState::Idle => None,
            EditingState::Editing(session) => Some(session),
        }
    }

    pub fn is_editing(&self, row_id: &str, field: TaskField) -> bool {
        self.session()
            .is_some_and(|session| session.is_cell(row_id, field))
    }

    /// Enters edit mode for a cell, dropping any other session without saving it.
    pub fn start(&mut self, task: &Task, field: TaskField) {
        if let Some(previous) = self.session() {
            if !previous.is_cell(&task.id, field) {
                tracing::debug!(
                    task_id = %previous.row_id(),
                    field = %previous.field(),
                    "discarding unsaved edit"
                );
            }
        }
        *self = EditingState::Editing(EditingSession::new(task, field));
    }

    /// Leaves edit mode, handing back the session that was active.
    pub fn finish(&mut self) -> Option<EditingSession> {
        match std::mem::take(self) {
            EditingState::Idle => None,
            EditingState::Editing(session) => Some(session),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> Task {
        Task {
            id: "5".to_string(),
            assignees: vec![Assignee {
                id: "1".to_string(),
                name: "Alice".to_string(),
                avatar: String::new(),
            }],
            status: "Pending".to_string(),
            priority: "Low".to_string(),
            due_date: "2025-01-02".to_string(),
        }
    }

    #[test]
    fn test_start_takes_current_value() {
        let mut state = EditingState::default();
        state.start(&task(), TaskField::Priority);

        let session = state.session().unwrap();
        assert_eq!(session.row_id(), "5");
        assert_eq!(session.pending(), &CellValue::Text("Low".to_string()));
        assert!(state.is_editing("5", TaskField::Priority));
        assert!(!state.is_editing("5", TaskField::Status));
    }

    #[test]
    fn test_switching_cells_replaces_session() {
        let mut state = EditingState::default();
        state.start(&task(), TaskField::Priority);
        state.session_mut().unwrap().set_text("High");

        state.start(&task(), TaskField::Status);

        let session = state.session().unwrap();
        assert_eq!(session.field(), TaskField::Status);
        assert_eq!(session.pending(), &CellValue::Text("Pending".to_string()));
    }

    #[test]
    fn test_unchanged_value_has_no_changes() {
        let mut session = EditingSession::new(&task(), TaskField::Status);
        assert_eq!(session.changes(&task()), None);

        session.set_text("Completed");
        assert_eq!(
            session.changes(&task()),
            Some(UpdateTask {
                status: Some("Completed".to_string()),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_dates_compare_as_raw_strings() {
        let mut session = EditingSession::new(&task(), TaskField::DueDate);
        session.set_text("2025-1-2");
        assert!(session.changes(&task()).is_some());
    }

    #[test]
    fn test_text_input_is_ignored_for_assignees() {
        let mut session = EditingSession::new(&task(), TaskField::Assignees);
        assert!(!session.set_text("Bob"));
        assert_eq!(session.pending_assignees().map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_finish_returns_to_idle() {
        let mut state = EditingState::default();
        assert!(state.finish().is_none());

        state.start(&task(), TaskField::Priority);
        let session = state.finish().unwrap();
        assert_eq!(session.field(), TaskField::Priority);
        assert_eq!(state, EditingState::Idle);
    }
}
