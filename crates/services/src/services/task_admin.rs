use db::models::{
    assignee::Assignee,
    column::Column,
    task::{Task, TaskField, UpdateTask},
};

use super::{
    assignee_editor::{self, AssigneePicker},
    editing::{EditingSession, EditingState},
    table::{self, CellView, TaskTable},
    task_api::{TaskApi, TaskApiError},
};

/// Client state for the task table: the loaded data, the single editing session, the
/// assignee picker and the current page.
///
/// Every action takes `&mut self`, so requests from one `TaskAdmin` never overlap and the
/// latest response is the one reconciled into the task list.
pub struct TaskAdmin<A> {
    api: A,
    columns: Vec<Column>,
    assignees: Vec<Assignee>,
    tasks: Vec<Task>,
    editing: EditingState,
    picker: AssigneePicker,
    table: TaskTable,
}

impl<A: TaskApi> TaskAdmin<A> {
    /// Fetches columns, assignees and tasks concurrently. Any failure aborts the load.
    pub async fn load(api: A) -> Result<Self, TaskApiError> {
        let (columns, assignees, tasks) = fetch_all(&api).await?;
        tracing::info!(
            columns = columns.len(),
            assignees = assignees.len(),
            tasks = tasks.len(),
            "loaded task table"
        );

        Ok(Self {
            api,
            columns,
            assignees,
            tasks,
            editing: EditingState::default(),
            picker: AssigneePicker::default(),
            table: TaskTable::default(),
        })
    }

    /// Refetches everything and drops any open edit.
    pub async fn reload(&mut self) -> Result<(), TaskApiError> {
        let (columns, assignees, tasks) = fetch_all(&self.api).await?;
        self.columns = columns;
        self.assignees = assignees;
        self.tasks = tasks;
        self.abandon_edit();
        let total = self.tasks.len();
        self.table.set_page(self.table.page(), total);
        Ok(())
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn assignees(&self) -> &[Assignee] {
        &self.assignees
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn editing(&self) -> &EditingState {
        &self.editing
    }

    pub fn session(&self) -> Option<&EditingSession> {
        self.editing.session()
    }

    pub fn is_editing(&self, row_id: &str, field: TaskField) -> bool {
        self.editing.is_editing(row_id, field)
    }

    pub fn picker_open(&self) -> bool {
        self.picker.is_open()
    }

    /// Puts a cell into edit mode. Clicking any other cell, editable or not, drops the
    /// unsaved value of the cell being edited. Returns `false` when the row is unknown or
    /// the column has no editor.
    pub fn click_cell(&mut self, row_id: &str, field: TaskField) -> bool {
        if self.editing.is_editing(row_id, field) {
            return true;
        }

        let editable = self
            .columns
            .iter()
            .find(|c| c.field == field)
            .is_some_and(|c| c.kind.editor().is_some());

        let Some(task) = self.tasks.iter().find(|t| t.id == row_id) else {
            tracing::warn!(task_id = %row_id, "clicked cell of unknown task");
            self.abandon_edit();
            return false;
        };
        if !editable {
            self.abandon_edit();
            return false;
        }

        self.picker.close();
        self.editing.start(task, field);
        true
    }

    /// Raw input text for the cell being edited. Ignored for the assignees cell.
    pub fn input_change(&mut self, text: impl Into<String>) -> bool {
        self.editing
            .session_mut()
            .is_some_and(|session| session.set_text(text))
    }

    /// Blur or Enter. Saves the pending value when it differs from the task, then leaves
    /// edit mode whatever the outcome.
    pub async fn commit(&mut self) {
        self.picker.close();
        let Some(session) = self.editing.finish() else {
            return;
        };

        let Some(current) = self.task(session.row_id()) else {
            tracing::warn!(task_id = %session.row_id(), "edited task no longer exists");
            return;
        };
        let Some(update) = session.changes(current) else {
            return;
        };

        match self.api.update_task(session.row_id(), &update).await {
            Ok(task) => self.replace_task(task),
            Err(err) => tracing::error!(
                ?err,
                task_id = %session.row_id(),
                field = %session.field(),
                "save failed"
            ),
        }
    }

    fn assignee_session(&self) -> Option<(&str, &[Assignee])> {
        let session = self.editing.session()?;
        Some((session.row_id(), session.pending_assignees()?))
    }

    /// Choices offered by the picker: global assignees not already pending on the task.
    pub fn available_assignees(&self) -> Vec<&Assignee> {
        match self.assignee_session() {
            Some((_, pending)) => assignee_editor::available_assignees(&self.assignees, pending),
            None => Vec::new(),
        }
    }

    pub fn can_add_assignee(&self) -> bool {
        self.assignee_session()
            .is_some_and(|(_, pending)| assignee_editor::can_add(&self.assignees, pending))
    }

    pub fn open_picker(&mut self) -> bool {
        if !self.can_add_assignee() {
            return false;
        }
        self.picker.open();
        true
    }

    /// Close button: hides the picker and keeps the session.
    pub fn close_picker(&mut self) {
        self.picker.close();
    }

    /// Click-away: closes the picker and commits the session.
    pub async fn dismiss_picker(&mut self) {
        self.commit().await;
    }

    /// Appends an assignee to the pending set and saves it right away. The picker closes
    /// after each add.
    pub async fn add_assignee(&mut self, assignee_id: &str) {
        let Some((row_id, pending)) = self.assignee_session() else {
            return;
        };
        let Some(candidate) = self.assignees.iter().find(|a| a.id == assignee_id) else {
            tracing::warn!(assignee_id = %assignee_id, "picked unknown assignee");
            return;
        };
        let Some(next) = assignee_editor::with_assignee(pending, candidate) else {
            tracing::debug!(assignee_id = %assignee_id, "assignee already on task");
            return;
        };

        let row_id = row_id.to_string();
        self.picker.close();
        self.save_assignees(row_id, next).await;
    }

    /// Drops an assignee from the pending set and saves it right away.
    pub async fn remove_assignee(&mut self, assignee_id: &str) {
        let Some((row_id, pending)) = self.assignee_session() else {
            return;
        };
        let next = assignee_editor::without_assignee(pending, assignee_id);
        if next.len() == pending.len() {
            return;
        }

        let row_id = row_id.to_string();
        self.save_assignees(row_id, next).await;
    }

    async fn save_assignees(&mut self, row_id: String, assignees: Vec<Assignee>) {
        if let Some(session) = self.editing.session_mut() {
            session.set_assignees(assignees.clone());
        }

        match self
            .api
            .update_task(&row_id, &UpdateTask::assignees(assignees))
            .await
        {
            Ok(task) => {
                if let Some(session) = self.editing.session_mut() {
                    session.set_assignees(task.assignees.clone());
                }
                self.replace_task(task);
            }
            Err(err) => {
                tracing::error!(?err, task_id = %row_id, "failed to save assignees");
                self.abandon_edit();
            }
        }
    }

    pub fn page(&self) -> usize {
        self.table.page()
    }

    pub fn page_count(&self) -> usize {
        TaskTable::page_count(self.tasks.len())
    }

    pub fn set_page(&mut self, page: usize) {
        self.table.set_page(page, self.tasks.len());
    }

    pub fn page_rows(&self) -> &[Task] {
        self.table.page_rows(&self.tasks)
    }

    pub fn header(&self) -> Vec<&str> {
        table::header(&self.columns)
    }

    pub fn render_page(&self) -> Vec<Vec<CellView>> {
        self.page_rows()
            .iter()
            .map(|task| table::render_row(&self.columns, task, &self.editing, &self.assignees))
            .collect()
    }

    fn replace_task(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task,
            None => tracing::warn!(task_id = %task.id, "saved task is not in the table"),
        }
    }

    fn abandon_edit(&mut self) {
        self.picker.close();
        if let Some(session) = self.editing.finish() {
            tracing::debug!(
                task_id = %session.row_id(),
                field = %session.field(),
                "discarding unsaved edit"
            );
        }
    }
}

async fn fetch_all<A: TaskApi>(
    api: &A,
) -> Result<(Vec<Column>, Vec<Assignee>, Vec<Task>), TaskApiError> {
    tokio::try_join!(api.fetch_columns(), api.fetch_assignees(), api.fetch_tasks())
        .inspect_err(|err| tracing::error!(?err, "error fetching data"))
}
