use db::models::{
    assignee::Assignee,
    column::{Column, ColumnKind},
    task::{CellValue, Task},
};

use super::{
    assignee_editor::{AssigneeChips, can_add},
    dates::{format_date_display, format_date_input},
    editing::EditingState,
};

pub const ROWS_PER_PAGE: usize = 5;

/// What a single table cell shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellView {
    Link {
        href: String,
        label: String,
    },
    Text(String),
    /// `MM/DD/YYYY`
    Date(String),
    TextInput(String),
    /// `YYYY-MM-DD`
    DateInput(String),
    Assignees {
        chips: AssigneeChips,
        /// Chips show a remove control while the cell is being edited.
        editing: bool,
        can_add: bool,
    },
}

/// Client-side pagination over the full task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskTable {
    page: usize,
}

impl TaskTable {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(total_rows: usize) -> usize {
        total_rows.div_ceil(ROWS_PER_PAGE).max(1)
    }

    /// Moves to `page`, clamped to the last page.
    pub fn set_page(&mut self, page: usize, total_rows: usize) {
        self.page = page.min(Self::page_count(total_rows) - 1);
    }

    pub fn page_rows<'a>(&self, tasks: &'a [Task]) -> &'a [Task] {
        let start = (self.page * ROWS_PER_PAGE).min(tasks.len());
        let end = (start + ROWS_PER_PAGE).min(tasks.len());
        &tasks[start..end]
    }
}

pub fn header(columns: &[Column]) -> Vec<&str> {
    columns.iter().map(|c| c.header_name.as_str()).collect()
}

pub fn render_row(
    columns: &[Column],
    task: &Task,
    editing: &EditingState,
    all_assignees: &[Assignee],
) -> Vec<CellView> {
    columns
        .iter()
        .map(|column| render_cell(column, task, editing, all_assignees))
        .collect()
}

pub fn render_cell(
    column: &Column,
    task: &Task,
    editing: &EditingState,
    all_assignees: &[Assignee],
) -> CellView {
    let value = task.value(column.field);
    let pending = editing
        .session()
        .filter(|session| session.is_cell(&task.id, column.field))
        .map(|session| session.pending());

    match column.kind {
        ColumnKind::Link => {
            let label = display_text(&value);
            CellView::Link {
                href: label.clone(),
                label,
            }
        }
        ColumnKind::Dropdown | ColumnKind::Text => match pending {
            Some(pending) => CellView::TextInput(display_text(pending)),
            None => CellView::Text(display_text(&value)),
        },
        ColumnKind::Date => match pending {
            Some(pending) => {
                let raw = display_text(pending);
                CellView::DateInput(format_date_input(&raw).unwrap_or(raw))
            }
            None => CellView::Date(format_date_display(&display_text(&value))),
        },
        ColumnKind::Assignees => {
            let shown = pending.unwrap_or(&value).as_assignees().unwrap_or_default();
            CellView::Assignees {
                chips: AssigneeChips::new(shown),
                editing: pending.is_some(),
                can_add: can_add(all_assignees, shown),
            }
        }
    }
}

fn display_text(value: &CellValue) -> String {
    match value {
        CellValue::Text(text) => text.clone(),
        CellValue::Assignees(assignees) => assignees
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    }
}
