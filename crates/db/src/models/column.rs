use serde::{Deserialize, Serialize};

use super::task::TaskField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Link,
    /// Rendered as plain text by the table.
    Dropdown,
    Text,
    Date,
    #[serde(alias = "assignee")]
    Assignees,
}

/// Input a cell opens when it enters edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    TextInput,
    DateInput,
    AssigneePicker,
}

impl ColumnKind {
    pub fn editor(&self) -> Option<EditorKind> {
        match self {
            ColumnKind::Link => None,
            ColumnKind::Dropdown | ColumnKind::Text => Some(EditorKind::TextInput),
            ColumnKind::Date => Some(EditorKind::DateInput),
            ColumnKind::Assignees => Some(EditorKind::AssigneePicker),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub field: TaskField,
    pub header_name: String,
    #[serde(rename = "type")]
    pub kind: ColumnKind,
}

impl Column {
    pub fn new(field: TaskField, header_name: &str, kind: ColumnKind) -> Self {
        Self {
            field,
            header_name: header_name.to_string(),
            kind,
        }
    }

    /// Columns served to the table, in display order.
    pub fn catalogue() -> Vec<Column> {
        vec![
            Column::new(TaskField::Id, "ID", ColumnKind::Link),
            Column::new(TaskField::Status, "Status", ColumnKind::Dropdown),
            Column::new(TaskField::Priority, "Priority", ColumnKind::Text),
            Column::new(TaskField::DueDate, "Due Date", ColumnKind::Date),
            Column::new(TaskField::Assignees, "Assignees", ColumnKind::Assignees),
        ]
    }
}
