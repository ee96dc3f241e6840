use serde::{Deserialize, Serialize};

use super::assignee::Assignee;

pub const TASK_STATUSES: [&str; 3] = ["Pending", "In Progress", "Completed"];
pub const TASK_PRIORITIES: [&str; 3] = ["Low", "Medium", "High"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub assignees: Vec<Assignee>,
    pub status: String,
    pub priority: String,
    /// `YYYY-MM-DD`
    pub due_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskField {
    Id,
    Status,
    Priority,
    DueDate,
    Assignees,
}

impl TaskField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskField::Id => "id",
            TaskField::Status => "status",
            TaskField::Priority => "priority",
            TaskField::DueDate => "dueDate",
            TaskField::Assignees => "assignees",
        }
    }
}

impl std::fmt::Display for TaskField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value held by a single task cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Assignees(Vec<Assignee>),
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            CellValue::Assignees(_) => None,
        }
    }

    pub fn as_assignees(&self) -> Option<&[Assignee]> {
        match self {
            CellValue::Assignees(assignees) => Some(assignees),
            CellValue::Text(_) => None,
        }
    }
}

impl Task {
    pub fn value(&self, field: TaskField) -> CellValue {
        match field {
            TaskField::Id => CellValue::Text(self.id.clone()),
            TaskField::Status => CellValue::Text(self.status.clone()),
            TaskField::Priority => CellValue::Text(self.priority.clone()),
            TaskField::DueDate => CellValue::Text(self.due_date.clone()),
            TaskField::Assignees => CellValue::Assignees(self.assignees.clone()),
        }
    }

    pub fn has_assignee(&self, assignee_id: &str) -> bool {
        self.assignees.iter().any(|a| a.id == assignee_id)
    }

    /// Overwrites only the fields present in `update`.
    pub fn apply(&mut self, update: UpdateTask) {
        let UpdateTask {
            assignees,
            status,
            priority,
            due_date,
        } = update;

        if let Some(assignees) = assignees {
            self.assignees = assignees;
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(priority) = priority {
            self.priority = priority;
        }
        if let Some(due_date) = due_date {
            self.due_date = due_date;
        }
    }
}

/// Partial task body for `PUT /api/tasks/{id}`. The id is not mergeable and is ignored if sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<Assignee>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl UpdateTask {
    /// Single-field update. `None` when the field is not writable or the value kind does not
    /// match the field.
    pub fn field(field: TaskField, value: CellValue) -> Option<Self> {
        let mut update = UpdateTask::default();
        match (field, value) {
            (TaskField::Assignees, CellValue::Assignees(assignees)) => {
                update.assignees = Some(assignees)
            }
            (TaskField::Status, CellValue::Text(text)) => update.status = Some(text),
            (TaskField::Priority, CellValue::Text(text)) => update.priority = Some(text),
            (TaskField::DueDate, CellValue::Text(text)) => update.due_date = Some(text),
            _ => return None,
        }
        Some(update)
    }

    pub fn assignees(assignees: Vec<Assignee>) -> Self {
        Self {
            assignees: Some(assignees),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.assignees.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
    }
}
