use thiserror::Error;

use crate::models::{
    assignee::{Assignee, CreateAssignee},
    column::Column,
    task::{Task, UpdateTask},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Task not found")]
    TaskNotFound(String),
    #[error("Assignee not found")]
    AssigneeNotFound(String),
    #[error("Missing fields")]
    MissingFields,
    #[error("Assignee already exists")]
    AssigneeExists(String),
}

/// In-memory tasks and assignees. Nothing is persisted; writes are last-write-wins.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    assignees: Vec<Assignee>,
    columns: Vec<Column>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl TaskStore {
    pub fn new(assignees: Vec<Assignee>, tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            assignees,
            columns: Column::catalogue(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn update_task(&mut self, id: &str, update: UpdateTask) -> Result<Task, StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::TaskNotFound(id.to_string()))?;

        task.apply(update);
        tracing::debug!(task_id = %id, "task updated");
        Ok(task.clone())
    }

    pub fn assignees(&self) -> &[Assignee] {
        &self.assignees
    }

    pub fn assignee(&self, id: &str) -> Result<Assignee, StoreError> {
        self.assignees
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| StoreError::AssigneeNotFound(id.to_string()))
    }

    pub fn create_assignee(&mut self, candidate: CreateAssignee) -> Result<Assignee, StoreError> {
        let assignee = candidate.into_assignee().ok_or(StoreError::MissingFields)?;

        if self.assignees.iter().any(|a| a.id == assignee.id) {
            return Err(StoreError::AssigneeExists(assignee.id));
        }

        tracing::debug!(assignee_id = %assignee.id, "assignee created");
        self.assignees.push(assignee.clone());
        Ok(assignee)
    }

    /// Removes the assignee and drops it from every task that references it.
    pub fn delete_assignee(&mut self, id: &str) -> Result<(), StoreError> {
        let index = self
            .assignees
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| StoreError::AssigneeNotFound(id.to_string()))?;
        self.assignees.remove(index);

        let affected = self.remove_assignee_refs(id);
        tracing::debug!(assignee_id = %id, affected, "assignee deleted");
        Ok(())
    }

    fn remove_assignee_refs(&mut self, assignee_id: &str) -> usize {
        let mut affected = 0;
        for task in &mut self.tasks {
            let before = task.assignees.len();
            task.assignees.retain(|a| a.id != assignee_id);
            if task.assignees.len() != before {
                affected += 1;
            }
        }
        affected
    }
}
