pub mod assignee_editor;
pub mod dates;
pub mod editing;
pub mod table;
pub mod task_admin;
pub mod task_api;
