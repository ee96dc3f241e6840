pub mod assignee;
pub mod column;
pub mod task;
