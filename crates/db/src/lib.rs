pub mod models;
pub mod seed;
pub mod store;

pub use store::{StoreError, TaskStore};
