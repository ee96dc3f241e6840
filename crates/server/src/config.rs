use std::{env, str::FromStr};

use db::seed::{DEFAULT_ASSIGNEE_COUNT, DEFAULT_TASK_COUNT};
use thiserror::Error;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3001";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub seed_assignees: usize,
    pub seed_tasks: usize,
    /// Fixed RNG seed for reproducible sample data.
    pub seed: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable `{name}` has invalid value `{value}`")]
    InvalidVar { name: &'static str, value: String },
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            seed_assignees: DEFAULT_ASSIGNEE_COUNT,
            seed_tasks: DEFAULT_TASK_COUNT,
            seed: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = env::var("TASK_ADMIN_LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

        let seed_assignees =
            parse_var("TASK_ADMIN_SEED_ASSIGNEES")?.unwrap_or(DEFAULT_ASSIGNEE_COUNT);
        let seed_tasks = parse_var("TASK_ADMIN_SEED_TASKS")?.unwrap_or(DEFAULT_TASK_COUNT);
        let seed = parse_var("TASK_ADMIN_SEED")?;

        Ok(Self {
            listen_addr,
            seed_assignees,
            seed_tasks,
            seed,
        })
    }
}

fn parse_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidVar { name, value }),
        Err(_) => Ok(None),
    }
}
