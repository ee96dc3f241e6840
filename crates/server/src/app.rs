use std::net::SocketAddr;

use anyhow::Context;
use db::seed::Seeder;
use tokio::net::TcpListener;

use crate::{AppState, config::ServerConfig, routes};

pub struct Server;

impl Server {
    pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
        let store = Seeder::from_seed(config.seed).store(config.seed_assignees, config.seed_tasks);
        let state = AppState::new(store);

        let addr: SocketAddr = config
            .listen_addr
            .parse()
            .context("listen address is invalid")?;
        let listener = TcpListener::bind(addr)
            .await
            .context("failed to bind tcp listener")?;

        Self::serve(listener, state).await
    }

    /// Serves the API on an already bound listener until the process stops.
    pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
        let addr = listener
            .local_addr()
            .context("failed to read listener address")?;
        tracing::info!(%addr, "task admin server listening");

        axum::serve(listener, routes::router(state).into_make_service())
            .await
            .context("task admin server failure")?;

        Ok(())
    }
}
