use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use todo_server::{telemetry, Config, InMemoryTodoRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init(&config.log_filter);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");

    todo_server::run(listener, Arc::new(InMemoryTodoRepository::new())).await?;
    Ok(())
}
