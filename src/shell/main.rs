use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use ticket_provider::modules::events::core::event::EventEntity;
use ticket_provider::modules::tickets::core::ticket::TicketEntity;
use ticket_provider::shared::infrastructure::repository::in_memory::InMemoryRepository;
use ticket_provider::shell::config::Config;
use ticket_provider::shell::http::router;
use ticket_provider::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ticket_provider=info,tower_http=info")),
        )
        .init();

    // In-memory deps for now
    let state = AppState::new(
        Arc::new(InMemoryRepository::<EventEntity>::new("event")),
        Arc::new(InMemoryRepository::<TicketEntity>::new("ticket")),
    );

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("ticket provider listening on http://{}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
