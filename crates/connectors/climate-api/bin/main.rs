use clap::Parser;

use climate_api::{routes::create_router, state::create_state};
use climate_api_configuration::{Configuration, ServerOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = ServerOptions::parse();
    let configuration = Configuration::from_options(&options)?;
    let state = create_state(&configuration)?;
    let router = create_router(state);

    tracing::info!(
        "Starting server on {} serving {}",
        configuration.listen_address,
        configuration.connection_uri
    );

    axum::Server::bind(&configuration.listen_address)
        .serve(router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("unable to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
