//! Day Off Calendar JSON API Server

use std::process;

use salvo::prelude::*;
use tracing::{error, info};

use dayoff_app::context::{AppContext, lazy_database_probe};

use crate::{config::ServerConfig, observability::Observability, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod config;
mod dayoffs;
mod extensions;
mod healthcheck;
mod observability;
mod root;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Day Off Calendar JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = Observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Observability error: {init_error}");
        }

        process::exit(1);
    }

    let addr = config.socket_addr();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let docs_url = config.server.docs_url();

    let state = match AppContext::from_database_url(
        &config.database.database_url,
        config.database.database_max_connections,
    )
    .await
    {
        Ok(app) => State::ready(app, docs_url),
        Err(init_error) => {
            error!("database initialization failed, serving without day off routes: {init_error}");

            let probe = lazy_database_probe(
                &config.database.database_url,
                config.database.database_max_connections,
            )
            .inspect_err(|source| error!("database health probe unavailable: {source}"))
            .ok();

            State::degraded(probe, docs_url)
        }
    };

    let service = router::app_service(state);

    let server = Server::new(listener);

    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(service).await;
}
