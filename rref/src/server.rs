//! HTTP server wiring

use std::net::SocketAddr;

use actix_web::{dev::Server, web, App, HttpServer};
use rref_core::RrefSolver;
use tracing::info;

use crate::config::ServerConfig;
use crate::routes;

/// Per-server settings shared read-only with every handler
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppState {
    pub solver: RrefSolver,
    pub answer_tolerance: f64,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            solver: RrefSolver::new(),
            answer_tolerance: config.answer_tolerance,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&ServerConfig::default())
    }
}

/// Bind the listener and return the running server with its bound addresses
///
/// Binding to port 0 picks a free port, which the returned addresses report.
pub fn start(config: &ServerConfig) -> std::io::Result<(Server, Vec<SocketAddr>)> {
    let state = web::Data::new(AppState::from_config(config));
    let payload_limit = config.payload_limit;

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(web::PayloadConfig::default().limit(payload_limit))
            .configure(routes::configure)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let server = server.bind((config.host.as_str(), config.port))?;
    let addrs = server.addrs();
    for addr in &addrs {
        info!(address = %addr, "rref server listening");
    }
    Ok((server.run(), addrs))
}

/// Bind and run the server until it is stopped
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let (server, _) = start(&config)?;
    server.await
}
