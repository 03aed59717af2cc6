//! HTTP transport for the performance/points converter.
//!
//! A single endpoint at `/` accepts `POST` requests with a JSON body and
//! answers `OPTIONS` pre-flight requests. Every response carries permissive
//! cross-origin headers.

mod cli;
mod handler;
mod payload;
mod reply;

use std::{future::Future, net::SocketAddr, sync::Arc};

use tracing::info;
use warp::{Filter, Rejection, http::Method, hyper::body::Bytes, reply::Response};
use wapoints_scoring::Calculator;

pub use cli::Cli;

/// `table_version` reported when none is configured.
pub const DEFAULT_TABLE_VERSION: &str = "WorldAthletics-2022";

/// State shared by all requests. Read-only once the server starts.
#[derive(Debug, Clone)]
pub struct AppState {
    pub calculator: Calculator,
    pub table_version: String,
}

impl AppState {
    pub fn new(calculator: Calculator, table_version: impl Into<String>) -> Self {
        Self {
            calculator,
            table_version: table_version.into(),
        }
    }
}

/// Builds the conversion endpoint.
pub fn routes(
    state: Arc<AppState>,
) -> impl Filter<Extract = (Response,), Error = Rejection> + Clone {
    warp::path::end()
        .and(warp::method())
        .and(warp::body::bytes())
        .map(move |method: Method, body: Bytes| handler::dispatch(&state, &method, &body))
}

/// Serves the endpoint on `addr` until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the address cannot be bound.
pub async fn serve(
    state: AppState,
    addr: SocketAddr,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), warp::Error> {
    info!(
        tables = state.calculator.tables().len(),
        edition = state.calculator.tables().edition(),
        table_version = %state.table_version,
        fallbacks = ?state.calculator.fallbacks(),
        policy = ?state.calculator.policy(),
        "starting server"
    );

    let (bound, server) =
        warp::serve(routes(Arc::new(state))).try_bind_with_graceful_shutdown(addr, shutdown)?;
    info!(%bound, "listening");

    server.await;
    info!("server stopped");
    Ok(())
}
