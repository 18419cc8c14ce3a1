use crate::api::context::AppContext;
use crate::api::routes;
use crate::errors::Error;
use std::net::SocketAddr;
use tracing::{info, warn};

/// Starts and runs the HTTP server using Axum web framework
///
/// Serves until Ctrl-C is received, then lets in-flight requests finish.
///
/// # Arguments
/// * `ctx` - Application context, its port is the one listened on
///
/// # Returns
/// * `Result<(), Error>` - Ok once the server has shut down, Error if binding or serving fails
pub async fn launch_server(ctx: AppContext) -> Result<(), Error> {
    let addr = SocketAddr::from(([0, 0, 0, 0], ctx.port));
    let env = ctx.env;
    let app = routes::app(ctx);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(Error::Server)?;
    info!("Listening on {} ({})", addr, env);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Error::Server)?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
