mod config;
mod routes;

use config::HostConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::info!(path = %path.display(), "loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable environment file"),
    }

    let config = HostConfig::from_env()?;
    if !config.pkg_dir.is_dir() {
        tracing::warn!(
            pkg_dir = %config.pkg_dir.display(),
            "guard bundle not found; gated pages will stay hidden until it is built"
        );
    }

    let app = routes::app(&config);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, site_dir = %config.site_dir.display(), "ecops host listening");
    axum::serve(listener, app).await?;
    Ok(())
}
