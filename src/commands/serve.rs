//! Start the HTTP API

use std::path::Path;

use mau2::config::AppConfig;

/// Load config, build the classifier and serve until interrupted
#[cfg(feature = "server")]
pub fn serve(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    use mau2::adapters;
    use mau2::server::{self, AppState};
    use mau2::session::SessionStore;

    let mut config = AppConfig::load(config_path)?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let classifier = adapters::build_classifier(&config.classifier)?;
    let addr = config.server.bind_addr();

    println!("Starting mau2 API ({} classifier)...", classifier.name());
    println!("Listening on http://{addr}/api/v1");
    println!("Idle sessions expire after {}s", config.server.session_ttl_secs);
    println!();
    println!("Press Ctrl+C to stop");

    let sessions = SessionStore::with_ttl(config.server.session_ttl());
    let mut state = AppState::with_sessions(classifier, sessions);
    server::serve(&addr, &mut state)
}

/// Serving requires the `server` feature
#[cfg(not(feature = "server"))]
pub fn serve(
    config_path: Option<&Path>,
    _host: Option<String>,
    _port: Option<u16>,
) -> anyhow::Result<()> {
    AppConfig::load(config_path)?;
    anyhow::bail!("mau2 was built without the `server` feature; rebuild with --features server")
}
