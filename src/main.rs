use spec_fetcher_mcp::config::ServerConfig;
use spec_fetcher_mcp::server::McpServer;
use spec_fetcher_mcp::service::SpecService;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("spec-fetcher-mcp: configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        docs_dir = %config.docs_dir.display(),
        repo_base_url = %config.repo_base_url,
        "Starting spec-fetcher-mcp"
    );

    let service = match SpecService::from_config(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("spec-fetcher-mcp: cannot build HTTP client: {e}");
            std::process::exit(1);
        }
    };

    let mut server = McpServer::new(service);
    if let Err(e) = server.run().await {
        eprintln!("spec-fetcher-mcp: fatal error: {e}");
        std::process::exit(1);
    }
}
