use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Rules come from the `PROXY_RULES` JSON file when set, otherwise the
/// built-in development set.
fn load_rules() -> Result<Vec<dev_proxy::ProxyRule>, std::io::Error> {
    match std::env::var("PROXY_RULES") {
        Ok(path) => {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        }
        Err(_) => Ok(dev_proxy::dev_rules()),
    }
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("dev_proxy=debug,info")),
        )
        .init();

    let rules = load_rules()?;
    let port = std::env::var("PORT").unwrap_or_else(|_| "5173".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, rules = rules.len(), "dev proxy listening");
    dev_proxy::run(listener, rules).await
}
