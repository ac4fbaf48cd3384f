#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<(), keystone::server::ServerError> {
    use keystone::core::config::SiteConfig;
    use tracing_subscriber::EnvFilter;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = SiteConfig::from_env()?;
    tracing::info!(
        "Config loaded: addr={}, root={}, index={}",
        config.addr,
        config.root.display(),
        config.index
    );

    keystone::server::serve(config).await
}

#[cfg(all(feature = "csr", not(feature = "server")))]
fn main() {
    keystone::mount();
}

#[cfg(not(any(feature = "csr", feature = "server")))]
pub fn main() {
    // nothing to run without a target feature
    // build with `trunk serve` (csr) or `--features server`
}
