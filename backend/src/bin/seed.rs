use activity_planner_backend::config::BackendConfig;
use activity_planner_backend::io::rest::SESSION_COOKIE;
use activity_planner_backend::seed::{seed_planner, SeedRequest};
use activity_planner_backend::storage::CsvConnection;
use anyhow::Context;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let request = SeedRequest::from_args(std::env::args().skip(1))?;
    let config = BackendConfig::from_env().context("Invalid configuration")?;
    let connection = CsvConnection::new(&config.data_directory)?;

    let outcome = seed_planner(&connection, request).await?;

    println!("owner:   {} ({})", outcome.user.username, outcome.user.id);
    println!("added:   {} activities", outcome.activities.len());
    println!("cookie:  {}={}", SESSION_COOKIE, outcome.session.id);
    println!("expires: {}", outcome.session.expiration_date);
    println!("page:    /users/{}/planner", outcome.user.username);

    Ok(())
}
