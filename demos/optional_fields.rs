//! Example demonstrating optional fields

use envbind::{BindError, EnvBind};

#[derive(Debug, EnvBind)]
struct Config {
    #[env("DATABASE_URL;mandatory")]
    pub database_url: String,

    // Left as None when REDIS_URL is not set
    #[env("REDIS_URL;optional")]
    pub redis_url: Option<String>,

    // Keeps its current value when WORKERS is not set
    #[env("WORKERS")]
    pub workers: usize,
}

fn main() -> anyhow::Result<()> {
    std::env::remove_var("DATABASE_URL");
    std::env::remove_var("REDIS_URL");
    std::env::remove_var("WORKERS");

    let mut config = Config {
        database_url: String::new(),
        redis_url: None,
        workers: 4,
    };

    // Nothing is written when a mandatory value is missing
    match config.bind_env() {
        Err(err @ BindError::MandatoryValueMissing { .. }) => println!("Expected error: {err}"),
        other => anyhow::bail!("unexpected result: {other:?}"),
    }

    std::env::set_var("DATABASE_URL", "postgres://localhost/db");
    config.bind_env()?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Redis URL: {:?}", config.redis_url);
    println!("  Workers: {}", config.workers);

    Ok(())
}
