//! Basic usage example

use envbind::EnvBind;

#[derive(Debug, Default, EnvBind)]
struct Config {
    // Required: loaded from DATABASE_URL
    #[env("DATABASE_URL;mandatory")]
    pub database_url: String,

    // With default value
    #[env("SERVER_ADDR;optional;127.0.0.1:8080")]
    pub server_addr: String,

    // Numeric type
    #[env("MAX_CONNECTIONS;optional;10")]
    pub max_connections: u32,

    // Boolean type
    #[env("DEBUG_MODE;optional;false")]
    pub debug_mode: bool,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("SERVER_ADDR", "0.0.0.0:3000");

    // Load configuration
    let mut config = Config::default();
    config.bind_env()?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);

    Ok(())
}
