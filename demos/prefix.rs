//! Example demonstrating application name and separator

use envbind::{Binder, EnvBind};

#[derive(Debug, Default, EnvBind)]
struct Config {
    // Looked up as MYAPP_DATABASE_URL, MYAPP_PORT, ...
    #[env("DATABASE_URL;mandatory")]
    pub database_url: String,

    #[env("API_KEY;mandatory")]
    pub api_key: String,

    #[env("PORT;optional;8080")]
    pub port: u16,

    #[env("DEBUG;optional;false")]
    pub debug: bool,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("MYAPP_DATABASE_URL", "postgres://localhost/db");
    std::env::set_var("MYAPP_API_KEY", "secret-key-123");
    std::env::set_var("MYAPP_PORT", "3000");

    let mut binder = Binder::new();
    binder.set_application_name("MYAPP").set_separator("_");
    let config: Config = binder.load()?;

    println!("Configuration with application name 'MYAPP' and separator '_':");
    println!("  Database URL: {}", config.database_url);
    println!("  API Key: {}", config.api_key);
    println!("  Port: {}", config.port);
    println!("  Debug: {}", config.debug);

    Ok(())
}
