//! Example implementing `Bind` by hand against a fixed set of records

use envbind::{Bind, Binder, EnvRecords, FieldSlot};

#[derive(Debug, Default)]
struct Config {
    port: u16,
    dsn: String,
}

impl Bind for Config {
    fn fields(&mut self) -> Vec<FieldSlot<'_>> {
        vec![
            FieldSlot::new("port", "PORT;mandatory", &mut self.port),
            FieldSlot::new("dsn", "DSN;optional;sqlite::memory:", &mut self.dsn),
        ]
    }
}

fn main() -> anyhow::Result<()> {
    // Values keep everything after the first '='
    let records: EnvRecords = ["svc.PORT=5432", "svc.DSN=postgres://db/app?sslmode=require"]
        .into_iter()
        .collect();

    let mut binder = Binder::with_source(records);
    binder.set_application_name("svc").set_separator(".");
    let config: Config = binder.load()?;

    println!("Configuration loaded:");
    println!("  Port: {}", config.port);
    println!("  DSN: {}", config.dsn);

    Ok(())
}
