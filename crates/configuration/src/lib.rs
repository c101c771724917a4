use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Catalog, Config, Server};

/// Loads the application configuration.
///
/// Reads `insights.toml` when present, then applies `INSIGHTS_*` environment
/// overrides (e.g. `INSIGHTS_SERVER__PORT=8080`) on top of code defaults, so
/// the server also runs with no configuration file at all.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 3000)?
        .add_source(config::File::with_name("insights").required(false))
        .add_source(config::Environment::with_prefix("INSIGHTS").separator("__"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;

    Ok(config)
}
