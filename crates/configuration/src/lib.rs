use crate::error::ConfigError;
use crate::settings::Config;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{DisplaySettings, ServerSettings, Theme};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the configuration file,
/// layers `SKYRA__`-prefixed environment variables on top, deserializes the result into our
/// strongly-typed `Config` struct, and validates it.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`.
        // Every setting has a default, so a missing file is not an error.
        .add_source(config::File::with_name("config.toml").required(false))
        // Environment overrides, e.g. SKYRA_SERVER__PORT=8080.
        .add_source(config::Environment::with_prefix("SKYRA").separator("__"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    Ok(config)
}
