//! Layered configuration loading
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults for the detected environment
//! 2. Optional `config.<env>.toml` in the working directory
//! 3. `APP__SECTION__KEY` environment variables (e.g. `APP__AUTH__SECRET`)

use config::{Config, ConfigError, File, FileFormat};

use shelf_shared::{AppConfig, Environment};

/// Prefix of environment variables that override configuration
pub const ENV_PREFIX: &str = "APP";

/// Load `.env`, detect the environment and build the application configuration
pub fn load_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_for(Environment::from_env())
}

/// Build configuration for a given environment without touching `.env`
pub fn load_for(environment: Environment) -> Result<AppConfig, ConfigError> {
    let mut config: AppConfig = Config::builder()
        .add_source(Config::try_from(&AppConfig::for_environment(environment))?)
        .add_source(File::new(environment.config_file(), FileFormat::Toml).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    // The detected environment wins over whatever a file claims
    config.environment = environment;
    Ok(config)
}
