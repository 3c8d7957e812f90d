use offline_agent_domain::{CliOverrides, Config};

/// Loads and validates the configuration. Runs before the subscriber is
/// installed (the log level comes out of the result), so the summary line is
/// logged by the caller once logging is up.
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
