use anyhow::bail;
use dattebayo_domain::{CliOverrides, Config};
use std::path::Path;
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logs the effective configuration; call once the subscriber is installed.
pub fn log_config_summary(config: &Config, config_path: Option<&str>) {
    info!(
        config_file = config_path.unwrap_or("default"),
        primary_port = config.dns.effective_primary_port(),
        fallback_port = config.dns.effective_fallback_port(),
        bind = %config.dns.bind_address,
        tlds = config.dns.tlds.len(),
        "Configuration loaded"
    );
}

/// Writes the default configuration to `path`, refusing to replace an
/// existing file unless `force` is set.
pub fn write_default_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        );
    }

    let rendered = Config::default().to_toml_string()?;
    std::fs::write(path, rendered)?;
    Ok(())
}
