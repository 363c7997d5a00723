//! Write a default config file

use std::path::Path;

use mau2::config::AppConfig;
use mau2::output::{OperationResult, OutputMode};

/// Write the default configuration, refusing to overwrite without `force`
pub fn init(config_path: Option<&Path>, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = config_path.map_or_else(AppConfig::config_path, Path::to_path_buf);

    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Config already exists at {}. Use --force to overwrite.",
                path.display()
            ),
        }
        .render(mode);
        return Ok(());
    }

    AppConfig::default().save(&path)?;
    log::info!("Wrote default config to {}", path.display());

    OperationResult {
        success: true,
        message: format!("Created {}", path.display()),
    }
    .render(mode);
    Ok(())
}
