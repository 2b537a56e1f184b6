//! Initialize a plainkit.toml config file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'plainkit convert <file.html>' to generate Go code.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# plainkit configuration

[convert]
# Convert hx-* attributes into htmx.* calls
htmx = false

# Convert x-*, @event and :bind attributes into alpine.* calls
alpine = false
"#;
