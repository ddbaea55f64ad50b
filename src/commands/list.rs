use std::path::PathBuf;

use anyhow::{Context, Result};

use cmd_adapter::application::scan_sources;
use cmd_adapter::{Config, SourcePlatform};

/// Print one source path per line
pub fn cmd_list(config: &Config, src: Option<PathBuf>, from: SourcePlatform) -> Result<()> {
    let src = src.unwrap_or_else(|| config.src.clone());
    let files = scan_sources(&src, from).with_context(|| format!("scan {}", src.display()))?;
    for file in files {
        println!("{}", file.display());
    }
    Ok(())
}
