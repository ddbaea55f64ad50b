use std::path::PathBuf;

use anyhow::Result;
use tracing::{error, info};

use cmd_adapter::application::ValidateTarget;
use cmd_adapter::presentation::factory::create_validate_use_case;
use cmd_adapter::{AdapterError, Config};

use super::print_json;

pub fn cmd_validate(config: &Config, target: ValidateTarget, path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| config.out.clone());
    let report = create_validate_use_case(config)?.execute(target, &path);

    for dir in &report.unreadable {
        error!(dir = %dir.path.display(), message = %dir.message, "cannot read directory");
    }
    for file in &report.invalid {
        error!(file = %file.path.display(), errors = ?file.errors, "schema violations");
    }
    print_json(&report)?;

    if report.is_ok() {
        info!(checked = report.checked, "all artifacts valid");
        return Ok(());
    }

    let errors = report
        .invalid
        .iter()
        .flat_map(|f| f.errors.iter().map(move |e| format!("{}: {e}", f.path.display())))
        .chain(
            report
                .unreadable
                .iter()
                .map(|d| format!("{}: {}", d.path.display(), d.message)),
        )
        .collect();
    Err(AdapterError::IrInvalid { file: path, errors }.into())
}
