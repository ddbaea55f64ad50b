use anyhow::{Context, Result};
use tracing::{error, info};

use cmd_adapter::application::ConvertOptions;
use cmd_adapter::presentation::factory::create_convert_use_case;
use cmd_adapter::presentation::ConvertArgs;
use cmd_adapter::Config;

use super::print_json_line;

pub fn cmd_convert(config: &Config, args: ConvertArgs) -> Result<()> {
    let options = ConvertOptions::new(
        args.src.unwrap_or_else(|| config.src.clone()),
        args.out.unwrap_or_else(|| config.out.clone()),
    )
    .with_from(args.from)
    .with_to(args.to)
    .with_concurrency(args.concurrency.unwrap_or(config.concurrency))
    .with_claude_format(args.claude_format.unwrap_or(config.claude_format))
    .with_strict(args.strict || config.strict)
    .with_fail_fast(args.fail_fast || config.fail_fast);

    let use_case = create_convert_use_case(config)?;
    let result = use_case
        .execute(&options)
        .with_context(|| format!("convert {}", options.src.display()))?;

    if result.is_success() {
        info!(txn_id = %result.transaction.id, created = result.created(), "convert done");
        return print_json_line(&result.summary());
    }

    for failure in result.failures.iter().skip(1) {
        error!(
            file = %failure.file.display(),
            code = %failure.error.code(),
            error = %failure.error,
            "file failed"
        );
    }
    let txn_id = result.transaction.id.clone();
    let failed = result.failures.len();
    let record = result.record_path.display().to_string();
    let first = result
        .failures
        .into_iter()
        .next()
        .context("failed batch without failures")?;

    Err(anyhow::Error::new(first.error).context(format!(
        "{failed} file(s) failed, first {}; transaction {txn_id} recorded at {record}",
        first.file.display()
    )))
}
