use anyhow::{Context, Result};

use cmd_adapter::application::RoundtripOptions;
use cmd_adapter::presentation::factory::create_roundtrip_use_case;
use cmd_adapter::presentation::RoundtripArgs;
use cmd_adapter::Config;

use super::print_json;

pub fn cmd_roundtrip(config: &Config, args: RoundtripArgs) -> Result<()> {
    let options = RoundtripOptions {
        from: args.from,
        to: args.to,
        src: args.src.unwrap_or_else(|| config.src.clone()),
        out: args.out.unwrap_or_else(|| config.out.clone()),
        claude_format: config.claude_format,
    };

    let reports = create_roundtrip_use_case()
        .execute(&options)
        .with_context(|| format!("roundtrip {}", options.src.display()))?;
    print_json(&reports)
}
