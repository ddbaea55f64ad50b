use anyhow::{Context, Result};

use cmd_adapter::application::InstallOptions;
use cmd_adapter::presentation::factory::create_install_use_case;
use cmd_adapter::presentation::InstallArgs;
use cmd_adapter::Config;

use super::print_json;

pub fn cmd_install(config: &Config, args: InstallArgs) -> Result<()> {
    let options = InstallOptions::new(args.from.unwrap_or_else(|| config.out.clone()), args.to)
        .with_platform(args.platform)
        .with_strategy(args.strategy)
        .with_dry_run(args.dry_run);
    let use_case = create_install_use_case(config);

    if options.dry_run {
        return print_json(&use_case.plan(&options).to_json());
    }

    let result = use_case
        .execute(&options)
        .with_context(|| format!("install into {}", options.to.display()))?;
    print_json(&result.summary())
}
