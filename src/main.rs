//! cmd-adapter CLI - convert AI assistant commands between platforms
//!
//! Usage: cmd-adapter <COMMAND>
//!
//! Commands:
//!   list       List source command files
//!   convert    Convert every source file to the selected platforms
//!   validate   Validate converted output against the schemas
//!   diff       Show the files created by a transaction
//!   rollback   Undo a transaction
//!   install    Copy converted output into a project
//!   roundtrip  Convert, re-import and report what changed

mod commands;

use std::process::ExitCode;

use clap::Parser;

use cmd_adapter::logging;
use cmd_adapter::presentation::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, warnings) = match commands::load_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            logging::init(cli.log_level, cli.log_format.unwrap_or_default());
            commands::report_error("config", &e);
            return ExitCode::from(1);
        }
    };

    logging::init(
        cli.log_level.or(config.log_level),
        cli.log_format.unwrap_or(config.log_format),
    );
    commands::log_config_warnings(&warnings);

    let (name, result) = match cli.command {
        Commands::List { src, from } => ("list", commands::list::cmd_list(&config, src, from)),
        Commands::Convert(args) => ("convert", commands::convert::cmd_convert(&config, args)),
        Commands::Validate { target, path } => (
            "validate",
            commands::validate::cmd_validate(&config, target, path),
        ),
        Commands::Diff { txn } => ("diff", commands::diff::cmd_diff(&config, txn)),
        Commands::Rollback { txn } => ("rollback", commands::rollback::cmd_rollback(&config, txn)),
        Commands::Install(args) => ("install", commands::install::cmd_install(&config, args)),
        Commands::Roundtrip(args) => (
            "roundtrip",
            commands::roundtrip::cmd_roundtrip(&config, args),
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            commands::report_error(name, &e);
            ExitCode::from(1)
        }
    }
}
