use anyhow::Result;

use cmd_adapter::presentation::factory::create_rollback_use_case;
use cmd_adapter::Config;

use super::{print_json_line, require_txn};

pub fn cmd_rollback(config: &Config, txn: Option<String>) -> Result<()> {
    let id = require_txn(txn)?;
    let result = create_rollback_use_case(config).execute(&id)?;
    print_json_line(&result)
}
