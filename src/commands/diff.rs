use anyhow::Result;

use cmd_adapter::application::inspect_transaction;
use cmd_adapter::infrastructure::LocalFs;
use cmd_adapter::presentation::factory::create_transaction_store;
use cmd_adapter::Config;

use super::{print_json, require_txn};

/// Print the files a transaction created and their current state
pub fn cmd_diff(config: &Config, txn: Option<String>) -> Result<()> {
    let id = require_txn(txn)?;
    let view = inspect_transaction(&LocalFs::new(), &create_transaction_store(config), &id)?;
    print_json(&view)
}
