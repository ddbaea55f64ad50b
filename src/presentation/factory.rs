//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up from a
//! [`Config`]. This is the dependency injection point for the CLI.

use crate::application::{
    ConvertUseCase, InstallUseCase, RollbackUseCase, RoundtripUseCase, ValidateUseCase,
};
use crate::config::Config;
use crate::error::AdapterResult;
use crate::infrastructure::{JsonTransactionStore, LocalFs, SchemaSet};

pub type ConcreteConvertUseCase = ConvertUseCase<LocalFs, JsonTransactionStore>;
pub type ConcreteInstallUseCase = InstallUseCase<LocalFs, JsonTransactionStore>;
pub type ConcreteRollbackUseCase = RollbackUseCase<LocalFs, JsonTransactionStore>;

/// Transaction store rooted at `transactions_dir`
pub fn create_transaction_store(config: &Config) -> JsonTransactionStore {
    JsonTransactionStore::new(&config.transactions_dir)
}

/// Schemas from `schemas_dir`, falling back to the built-in copies
pub fn load_schemas(config: &Config) -> AdapterResult<SchemaSet> {
    SchemaSet::load(&config.schemas_dir)
}

pub fn create_convert_use_case(config: &Config) -> AdapterResult<ConcreteConvertUseCase> {
    Ok(ConvertUseCase::new(
        LocalFs::new(),
        create_transaction_store(config),
        load_schemas(config)?,
    ))
}

pub fn create_install_use_case(config: &Config) -> ConcreteInstallUseCase {
    InstallUseCase::new(LocalFs::new(), create_transaction_store(config))
}

pub fn create_rollback_use_case(config: &Config) -> ConcreteRollbackUseCase {
    RollbackUseCase::new(LocalFs::new(), create_transaction_store(config))
}

pub fn create_roundtrip_use_case() -> RoundtripUseCase<LocalFs> {
    RoundtripUseCase::new(LocalFs::new())
}

pub fn create_validate_use_case(config: &Config) -> AdapterResult<ValidateUseCase<LocalFs>> {
    Ok(ValidateUseCase::new(LocalFs::new(), load_schemas(config)?))
}
