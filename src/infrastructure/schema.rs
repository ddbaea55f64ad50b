//! JSON Schema validation
//!
//! Schemas are loaded from a directory (`ir.schema.json`,
//! `gemini.schema.json`, `codex.schema.json`); any file that is missing falls
//! back to the copy compiled into the binary.

use std::path::{Path, PathBuf};

use jsonschema::Validator;
use serde_json::Value;

use crate::domain::value_objects::Platform;
use crate::error::{AdapterError, AdapterResult};

pub const IR_SCHEMA_FILE: &str = "ir.schema.json";
pub const GEMINI_SCHEMA_FILE: &str = "gemini.schema.json";
pub const CODEX_SCHEMA_FILE: &str = "codex.schema.json";

const EMBEDDED_IR: &str = include_str!("../../schemas/ir.schema.json");
const EMBEDDED_GEMINI: &str = include_str!("../../schemas/gemini.schema.json");
const EMBEDDED_CODEX: &str = include_str!("../../schemas/codex.schema.json");

/// A compiled schema
pub struct SchemaValidator {
    source: PathBuf,
    validator: Validator,
}

impl SchemaValidator {
    /// Compile a schema document; `source` is only used in error reports
    pub fn compile(schema: &Value, source: impl Into<PathBuf>) -> AdapterResult<Self> {
        let source = source.into();
        let validator = jsonschema::validator_for(schema).map_err(|e| AdapterError::SchemaInvalid {
            path: source.clone(),
            message: e.to_string(),
        })?;
        Ok(Self { source, validator })
    }

    /// Parse and compile schema text
    pub fn parse(text: &str, source: impl Into<PathBuf>) -> AdapterResult<Self> {
        let source = source.into();
        let schema: Value = serde_json::from_str(text).map_err(|e| AdapterError::SchemaInvalid {
            path: source.clone(),
            message: e.to_string(),
        })?;
        Self::compile(&schema, source)
    }

    /// Validate, collecting every violation rather than stopping at the first
    pub fn validate(&self, value: &Value) -> Result<(), Vec<String>> {
        let errors: Vec<String> = self
            .validator
            .iter_errors(value)
            .map(|e| e.to_string())
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn is_valid(&self, value: &Value) -> bool {
        self.validator.is_valid(value)
    }

    /// Where the schema came from
    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl std::fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaValidator")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// The three schemas a batch may need
#[derive(Debug)]
pub struct SchemaSet {
    pub ir: SchemaValidator,
    pub gemini: SchemaValidator,
    pub codex: SchemaValidator,
}

impl SchemaSet {
    /// Load from `dir`, falling back to the embedded schema per missing file
    pub fn load(dir: &Path) -> AdapterResult<Self> {
        Ok(Self {
            ir: load_one(dir, IR_SCHEMA_FILE, EMBEDDED_IR)?,
            gemini: load_one(dir, GEMINI_SCHEMA_FILE, EMBEDDED_GEMINI)?,
            codex: load_one(dir, CODEX_SCHEMA_FILE, EMBEDDED_CODEX)?,
        })
    }

    /// Only the embedded schemas
    pub fn embedded() -> AdapterResult<Self> {
        Ok(Self {
            ir: SchemaValidator::parse(EMBEDDED_IR, IR_SCHEMA_FILE)?,
            gemini: SchemaValidator::parse(EMBEDDED_GEMINI, GEMINI_SCHEMA_FILE)?,
            codex: SchemaValidator::parse(EMBEDDED_CODEX, CODEX_SCHEMA_FILE)?,
        })
    }

    /// Schema for a platform's artifact document
    ///
    /// Claude artifacts are the IR itself.
    pub fn for_platform(&self, platform: Platform) -> &SchemaValidator {
        match platform {
            Platform::Gemini => &self.gemini,
            Platform::Codex => &self.codex,
            Platform::Claude => &self.ir,
        }
    }
}

fn load_one(dir: &Path, file: &str, embedded: &str) -> AdapterResult<SchemaValidator> {
    let path = dir.join(file);
    if path.is_file() {
        let text = std::fs::read_to_string(&path).map_err(|e| AdapterError::io(&path, e))?;
        tracing::debug!(schema = %path.display(), "loaded schema from disk");
        SchemaValidator::parse(&text, path)
    } else {
        SchemaValidator::parse(embedded, file)
    }
}
