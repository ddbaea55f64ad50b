//! Domain Layer
//!
//! Pure conversion logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (CommandIr, Artifact, Transaction)
//! - `value_objects/` - Immutable value types (Platform, Format, ConflictStrategy)
//! - `services/` - Domain services (IR builder, field differ)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
