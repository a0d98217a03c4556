//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ClusterConfig (validated, immutable)
//!     → PoolSettings handed to ClusterPool::new
//!
//! On ClusterPool::add:
//!     PoolSettings::with_producer
//!     → MemberConfig (settings copy + server producer)
//!     → MemberPool::construct
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; a cluster keeps the settings it was created with
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::ClusterConfig;
pub use schema::ObservabilityConfig;
pub use schema::PoolSettings;
