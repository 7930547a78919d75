//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LogConfig (validated, immutable)
//!     → consumed once by global::init / LogFacade::new
//! ```
//!
//! # Design Decisions
//! - Config is read at startup only; the enable flag changes afterwards
//!   through `toggle()` alone
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::FacadeConfig;
pub use schema::LogConfig;
pub use schema::ObservabilityConfig;
pub use validation::ValidationError;
