//! Resolver configuration
//!
//! Code-first builder plus a versioned YAML schema.
//!
//! # Examples
//!
//! ```rust,ignore
//! use overload_graph::config::{OutcomePolicy, ResolverConfig};
//! use overload_graph::features::satisfaction::WorklistOrder;
//!
//! let config = ResolverConfig::default()
//!     .worklist_order(WorklistOrder::Seeded { seed: 7 })
//!     .outcome_policy(OutcomePolicy::strict());
//!
//! let config = ResolverConfig::from_yaml_file("resolver.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod resolver_config;

pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, SUPPORTED_VERSIONS};
pub use resolver_config::{OutcomePolicy, ResolverConfig};
