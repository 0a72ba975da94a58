//! Configuration I/O (YAML loading)
//!
//! Schema v1:
//!
//! ```yaml
//! version: 1
//! resolver:
//!   worklist_order: { kind: seeded, seed: 42 }
//!   outcome_policy:
//!     reject_unsatisfiable: true
//!   trace_events: false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::resolver_config::ResolverConfig;

/// Schema versions this crate reads
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl ResolverConfig {
    /// Parse a versioned YAML document
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        Ok(export.resolver)
    }

    /// Load from YAML file (v1 schema)
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Export to YAML
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            resolver: self.clone(),
        };
        Ok(serde_yaml::to_string(&export)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutcomePolicy;
    use crate::features::satisfaction::WorklistOrder;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_yaml_export() {
        let config = ResolverConfig::default()
            .worklist_order(WorklistOrder::Seeded { seed: 42 })
            .trace_events(false);

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("kind: seeded"));
        assert!(yaml.contains("seed: 42"));

        assert_eq!(ResolverConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_yaml_loading() {
        let yaml_content = r#"
version: 1
resolver:
  worklist_order:
    kind: lifo
  outcome_policy:
    reject_unsatisfiable: true
  trace_events: true
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml_content.as_bytes()).unwrap();

        let config = ResolverConfig::from_yaml_file(temp_file.path()).unwrap();
        assert_eq!(config.worklist_order, WorklistOrder::Lifo);
        assert_eq!(
            config.outcome_policy,
            OutcomePolicy {
                reject_unsatisfiable: true,
                reject_ambiguous: false,
            }
        );
        assert!(config.trace_events);
    }

    #[test]
    fn test_yaml_resolver_section_optional() {
        let config = ResolverConfig::from_yaml_str("version: 1\n").unwrap();
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn test_yaml_missing_version() {
        let result = ResolverConfig::from_yaml_str("resolver:\n  trace_events: true\n");
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let result = ResolverConfig::from_yaml_str("version: 2\n");
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::UnsupportedVersion { found: 2, .. }
        ));
    }

    #[test]
    fn test_yaml_unknown_field_rejected() {
        let result = ResolverConfig::from_yaml_str("version: 1\nresolver:\n  max_depth: 3\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ResolverConfig::from_yaml_file(dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
