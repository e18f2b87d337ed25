use crate::detection::prefix::{PrefixRange, PrefixTable};
use scriptlens_utils::errors::{ConfigError, PrefixTableError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for script classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Treat bare multisig outputs as standard. When `false`, outputs that do not have the
    /// pay-to-pubkey-hash prefix shape are checked for bare multisig.
    pub bare_multisig_standard: bool,
    /// Custom prefix ranges replacing the compiled-in table; empty keeps the builtin table.
    pub prefix_ranges: Vec<PrefixRange>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl ClassifierConfig {
    /// Builtin table, bare multisig flagged.
    pub fn standard() -> Self {
        Self {
            bare_multisig_standard: false,
            prefix_ranges: Vec::new(),
        }
    }

    /// Builtin table, bare multisig accepted as standard.
    pub fn permissive() -> Self {
        Self {
            bare_multisig_standard: true,
            prefix_ranges: Vec::new(),
        }
    }

    /// Parses a config from JSON; missing fields take their `standard()` values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.custom_table()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        tracing::debug!(
            "loaded config from {} ({} custom ranges)",
            path.display(),
            config.prefix_ranges.len()
        );
        Ok(config)
    }

    /// Builds the custom prefix table, or `None` when the builtin table applies.
    ///
    /// Ranges may be listed in any order; they must not overlap.
    pub fn custom_table(&self) -> Result<Option<PrefixTable>, PrefixTableError> {
        if self.prefix_ranges.is_empty() {
            return Ok(None);
        }
        PrefixTable::from_unsorted(self.prefix_ranges.clone()).map(Some)
    }
}
