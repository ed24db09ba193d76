//! Startup configuration for the policy engine.
//!
//! The matrix is compiled in. The only dynamic input is an optional JSON file
//! of extra job-title aliases:
//!
//! ```json
//! { "Head Teacher": "vietnamese_teacher", "Thu ngân": "front_office" }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use campus_core::DomainError;

use crate::{AliasTable, Role};

/// Environment variable naming the alias override file.
pub const ROLE_ALIASES_ENV: &str = "CAMPUS_ROLE_ALIASES";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid alias file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    pub alias_file: Option<PathBuf>,
}

impl PolicyConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let alias_file = lookup(ROLE_ALIASES_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        Self { alias_file }
    }

    pub fn with_alias_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.alias_file = Some(path.into());
        self
    }

    /// Builtin aliases, extended with the override file when one is configured.
    pub fn load_aliases(&self) -> Result<AliasTable, ConfigError> {
        let mut table = AliasTable::builtin();
        if let Some(path) = &self.alias_file {
            let overrides = read_alias_file(path)?;
            table.extend(overrides)?;
        }
        Ok(table)
    }
}

fn read_alias_file(path: &Path) -> Result<BTreeMap<String, Role>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
