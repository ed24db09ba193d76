//! Process-wide policy engine: the validated matrix plus the alias table.

use tracing::{info, warn};

use campus_core::DomainResult;

use crate::config::{ConfigError, PolicyConfig};
use crate::{AliasTable, PermissionMatrix, StaffContext, StaffRecord};

/// Tracing target for security-relevant events.
pub const SECURITY_TARGET: &str = "campus::security";

/// Read-only after construction; share it behind an `Arc` or a `'static`.
#[derive(Debug, Clone)]
pub struct PolicyEngine {
    matrix: PermissionMatrix,
    aliases: AliasTable,
}

impl PolicyEngine {
    /// Assemble an engine, refusing a matrix that fails validation.
    pub fn new(matrix: PermissionMatrix, aliases: AliasTable) -> DomainResult<Self> {
        matrix.validate()?;
        Ok(Self { matrix, aliases })
    }

    /// Compiled-in matrix and builtin aliases.
    pub fn standard() -> DomainResult<Self> {
        Self::new(PermissionMatrix::standard()?, AliasTable::builtin())
    }

    pub fn from_config(config: &PolicyConfig) -> Result<Self, ConfigError> {
        let aliases = config.load_aliases()?;
        let engine = Self::new(PermissionMatrix::standard()?, aliases)?;

        info!(
            target: SECURITY_TARGET,
            aliases = engine.aliases.len(),
            alias_file = ?config.alias_file,
            "policy engine ready"
        );
        Ok(engine)
    }

    pub fn matrix(&self) -> &PermissionMatrix {
        &self.matrix
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Resolve a caller's role from their directory record.
    ///
    /// An unrecognised position is logged as a security event and the caller
    /// gets the least-privileged role; this never fails.
    pub fn establish(&self, record: &StaffRecord) -> StaffContext {
        let resolution = self.aliases.resolve(&record.position);

        if resolution.is_fallback() {
            warn!(
                target: SECURITY_TARGET,
                staff_id = %record.id,
                position = ?record.position,
                role = %resolution.role(),
                "unrecognised position; applying least privilege"
            );
        }

        StaffContext::new(record.id.clone(), resolution)
    }
}
