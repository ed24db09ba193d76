//! Read-only dump of the policy, for auditing and review.

use serde::Serialize;

use crate::{AliasTable, Module, ModuleGroup, ModulePermission, PermissionMatrix, Role};

/// One non-empty cell of a role's row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleGrant {
    pub module: Module,
    pub group: ModuleGroup,
    pub permission: ModulePermission,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleReport {
    pub role: Role,
    pub description: &'static str,
    /// Titles in the alias table that resolve to this role.
    pub aliases: Vec<String>,
    pub grants: Vec<ModuleGrant>,
}

/// Complete view of the RBAC configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyReport {
    pub least_privileged: Role,
    pub roles: Vec<RoleReport>,
}

impl PolicyReport {
    pub fn build(matrix: &PermissionMatrix, aliases: &AliasTable) -> Self {
        let entries = aliases.entries();

        let roles = Role::ALL
            .into_iter()
            .map(|role| RoleReport {
                role,
                description: role.description(),
                aliases: entries
                    .iter()
                    .filter(|(_, r)| **r == role)
                    .map(|(title, _)| (*title).to_string())
                    .collect(),
                grants: matrix
                    .row(role)
                    .filter(|(_, p)| p.grants_anything())
                    .map(|(module, permission)| ModuleGrant {
                        module,
                        group: module.group(),
                        permission,
                    })
                    .collect(),
            })
            .collect();

        Self {
            least_privileged: Role::least_privileged(),
            roles,
        }
    }
}
