//! Permission evaluator.
//!
//! - No IO
//! - No panics
//! - Total: every query yields a definite boolean
//!
//! Every action predicate goes through [`PermissionMatrix::evaluate`], and
//! every directive predicate reads the same record, so the answers cannot
//! drift apart.

use serde::Serialize;
use thiserror::Error;

use crate::{Action, Module, PermissionMatrix, Role};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: role '{role}' may not {action} on '{module}'")]
    Forbidden {
        role: Role,
        module: Module,
        action: Action,
    },
}

/// Directives other layers must honor for a (role, module) pair.
///
/// The engine only emits these; filtering, redaction and approval routing are
/// done by the data-access and workflow layers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Directives {
    pub restrict_to_own_records: bool,
    pub hide_sensitive_field: bool,
    pub requires_approval: bool,
}

impl PermissionMatrix {
    /// Can `role` perform `action` on `module`?
    pub fn evaluate(&self, role: Role, module: Module, action: Action) -> bool {
        self.permission(role, module).allows(action)
    }

    pub fn can_view(&self, role: Role, module: Module) -> bool {
        self.evaluate(role, module, Action::View)
    }

    pub fn can_create(&self, role: Role, module: Module) -> bool {
        self.evaluate(role, module, Action::Create)
    }

    pub fn can_edit(&self, role: Role, module: Module) -> bool {
        self.evaluate(role, module, Action::Edit)
    }

    pub fn can_delete(&self, role: Role, module: Module) -> bool {
        self.evaluate(role, module, Action::Delete)
    }

    pub fn can_approve(&self, role: Role, module: Module) -> bool {
        self.evaluate(role, module, Action::Approve)
    }

    /// The data-access layer must filter to records owned by the caller.
    pub fn should_restrict_to_own_records(&self, role: Role, module: Module) -> bool {
        self.permission(role, module).only_own_records
    }

    /// The data-access layer must redact sensitive fields before returning data.
    pub fn should_hide_sensitive_field(&self, role: Role, module: Module) -> bool {
        self.permission(role, module).hide_sensitive_field
    }

    /// The workflow layer must route the action through a second approver.
    ///
    /// This does not gate the action: `can_delete` may be `true` while this is
    /// also `true`, and the reverse.
    pub fn requires_approval(&self, role: Role, module: Module) -> bool {
        self.permission(role, module).requires_approval
    }

    pub fn directives(&self, role: Role, module: Module) -> Directives {
        Directives {
            restrict_to_own_records: self.should_restrict_to_own_records(role, module),
            hide_sensitive_field: self.should_hide_sensitive_field(role, module),
            requires_approval: self.requires_approval(role, module),
        }
    }

    /// Result-shaped check for callers at a command boundary.
    ///
    /// On success, returns the directives the caller must apply.
    pub fn authorize(&self, role: Role, module: Module, action: Action) -> Result<Directives, AuthzError> {
        if self.evaluate(role, module, action) {
            Ok(self.directives(role, module))
        } else {
            Err(AuthzError::Forbidden { role, module, action })
        }
    }

    /// Explain why a decision was made (or would be made), for audit tooling.
    pub fn explain(&self, role: Role, module: Module, action: Action) -> DecisionExplanation {
        let granted = self.evaluate(role, module, action);
        let directives = self.directives(role, module);

        let reason = if granted {
            format!("role '{role}' is granted '{action}' on '{module}'")
        } else if self.permission(role, module).grants_anything() {
            format!("role '{role}' has access to '{module}' but not '{action}'")
        } else {
            format!("role '{role}' has no grant on '{module}'; access is denied by default")
        };

        DecisionExplanation {
            role,
            module,
            action,
            granted,
            reason,
            directives,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Authorization Explanation (Audit Trail)
// ─────────────────────────────────────────────────────────────────────────────

/// Detailed explanation of one authorization decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionExplanation {
    pub role: Role,
    pub module: Module,
    pub action: Action,
    pub granted: bool,
    /// Human-readable reason for the decision.
    pub reason: String,
    pub directives: Directives,
}
