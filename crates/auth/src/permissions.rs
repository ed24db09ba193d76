use core::str::FromStr;

use serde::{Deserialize, Serialize};

use campus_core::DomainError;

/// An action a caller may attempt on a module.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
    Approve,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::View,
        Action::Create,
        Action::Edit,
        Action::Delete,
        Action::Approve,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::Approve => "approve",
        }
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown action '{s}'")))
    }
}

/// Permission record for one (role, module) pair.
///
/// Every field is explicit. Records are built from [`ModulePermission::NONE`]
/// (or [`ModulePermission::VIEW`]) with the `const` builder methods, so an
/// action or flag that is not switched on is `false`, `approve` included.
///
/// The three condition flags are directives for other layers; none of them
/// changes the action booleans.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ModulePermission {
    pub view: bool,
    pub create: bool,
    pub edit: bool,
    pub delete: bool,
    pub approve: bool,

    /// Data access must be filtered to records owned by the caller.
    pub only_own_records: bool,
    /// Sensitive fields (contact details, pay) must be redacted.
    pub hide_sensitive_field: bool,
    /// The action must be routed through a second approver.
    pub requires_approval: bool,
}

impl ModulePermission {
    /// Full denial: the value of every pair the matrix does not grant.
    pub const NONE: Self = Self {
        view: false,
        create: false,
        edit: false,
        delete: false,
        approve: false,
        only_own_records: false,
        hide_sensitive_field: false,
        requires_approval: false,
    };

    pub const VIEW: Self = Self::NONE.with_view();

    /// Every action, no restricting flags.
    pub const FULL: Self = Self::VIEW.with_create().with_edit().with_delete().with_approve();

    /// View, create and edit; no delete, no approve.
    pub const MANAGE: Self = Self::VIEW.with_create().with_edit();

    pub const fn with_view(self) -> Self {
        Self { view: true, ..self }
    }

    pub const fn with_create(self) -> Self {
        Self { create: true, ..self }
    }

    pub const fn with_edit(self) -> Self {
        Self { edit: true, ..self }
    }

    pub const fn with_delete(self) -> Self {
        Self { delete: true, ..self }
    }

    pub const fn with_approve(self) -> Self {
        Self { approve: true, ..self }
    }

    pub const fn own_records(self) -> Self {
        Self { only_own_records: true, ..self }
    }

    pub const fn hide_sensitive(self) -> Self {
        Self { hide_sensitive_field: true, ..self }
    }

    pub const fn needs_approval(self) -> Self {
        Self { requires_approval: true, ..self }
    }

    /// The stored boolean for `action`.
    pub const fn allows(&self, action: Action) -> bool {
        match action {
            Action::View => self.view,
            Action::Create => self.create,
            Action::Edit => self.edit,
            Action::Delete => self.delete,
            Action::Approve => self.approve,
        }
    }

    /// Whether any action at all is granted.
    pub fn grants_anything(&self) -> bool {
        Action::ALL.into_iter().any(|a| self.allows(a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_string_roundtrip() {
        for action in Action::ALL {
            assert_eq!(action.as_str().parse::<Action>().unwrap(), action);
            assert_eq!(action.to_string(), action.as_str());
        }
        assert!("read".parse::<Action>().is_err());
        assert!("View".parse::<Action>().is_err());
    }

    #[test]
    fn none_denies_everything_and_sets_no_flags() {
        let p = ModulePermission::NONE;
        assert!(Action::ALL.into_iter().all(|a| !p.allows(a)));
        assert!(!p.only_own_records && !p.hide_sensitive_field && !p.requires_approval);
        assert_eq!(p, ModulePermission::default());
    }

    #[test]
    fn full_grants_every_action_without_flags() {
        let p = ModulePermission::FULL;
        assert!(Action::ALL.into_iter().all(|a| p.allows(a)));
        assert!(!p.only_own_records && !p.hide_sensitive_field && !p.requires_approval);
    }

    #[test]
    fn approve_stays_false_unless_switched_on() {
        let p = ModulePermission::MANAGE.with_delete();
        assert!(p.allows(Action::Delete));
        assert!(!p.allows(Action::Approve));
    }

    #[test]
    fn flags_do_not_touch_actions() {
        let p = ModulePermission::VIEW.own_records().hide_sensitive().needs_approval();
        assert!(p.view);
        assert!(!p.create && !p.edit && !p.delete && !p.approve);
        assert!(p.only_own_records && p.hide_sensitive_field && p.requires_approval);
    }
}
