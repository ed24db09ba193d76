use core::str::FromStr;

use serde::{Deserialize, Serialize};

use campus_core::DomainError;

/// Canonical staff role used for RBAC.
///
/// The catalog is closed: job titles from the staff directory are mapped onto
/// one of these variants by the [`crate::resolver`], never used directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Administrator,
    FrontOffice,
    Accountant,
    Marketer,
    VietnameseTeacher,
    ForeignTeacher,
    TeachingAssistant,
}

impl Role {
    pub const COUNT: usize = 7;

    /// Every role, in catalog order.
    pub const ALL: [Role; Role::COUNT] = [
        Role::Administrator,
        Role::FrontOffice,
        Role::Accountant,
        Role::Marketer,
        Role::VietnameseTeacher,
        Role::ForeignTeacher,
        Role::TeachingAssistant,
    ];

    /// The most restrictive role in the catalog.
    ///
    /// Any position that cannot be resolved degrades to this role.
    pub const fn least_privileged() -> Role {
        Role::TeachingAssistant
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::FrontOffice => "front_office",
            Role::Accountant => "accountant",
            Role::Marketer => "marketer",
            Role::VietnameseTeacher => "vietnamese_teacher",
            Role::ForeignTeacher => "foreign_teacher",
            Role::TeachingAssistant => "teaching_assistant",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Role::Administrator => "Full system administrator with every action on every module",
            Role::FrontOffice => "Front desk and customer care: enrolment, students, schedules",
            Role::Accountant => "Finance staff: contracts, invoices, receipts, payroll",
            Role::Marketer => "Marketing staff: leads, campaigns, promotions",
            Role::VietnameseTeacher => "Local teacher limited to their own classes and students",
            Role::ForeignTeacher => "Foreign teacher limited to their own classes",
            Role::TeachingAssistant => "Teaching assistant with read access to assigned classes",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the canonical snake_case name only.
///
/// Free-text job titles go through [`crate::resolver::AliasTable`] instead.
impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown role '{s}'")))
    }
}
