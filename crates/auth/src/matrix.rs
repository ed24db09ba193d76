//! Static Role × Module permission matrix.
//!
//! The matrix is a dense two-dimensional array: every (role, module) pair has a
//! defined [`ModulePermission`], and pairs the grant table does not mention hold
//! [`ModulePermission::NONE`]. It is built once at startup, validated, and never
//! mutated afterwards.

use tracing::debug;

use campus_core::{DomainError, DomainResult};

use crate::{Action, Module, ModulePermission, Role};

/// Grants for one role: the modules it may touch, and how.
pub type RoleGrants = &'static [(Module, ModulePermission)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionMatrix {
    cells: [[ModulePermission; Module::COUNT]; Role::COUNT],
}

impl PermissionMatrix {
    /// Build a matrix from a grant table.
    ///
    /// Roles and modules missing from the table are fully denied. A role listed
    /// twice, or a module listed twice for the same role, is rejected: the table
    /// must say one thing per pair.
    pub fn from_grants(grants: &[(Role, RoleGrants)]) -> DomainResult<Self> {
        let mut cells = [[ModulePermission::NONE; Module::COUNT]; Role::COUNT];
        let mut seen_roles = [false; Role::COUNT];

        for (role, row) in grants {
            if seen_roles[role.index()] {
                return Err(DomainError::invariant(format!(
                    "role '{role}' has more than one grant row"
                )));
            }
            seen_roles[role.index()] = true;

            let mut seen_modules = [false; Module::COUNT];
            for (module, permission) in row.iter() {
                if seen_modules[module.index()] {
                    return Err(DomainError::invariant(format!(
                        "module '{module}' is granted twice to role '{role}'"
                    )));
                }
                seen_modules[module.index()] = true;
                cells[role.index()][module.index()] = *permission;
            }
        }

        Ok(Self { cells })
    }

    /// The portal's compiled-in policy, built and validated.
    pub fn standard() -> DomainResult<Self> {
        let matrix = Self::from_grants(STANDARD_GRANTS)?;
        matrix.validate()?;
        debug!(
            roles = Role::COUNT,
            modules = Module::COUNT,
            "permission matrix validated"
        );
        Ok(matrix)
    }

    /// Startup checks that must hold for any matrix the engine serves.
    ///
    /// The administrator holds every action on every cataloged module. This is
    /// asserted here rather than assumed, so an edit to the grant table cannot
    /// quietly revoke it.
    pub fn validate(&self) -> DomainResult<()> {
        for module in Module::ALL {
            let permission = self.permission(Role::Administrator, module);
            if let Some(action) = Action::ALL.into_iter().find(|a| !permission.allows(*a)) {
                return Err(DomainError::invariant(format!(
                    "administrator must hold '{action}' on '{module}'"
                )));
            }
        }
        Ok(())
    }

    /// The record stored for (role, module). Never absent.
    pub fn permission(&self, role: Role, module: Module) -> ModulePermission {
        self.cells[role.index()][module.index()]
    }

    /// Every module of `role`'s row, in catalog order.
    pub fn row(&self, role: Role) -> impl Iterator<Item = (Module, ModulePermission)> + '_ {
        Module::ALL
            .into_iter()
            .map(move |module| (module, self.permission(role, module)))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Grant table
// ─────────────────────────────────────────────────────────────────────────────

const VIEW: ModulePermission = ModulePermission::VIEW;
const MANAGE: ModulePermission = ModulePermission::MANAGE;
const FULL: ModulePermission = ModulePermission::FULL;

pub const STANDARD_GRANTS: &[(Role, RoleGrants)] = &[
    (Role::Administrator, ADMINISTRATOR),
    (Role::FrontOffice, FRONT_OFFICE),
    (Role::Accountant, ACCOUNTANT),
    (Role::Marketer, MARKETER),
    (Role::VietnameseTeacher, VIETNAMESE_TEACHER),
    (Role::ForeignTeacher, FOREIGN_TEACHER),
    (Role::TeachingAssistant, TEACHING_ASSISTANT),
];

const ADMINISTRATOR: RoleGrants = &[
    (Module::Dashboard, FULL),
    (Module::Reports, FULL),
    (Module::Notifications, FULL),
    (Module::Classes, FULL),
    (Module::Schedule, FULL),
    (Module::Attendance, FULL),
    (Module::Courses, FULL),
    (Module::Curriculum, FULL),
    (Module::Exams, FULL),
    (Module::Grades, FULL),
    (Module::Homework, FULL),
    (Module::Feedback, FULL),
    (Module::Rooms, FULL),
    (Module::Students, FULL),
    (Module::Leads, FULL),
    (Module::TrialLessons, FULL),
    (Module::Staff, FULL),
    (Module::Timesheets, FULL),
    (Module::Payroll, FULL),
    (Module::SalaryConfiguration, FULL),
    (Module::Contracts, FULL),
    (Module::Invoices, FULL),
    (Module::Receipts, FULL),
    (Module::Expenses, FULL),
    (Module::Refunds, FULL),
    (Module::Campaigns, FULL),
    (Module::Promotions, FULL),
    (Module::Documents, FULL),
    (Module::Branches, FULL),
    (Module::Settings, FULL),
];

// Front desk / customer care. Money movements they start go to a second approver.
const FRONT_OFFICE: RoleGrants = &[
    (Module::Dashboard, VIEW),
    (Module::Reports, VIEW),
    (Module::Notifications, MANAGE),
    (Module::Classes, MANAGE),
    (Module::Schedule, MANAGE.with_delete()),
    (Module::Attendance, MANAGE),
    (Module::Courses, VIEW),
    (Module::Curriculum, VIEW),
    (Module::Exams, VIEW),
    (Module::Grades, VIEW),
    (Module::Homework, VIEW),
    (Module::Feedback, MANAGE),
    (Module::Rooms, VIEW),
    (Module::Students, MANAGE.with_delete().needs_approval()),
    (Module::Leads, MANAGE.with_delete()),
    (Module::TrialLessons, MANAGE.with_delete()),
    (Module::Staff, VIEW.hide_sensitive()),
    (Module::Timesheets, VIEW.own_records()),
    (Module::Payroll, VIEW.own_records()),
    (Module::Contracts, MANAGE.needs_approval()),
    (Module::Invoices, MANAGE.needs_approval()),
    (Module::Receipts, MANAGE),
    (Module::Documents, VIEW),
];

const ACCOUNTANT: RoleGrants = &[
    (Module::Dashboard, VIEW),
    (Module::Reports, VIEW),
    (Module::Notifications, VIEW),
    (Module::Classes, VIEW),
    (Module::Courses, VIEW),
    (Module::Students, VIEW),
    (Module::Staff, VIEW),
    (Module::Timesheets, VIEW.with_approve()),
    (Module::Payroll, FULL.needs_approval()),
    (Module::SalaryConfiguration, MANAGE.needs_approval()),
    (Module::Contracts, MANAGE.with_approve()),
    (Module::Invoices, FULL),
    (Module::Receipts, FULL),
    (Module::Expenses, FULL),
    (Module::Refunds, MANAGE.with_approve().needs_approval()),
    (Module::Documents, VIEW),
];

const MARKETER: RoleGrants = &[
    (Module::Dashboard, VIEW),
    (Module::Reports, VIEW),
    (Module::Notifications, MANAGE),
    (Module::Courses, VIEW),
    (Module::Students, VIEW.hide_sensitive()),
    (Module::Leads, MANAGE.with_delete()),
    (Module::TrialLessons, MANAGE),
    (Module::Timesheets, VIEW.own_records()),
    (Module::Payroll, VIEW.own_records()),
    (Module::Campaigns, FULL),
    (Module::Promotions, MANAGE.with_delete().needs_approval()),
    (Module::Documents, VIEW),
];

const VIETNAMESE_TEACHER: RoleGrants = &[
    (Module::Dashboard, VIEW),
    (Module::Notifications, VIEW),
    (Module::Classes, VIEW.own_records().hide_sensitive()),
    (Module::Schedule, VIEW.own_records()),
    (Module::Attendance, MANAGE.own_records()),
    (Module::Courses, VIEW),
    (Module::Curriculum, VIEW),
    (Module::Exams, MANAGE.own_records()),
    (Module::Grades, MANAGE.own_records()),
    (Module::Homework, MANAGE.with_delete().own_records()),
    (Module::Feedback, MANAGE.own_records()),
    (Module::Rooms, VIEW),
    (Module::Students, VIEW.own_records().hide_sensitive()),
    (Module::Timesheets, VIEW.own_records()),
    (Module::Payroll, VIEW.own_records()),
    (Module::Documents, VIEW),
];

// Same academic scope as local teachers, but no student directory access.
const FOREIGN_TEACHER: RoleGrants = &[
    (Module::Dashboard, VIEW),
    (Module::Notifications, VIEW),
    (Module::Classes, VIEW.own_records().hide_sensitive()),
    (Module::Schedule, VIEW.own_records()),
    (Module::Attendance, MANAGE.own_records()),
    (Module::Courses, VIEW),
    (Module::Curriculum, VIEW),
    (Module::Exams, VIEW.own_records()),
    (Module::Grades, MANAGE.own_records()),
    (Module::Homework, MANAGE.with_delete().own_records()),
    (Module::Feedback, MANAGE.own_records()),
    (Module::Rooms, VIEW),
    (Module::Timesheets, VIEW.own_records()),
    (Module::Payroll, VIEW.own_records()),
    (Module::Documents, VIEW),
];

const TEACHING_ASSISTANT: RoleGrants = &[
    (Module::Dashboard, VIEW),
    (Module::Notifications, VIEW),
    (Module::Classes, VIEW.own_records().hide_sensitive()),
    (Module::Schedule, VIEW.own_records()),
    (Module::Attendance, VIEW.with_edit().own_records()),
    (Module::Homework, VIEW.own_records()),
    (Module::Timesheets, VIEW.own_records()),
    (Module::Payroll, VIEW.own_records()),
];
