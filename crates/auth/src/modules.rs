//! Module catalog: the protected functional areas of the portal.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use campus_core::DomainError;

/// A protected area of the application.
///
/// Declaration order is catalog order; menus and reports follow it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    Dashboard,
    Reports,
    Notifications,
    Classes,
    Schedule,
    Attendance,
    Courses,
    Curriculum,
    Exams,
    Grades,
    Homework,
    Feedback,
    Rooms,
    Students,
    Leads,
    TrialLessons,
    Staff,
    Timesheets,
    Payroll,
    SalaryConfiguration,
    Contracts,
    Invoices,
    Receipts,
    Expenses,
    Refunds,
    Campaigns,
    Promotions,
    Documents,
    Branches,
    Settings,
}

/// Menu grouping of modules.
///
/// Grouping is a property of the module itself, so there is no second list to
/// keep in sync with the catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleGroup {
    Overview,
    Academics,
    Students,
    HumanResources,
    Finance,
    Marketing,
    Administration,
}

impl Module {
    pub const COUNT: usize = 30;

    pub const ALL: [Module; Module::COUNT] = [
        Module::Dashboard,
        Module::Reports,
        Module::Notifications,
        Module::Classes,
        Module::Schedule,
        Module::Attendance,
        Module::Courses,
        Module::Curriculum,
        Module::Exams,
        Module::Grades,
        Module::Homework,
        Module::Feedback,
        Module::Rooms,
        Module::Students,
        Module::Leads,
        Module::TrialLessons,
        Module::Staff,
        Module::Timesheets,
        Module::Payroll,
        Module::SalaryConfiguration,
        Module::Contracts,
        Module::Invoices,
        Module::Receipts,
        Module::Expenses,
        Module::Refunds,
        Module::Campaigns,
        Module::Promotions,
        Module::Documents,
        Module::Branches,
        Module::Settings,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Module::Dashboard => "dashboard",
            Module::Reports => "reports",
            Module::Notifications => "notifications",
            Module::Classes => "classes",
            Module::Schedule => "schedule",
            Module::Attendance => "attendance",
            Module::Courses => "courses",
            Module::Curriculum => "curriculum",
            Module::Exams => "exams",
            Module::Grades => "grades",
            Module::Homework => "homework",
            Module::Feedback => "feedback",
            Module::Rooms => "rooms",
            Module::Students => "students",
            Module::Leads => "leads",
            Module::TrialLessons => "trial_lessons",
            Module::Staff => "staff",
            Module::Timesheets => "timesheets",
            Module::Payroll => "payroll",
            Module::SalaryConfiguration => "salary_configuration",
            Module::Contracts => "contracts",
            Module::Invoices => "invoices",
            Module::Receipts => "receipts",
            Module::Expenses => "expenses",
            Module::Refunds => "refunds",
            Module::Campaigns => "campaigns",
            Module::Promotions => "promotions",
            Module::Documents => "documents",
            Module::Branches => "branches",
            Module::Settings => "settings",
        }
    }

    pub const fn group(self) -> ModuleGroup {
        match self {
            Module::Dashboard | Module::Reports | Module::Notifications => ModuleGroup::Overview,
            Module::Classes
            | Module::Schedule
            | Module::Attendance
            | Module::Courses
            | Module::Curriculum
            | Module::Exams
            | Module::Grades
            | Module::Homework
            | Module::Feedback
            | Module::Rooms => ModuleGroup::Academics,
            Module::Students | Module::Leads | Module::TrialLessons => ModuleGroup::Students,
            Module::Staff | Module::Timesheets | Module::Payroll | Module::SalaryConfiguration => {
                ModuleGroup::HumanResources
            }
            Module::Contracts
            | Module::Invoices
            | Module::Receipts
            | Module::Expenses
            | Module::Refunds => ModuleGroup::Finance,
            Module::Campaigns | Module::Promotions => ModuleGroup::Marketing,
            Module::Documents | Module::Branches | Module::Settings => ModuleGroup::Administration,
        }
    }
}

impl ModuleGroup {
    pub const ALL: [ModuleGroup; 7] = [
        ModuleGroup::Overview,
        ModuleGroup::Academics,
        ModuleGroup::Students,
        ModuleGroup::HumanResources,
        ModuleGroup::Finance,
        ModuleGroup::Marketing,
        ModuleGroup::Administration,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ModuleGroup::Overview => "overview",
            ModuleGroup::Academics => "academics",
            ModuleGroup::Students => "students",
            ModuleGroup::HumanResources => "human_resources",
            ModuleGroup::Finance => "finance",
            ModuleGroup::Marketing => "marketing",
            ModuleGroup::Administration => "administration",
        }
    }

    /// Modules belonging to this group, in catalog order.
    pub fn modules(self) -> impl Iterator<Item = Module> {
        Module::ALL.into_iter().filter(move |m| m.group() == self)
    }
}

impl core::fmt::Display for Module {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::fmt::Display for ModuleGroup {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Module {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Module::ALL
            .into_iter()
            .find(|module| module.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown module '{s}'")))
    }
}
