//! `campus-auth` — role-based authorization policy for the staff portal.
//!
//! Pure and synchronous: no IO outside startup configuration, no clocks, no
//! mutable state after the engine is built. Decisions are plain booleans;
//! anything not explicitly granted is denied.

pub mod audit;
pub mod authorize;
pub mod config;
pub mod context;
pub mod engine;
pub mod matrix;
pub mod menu;
pub mod modules;
pub mod permissions;
pub mod resolver;
pub mod roles;

pub use audit::PolicyReport;
pub use authorize::{AuthzError, DecisionExplanation, Directives};
pub use config::{ConfigError, PolicyConfig};
pub use context::{StaffContext, StaffRecord};
pub use engine::PolicyEngine;
pub use matrix::PermissionMatrix;
pub use menu::MenuGroup;
pub use modules::{Module, ModuleGroup};
pub use permissions::{Action, ModulePermission};
pub use resolver::{AliasTable, RoleResolution};
pub use roles::Role;
