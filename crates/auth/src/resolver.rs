//! Job-title → role resolution.
//!
//! Titles come from the external staff directory and are untrusted. Matching is
//! exact and case-sensitive; there is no fuzzy or partial matching. Anything
//! that does not match degrades to [`Role::least_privileged`].

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use campus_core::{DomainError, DomainResult};

use crate::Role;

/// Outcome of resolving one position string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "role", rename_all = "snake_case")]
pub enum RoleResolution {
    /// The title matched an alias exactly.
    Matched(Role),
    /// The title was empty or unknown; least privilege applies.
    Fallback(Role),
}

impl RoleResolution {
    pub fn role(self) -> Role {
        match self {
            RoleResolution::Matched(role) | RoleResolution::Fallback(role) => role,
        }
    }

    pub fn is_fallback(self) -> bool {
        matches!(self, RoleResolution::Fallback(_))
    }
}

/// Titles known out of the box, as the staff directory spells them.
const BUILTIN_ALIASES: &[(&str, Role)] = &[
    ("Admin", Role::Administrator),
    ("Administrator", Role::Administrator),
    ("Quản lý", Role::Administrator),
    ("Quản lý (Admin)", Role::Administrator),
    ("Giám đốc", Role::Administrator),
    ("Front-desk", Role::FrontOffice),
    ("Front Office", Role::FrontOffice),
    ("Customer Care", Role::FrontOffice),
    ("CSKH", Role::FrontOffice),
    ("Lễ tân", Role::FrontOffice),
    ("Chăm sóc khách hàng", Role::FrontOffice),
    ("Accountant", Role::Accountant),
    ("Kế toán", Role::Accountant),
    ("Marketing", Role::Marketer),
    ("Marketer", Role::Marketer),
    ("Nhân viên Marketing", Role::Marketer),
    ("Giáo viên", Role::VietnameseTeacher),
    ("Giáo viên Việt", Role::VietnameseTeacher),
    ("Giáo viên Việt Nam", Role::VietnameseTeacher),
    ("Vietnamese Teacher", Role::VietnameseTeacher),
    ("Giáo viên nước ngoài", Role::ForeignTeacher),
    ("Foreign Teacher", Role::ForeignTeacher),
    ("Native Teacher", Role::ForeignTeacher),
    ("Trợ giảng", Role::TeachingAssistant),
    ("Teaching Assistant", Role::TeachingAssistant),
    ("TA", Role::TeachingAssistant),
];

/// Exact-match lookup table from job title to role.
///
/// Loaded once at startup (builtin titles plus optional overrides) and
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    aliases: HashMap<String, Role>,
}

impl AliasTable {
    pub fn builtin() -> Self {
        let aliases = BUILTIN_ALIASES
            .iter()
            .map(|(title, role)| ((*title).to_string(), *role))
            .collect();
        Self { aliases }
    }

    /// Add titles on top of the current table.
    ///
    /// A title may be added or restated with the same role, but never repointed
    /// to a different role, and never empty. All-or-nothing: on error the table
    /// is left as it was.
    pub fn extend<I, S>(&mut self, overrides: I) -> DomainResult<usize>
    where
        I: IntoIterator<Item = (S, Role)>,
        S: Into<String>,
    {
        let mut staged: HashMap<String, Role> = HashMap::new();
        for (title, role) in overrides {
            let title = title.into();
            if title.trim().is_empty() {
                return Err(DomainError::validation("role alias title must not be empty"));
            }
            let existing = self
                .aliases
                .get(&title)
                .or_else(|| staged.get(&title))
                .copied();
            match existing {
                Some(existing) if existing != role => {
                    return Err(DomainError::validation(format!(
                        "alias '{title}' already maps to '{existing}', refusing to remap to '{role}'"
                    )));
                }
                Some(_) => {}
                None => {
                    staged.insert(title, role);
                }
            }
        }

        let added = staged.len();
        self.aliases.extend(staged);
        Ok(added)
    }

    /// Exact lookup; `None` when the title is not a known alias.
    pub fn lookup(&self, position: &str) -> Option<Role> {
        self.aliases.get(position).copied()
    }

    /// Resolve a position, keeping track of whether it matched.
    pub fn resolve(&self, position: &str) -> RoleResolution {
        match self.lookup(position) {
            Some(role) => RoleResolution::Matched(role),
            None => RoleResolution::Fallback(Role::least_privileged()),
        }
    }

    /// Total resolution: unknown or empty text yields the least-privileged role.
    ///
    /// Callers that need to flag the degradation should use [`Self::resolve`].
    pub fn resolve_role(&self, position: &str) -> Role {
        self.resolve(position).role()
    }

    /// Sorted view of the table, for reports.
    pub fn entries(&self) -> BTreeMap<&str, Role> {
        self.aliases.iter().map(|(t, r)| (t.as_str(), *r)).collect()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_synonyms_resolve() {
        let table = AliasTable::builtin();
        assert_eq!(table.resolve_role("Admin"), Role::Administrator);
        assert_eq!(table.resolve_role("Quản lý (Admin)"), Role::Administrator);
        assert_eq!(table.resolve_role("Front-desk"), Role::FrontOffice);
        assert_eq!(table.resolve_role("Kế toán"), Role::Accountant);
        assert_eq!(table.resolve_role("Giáo viên nước ngoài"), Role::ForeignTeacher);
    }

    #[test]
    fn unknown_and_empty_fall_back_to_least_privilege() {
        let table = AliasTable::builtin();
        for position in ["", "Some Unknown Title", " Admin", "admin", "ADMIN", "Admin "] {
            let resolution = table.resolve(position);
            assert!(resolution.is_fallback(), "{position:?} should not match");
            assert_eq!(resolution.role(), Role::TeachingAssistant);
        }
    }

    #[test]
    fn matching_is_not_partial() {
        let table = AliasTable::builtin();
        assert_eq!(table.resolve_role("Quản lý (Admin) tạm thời"), Role::TeachingAssistant);
        assert_eq!(table.resolve_role("Adm"), Role::TeachingAssistant);
    }

    #[test]
    fn extend_adds_new_titles() {
        let mut table = AliasTable::builtin();
        let before = table.len();
        let added = table
            .extend([("Head Teacher", Role::VietnameseTeacher), ("Admin", Role::Administrator)])
            .unwrap();
        assert_eq!(added, 1);
        assert_eq!(table.len(), before + 1);
        assert_eq!(table.resolve("Head Teacher"), RoleResolution::Matched(Role::VietnameseTeacher));
    }

    #[test]
    fn extend_refuses_to_repoint_or_accept_blank_titles() {
        let mut table = AliasTable::builtin();
        assert!(table.extend([("TA", Role::Administrator)]).is_err());
        assert!(table.extend([("  ", Role::Marketer)]).is_err());
        assert_eq!(table.resolve_role("TA"), Role::TeachingAssistant);
    }

    #[test]
    fn failed_extend_leaves_table_untouched() {
        let mut table = AliasTable::builtin();
        let before = table.clone();

        let result = table.extend([("Aardvark Boss", Role::Administrator), ("TA", Role::Administrator)]);
        assert!(result.is_err());
        assert_eq!(table, before);
        assert_eq!(table.lookup("Aardvark Boss"), None);
        assert_eq!(table.resolve_role("Aardvark Boss"), Role::TeachingAssistant);
    }

    #[test]
    fn extend_rejects_one_title_given_two_roles() {
        let mut table = AliasTable::builtin();
        let before = table.clone();

        let result = table.extend([("Head Teacher", Role::VietnameseTeacher), ("Head Teacher", Role::Administrator)]);
        assert!(result.is_err());
        assert_eq!(table, before);

        let added = table
            .extend([("Head Teacher", Role::VietnameseTeacher), ("Head Teacher", Role::VietnameseTeacher)])
            .unwrap();
        assert_eq!(added, 1);
    }

    #[test]
    fn resolution_serializes_with_status() {
        let json = serde_json::to_value(RoleResolution::Fallback(Role::TeachingAssistant)).unwrap();
        assert_eq!(json["status"], "fallback");
        assert_eq!(json["role"], "teaching_assistant");
    }

    proptest! {
        /// Property: resolution is total and never broader than an exact alias match.
        #[test]
        fn arbitrary_text_never_escalates(position in ".*") {
            let table = AliasTable::builtin();
            let resolution = table.resolve(&position);
            match table.lookup(&position) {
                Some(role) => prop_assert_eq!(resolution, RoleResolution::Matched(role)),
                None => prop_assert_eq!(resolution, RoleResolution::Fallback(Role::TeachingAssistant)),
            }
        }
    }
}
