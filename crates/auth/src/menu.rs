//! Menu visibility, derived from the evaluator.
//!
//! Nothing here is stored: the visible set is recomputed from `can_view` on
//! every call, so the menu cannot disagree with the matrix.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{Module, ModuleGroup, PermissionMatrix, Role};

/// One menu section and the modules shown under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuGroup {
    pub group: ModuleGroup,
    pub modules: Vec<Module>,
}

impl PermissionMatrix {
    /// `{ m | can_view(role, m) }` over the whole catalog.
    pub fn visible_modules(&self, role: Role) -> BTreeSet<Module> {
        Module::ALL
            .into_iter()
            .filter(|module| self.can_view(role, *module))
            .collect()
    }

    /// Visible modules bucketed by [`ModuleGroup`], in catalog order.
    ///
    /// Groups with nothing visible are left out.
    pub fn menu_groups(&self, role: Role) -> Vec<MenuGroup> {
        let visible = self.visible_modules(role);

        ModuleGroup::ALL
            .into_iter()
            .filter_map(|group| {
                let modules: Vec<Module> = group.modules().filter(|m| visible.contains(m)).collect();
                (!modules.is_empty()).then_some(MenuGroup { group, modules })
            })
            .collect()
    }
}
