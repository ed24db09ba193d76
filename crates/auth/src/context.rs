use serde::{Deserialize, Serialize};

use campus_core::StaffId;

use crate::{Role, RoleResolution};

/// Staff record as supplied by the external directory for an authenticated
/// caller. Authentication itself happens elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRecord {
    pub id: StaffId,
    /// Free-text job title. Untrusted.
    #[serde(default)]
    pub position: String,
}

/// Authorization context for one caller.
///
/// Built once when the caller's identity is established and passed by value
/// afterwards; the engine does not keep it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffContext {
    staff_id: StaffId,
    resolution: RoleResolution,
}

impl StaffContext {
    pub fn new(staff_id: StaffId, resolution: RoleResolution) -> Self {
        Self {
            staff_id,
            resolution,
        }
    }

    pub fn staff_id(&self) -> &StaffId {
        &self.staff_id
    }

    pub fn role(&self) -> Role {
        self.resolution.role()
    }

    pub fn resolution(&self) -> RoleResolution {
        self.resolution
    }

    /// True when the position was not recognised and least privilege applied.
    pub fn is_degraded(&self) -> bool {
        self.resolution.is_fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_position_defaults_to_empty() {
        let record: StaffRecord = serde_json::from_str(r#"{"id": "nv-1"}"#).unwrap();
        assert_eq!(record.position, "");
    }

    #[test]
    fn record_requires_a_non_empty_id() {
        assert!(serde_json::from_str::<StaffRecord>(r#"{"id": "", "position": "Admin"}"#).is_err());
    }

    #[test]
    fn context_reports_degradation() {
        let id = StaffId::new("nv-9").unwrap();
        let ctx = StaffContext::new(id, RoleResolution::Fallback(Role::TeachingAssistant));
        assert!(ctx.is_degraded());
        assert_eq!(ctx.role(), Role::TeachingAssistant);
    }
}
