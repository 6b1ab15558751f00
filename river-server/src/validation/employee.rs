//! Employee body schemas

use super::{FieldRule, Schema};

/// Create: every field required. The email-format rule (including the
/// configurable TLD list) applies to creation only.
pub fn create_schema(email_allowed_tlds: &[String]) -> Schema {
    Schema::new("employee create")
        .field("name", FieldRule::text().required())
        .field("position", FieldRule::text().required())
        .field("department", FieldRule::text().required())
        .field("email", FieldRule::text().required().email(email_allowed_tlds))
        .field("phoneNumber", FieldRule::number().required())
        .field("branchId", FieldRule::ident().required())
}

/// Update: the allow-list is `position`, `department`, `email`,
/// `phoneNumber`, `branchId` — all optional; `id` and `name` are
/// rejected even when present. Email format is not re-checked here.
pub fn update_schema() -> Schema {
    Schema::new("employee update")
        .field("id", FieldRule::ident().forbidden())
        .field("name", FieldRule::text().forbidden())
        .field("position", FieldRule::text())
        .field("department", FieldRule::text())
        .field("email", FieldRule::text())
        .field("phoneNumber", FieldRule::number())
        .field("branchId", FieldRule::ident())
}
