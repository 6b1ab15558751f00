//! Branch body schemas

use super::{FieldRule, Schema};

/// Branch phone numbers are plain 10-digit numbers.
const PHONE_RANGE: std::ops::RangeInclusive<u64> = 1_000_000_000..=9_999_999_999;

/// Create: every field required, phone number constrained to 10 digits.
pub fn create_schema() -> Schema {
    Schema::new("branch create")
        .field("name", FieldRule::text().required())
        .field("address", FieldRule::text().required())
        .field("phoneNumber", FieldRule::number().required().range(PHONE_RANGE))
}

/// Update: only the allow-listed fields (`address`, `phoneNumber`) are
/// accepted; `id` and `name` are rejected even when present.
pub fn update_schema() -> Schema {
    Schema::new("branch update")
        .field("id", FieldRule::ident().forbidden())
        .field("name", FieldRule::text().forbidden())
        .field("address", FieldRule::text())
        .field("phoneNumber", FieldRule::number())
}
