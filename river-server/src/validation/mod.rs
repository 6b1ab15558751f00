//! Schema-driven request validation
//!
//! Every mutating request body is checked against a per-operation
//! [`Schema`] before the service layer runs. A schema names every field
//! the operation knows about and how it is treated:
//!
//! - **create** schemas require every field;
//! - **update** schemas make the allow-listed fields optional and mark
//!   `id` and `name` forbidden;
//! - delete needs no body schema — its id comes from the route path.
//!
//! Fields outside the schema are rejected, and all violations are
//! collected into a single `ValidationFailed` error rather than failing
//! on the first, so a response enumerates every bad field at once.

mod branch;
mod employee;

use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::error::{AppError, AppResult};
use std::ops::RangeInclusive;

/// Primitive type a field must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    /// JSON string
    Text,
    /// JSON integer
    Number,
    /// Record identifier: integer or string, depending on the backend
    Ident,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Requirement {
    Required,
    Optional,
    Forbidden,
}

/// Per-field validation rule
#[derive(Debug, Clone)]
pub struct FieldRule {
    kind: FieldKind,
    requirement: Requirement,
    /// Email format constraint: accepted top-level domains
    allowed_tlds: Option<Vec<String>>,
    /// Numeric range constraint
    range: Option<RangeInclusive<u64>>,
}

impl FieldRule {
    fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            requirement: Requirement::Optional,
            allowed_tlds: None,
            range: None,
        }
    }

    /// A string field
    pub fn text() -> Self {
        Self::new(FieldKind::Text)
    }

    /// An integer field
    pub fn number() -> Self {
        Self::new(FieldKind::Number)
    }

    /// A record identifier field (integer or opaque string key)
    pub fn ident() -> Self {
        Self::new(FieldKind::Ident)
    }

    pub fn required(mut self) -> Self {
        self.requirement = Requirement::Required;
        self
    }

    /// Reject the field outright, even with a valid value
    pub fn forbidden(mut self) -> Self {
        self.requirement = Requirement::Forbidden;
        self
    }

    /// Constrain a text field to email format with the given TLD list
    pub fn email(mut self, allowed_tlds: &[String]) -> Self {
        self.allowed_tlds = Some(allowed_tlds.to_vec());
        self
    }

    /// Constrain a number field to an inclusive range
    pub fn range(mut self, range: RangeInclusive<u64>) -> Self {
        self.range = Some(range);
        self
    }

    /// Check a present, non-null value; returns the violation message if any.
    fn check(&self, value: &Value) -> Option<String> {
        match self.kind {
            FieldKind::Text => {
                let Some(s) = value.as_str() else {
                    return Some("must be a string".to_string());
                };
                if let Some(tlds) = &self.allowed_tlds {
                    return check_email(s, tlds);
                }
                None
            }
            FieldKind::Number => {
                let Some(n) = value.as_u64() else {
                    return Some("must be a positive integer".to_string());
                };
                if let Some(range) = &self.range
                    && !range.contains(&n)
                {
                    return Some(format!(
                        "must be between {} and {}",
                        range.start(),
                        range.end()
                    ));
                }
                None
            }
            FieldKind::Ident => {
                if value.as_u64().is_none() && value.as_str().is_none() {
                    return Some("must be an id (integer or string)".to_string());
                }
                None
            }
        }
    }
}

fn check_email(s: &str, allowed_tlds: &[String]) -> Option<String> {
    let Some((local, domain)) = s.split_once('@') else {
        return Some("must be a valid email address".to_string());
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Some("must be a valid email address".to_string());
    }
    let tld = domain.rsplit('.').next().unwrap_or_default();
    if !allowed_tlds.iter().any(|t| t.eq_ignore_ascii_case(tld)) {
        return Some(format!(
            "must use an allowed email domain ending (.{})",
            allowed_tlds.join(", .")
        ));
    }
    None
}

/// An ordered set of named field rules for one operation
#[derive(Debug, Clone)]
pub struct Schema {
    name: &'static str,
    fields: Vec<(&'static str, FieldRule)>,
}

impl Schema {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: &'static str, rule: FieldRule) -> Self {
        self.fields.push((name, rule));
        self
    }

    /// Validate a request body against this schema.
    ///
    /// All violations are gathered before failing; the error's details
    /// map carries one entry per bad field.
    pub fn validate(&self, body: &Value) -> AppResult<()> {
        let Some(obj) = body.as_object() else {
            return Err(AppError::invalid_request(format!(
                "{} payload must be a JSON object",
                self.name
            )));
        };

        let mut violations: Vec<(String, String)> = Vec::new();

        for (name, rule) in &self.fields {
            match obj.get(*name) {
                // A forbidden key is a violation by its mere presence,
                // null value included.
                Some(_) if rule.requirement == Requirement::Forbidden => {
                    violations.push((name.to_string(), format!("{name} is not allowed")));
                }
                None | Some(Value::Null) => {
                    if rule.requirement == Requirement::Required {
                        violations.push((name.to_string(), format!("{name} is required")));
                    }
                }
                Some(value) => {
                    if let Some(message) = rule.check(value) {
                        violations.push((name.to_string(), format!("{name} {message}")));
                    }
                }
            }
        }

        // Anything the schema does not name is rejected, never silently
        // accepted or dropped.
        for key in obj.keys() {
            if !self.fields.iter().any(|(name, _)| name == key) {
                violations.push((key.clone(), format!("{key} is not recognized")));
            }
        }

        if violations.is_empty() {
            return Ok(());
        }

        let summary = violations
            .iter()
            .map(|(_, message)| message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        let mut err = AppError::validation(format!("{} validation failed: {summary}", self.name));
        for (field, message) in violations {
            err = err.with_detail(field, message);
        }
        Err(err)
    }

    /// Strip leading/trailing whitespace from the schema's text fields.
    ///
    /// Runs before validation, so constraints (email format) see the
    /// trimmed value and the service layer stores it normalized.
    fn trim_text_fields(&self, body: &mut Value) {
        let Some(obj) = body.as_object_mut() else {
            return;
        };
        for (name, rule) in &self.fields {
            if rule.kind == FieldKind::Text
                && let Some(Value::String(s)) = obj.get_mut(*name)
            {
                let trimmed = s.trim().to_string();
                if trimmed.len() != s.len() {
                    *s = trimmed;
                }
            }
        }
    }
}

/// Validate `body` against `schema`, then hand back the typed payload.
pub fn validate_into<P: DeserializeOwned>(schema: &Schema, mut body: Value) -> AppResult<P> {
    schema.trim_text_fields(&mut body);
    schema.validate(&body)?;
    serde_json::from_value(body)
        .map_err(|e| AppError::invalid_request(format!("malformed {} payload: {e}", schema.name)))
}

/// The four body schemas, built once at startup from configuration.
#[derive(Debug, Clone)]
pub struct Schemas {
    pub branch_create: Schema,
    pub branch_update: Schema,
    pub employee_create: Schema,
    pub employee_update: Schema,
}

impl Schemas {
    pub fn new(email_allowed_tlds: &[String]) -> Self {
        Self {
            branch_create: branch::create_schema(),
            branch_update: branch::update_schema(),
            employee_create: employee::create_schema(email_allowed_tlds),
            employee_update: employee::update_schema(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::error::ErrorCode;
    use shared::models::{BranchCreate, BranchUpdate, EmployeeCreate};

    fn schemas() -> Schemas {
        Schemas::new(&["com".to_string()])
    }

    #[test]
    fn test_create_accepts_complete_payload() {
        let body = json!({
            "name": "Regina Branch",
            "address": "3085 Albert, Regina, SK, S4S 0B1",
            "phoneNumber": 2066402877u64,
        });
        let payload: BranchCreate = validate_into(&schemas().branch_create, body).unwrap();
        assert_eq!(payload.name, "Regina Branch");
        assert_eq!(payload.phone_number, 2066402877);
    }

    #[test]
    fn test_create_collects_every_missing_field() {
        let err = schemas().branch_create.validate(&json!({})).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let details = err.details.unwrap();
        assert!(details.contains_key("name"));
        assert!(details.contains_key("address"));
        assert!(details.contains_key("phoneNumber"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let body = json!({"fakeField": "x"});
        let err = schemas().branch_update.validate(&body).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.details.unwrap().contains_key("fakeField"));
    }

    #[test]
    fn test_update_forbids_id_and_name() {
        let body = json!({"id": 3, "name": "Renamed Branch", "address": "somewhere"});
        let err = schemas().branch_update.validate(&body).unwrap_err();

        let details = err.details.unwrap();
        assert!(details.contains_key("id"));
        assert!(details.contains_key("name"));
        assert!(!details.contains_key("address"));
    }

    #[test]
    fn test_update_forbids_null_valued_forbidden_field() {
        // Presence is the violation; a null value does not make the key
        // count as absent.
        let body = json!({"name": null, "address": "somewhere"});
        let err = schemas().branch_update.validate(&body).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert!(details.contains_key("name"));
        assert!(!details.contains_key("address"));

        let body = json!({"id": null});
        let err = schemas().employee_update.validate(&body).unwrap_err();
        assert!(err.details.unwrap().contains_key("id"));
    }

    #[test]
    fn test_text_fields_are_trimmed() {
        let body = json!({
            "name": "  Brandon Branch  ",
            "address": "\t1000 Rosser Ave, Brandon, MB\n",
            "phoneNumber": 2047280000u64,
        });
        let payload: BranchCreate = validate_into(&schemas().branch_create, body).unwrap();
        assert_eq!(payload.name, "Brandon Branch");
        assert_eq!(payload.address, "1000 Rosser Ave, Brandon, MB");
    }

    #[test]
    fn test_email_is_trimmed_before_format_check() {
        let mut body = employee_body("donna.young@pixell-river.com");
        body["email"] = json!("  donna.young@pixell-river.com  ");
        let payload: EmployeeCreate = validate_into(&schemas().employee_create, body).unwrap();
        assert_eq!(payload.email, "donna.young@pixell-river.com");
    }

    #[test]
    fn test_update_allows_partial_payload() {
        let body = json!({"phoneNumber": 1233214321u64});
        let payload: BranchUpdate = validate_into(&schemas().branch_update, body).unwrap();
        assert_eq!(payload.phone_number, Some(1233214321));
        assert_eq!(payload.address, None);
    }

    #[test]
    fn test_branch_phone_number_must_have_ten_digits() {
        let body = json!({
            "name": "Arborg Branch",
            "address": "317-A Fisher Road, Arborg, MB",
            "phoneNumber": 12345,
        });
        let err = schemas().branch_create.validate(&body).unwrap_err();
        assert!(err.details.unwrap().contains_key("phoneNumber"));
    }

    #[test]
    fn test_wrong_primitive_type_is_reported() {
        let body = json!({
            "name": 7,
            "address": "317-A Fisher Road, Arborg, MB",
            "phoneNumber": 2045553461u64,
        });
        let err = schemas().branch_create.validate(&body).unwrap_err();
        assert!(err.details.unwrap().contains_key("name"));
    }

    fn employee_body(email: &str) -> Value {
        json!({
            "name": "Donna Young",
            "position": "HR Specialist",
            "department": "Human Resources",
            "email": email,
            "phoneNumber": 5145550315u64,
            "branchId": 7,
        })
    }

    #[test]
    fn test_employee_email_tld_rule_comes_from_config() {
        let com_only = schemas();
        assert!(
            com_only
                .employee_create
                .validate(&employee_body("donna.young@pixell-river.com"))
                .is_ok()
        );
        let err = com_only
            .employee_create
            .validate(&employee_body("donna.young@pixell-river.ca"))
            .unwrap_err();
        assert!(err.details.unwrap().contains_key("email"));

        let com_and_ca = Schemas::new(&["com".to_string(), "ca".to_string()]);
        assert!(
            com_and_ca
                .employee_create
                .validate(&employee_body("donna.young@pixell-river.ca"))
                .is_ok()
        );
    }

    #[test]
    fn test_employee_email_must_be_well_formed() {
        for bad in ["not-an-email", "@pixell-river.com", "donna@", "donna@nodot"] {
            let err = schemas()
                .employee_create
                .validate(&employee_body(bad))
                .unwrap_err();
            assert!(err.details.unwrap().contains_key("email"), "accepted {bad}");
        }
    }

    #[test]
    fn test_employee_branch_id_accepts_either_id_shape() {
        let mut body = employee_body("donna.young@pixell-river.com");
        body["branchId"] = json!("0b8d4f2a");
        let payload: EmployeeCreate = validate_into(&schemas().employee_create, body).unwrap();
        assert_eq!(payload.branch_id, shared::models::RecordId::Key("0b8d4f2a".into()));
    }

    #[test]
    fn test_employee_update_forbids_name() {
        let body = json!({"name": "New Name", "position": "Teller"});
        let err = schemas().employee_update.validate(&body).unwrap_err();
        assert!(err.details.unwrap().contains_key("name"));
    }

    #[test]
    fn test_non_object_body_is_invalid_request() {
        let err = schemas().branch_create.validate(&json!([1, 2])).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
    }
}
