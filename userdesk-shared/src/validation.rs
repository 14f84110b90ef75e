/// Payload schema for user create and update requests
///
/// Request bodies arrive as untyped JSON. Validation runs in two passes so
/// that every failing field is reported, not just the first:
///
/// 1. **Shape**: each known field is taken out of the object if it is a
///    string. Non-string values are recorded as failures and dropped.
/// 2. **Content**: the collected strings are checked with `validator` rules
///    (name length, email syntax) plus a top-level-domain check on email.
///
/// Create additionally requires `name` and `email`. A field reports at most
/// one failure. `null` is treated the same as an absent key, and unknown keys
/// are ignored.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use userdesk_shared::validation::validate_create;
///
/// let err = validate_create(json!({ "name": "", "email": "nope" })).unwrap_err();
/// let fields: Vec<_> = err.fields().collect();
/// assert_eq!(fields, vec!["name", "email"]);
/// ```

use crate::error::ValidationErrorDetail;
use crate::models::user::{CreateUser, UpdateUser};
use serde_json::{Map, Value};
use validator::Validate;

/// Known fields, in reporting order
const FIELDS: [&str; 4] = ["name", "email", "phone", "address"];

const EMAIL_MESSAGE: &str = "email must be an email";

/// Rejected payload, listing every failing field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Validation failed: {} errors", .0.len())]
pub struct InvalidPayload(pub Vec<ValidationErrorDetail>);

impl InvalidPayload {
    /// Sorts failures into reporting order
    fn new(mut failures: Vec<ValidationErrorDetail>) -> Self {
        failures.sort_by_key(|detail| field_position(&detail.field));
        Self(failures)
    }

    /// Names of the failing fields, in reporting order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|detail| detail.field.as_str())
    }

    pub fn into_details(self) -> Vec<ValidationErrorDetail> {
        self.0
    }
}

/// String-typed view of a payload after the shape pass
#[derive(Debug, Default, Validate)]
struct UserFields {
    #[validate(length(
        min = 1,
        max = 100,
        message = "name must be between 1 and 100 characters"
    ))]
    name: Option<String>,

    #[validate(email(message = "email must be an email"))]
    email: Option<String>,

    phone: Option<String>,

    address: Option<String>,
}

/// Validates a create payload
///
/// # Errors
///
/// Returns `InvalidPayload` if `name` or `email` is missing or invalid, or if
/// `phone`/`address` is present but not a string.
pub fn validate_create(payload: Value) -> Result<CreateUser, InvalidPayload> {
    let (fields, mut failures) = check(payload)?;

    match (fields.name, fields.email) {
        (Some(name), Some(email)) if failures.is_empty() => Ok(CreateUser {
            name,
            email,
            phone: fields.phone,
            address: fields.address,
        }),
        (name, email) => {
            for (field, missing) in [("name", name.is_none()), ("email", email.is_none())] {
                if missing && !failures.iter().any(|detail| detail.field == field) {
                    failures.push(ValidationErrorDetail::new(
                        field,
                        format!("{} is required", field),
                    ));
                }
            }
            Err(InvalidPayload::new(failures))
        }
    }
}

/// Validates a partial update payload
///
/// Every field is optional; absent fields are left as `None` so the store
/// keeps their current value.
pub fn validate_update(payload: Value) -> Result<UpdateUser, InvalidPayload> {
    let (fields, failures) = check(payload)?;

    if !failures.is_empty() {
        return Err(InvalidPayload::new(failures));
    }

    Ok(UpdateUser {
        name: fields.name,
        email: fields.email,
        phone: fields.phone,
        address: fields.address,
    })
}

/// Runs both passes, returning the collected fields and every failure found
///
/// Only a non-object body is rejected outright.
fn check(payload: Value) -> Result<(UserFields, Vec<ValidationErrorDetail>), InvalidPayload> {
    let Value::Object(mut object) = payload else {
        return Err(InvalidPayload(vec![ValidationErrorDetail::new(
            "body",
            "request body must be a JSON object",
        )]));
    };

    let mut failures = Vec::new();
    let fields = UserFields {
        name: string_field(&mut object, "name", &mut failures),
        email: string_field(&mut object, "email", &mut failures),
        phone: string_field(&mut object, "phone", &mut failures),
        address: string_field(&mut object, "address", &mut failures),
    };

    if let Err(errors) = fields.validate() {
        for (field, errors) in errors.field_errors() {
            if let Some(error) = errors.first() {
                failures.push(ValidationErrorDetail::new(
                    field.to_string(),
                    error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field)),
                ));
            }
        }
    }

    if let Some(email) = &fields.email {
        let already_failed = failures.iter().any(|detail| detail.field == "email");
        if !already_failed && !has_top_level_domain(email) {
            failures.push(ValidationErrorDetail::new("email", EMAIL_MESSAGE));
        }
    }

    Ok((fields, failures))
}

/// Takes `field` out of `object` when it holds a string
///
/// Absent and `null` values yield `None`. Anything else is recorded as a
/// type failure.
fn string_field(
    object: &mut Map<String, Value>,
    field: &str,
    failures: &mut Vec<ValidationErrorDetail>,
) -> Option<String> {
    match object.remove(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(value)) => Some(value),
        Some(_) => {
            failures.push(ValidationErrorDetail::new(
                field,
                format!("{} must be a string", field),
            ));
            None
        }
    }
}

/// Whether the domain part of `email` ends in an alphabetic TLD
///
/// `ada@localhost` and `ada@127.0.0.1` fail; punycode TLDs (`xn--...`) pass.
fn has_top_level_domain(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    !host.is_empty()
        && (tld.starts_with("xn--")
            || (tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic)))
}

fn field_position(field: &str) -> usize {
    FIELDS
        .iter()
        .position(|known| *known == field)
        .unwrap_or(FIELDS.len())
}
