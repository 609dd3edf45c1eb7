//! Contact form validation.
//!
//! Every field is checked and every violation reported, one message per field,
//! phrased the way form clients already display them (`"name" is required`).

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

static EMAIL: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$"));

/// Field rules: name, minimum and maximum length in characters.
const RULES: [(&str, usize, usize); 3] = [("name", 2, 100), ("email", 1, 255), ("message", 10, 1000)];

/// A submission whose fields passed validation, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

fn is_email(value: &str) -> bool {
    EMAIL.as_ref().is_ok_and(|re| re.is_match(value))
}

fn check_field(body: &Map<String, Value>, field: &str, min: usize, max: usize) -> Result<String, String> {
    let raw = match body.get(field) {
        None | Some(Value::Null) => return Err(format!("\"{field}\" is required")),
        Some(Value::String(raw)) => raw,
        Some(_) => return Err(format!("\"{field}\" must be a string")),
    };

    let value = raw.trim();
    if value.is_empty() {
        return Err(format!("\"{field}\" is not allowed to be empty"));
    }
    if field == "email" && !is_email(value) {
        return Err(format!("\"{field}\" must be a valid email"));
    }

    let len = value.chars().count();
    if len < min {
        return Err(format!("\"{field}\" length must be at least {min} characters long"));
    }
    if len > max {
        return Err(format!(
            "\"{field}\" length must be less than or equal to {max} characters long"
        ));
    }
    Ok(value.to_owned())
}

/// Validates a raw JSON body.
///
/// # Errors
/// Returns one message per invalid or unexpected field, in field order.
pub fn validate_submission(body: &Map<String, Value>) -> Result<ValidSubmission, Vec<String>> {
    let mut errors = Vec::new();
    let mut values = Vec::with_capacity(RULES.len());

    for (field, min, max) in RULES {
        match check_field(body, field, min, max) {
            Ok(value) => values.push(value),
            Err(message) => errors.push(message),
        }
    }

    errors.extend(
        body.keys()
            .filter(|key| !RULES.iter().any(|(field, ..)| *field == key.as_str()))
            .map(|key| format!("\"{key}\" is not allowed")),
    );

    match (errors.is_empty(), <[String; 3]>::try_from(values)) {
        (true, Ok([name, email, message])) => Ok(ValidSubmission { name, email, message }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    fn valid() -> Value {
        json!({ "name": "Ada Lovelace", "email": "ada@example.com", "message": "Hello there, world!" })
    }

    #[test]
    fn trims_valid_fields() {
        let parsed = validate_submission(&body(json!({
            "name": "  Ada  ",
            "email": " ada@example.com ",
            "message": "  ten chars!  "
        })))
        .unwrap();

        assert_eq!(parsed.name, "Ada");
        assert_eq!(parsed.email, "ada@example.com");
        assert_eq!(parsed.message, "ten chars!");
    }

    #[test]
    fn reports_every_violated_field() {
        let errors = validate_submission(&body(json!({ "name": "A", "email": "nope" }))).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "\"name\" length must be at least 2 characters long",
                "\"email\" must be a valid email",
                "\"message\" is required",
            ]
        );
    }

    #[test]
    fn message_length_boundaries() {
        let mut short = valid();
        short["message"] = json!("123456789");
        let errors = validate_submission(&body(short)).unwrap_err();
        assert_eq!(errors, vec!["\"message\" length must be at least 10 characters long"]);

        let mut exact = valid();
        exact["message"] = json!("1234567890");
        assert!(validate_submission(&body(exact)).is_ok());

        let mut long = valid();
        long["message"] = json!("x".repeat(1001));
        assert!(validate_submission(&body(long)).is_err());
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut input = valid();
        input["name"] = json!("   ");
        let errors = validate_submission(&body(input)).unwrap_err();
        assert_eq!(errors, vec!["\"name\" is not allowed to be empty"]);
    }

    #[test]
    fn rejects_non_strings_and_unknown_fields() {
        let mut input = valid();
        input["name"] = json!(42);
        input["phone"] = json!("123");
        let errors = validate_submission(&body(input)).unwrap_err();
        assert_eq!(errors, vec!["\"name\" must be a string", "\"phone\" is not allowed"]);
    }

    #[test]
    fn email_shape() {
        for good in ["a@b.co", "first.last+tag@mail.example.org"] {
            assert!(is_email(good), "{good}");
        }
        for bad in ["plain", "a@b", "a b@c.d", "@c.d", "a@.d"] {
            assert!(!is_email(bad), "{bad}");
        }
    }
}
