//! Payload validation
//!
//! Each entity declares a [`Schema`] (field name, display label, rule) and a
//! single generic validator walks the posted JSON array against it. Failures
//! come back as a flat `field -> message` map whose keys follow the
//! `<fieldName>_<itemIndex>` convention the API clients already depend on
//! (`itemId_0`, `showDate_2`, ...), with `field_<itemIndex>` used when the
//! violation is on the array item itself rather than one of its fields.

use serde_json::{Map, Value};

use regex::Regex;

/// Validation rule for a single payload field.
pub enum FieldRule {
    /// Required whole number (strict: strings and booleans are rejected)
    Integer,
    /// Required number with a maximum count of decimal places
    Number { max_scale: usize },
    /// Required string matching a pattern, optionally restricted to a
    /// fixed set of values
    Text {
        pattern: Regex,
        allowed: Option<&'static [&'static str]>,
        pattern_message: Option<&'static str>,
    },
}

/// A named, labelled field with its rule.
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub rule: FieldRule,
}

impl FieldSpec {
    pub fn integer(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            rule: FieldRule::Integer,
        }
    }

    pub fn number(name: &'static str, label: &'static str, max_scale: usize) -> Self {
        Self {
            name,
            label,
            rule: FieldRule::Number { max_scale },
        }
    }

    pub fn text(name: &'static str, label: &'static str, pattern: &str) -> Self {
        Self {
            name,
            label,
            rule: FieldRule::Text {
                // Patterns are compile-time literals; a bad one is a programming error.
                pattern: Regex::new(pattern).expect("invalid field pattern"),
                allowed: None,
                pattern_message: None,
            },
        }
    }

    /// Restrict a text field to a fixed value set (case-sensitive).
    pub fn one_of(mut self, values: &'static [&'static str]) -> Self {
        if let FieldRule::Text { allowed, .. } = &mut self.rule {
            *allowed = Some(values);
        }
        self
    }

    /// Override the generic pattern-mismatch message.
    pub fn pattern_message(mut self, message: &'static str) -> Self {
        if let FieldRule::Text {
            pattern_message, ..
        } = &mut self.rule
        {
            *pattern_message = Some(message);
        }
        self
    }
}

/// Declarative schema for an array-of-objects payload.
pub struct Schema {
    label: &'static str,
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(label: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self { label, fields }
    }

    /// Validate every item of the payload. An empty map means the payload is valid.
    pub fn validate_items(&self, items: &[Value]) -> Map<String, Value> {
        let mut errors = Map::new();

        if items.is_empty() {
            // No item index exists for a min-length violation; fall back to a
            // unique key the same way the legacy validator did.
            errors.insert(
                format!("field_{}", chrono::Utc::now().timestamp_millis()),
                Value::String(format!(
                    "\"{}\" must contain at least 1 items",
                    self.label
                )),
            );
            return errors;
        }

        for (index, item) in items.iter().enumerate() {
            let Some(fields) = item.as_object() else {
                errors.insert(
                    format!("field_{index}"),
                    Value::String(format!(
                        "\"{}[{index}]\" must be of type object",
                        self.label
                    )),
                );
                continue;
            };

            for spec in &self.fields {
                if let Some(message) = check_field(spec, fields.get(spec.name)) {
                    errors.insert(format!("{}_{index}", spec.name), Value::String(message));
                }
            }
        }

        errors
    }
}

fn check_field(spec: &FieldSpec, value: Option<&Value>) -> Option<String> {
    let value = match value {
        None | Some(Value::Null) => {
            return Some(format!("\"{}\" is required", spec.label));
        }
        Some(v) => v,
    };

    match &spec.rule {
        FieldRule::Integer => {
            let Some(number) = value.as_number() else {
                return Some(format!("\"{}\" must be a number", spec.label));
            };
            if number.is_i64() || number.is_u64() {
                return None;
            }
            // A float is still acceptable when its fractional part is zero.
            match number.as_f64() {
                Some(f) if f.fract() == 0.0 => None,
                _ => Some(format!("\"{}\" must be an integer", spec.label)),
            }
        }
        FieldRule::Number { max_scale } => {
            let Some(number) = value.as_number() else {
                return Some(format!("\"{}\" must be a number", spec.label));
            };
            // serde_json renders the shortest round-trip literal, so the
            // fraction length is exactly what the client sent.
            let rendered = number.to_string();
            let scale = rendered
                .split('.')
                .nth(1)
                .map(|fraction| fraction.trim_end_matches(['e', 'E']).len())
                .unwrap_or(0);
            if scale > *max_scale {
                return Some(format!(
                    "\"{}\" must have no more than {max_scale} decimal places",
                    spec.label
                ));
            }
            None
        }
        FieldRule::Text {
            pattern,
            allowed,
            pattern_message,
        } => {
            let Some(text) = value.as_str() else {
                return Some(format!("\"{}\" must be a string", spec.label));
            };
            if text.is_empty() {
                return Some(format!("\"{}\" is not allowed to be empty", spec.label));
            }
            if let Some(values) = allowed
                && !values.contains(&text)
            {
                return Some(format!(
                    "\"{}\" must be one of [{}]",
                    spec.label,
                    values.join(", ")
                ));
            }
            if !pattern.is_match(text) {
                return Some(match pattern_message {
                    Some(message) => format!("\"{}\" {message}", spec.label),
                    None => format!(
                        "\"{}\" with value \"{text}\" fails to match the required pattern",
                        spec.label
                    ),
                });
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> Schema {
        Schema::new(
            "Payload",
            vec![
                FieldSpec::integer("itemId", "Item ID"),
                FieldSpec::number("amount", "Item Amount", 2),
                FieldSpec::text("itemName", "Item Name", r"^[A-Za-z \-0-9]+$"),
            ],
        )
    }

    #[test]
    fn valid_items_produce_no_errors() {
        let items = [json!({"itemId": 7, "amount": 250.45, "itemName": "Wrist Watch"})];
        assert!(schema().validate_items(&items).is_empty());
    }

    #[test]
    fn error_keys_carry_field_name_and_item_index() {
        let items = [
            json!({"itemId": 7, "amount": 1.0, "itemName": "Ok"}),
            json!({"amount": 1.234, "itemName": "Bad?Name"}),
        ];
        let errors = schema().validate_items(&items);
        assert_eq!(errors.len(), 3);
        assert_eq!(errors["itemId_1"], json!("\"Item ID\" is required"));
        assert_eq!(
            errors["amount_1"],
            json!("\"Item Amount\" must have no more than 2 decimal places")
        );
        assert!(
            errors["itemName_1"]
                .as_str()
                .unwrap()
                .contains("fails to match the required pattern")
        );
    }

    #[test]
    fn strings_are_not_numbers() {
        let items = [json!({"itemId": "7", "amount": 3.5, "itemName": "Watch"})];
        let errors = schema().validate_items(&items);
        assert_eq!(errors["itemId_0"], json!("\"Item ID\" must be a number"));
    }

    #[test]
    fn fractional_ids_are_rejected_but_round_floats_pass() {
        let items = [json!({"itemId": 3.5, "amount": 1, "itemName": "Watch"})];
        let errors = schema().validate_items(&items);
        assert_eq!(errors["itemId_0"], json!("\"Item ID\" must be an integer"));

        let items = [json!({"itemId": 3.0, "amount": 1, "itemName": "Watch"})];
        assert!(schema().validate_items(&items).is_empty());
    }

    #[test]
    fn non_object_items_report_the_item_itself() {
        let items = [json!("not an object")];
        let errors = schema().validate_items(&items);
        assert_eq!(errors["field_0"], json!("\"Payload[0]\" must be of type object"));
    }

    #[test]
    fn empty_payload_is_rejected() {
        let errors = schema().validate_items(&[]);
        assert_eq!(errors.len(), 1);
        let (key, message) = errors.iter().next().unwrap();
        assert!(key.starts_with("field_"));
        assert_eq!(message, &json!("\"Payload\" must contain at least 1 items"));
    }

    #[test]
    fn one_of_restriction_applies() {
        let schema = Schema::new(
            "Payload",
            vec![
                FieldSpec::text("showStatus", "Show Status", r"^[A-Za-z 0-9]+$")
                    .one_of(&["Active", "Inactive"]),
            ],
        );
        let errors = schema.validate_items(&[json!({"showStatus": "active"})]);
        assert_eq!(
            errors["showStatus_0"],
            json!("\"Show Status\" must be one of [Active, Inactive]")
        );
    }
}
