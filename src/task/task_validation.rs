//! Typed parsing of untrusted task input.
//!
//! Every function here is pure: it either returns a typed value or a
//! [`ValidationError`] describing the first violated constraint. None of them
//! touch the store.

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use thiserror::Error;

use super::{
    task_dto::{CreateTaskRequest, UpdateTaskRequest},
    task_models::TaskFilter,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Request body must be a JSON object")]
    InvalidBody,

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    #[error("{0}")]
    InvalidPayload(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be a {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("You must provide at least one field to update")]
    NoFieldsProvided,

    #[error("You must provide a valid value for the fields")]
    EmptyField,
}

/// Parses the list query. A key given more than once is rejected, an empty
/// value is treated as no filter.
pub fn parse_list_filter(query: &[(String, String)]) -> Result<TaskFilter, ValidationError> {
    Ok(TaskFilter {
        title: query_string(query, "title")?,
        description: query_string(query, "description")?,
    })
}

fn query_string(
    query: &[(String, String)],
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    let mut values = query.iter().filter(|(key, _)| key == field).map(|(_, v)| v);

    match (values.next(), values.next()) {
        (None, _) => Ok(None),
        (Some(_), Some(_)) => Err(ValidationError::InvalidType {
            field,
            expected: "string",
        }),
        (Some(value), None) if value.is_empty() => Ok(None),
        (Some(value), None) => Ok(Some(value.clone())),
    }
}

/// Extracts the raw `id` path parameter. The value is not checked for UUID
/// syntax here.
pub fn parse_id_param(params: &HashMap<String, String>) -> Result<String, ValidationError> {
    params
        .get("id")
        .cloned()
        .ok_or(ValidationError::MissingField("id"))
}

/// Parses a create payload. Empty strings are accepted.
pub fn parse_create_body(body: &Value) -> Result<CreateTaskRequest, ValidationError> {
    deserialize_object(body)
}

/// Parses an update payload. Both fields are optional but may not be `null`;
/// the at-least-one and non-empty rules belong to the service.
pub fn parse_update_body(body: &Value) -> Result<UpdateTaskRequest, ValidationError> {
    deserialize_object(body)
}

fn deserialize_object<T: DeserializeOwned>(body: &Value) -> Result<T, ValidationError> {
    // serde would also accept a JSON array for a struct
    if !body.is_object() {
        return Err(ValidationError::InvalidBody);
    }

    T::deserialize(body).map_err(|e| ValidationError::InvalidPayload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_list_filter_without_keys_is_empty() {
        let filter = parse_list_filter(&[]).unwrap();
        assert_eq!(filter, TaskFilter::default());
    }

    #[test]
    fn test_list_filter_keeps_both_fields_and_ignores_unknown_keys() {
        let filter =
            parse_list_filter(&pairs(&[("title", "foo"), ("description", "bar"), ("x", "1")]))
                .unwrap();

        assert_eq!(filter.title.as_deref(), Some("foo"));
        assert_eq!(filter.description.as_deref(), Some("bar"));
    }

    #[test]
    fn test_list_filter_rejects_repeated_key() {
        let err = parse_list_filter(&pairs(&[("title", "a"), ("title", "b")])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidType {
                field: "title",
                expected: "string"
            }
        );
    }

    #[test]
    fn test_list_filter_treats_empty_value_as_absent() {
        let filter = parse_list_filter(&pairs(&[("title", ""), ("description", "x")])).unwrap();
        assert_eq!(filter.title, None);
        assert_eq!(filter.description.as_deref(), Some("x"));
    }

    #[test]
    fn test_id_param() {
        let mut params = HashMap::new();
        assert_eq!(
            parse_id_param(&params),
            Err(ValidationError::MissingField("id"))
        );

        params.insert("id".to_string(), "not-a-uuid".to_string());
        assert_eq!(parse_id_param(&params).unwrap(), "not-a-uuid");
    }

    fn payload_error(result: Result<impl std::fmt::Debug, ValidationError>) -> String {
        match result {
            Err(ValidationError::InvalidPayload(message)) => message,
            other => panic!("expected a payload error, got {:?}", other),
        }
    }

    #[test]
    fn test_create_body_requires_both_strings() {
        let message = payload_error(parse_create_body(&json!({ "title": "a" })));
        assert!(message.contains("missing field `description`"), "{}", message);

        let message = payload_error(parse_create_body(&json!({ "title": 1, "description": "b" })));
        assert!(message.contains("invalid type"), "{}", message);

        let message =
            payload_error(parse_create_body(&json!({ "title": null, "description": "b" })));
        assert!(message.contains("invalid type: null"), "{}", message);

        assert_eq!(
            parse_create_body(&json!(["title", "description"])),
            Err(ValidationError::InvalidBody)
        );
    }

    #[test]
    fn test_create_body_accepts_empty_strings() {
        let request = parse_create_body(&json!({ "title": "", "description": "" })).unwrap();
        assert_eq!(request.title, "");
        assert_eq!(request.description, "");
    }

    #[test]
    fn test_update_body_fields_are_optional() {
        let request = parse_update_body(&json!({})).unwrap();
        assert_eq!(request, UpdateTaskRequest::default());

        let request = parse_update_body(&json!({ "description": "new" })).unwrap();
        assert_eq!(request.title, None);
        assert_eq!(request.description.as_deref(), Some("new"));
    }

    #[test]
    fn test_update_body_rejects_wrong_types_and_null() {
        let message = payload_error(parse_update_body(&json!({ "description": false })));
        assert!(message.contains("invalid type: boolean"), "{}", message);

        let message = payload_error(parse_update_body(&json!({ "title": null })));
        assert!(message.contains("invalid type: null"), "{}", message);

        assert_eq!(parse_update_body(&json!("title")), Err(ValidationError::InvalidBody));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::NoFieldsProvided.to_string(),
            "You must provide at least one field to update"
        );
        assert_eq!(ValidationError::MissingField("title").to_string(), "title is required");
    }
}
