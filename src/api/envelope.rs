//! Response Envelopes
//!
//! Every endpoint answers `{status, data|recommendations|message}`.
//! `status:false` is an application error carrying the server message;
//! a body that is not JSON is a transport error.

use list_manager::{Ack, ListError, ListResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

fn parse(body: &str) -> ListResult<Value> {
    Ok(serde_json::from_str(body)?)
}

/// `Some(false)` for `false`, `"false"` or `0`; `None` when absent
fn status_of(envelope: &Value) -> Option<bool> {
    match envelope.get("status")? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => Some(n.as_f64() != Some(0.0)),
        Value::String(s) => Some(!matches!(s.trim(), "false" | "0" | "")),
        Value::Null => None,
        _ => Some(true),
    }
}

/// Server message as display text. Objects and arrays (validation bags
/// such as `{"email": ["taken"]}`) are flattened and joined with spaces.
pub fn message_text(message: &Value) -> Option<String> {
    fn collect(value: &Value, out: &mut Vec<String>) {
        match value {
            Value::String(s) if !s.trim().is_empty() => out.push(s.trim().to_string()),
            Value::Array(items) => items.iter().for_each(|v| collect(v, out)),
            Value::Object(map) => map.values().for_each(|v| collect(v, out)),
            _ => {}
        }
    }
    let mut parts = Vec::new();
    collect(message, &mut parts);
    (!parts.is_empty()).then(|| parts.join(" "))
}

fn envelope_message(envelope: &Value) -> Option<String> {
    envelope.get("message").and_then(message_text)
}

fn reject_failed(envelope: &Value) -> ListResult<()> {
    if status_of(envelope) == Some(false) {
        return Err(ListError::Application(envelope_message(envelope).unwrap_or_default()));
    }
    Ok(())
}

/// Message of an error body, if it is an envelope that carries one
pub fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body).ok().as_ref().and_then(envelope_message)
}

/// Decode the array under `key`. Rows that do not match `T` are skipped
/// with a warning; a missing or non-array payload is malformed.
pub fn decode_list<T: DeserializeOwned>(body: &str, key: &str) -> ListResult<Vec<T>> {
    let mut envelope = parse(body)?;
    reject_failed(&envelope)?;
    let rows = match envelope.get_mut(key).map(Value::take) {
        Some(Value::Array(rows)) => rows,
        Some(Value::Null) | None => return Err(ListError::Decode(format!("missing `{}` list", key))),
        Some(_) => return Err(ListError::Decode(format!("`{}` is not a list", key))),
    };
    let total = rows.len();
    let items: Vec<T> = rows
        .into_iter()
        .filter_map(|row| match serde_json::from_value(row) {
            Ok(item) => Some(item),
            Err(err) => {
                log::warn!("[Envelope] skipping malformed `{}` row: {}", key, err);
                None
            }
        })
        .collect();
    if items.len() < total {
        log::warn!("[Envelope] kept {} of {} `{}` rows", items.len(), total, key);
    }
    Ok(items)
}

/// Decode one object, either under `key` or the envelope itself.
pub fn decode_object<T: DeserializeOwned>(body: &str, key: Option<&str>) -> ListResult<T> {
    let mut envelope = parse(body)?;
    reject_failed(&envelope)?;
    let payload = match key {
        Some(key) => match envelope.get_mut(key).map(Value::take) {
            Some(Value::Null) | None => return Err(ListError::Decode(format!("missing `{}`", key))),
            Some(payload) => payload,
        },
        None => envelope,
    };
    serde_json::from_value(payload).map_err(|err| ListError::Decode(err.to_string()))
}

/// Mutation result; an envelope without `status` counts as success
pub fn decode_ack(body: &str) -> ListResult<Ack> {
    if body.trim().is_empty() {
        return Ok(Ack::default());
    }
    let envelope = parse(body)?;
    reject_failed(&envelope)?;
    Ok(Ack { message: envelope_message(&envelope) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: u32,
    }

    #[test]
    fn test_empty_list() {
        let rows: Vec<Row> = decode_list(r#"{"status":true,"data":[]}"#, "data").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_list_under_custom_key_without_status() {
        let rows: Vec<Row> = decode_list(r#"{"recommendations":[{"id":1},{"id":2}]}"#, "recommendations").unwrap();
        assert_eq!(rows, vec![Row { id: 1 }, Row { id: 2 }]);
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let rows: Vec<Row> = decode_list(r#"{"status":true,"data":[{"id":1},{"nope":true}]}"#, "data").unwrap();
        assert_eq!(rows, vec![Row { id: 1 }]);
    }

    #[test]
    fn test_status_false_is_application_error() {
        let err = decode_list::<Row>(r#"{"status":false,"message":"Token expired"}"#, "data").unwrap_err();
        assert_eq!(err, ListError::Application("Token expired".to_string()));
    }

    #[test]
    fn test_missing_payload_is_decode_error() {
        let err = decode_list::<Row>(r#"{"status":true}"#, "data").unwrap_err();
        assert!(matches!(err, ListError::Decode(_)));
        let err = decode_list::<Row>(r#"{"status":true,"data":{"id":1}}"#, "data").unwrap_err();
        assert!(matches!(err, ListError::Decode(_)));
    }

    #[test]
    fn test_non_json_is_transport_error() {
        let err = decode_list::<Row>("<html>502 Bad Gateway</html>", "data").unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn test_message_bag_is_flattened() {
        let bag = json!({"email": ["The email has already been taken."], "mobile": "Invalid"});
        assert_eq!(message_text(&bag).as_deref(), Some("The email has already been taken. Invalid"));
        assert_eq!(message_text(&json!([])), None);
        assert_eq!(message_text(&json!(42)), None);
    }

    #[test]
    fn test_ack_messages() {
        assert_eq!(decode_ack(r#"{"status":true,"message":"Deleted"}"#).unwrap(), Ack::with_message("Deleted"));
        assert_eq!(decode_ack(r#"{"status":"true"}"#).unwrap(), Ack::default());
        assert_eq!(decode_ack("").unwrap(), Ack::default());
        assert_eq!(
            decode_ack(r#"{"status":0,"message":"Question in use"}"#).unwrap_err(),
            ListError::Application("Question in use".to_string())
        );
    }

    #[test]
    fn test_decode_object() {
        let row: Row = decode_object(r#"{"status":true,"data":{"id":3}}"#, Some("data")).unwrap();
        assert_eq!(row, Row { id: 3 });
        let row: Row = decode_object(r#"{"id":5,"other":"x"}"#, None).unwrap();
        assert_eq!(row, Row { id: 5 });
        assert!(matches!(
            decode_object::<Row>(r#"{"status":true,"data":null}"#, Some("data")),
            Err(ListError::Decode(_))
        ));
    }

    #[test]
    fn test_error_message_from_error_body() {
        assert_eq!(error_message(r#"{"status":false,"message":"Unauthenticated."}"#).as_deref(), Some("Unauthenticated."));
        assert_eq!(error_message("Internal Server Error"), None);
    }
}
