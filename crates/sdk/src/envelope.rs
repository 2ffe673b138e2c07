//! Decoding of the `{ success, results, errors }` wrapper Ashby puts around
//! every 2xx response.

use crate::error::{AshbyError, AshbyResult};
use serde_json::{Map, Value};

/// Interpreted result of an Ashby call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Truthy `success`. Holds `results`, or the whole envelope when `results`
    /// is absent.
    Success(Value),
    /// Anything else. Holds `errors`, or `["Unknown error"]` when absent.
    Failure(Value),
}

/// A decoded response envelope.
#[derive(Debug, Clone)]
pub struct Envelope {
    fields: Map<String, Value>,
}

impl Envelope {
    /// Wrap a response body. Fails unless the body is a JSON object.
    pub fn from_value(value: Value) -> AshbyResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(AshbyError::UnexpectedResponse(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// `success` is judged by truthiness: missing, `null`, `false`, zero and
    /// empty strings, arrays or objects are failures.
    pub fn is_success(&self) -> bool {
        self.fields.get("success").is_some_and(is_truthy)
    }

    pub fn into_outcome(mut self) -> Outcome {
        if self.is_success() {
            match self.fields.remove("results") {
                Some(results) => Outcome::Success(results),
                None => Outcome::Success(Value::Object(self.fields)),
            }
        } else {
            let errors = self
                .fields
                .remove("errors")
                .unwrap_or_else(|| Value::Array(vec![Value::from("Unknown error")]));
            Outcome::Failure(errors)
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
