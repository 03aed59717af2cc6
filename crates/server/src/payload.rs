use serde_json::{Map, Value};
use wapoints_scoring::{Direction, Gender};

/// Why a request body could not be turned into a conversion.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PayloadError {
    /// Not JSON, not an object, or an empty object.
    InvalidJson,
    /// A required field is absent or `null`.
    Missing {
        direction: Direction,
        required: &'static [&'static str],
    },
    /// A field is present but unusable.
    InvalidField { field: &'static str, reason: String },
}

/// The decoded fields of a conversion request.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Payload {
    pub direction: Direction,
    pub event: String,
    pub gender: Gender,
    pub indoor: bool,
    /// Passed back verbatim.
    pub units: Value,
    /// Performance for forward requests, target points for inverse ones.
    pub value: f64,
}

impl Payload {
    /// Decodes and validates a request body.
    pub(crate) fn parse(body: &[u8]) -> Result<Self, PayloadError> {
        let fields = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) if !fields.is_empty() => fields,
            _ => return Err(PayloadError::InvalidJson),
        };

        let direction = match present(&fields, "direction") {
            Some(Value::String(name)) => Direction::from_wire(name),
            _ => Direction::default(),
        };

        let value_field = value_field(direction);
        let required = required_fields(direction);
        if required.iter().any(|field| present(&fields, field).is_none()) {
            return Err(PayloadError::Missing {
                direction,
                required,
            });
        }

        let event = match present(&fields, "event") {
            Some(Value::String(event)) => event.clone(),
            Some(Value::Number(number)) => number.to_string(),
            _ => return Err(invalid("event", "must be a string")),
        };

        let gender = match present(&fields, "gender") {
            Some(Value::String(code)) => code
                .parse::<Gender>()
                .map_err(|error| invalid("gender", error))?,
            _ => return Err(invalid("gender", "must be a string")),
        };

        let value = present(&fields, value_field)
            .map(number)
            .transpose()
            .map_err(|reason| invalid(value_field, reason))?
            .ok_or_else(|| invalid(value_field, "is required"))?;

        Ok(Self {
            direction,
            event,
            gender,
            indoor: present(&fields, "indoor").is_some_and(truthy),
            units: present(&fields, "units")
                .cloned()
                .unwrap_or_else(|| Value::from("seconds")),
            value,
        })
    }
}

/// Required fields for a direction, in the order they are reported.
pub(crate) fn required_fields(direction: Direction) -> &'static [&'static str] {
    match direction {
        Direction::PerformanceToPoints => &["event", "performance", "gender"],
        Direction::PointsToPerformance => &["event", "points", "gender"],
    }
}

fn value_field(direction: Direction) -> &'static str {
    match direction {
        Direction::PerformanceToPoints => "performance",
        Direction::PointsToPerformance => "points",
    }
}

fn invalid(field: &'static str, reason: impl ToString) -> PayloadError {
    PayloadError::InvalidField {
        field,
        reason: reason.to_string(),
    }
}

/// Looks up a field, treating `null` as absent.
fn present<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    fields.get(name).filter(|value| !value.is_null())
}

/// Reads a JSON number or a numeric string.
fn number(value: &Value) -> Result<f64, String> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    parsed
        .filter(|value: &f64| value.is_finite())
        .ok_or_else(|| format!("expected a number, got {value}"))
}

/// Loose boolean reading: empty, zero, and `"0"` are false.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !(text.is_empty() || text == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}
