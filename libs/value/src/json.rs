use serde_json::Value as JsonValue;

use crate::value::{Record, Value};

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                // u64 beyond i64::MAX and all non-integral numbers
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => Value::String(s.into()),
            JsonValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => {
                let record = map
                    .into_iter()
                    .fold(Record::anonymous(), |record, (name, value)| {
                        record.with_property(name, Value::from(value))
                    });
                Value::object(record)
            }
        }
    }
}
