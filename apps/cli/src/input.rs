use equate_value::Value;

/// Read a command-line argument as a value.
///
/// Valid JSON text is decoded; anything else is taken as a plain string, so
/// `abc` and `"abc"` are the same value.
pub fn parse_value(arg: &str) -> Value {
    match serde_json::from_str::<serde_json::Value>(arg) {
        Ok(json) => Value::from(json),
        Err(err) => {
            tracing::debug!(arg, error = %err, "Argument is not JSON, using it as a string");
            Value::from(arg)
        }
    }
}
