//! Uppercase conversion.

use crate::TransformError;
use shout_text::Value;

/// Convert one line of text to uppercase.
///
/// Uses the standard Unicode case mapping, locale-insensitive. Non-letter
/// characters pass through unchanged, and already-uppercase input is a
/// fixed point.
pub fn convert_line(line: &str) -> String {
    line.to_uppercase()
}

/// Convert a host-supplied line value to uppercase.
///
/// Host buffer reads are dynamically typed, so this checks the argument at
/// the boundary: anything other than [`Value::Text`] fails with
/// [`TransformError::InvalidArgumentType`]. On success the input is left
/// untouched and a new text value is returned.
pub fn to_uppercase(input: &Value) -> Result<Value, TransformError> {
    let Value::Text(line) = input else {
        return Err(TransformError::InvalidArgumentType {
            type_name: input.type_name(),
        });
    };
    Ok(Value::Text(convert_line(line)))
}
