use json::number::Number;
use json::JsonValue;

use crate::error::{self, Path};
use crate::leaf::Leaf;
use crate::nested::Nested;

/// Parse a JSON document into a nested value.
///
/// Arrays become containers and scalars become leaves. Objects are keyed
/// structures and are rejected.
pub fn parse(json_text: &str) -> error::Result<Nested<Leaf>> {
    let value = json::parse(json_text)?;
    let nested = from_json_value(&value, &Path::root())?;
    tracing::debug!(leaves = nested.leaf_count(), depth = nested.depth(), "parsed JSON input");
    Ok(nested)
}

/// Convert an already parsed JSON value.
pub fn from_json_value(value: &JsonValue, path: &Path) -> error::Result<Nested<Leaf>> {
    match value {
        JsonValue::Null => Ok(Leaf::Null.into()),
        JsonValue::Short(s) => Ok(Leaf::from(s.as_str()).into()),
        JsonValue::String(s) => Ok(Leaf::from(s.as_str()).into()),
        JsonValue::Number(number) => Ok(number_leaf(*number).into()),
        JsonValue::Boolean(b) => Ok(Leaf::Boolean(*b).into()),
        JsonValue::Array(items) => {
            let mut entries = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                entries.push(from_json_value(item, &path.child(i))?);
            }
            Ok(Nested::Container(entries))
        }
        JsonValue::Object(_) => Err(error::Error::UnsupportedObject { path: path.clone() }),
    }
}

/// An integer leaf if the number is written without fraction or exponent
/// and fits in an `i64`, a float leaf otherwise.
fn number_leaf(number: Number) -> Leaf {
    let (positive, mantissa, exponent) = number.as_parts();
    if exponent == 0 && !number.is_nan() {
        let magnitude = i128::from(mantissa);
        let signed = if positive { magnitude } else { -magnitude };
        if let Ok(i) = i64::try_from(signed) {
            return Leaf::Integer(i);
        }
    }
    Leaf::from(f64::from(number))
}
