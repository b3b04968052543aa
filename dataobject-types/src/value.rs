//! Conversion of dynamically-typed values into attribute strings.
//!
//! Every attribute of a data object is a string. Values coming from JSON or
//! from typed setters are widened to their canonical string form here:
//!
//! | Input | Output |
//! |---|---|
//! | string | unchanged |
//! | `None`, `()`, JSON `null` | `""` |
//! | byte sequence | the bytes read as UTF-8 text |
//! | integer (any width) | decimal digits |
//! | float, JSON number | fixed point with exactly 4 decimals |
//! | bool | `"true"` / `"false"` |
//! | JSON array | `[a b c]`, elements converted recursively |
//! | JSON object | `{k1:v1 k2:v2}`, keys in sorted order |

use crate::Attributes;
use serde_json::{Map, Number, Value};
use std::borrow::Cow;

/// A value that has a canonical attribute string form.
pub trait AttributeValue {
    /// Returns the canonical string stored for this value.
    fn to_attribute(&self) -> String;
}

impl AttributeValue for str {
    fn to_attribute(&self) -> String {
        self.to_owned()
    }
}

impl AttributeValue for String {
    fn to_attribute(&self) -> String {
        self.clone()
    }
}

impl AttributeValue for Cow<'_, str> {
    fn to_attribute(&self) -> String {
        self.as_ref().to_owned()
    }
}

impl<T: AttributeValue + ?Sized> AttributeValue for &T {
    fn to_attribute(&self) -> String {
        (**self).to_attribute()
    }
}

impl<T: AttributeValue> AttributeValue for Option<T> {
    fn to_attribute(&self) -> String {
        self.as_ref().map(T::to_attribute).unwrap_or_default()
    }
}

impl AttributeValue for () {
    fn to_attribute(&self) -> String {
        String::new()
    }
}

impl AttributeValue for bool {
    fn to_attribute(&self) -> String {
        self.to_string()
    }
}

// Invalid UTF-8 sequences become U+FFFD rather than failing the conversion.
impl AttributeValue for [u8] {
    fn to_attribute(&self) -> String {
        String::from_utf8_lossy(self).into_owned()
    }
}

impl AttributeValue for Vec<u8> {
    fn to_attribute(&self) -> String {
        self.as_slice().to_attribute()
    }
}

macro_rules! integer_attribute {
    ($($t:ty),*) => {
        $(
            impl AttributeValue for $t {
                fn to_attribute(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_attribute!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl AttributeValue for f64 {
    fn to_attribute(&self) -> String {
        format!("{self:.4}")
    }
}

impl AttributeValue for f32 {
    fn to_attribute(&self) -> String {
        f64::from(*self).to_attribute()
    }
}

/// JSON has a single numeric type, so every number takes the float form:
/// `42` becomes `"42.0000"`.
impl AttributeValue for Number {
    fn to_attribute(&self) -> String {
        match self.as_f64() {
            Some(f) => f.to_attribute(),
            None => self.to_string(),
        }
    }
}

impl AttributeValue for Value {
    fn to_attribute(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_attribute(),
            Value::Number(n) => n.to_attribute(),
            Value::String(s) => s.clone(),
            Value::Array(items) => {
                let parts: Vec<String> = items.iter().map(Value::to_attribute).collect();
                format!("[{}]", parts.join(" "))
            }
            Value::Object(map) => {
                let mut entries: Vec<(&String, &Value)> = map.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                let parts: Vec<String> = entries
                    .into_iter()
                    .map(|(k, v)| format!("{k}:{}", v.to_attribute()))
                    .collect();
                format!("{{{}}}", parts.join(" "))
            }
        }
    }
}

/// Converts a decoded JSON object into an attribute map.
#[must_use]
pub fn attributes_from_json(object: Map<String, Value>) -> Attributes {
    object
        .into_iter()
        .map(|(k, v)| (k, v.to_attribute()))
        .collect()
}

/// Builds an attribute map from any key/value pairs with a string form.
///
/// ```
/// use dataobject_types::to_attributes;
///
/// let attrs = to_attributes([("width", 0.5), ("height", 2.0)]);
/// assert_eq!(attrs["width"], "0.5000");
/// assert_eq!(attrs["height"], "2.0000");
/// ```
pub fn to_attributes<K, V, I>(pairs: I) -> Attributes
where
    K: Into<String>,
    V: AttributeValue,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.to_attribute()))
        .collect()
}
