use serde_json::{Map, Value};

/// View of one JSON value, exhaustively matchable.
#[derive(Debug)]
pub enum JsonKind<'a, N> {
    /// `null`
    Null,
    /// `true` or `false`
    Bool(bool),
    /// Any number.
    Number(f64),
    /// String.
    String(&'a str),
    /// Array with its elements.
    Array(&'a [N]),
    /// Object. Members are available through [`JsonNode::get`] and [`JsonNode::entries`].
    Object,
}

/// Read-only JSON tree the GeoJSON walker operates on.
///
/// The walker never uses a concrete JSON library type directly, so any parsed JSON representation
/// can be read by implementing this trait. An implementation for [`serde_json::Value`] is provided.
pub trait JsonNode: Sized {
    /// Kind of the value.
    fn kind(&self) -> JsonKind<'_, Self>;

    /// Member of an object. Returns `None` for missing keys and for non-object values.
    fn get(&self, key: &str) -> Option<&Self>;

    /// Members of an object in their order. Empty for non-object values.
    fn entries(&self) -> impl Iterator<Item = (&str, &Self)>;

    /// String value.
    fn as_str(&self) -> Option<&str> {
        match self.kind() {
            JsonKind::String(v) => Some(v),
            _ => None,
        }
    }

    /// Number value.
    fn as_f64(&self) -> Option<f64> {
        match self.kind() {
            JsonKind::Number(v) => Some(v),
            _ => None,
        }
    }

    /// Array elements.
    fn as_array(&self) -> Option<&[Self]> {
        match self.kind() {
            JsonKind::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Returns true if the value is an object.
    fn is_object(&self) -> bool {
        matches!(self.kind(), JsonKind::Object)
    }
}

impl JsonNode for Value {
    fn kind(&self) -> JsonKind<'_, Self> {
        match self {
            Value::Null => JsonKind::Null,
            Value::Bool(v) => JsonKind::Bool(*v),
            Value::Number(v) => JsonKind::Number(v.as_f64().unwrap_or(f64::NAN)),
            Value::String(v) => JsonKind::String(v),
            Value::Array(v) => JsonKind::Array(v),
            Value::Object(_) => JsonKind::Object,
        }
    }

    fn get(&self, key: &str) -> Option<&Self> {
        self.as_object()?.get(key)
    }

    fn entries(&self) -> impl Iterator<Item = (&str, &Self)> {
        self.as_object()
            .into_iter()
            .flat_map(|members| members.iter().map(|(key, value)| (key.as_str(), value)))
    }
}

/// Copies any JSON tree into a [`serde_json::Value`].
pub fn to_value<N: JsonNode>(node: &N) -> Value {
    match node.kind() {
        JsonKind::Null => Value::Null,
        JsonKind::Bool(v) => Value::Bool(v),
        JsonKind::Number(v) => serde_json::Number::from_f64(v).map_or(Value::Null, Value::Number),
        JsonKind::String(v) => Value::String(v.to_string()),
        JsonKind::Array(v) => Value::Array(v.iter().map(to_value).collect()),
        JsonKind::Object => Value::Object(
            node.entries()
                .map(|(key, value)| (key.to_string(), to_value(value)))
                .collect::<Map<_, _>>(),
        ),
    }
}
