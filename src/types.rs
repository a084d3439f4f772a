use crate::error::Error;
use crate::sequence::LazySeq;

/// An evaluated argument value as handed over by the host evaluator.
///
/// `Json` holds an already-parsed document node, never JSON text. A
/// `Value::String` that happens to contain valid JSON is still a string:
/// functions that require a document node check the variant, not the content.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Boolean(bool),
    String(String),
    Array(Vec<Value>),
    Json(serde_json::Value),
    Sequence(LazySeq),
    Null,
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Convert a document node to its nearest primitive equivalent.
    ///
    /// Scalars map to the matching primitive variant, arrays convert
    /// element-wise, and objects stay wrapped as `Json` terminal nodes.
    pub fn from_json(node: &serde_json::Value) -> Result<Value, Error> {
        match node {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Boolean(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Number(i as f64))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::Number(f))
                } else {
                    Err(Error::format("Invalid number in JSON"))
                }
            }
            serde_json::Value::String(s) => Ok(Value::String(s.clone())),
            serde_json::Value::Array(arr) => {
                let mut result = Vec::with_capacity(arr.len());
                for item in arr {
                    result.push(Value::from_json(item)?);
                }
                Ok(Value::Array(result))
            }
            serde_json::Value::Object(_) => Ok(Value::Json(node.clone())),
        }
    }
}
