use crate::error::Error;
use crate::registry::ExtensionFunction;
use crate::sequence::LazySeq;
use crate::types::Value;

/// How a value can be counted. Classification is resolved up front so the
/// whole policy sits in one match instead of a chain of type probes; adding a
/// new countable shape means adding a variant here.
pub(crate) enum CountableShape<'a> {
    /// A container whose element count is known without iterating.
    FixedLength(usize),
    /// A document node that is a JSON array.
    ArrayNode(usize),
    /// A forward-only sequence with no known length; counting consumes it.
    SinglePass(&'a LazySeq),
    Unsupported,
}

pub(crate) fn classify(value: &Value) -> CountableShape<'_> {
    match value {
        Value::Array(items) => CountableShape::FixedLength(items.len()),
        Value::Json(node) => match node.as_array() {
            Some(items) => CountableShape::ArrayNode(items.len()),
            None => CountableShape::Unsupported,
        },
        Value::Sequence(seq) => CountableShape::SinglePass(seq),
        // Strings are deliberately not treated as character sequences.
        _ => CountableShape::Unsupported,
    }
}

pub struct Count;

impl ExtensionFunction for Count {
    fn name(&self) -> &str { "count" }
    fn min_args(&self) -> usize { 1 }
    fn max_args(&self) -> Option<usize> { Some(1) }

    fn execute(&self, args: Vec<Value>) -> Result<Value, Error> {
        match classify(&args[0]) {
            CountableShape::FixedLength(n) | CountableShape::ArrayNode(n) => {
                Ok(Value::Number(n as f64))
            }
            CountableShape::SinglePass(seq) => {
                // Drains the sequence: a later count of the same reference
                // sees whatever is left, usually nothing.
                let mut n = 0usize;
                while seq.next().is_some() {
                    n += 1;
                }
                Ok(Value::Number(n as f64))
            }
            CountableShape::Unsupported => {
                Err(Error::format("count() expects an enumerable/array-like argument."))
            }
        }
    }

    fn description(&self) -> Option<&str> {
        Some("Counts the elements of an array, array-like document node or single-pass sequence")
    }

    fn example(&self) -> Option<&str> {
        Some("count(x) returns 3 when x holds three elements")
    }
}
