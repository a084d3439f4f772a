use crate::error::Error;
use crate::registry::ExtensionFunction;
use crate::types::Value;
use jsonpath_rust::JsonPathQuery;

const USAGE: &str = "jPath function - first parameter should be a JObject and second a string jPath expression with optional third parameter returnNullIfNotFound.";
const NO_MATCH: &str = "jPath function - jPath expression did not result in a match.";

/// The raw match set, folded by cardinality before the caller-visible mapping
/// is applied. Keeping this separate makes the singular-vs-plural decision
/// testable independently of the failure policy.
enum QueryOutcome {
    Empty,
    Single(serde_json::Value),
    Many(Vec<serde_json::Value>),
}

/// Run a path query against a document node.
///
/// Paths are accepted without a leading `$`, so the forms `name`,
/// `numbers[0]` and `kvps[?(@.key=='key2')].value` all work verbatim.
/// Filter predicates are evaluated by the query engine itself.
fn run_query(source: &serde_json::Value, path: &str) -> Result<QueryOutcome, Error> {
    let rooted: std::borrow::Cow<'_, str> = if path.starts_with('$') {
        std::borrow::Cow::from(path)
    } else {
        std::borrow::Cow::from(format!("$.{}", path))
    };

    let matches = source
        .clone()
        .path(&rooted)
        .map_err(|e| Error::format(format!("jPath function - invalid jPath expression: {}", e)))?;

    Ok(match matches {
        serde_json::Value::Null => QueryOutcome::Empty,
        serde_json::Value::Array(mut items) => {
            if items.is_empty() {
                QueryOutcome::Empty
            } else if items.len() == 1 {
                // A single match that is itself an array node is plural: the
                // full array comes back, in order, rather than an error.
                match items.remove(0) {
                    serde_json::Value::Array(inner) => QueryOutcome::Many(inner),
                    only => QueryOutcome::Single(only),
                }
            } else {
                QueryOutcome::Many(items)
            }
        }
        other => QueryOutcome::Single(other),
    })
}

pub struct JPath;

impl ExtensionFunction for JPath {
    fn name(&self) -> &str { "jPath" }
    fn min_args(&self) -> usize { 2 }
    fn max_args(&self) -> Option<usize> { Some(3) }

    fn execute(&self, args: Vec<Value>) -> Result<Value, Error> {
        // Type-based, not value-based: a string containing JSON text is not
        // a document node.
        let source = match &args[0] {
            Value::Json(node) => node,
            _ => return Err(Error::format(USAGE)),
        };
        let path = match &args[1] {
            Value::String(s) if !s.is_empty() => s,
            _ => return Err(Error::format(USAGE)),
        };
        let return_null_if_not_found = match args.get(2) {
            Some(Value::Boolean(b)) => *b,
            None => false,
            Some(_) => return Err(Error::format(USAGE)),
        };

        match run_query(source, path)? {
            QueryOutcome::Empty => {
                if return_null_if_not_found {
                    Ok(Value::Null)
                } else {
                    Err(Error::domain(NO_MATCH))
                }
            }
            QueryOutcome::Single(node) => Value::from_json(&node),
            QueryOutcome::Many(nodes) => {
                let mut result = Vec::with_capacity(nodes.len());
                for node in &nodes {
                    result.push(Value::from_json(node)?);
                }
                Ok(Value::Array(result))
            }
        }
    }

    fn description(&self) -> Option<&str> {
        Some("Selects a value from a parsed JSON document by jPath expression")
    }

    fn example(&self) -> Option<&str> {
        Some("jPath(source, 'kvps[?(@.key==\\'key2\\')].value') returns 'value2'")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> serde_json::Value {
        json!({
            "name": "bob",
            "numbers": [1, 2],
            "kvps": [
                {"key": "key1", "value": "value1"},
                {"key": "key2", "value": "value2"}
            ]
        })
    }

    #[test]
    fn test_single_scalar_match() {
        assert!(matches!(
            run_query(&doc(), "name").unwrap(),
            QueryOutcome::Single(serde_json::Value::String(s)) if s == "bob"
        ));
    }

    #[test]
    fn test_array_field_is_plural() {
        match run_query(&doc(), "numbers").unwrap() {
            QueryOutcome::Many(items) => assert_eq!(items, vec![json!(1), json!(2)]),
            _ => panic!("expected a plural outcome"),
        }
    }

    #[test]
    fn test_indexed_access_is_singular() {
        assert!(matches!(
            run_query(&doc(), "numbers[1]").unwrap(),
            QueryOutcome::Single(n) if n == json!(2)
        ));
    }

    #[test]
    fn test_missing_path_is_empty() {
        assert!(matches!(run_query(&doc(), "size").unwrap(), QueryOutcome::Empty));
    }

    #[test]
    fn test_rooted_paths_pass_through() {
        assert!(matches!(
            run_query(&doc(), "$.name").unwrap(),
            QueryOutcome::Single(serde_json::Value::String(s)) if s == "bob"
        ));
    }
}
