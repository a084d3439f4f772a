use crate::error::Error;
use crate::registry::ExtensionFunction;
use crate::types::Value;

const USAGE: &str = "join() requires two string parameters.";

pub struct Join;

impl ExtensionFunction for Join {
    fn name(&self) -> &str { "join" }
    fn min_args(&self) -> usize { 2 }
    fn max_args(&self) -> Option<usize> { Some(2) }

    fn execute(&self, args: Vec<Value>) -> Result<Value, Error> {
        let items = match &args[0] {
            Value::Array(items) => items,
            _ => return Err(Error::format(USAGE)),
        };
        let separator = match &args[1] {
            Value::String(s) => s,
            _ => return Err(Error::format(USAGE)),
        };

        let mut parts = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::String(s) => parts.push(s.as_str()),
                _ => return Err(Error::format(USAGE)),
            }
        }

        Ok(Value::String(parts.join(separator)))
    }

    fn description(&self) -> Option<&str> {
        Some("Joins a list of strings with a separator")
    }

    fn example(&self) -> Option<&str> {
        Some("join(x, '-') returns 'a-b-c' when x is ['a', 'b', 'c']")
    }
}
