use crate::error::Error;
use crate::registry::ExtensionFunction;
use crate::types::Value;
use regex::Regex;

pub struct RegexIsMatch;

impl ExtensionFunction for RegexIsMatch {
    fn name(&self) -> &str { "regexIsMatch" }
    fn min_args(&self) -> usize { 2 }
    fn max_args(&self) -> Option<usize> { Some(2) }

    fn execute(&self, args: Vec<Value>) -> Result<Value, Error> {
        let (subject, pattern) = match (&args[0], &args[1]) {
            (Value::String(subject), Value::String(pattern)) => (subject, pattern),
            _ => return Err(Error::format("regexIsMatch() requires two string parameters.")),
        };

        // Pattern-compilation failures are surfaced with the engine's own message.
        let re = Regex::new(pattern).map_err(|e| Error::format(e.to_string()))?;
        Ok(Value::Boolean(re.is_match(subject)))
    }

    fn description(&self) -> Option<&str> {
        Some("Tests whether a string matches a regular expression")
    }

    fn example(&self) -> Option<&str> {
        Some("regexIsMatch('abc:def:2019-01-01', '^.+?:.+?:(.+)$') returns true")
    }
}
