use crate::error::Error;
use crate::types::Value;
use std::collections::HashMap;

/// Trait for functions exposed to a host evaluator's dispatch table
///
/// # Example
/// ```rust
/// use spatula::registry::ExtensionFunction;
/// use spatula::{Value, Error};
///
/// struct UpperFunction;
///
/// impl ExtensionFunction for UpperFunction {
///     fn name(&self) -> &str { "upper" }
///     fn min_args(&self) -> usize { 1 }
///     fn max_args(&self) -> Option<usize> { Some(1) }
///
///     fn execute(&self, args: Vec<Value>) -> Result<Value, Error> {
///         match &args[0] {
///             Value::String(s) => Ok(Value::String(s.to_uppercase())),
///             _ => Err(Error::format("upper() expects a string argument.")),
///         }
///     }
/// }
/// ```
pub trait ExtensionFunction: Send + Sync {
    /// The name of the function as written in formulas (looked up case-insensitively)
    fn name(&self) -> &str;

    /// Minimum number of arguments required
    fn min_args(&self) -> usize;

    /// Maximum number of arguments allowed (None = unlimited)
    fn max_args(&self) -> Option<usize>;

    /// Execute the function with already-evaluated argument values
    fn execute(&self, args: Vec<Value>) -> Result<Value, Error>;

    /// Optional: Description of the function for documentation
    fn description(&self) -> Option<&str> { None }

    /// Optional: Example usage for documentation
    fn example(&self) -> Option<&str> { None }
}

/// Registry the host evaluator dispatches unknown function names through
#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, Box<dyn ExtensionFunction>>,
}

impl FunctionRegistry {
    /// Create a new empty function registry
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Create a registry with the built-in extension functions registered
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for function in crate::functions::defaults() {
            // Built-in definitions are statically valid.
            let _ = registry.register(function);
        }
        registry
    }

    /// Register an extension function
    pub fn register(&mut self, function: Box<dyn ExtensionFunction>) -> Result<(), Error> {
        let key = function.name().to_uppercase();

        // Validate function definition
        if key.is_empty() {
            return Err(Error::format("Function name cannot be empty"));
        }

        if function.min_args() > function.max_args().unwrap_or(usize::MAX) {
            return Err(Error::format("min_args cannot be greater than max_args"));
        }

        self.functions.insert(key, function);
        Ok(())
    }

    /// Get a function by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&dyn ExtensionFunction> {
        self.functions.get(&name.to_uppercase()).map(|f| f.as_ref())
    }

    /// List all registered function names, as their canonical spellings
    pub fn list_functions(&self) -> Vec<&str> {
        self.functions.values().map(|f| f.name()).collect()
    }

    /// Remove a function by name
    pub fn unregister(&mut self, name: &str) -> bool {
        self.functions.remove(&name.to_uppercase()).is_some()
    }

    /// Check if a function is registered
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(&name.to_uppercase())
    }

    /// Validate argument count and execute a function
    pub fn execute(&self, name: &str, args: Vec<Value>) -> Result<Value, Error> {
        let function = self.get(name)
            .ok_or_else(|| Error::format(format!("Unknown extension function: {}", name)))?;

        let arg_count = args.len();
        if arg_count < function.min_args() {
            return Err(Error::format(
                format!("{} expects at least {} arguments, got {}",
                    function.name(), function.min_args(), arg_count),
            ));
        }

        if let Some(max_args) = function.max_args() {
            if arg_count > max_args {
                return Err(Error::format(
                    format!("{} expects at most {} arguments, got {}",
                        function.name(), max_args, arg_count),
                ));
            }
        }

        function.execute(args)
    }
}
