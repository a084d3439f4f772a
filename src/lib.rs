pub mod error;
pub mod functions;
pub mod registry;
pub mod sequence;
pub mod types;

pub use error::{Error, ErrorKind};
pub use functions::{Count, JPath, Join, RegexIsMatch};
pub use registry::{ExtensionFunction, FunctionRegistry};
pub use sequence::LazySeq;
pub use types::Value;
use std::sync::{Arc, RwLock};

// Global function registry, pre-loaded with the built-in extension functions
lazy_static::lazy_static! {
    static ref GLOBAL_REGISTRY: Arc<RwLock<FunctionRegistry>> =
        Arc::new(RwLock::new(FunctionRegistry::with_defaults()));
}

/// Invoke a registered function by name with already-evaluated argument
/// values. This is the entry point a host evaluator wires into its
/// function-dispatch table.
///
/// A panic while the lock was held only poisons the flag; the registry map
/// underneath stays intact, so the guard is recovered rather than surfacing
/// an internal fault as a caller-contract failure.
pub fn call_function(name: &str, args: Vec<Value>) -> Result<Value, Error> {
    let registry = GLOBAL_REGISTRY.read().unwrap_or_else(|e| e.into_inner());
    registry.execute(name, args)
}

/// Register an extension function globally
pub fn register_function(function: Box<dyn ExtensionFunction>) -> Result<(), Error> {
    let mut registry = GLOBAL_REGISTRY.write().unwrap_or_else(|e| e.into_inner());
    registry.register(function)
}

/// Unregister an extension function by name
pub fn unregister_function(name: &str) -> bool {
    GLOBAL_REGISTRY.write().unwrap_or_else(|e| e.into_inner()).unregister(name)
}

/// List all registered function names
pub fn list_functions() -> Vec<String> {
    let registry = GLOBAL_REGISTRY.read().unwrap_or_else(|e| e.into_inner());
    registry.list_functions().iter().map(|s| s.to_string()).collect()
}

/// Check if a function is registered
pub fn has_function(name: &str) -> bool {
    GLOBAL_REGISTRY.read().unwrap_or_else(|e| e.into_inner()).has_function(name)
}
