pub mod count;
pub mod jpath;
pub mod join;
pub mod regex_is_match;

pub use count::Count;
pub use jpath::JPath;
pub use join::Join;
pub use regex_is_match::RegexIsMatch;

use crate::registry::ExtensionFunction;

/// The built-in extension functions, boxed for registration.
pub fn defaults() -> Vec<Box<dyn ExtensionFunction>> {
    vec![
        Box::new(Count),
        Box::new(JPath),
        Box::new(Join),
        Box::new(RegexIsMatch),
    ]
}
