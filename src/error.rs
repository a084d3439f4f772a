use std::fmt::{Display, Formatter};

/// The two failure categories surfaced to the host evaluator.
///
/// `Format` means the caller supplied an argument of the wrong type or shape;
/// `Domain` means the arguments were well-typed but the operation has no valid
/// result (e.g. a path query with zero matches and no bypass flag). Hosts can
/// match on the kind to decide whether a failure is suppressible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    Domain,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub position: Option<usize>,
}

impl Error {
    pub fn new<M: Into<String>>(kind: ErrorKind, message: M, position: Option<usize>) -> Self {
        Self { kind, message: message.into(), position }
    }

    /// Format failure: wrong argument type or shape.
    pub fn format<M: Into<String>>(message: M) -> Self {
        Self::new(ErrorKind::Format, message, None)
    }

    /// Domain failure: well-typed arguments, no valid result under policy.
    pub fn domain<M: Into<String>>(message: M) -> Self {
        Self::new(ErrorKind::Domain, message, None)
    }

    /// Attach the source position of the offending call, when the host knows it.
    pub fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(pos) => write!(f, "{} at position {}", self.message, pos),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for Error {}
