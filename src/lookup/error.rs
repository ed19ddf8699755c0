//! Lookup error types

use std::fmt;
use thiserror::Error;

/// The kind of object a lookup was asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    StepTemplate,
    StepRun,
    Resource,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ObjectKind::StepTemplate => "step template",
            ObjectKind::StepRun => "step run",
            ObjectKind::Resource => "resource",
        };
        f.write_str(s)
    }
}

/// Error returned by a lookup
///
/// `NotFound` is kept apart from every other failure so callers can treat a
/// missing object as a permanent condition and retry the rest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("{kind} \"{name}\" not found")]
    NotFound { kind: ObjectKind, name: String },

    #[error("failed to look up {kind} \"{name}\": {message}")]
    Unavailable {
        kind: ObjectKind,
        name: String,
        message: String,
    },
}

impl LookupError {
    pub fn not_found(kind: ObjectKind, name: impl Into<String>) -> Self {
        LookupError::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub fn unavailable(kind: ObjectKind, name: impl Into<String>, message: impl Into<String>) -> Self {
        LookupError::Unavailable {
            kind,
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound { .. })
    }

    /// Kind of object the failed lookup was for
    pub fn kind(&self) -> ObjectKind {
        match self {
            LookupError::NotFound { kind, .. } | LookupError::Unavailable { kind, .. } => *kind,
        }
    }

    /// Name the failed lookup was for
    pub fn name(&self) -> &str {
        match self {
            LookupError::NotFound { name, .. } | LookupError::Unavailable { name, .. } => name,
        }
    }
}
