//! Error types for member extraction.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur while extracting members from an object.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A property name collided with a field name during a merge.
    #[error("Duplicate key: '{name}' is both a field and a property")]
    DuplicateKey { name: String },

    /// A property getter failed.
    #[error("Getter for {type_name}.{member} failed: {message}")]
    Getter {
        type_name: &'static str,
        member: String,
        message: String,
    },

    /// The live value of a member disagrees with its declared type.
    #[error("Type mismatch on '{member}': declared {expected}, found {found}")]
    TypeMismatch {
        member: String,
        expected: String,
        found: String,
    },

    /// An object was reached again while it was still being extracted.
    #[error("Cycle detected at {path}")]
    Cycle { path: String },

    /// Nesting went deeper than the configured limit.
    #[error("Depth limit of {limit} exceeded at {path}")]
    DepthLimit { limit: usize, path: String },

    /// A `Reflect` implementation was asked for a member it does not have.
    #[error("Unknown member {type_name}.{member}")]
    UnknownMember {
        type_name: &'static str,
        member: String,
    },
}

impl Error {
    /// Create a getter failure for `member` of `type_name`.
    pub fn getter(
        type_name: &'static str,
        member: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Getter {
            type_name,
            member: member.into(),
            message: message.into(),
        }
    }

    /// Create an unknown member error.
    pub fn unknown_member(type_name: &'static str, member: impl Into<String>) -> Self {
        Self::UnknownMember {
            type_name,
            member: member.into(),
        }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(
        member: impl Into<String>,
        expected: impl ToString,
        found: impl ToString,
    ) -> Self {
        Self::TypeMismatch {
            member: member.into(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// The colliding name, if this is a duplicate key error.
    pub fn duplicate_key(&self) -> Option<&str> {
        match self {
            Self::DuplicateKey { name } => Some(name),
            _ => None,
        }
    }
}
