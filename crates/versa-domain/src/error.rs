//! Error types for the learning core

use thiserror::Error;

/// Result type alias for learning operations
pub type Result<T> = std::result::Result<T, LearnError>;

/// Errors raised by the learning core
///
/// Every variant is detected before any boundary is touched, so a failed call
/// leaves the learner exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LearnError {
    /// A schema needs at least one attribute
    #[error("Schema must contain at least one attribute")]
    EmptySchema,

    /// An attribute was declared with no values at all
    #[error("Attribute {position} has arity 0")]
    InvalidArity {
        /// Attribute index
        position: usize,
    },

    /// A vector does not have one entry per attribute
    #[error("Expected {expected} attributes, got {actual}")]
    ArityMismatch {
        /// Number of attributes in the schema
        expected: usize,
        /// Number of entries supplied
        actual: usize,
    },

    /// A value code is not part of its attribute's domain
    #[error("Value {value} at position {position} is outside the domain 0..{arity}")]
    ValueOutOfDomain {
        /// Attribute index
        position: usize,
        /// Offending code
        value: u8,
        /// Arity of the attribute
        arity: u8,
    },

    /// A label other than 0 or 1
    #[error("Invalid label {0}: expected 0 or 1")]
    InvalidLabel(u8),

    /// A query carried the empty term `*`
    #[error("Query term at position {position} must be a value or '?'")]
    InvalidQueryTerm {
        /// Attribute index
        position: usize,
    },

    /// Text could not be parsed as a hypothesis
    #[error("Cannot parse hypothesis: {0}")]
    ParseHypothesis(String),

    /// Attribute rows and labels were not paired one to one
    #[error("Got {data} attribute rows but {target} labels")]
    LengthMismatch {
        /// Number of attribute rows
        data: usize,
        /// Number of labels
        target: usize,
    },

    /// Materialization would exceed the configured hypothesis budget
    #[error("Version space exceeds the limit of {limit} hypotheses")]
    VersionSpaceTooLarge {
        /// Configured limit
        limit: usize,
    },
}
