//! Versa Domain Layer
//!
//! This crate contains the concept-learning core of Versa: the candidate
//! elimination algorithm over conjunctive hypotheses. It performs no I/O and
//! defines the value objects, the boundary update engine and the predictor
//! that the data and CLI layers build upon.
//!
//! ## Key Concepts
//!
//! - **Term**: one attribute constraint - a concrete code, `?` (anything) or `*` (nothing)
//! - **Hypothesis**: a fixed-length conjunction of terms
//! - **Boundary**: an antichain of hypotheses (the specific set S or the general set G)
//! - **Candidate elimination**: per-example revision of S and G
//! - **Version space**: the hypotheses between S and G, queried by majority vote
//!
//! ## Example
//!
//! ```
//! use versa_domain::{build, Example, Label, MaterializeConfig, Query, Schema};
//!
//! let schema = Schema::binary(3).unwrap();
//! let examples = vec![
//!     Example::from_raw(vec![0, 0, 0], 1, &schema).unwrap(),
//!     Example::from_raw(vec![1, 0, 0], 0, &schema).unwrap(),
//! ];
//!
//! let space = build(schema.clone(), &examples, &MaterializeConfig::default()).unwrap();
//! let query = Query::from_values(&[0, 1, 1], &schema).unwrap();
//! assert_eq!(space.predict(&query), Label::Negative);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod boundary;
pub mod elimination;
pub mod error;
pub mod example;
pub mod hypothesis;
pub mod schema;
pub mod term;
pub mod traits;
pub mod version_space;

// Re-exports for convenience
pub use boundary::Boundary;
pub use elimination::CandidateElimination;
pub use error::{LearnError, Result};
pub use example::{examples_from_pairs, Example, Instance, Label};
pub use hypothesis::Hypothesis;
pub use schema::Schema;
pub use term::Term;
pub use traits::Classifier;
pub use version_space::{
    build, MaterializeConfig, Materialization, Query, VersionSpace, Votes, DEFAULT_MAX_HYPOTHESES,
};
