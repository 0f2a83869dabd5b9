//! Trait definitions for the boundary between learners and their consumers
//!
//! Evaluation code in other crates scores anything implementing [`Classifier`],
//! so the version space can be compared side by side with other models.

use crate::{Instance, Label, Result};

/// A trained binary classifier
pub trait Classifier {
    /// Predict the label of a single instance
    fn classify(&self, instance: &Instance) -> Result<Label>;

    /// Predict labels for a batch of instances, stopping at the first error
    fn classify_all(&self, instances: &[Instance]) -> Result<Vec<Label>> {
        instances.iter().map(|i| self.classify(i)).collect()
    }
}
