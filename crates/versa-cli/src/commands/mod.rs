//! Command implementations.

pub mod config;
pub mod evaluate;
pub mod predict;
pub mod train;

pub use self::config::execute_config;
pub use self::evaluate::execute_evaluate;
pub use self::predict::execute_predict;
pub use self::train::execute_train;

use crate::error::Result;
use std::path::Path;
use versa_data::{CategoricalEncoder, Dataset};
use versa_domain::{CandidateElimination, Example, MaterializeConfig, VersionSpace};

/// A dataset run through the learner, shared by every data command.
pub(crate) struct Trained {
    pub encoder: CategoricalEncoder,
    pub examples: Vec<Example>,
    pub learner: CandidateElimination,
    pub space: VersionSpace,
}

/// Load, encode, and learn from the dataset at `path`.
pub(crate) fn train_on(path: &Path, config: &MaterializeConfig) -> Result<Trained> {
    let dataset = Dataset::from_path(path)?;
    let encoder = CategoricalEncoder::fit(&dataset)?;
    let examples = encoder.encode_examples(&dataset)?;

    let mut learner = CandidateElimination::new(encoder.schema().clone());
    learner.train(&examples)?;
    let space = learner.materialize(config)?;

    tracing::info!(
        path = %path.display(),
        examples = examples.len(),
        specific = learner.specific().len(),
        general = learner.general().len(),
        hypotheses = space.len(),
        "Trained version space"
    );

    Ok(Trained {
        encoder,
        examples,
        learner,
        space,
    })
}
