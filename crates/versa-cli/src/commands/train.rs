//! Train command implementation.

use super::train_on;
use crate::cli::TrainArgs;
use crate::error::Result;
use crate::output::{Formatter, TrainingReport};
use versa_domain::MaterializeConfig;

/// Execute the train command.
pub fn execute_train(
    args: TrainArgs,
    config: &MaterializeConfig,
    formatter: &Formatter,
) -> Result<()> {
    let report = training_report(&args, config)?;
    println!("{}", formatter.format_training(&report)?);
    Ok(())
}

fn training_report(args: &TrainArgs, config: &MaterializeConfig) -> Result<TrainingReport> {
    let trained = train_on(&args.dataset, config)?;
    let encoder = &trained.encoder;

    let hypotheses = args
        .hypotheses
        .then(|| trained.space.iter().map(|h| encoder.decode(h)).collect());

    Ok(TrainingReport {
        attributes: encoder.attributes().iter().map(|a| a.name().to_string()).collect(),
        examples: trained.examples.len(),
        specific: trained.learner.specific().iter().map(|h| encoder.decode(h)).collect(),
        general: trained.learner.general().iter().map(|h| encoder.decode(h)).collect(),
        materialization: trained.space.materialization().as_str(),
        version_space_size: trained.space.len(),
        hypotheses,
        collapsed: trained.learner.is_collapsed(),
    })
}
