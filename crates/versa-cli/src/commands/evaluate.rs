//! Evaluate command implementation.

use super::train_on;
use crate::cli::EvaluateArgs;
use crate::error::Result;
use crate::output::{EvaluationReport, Formatter};
use versa_data::{ConfusionMatrix, Metrics};
use versa_domain::MaterializeConfig;

/// Execute the evaluate command.
pub fn execute_evaluate(
    args: EvaluateArgs,
    config: &MaterializeConfig,
    formatter: &Formatter,
) -> Result<()> {
    let report = evaluation_report(&args, config)?;
    println!("{}", formatter.format_evaluation(&report)?);
    Ok(())
}

fn evaluation_report(args: &EvaluateArgs, config: &MaterializeConfig) -> Result<EvaluationReport> {
    let trained = train_on(&args.dataset, config)?;
    let confusion = ConfusionMatrix::evaluate(&trained.space, &trained.examples)?;

    Ok(EvaluationReport {
        examples: confusion.total(),
        metrics: Metrics::from(&confusion),
        confusion,
    })
}
