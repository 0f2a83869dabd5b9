//! Predict command implementation.

use super::train_on;
use crate::cli::PredictArgs;
use crate::error::{CliError, Result};
use crate::output::{Formatter, PredictionReport};
use versa_domain::MaterializeConfig;

/// Execute the predict command.
pub fn execute_predict(
    args: PredictArgs,
    config: &MaterializeConfig,
    formatter: &Formatter,
) -> Result<()> {
    let report = prediction_report(&args, config)?;
    println!("{}", formatter.format_prediction(&report)?);
    Ok(())
}

fn prediction_report(args: &PredictArgs, config: &MaterializeConfig) -> Result<PredictionReport> {
    let trained = train_on(&args.dataset, config)?;
    let attributes: Vec<String> = trained
        .encoder
        .attributes()
        .iter()
        .map(|a| a.name().to_string())
        .collect();

    if args.values.len() != attributes.len() {
        return Err(CliError::InvalidInput(format!(
            "Expected {} values ({}), got {}",
            attributes.len(),
            attributes.join(", "),
            args.values.len()
        )));
    }

    let query = trained.encoder.encode_query(args.values.as_slice())?;
    let votes = trained.space.votes(&query);
    let label = votes.label();
    tracing::debug!(yes = votes.yes, no = votes.no, label = %label, "Predicted");

    Ok(PredictionReport {
        attributes,
        query: args.values.clone(),
        label: label.as_u8(),
        yes: votes.yes,
        no: votes.no,
    })
}
