//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use versa_data::{ConfusionMatrix, Metrics};

/// Outcome of a training run, with hypotheses decoded to value names.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingReport {
    /// Attribute names in header order
    pub attributes: Vec<String>,
    /// Number of training examples
    pub examples: usize,
    /// Specific boundary S
    pub specific: Vec<Vec<String>>,
    /// General boundary G
    pub general: Vec<Vec<String>>,
    /// Strategy used to materialize the version space
    pub materialization: &'static str,
    /// Number of materialized hypotheses
    pub version_space_size: usize,
    /// Every materialized hypothesis, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hypotheses: Option<Vec<Vec<String>>>,
    /// Whether the examples admit no conjunctive hypothesis
    pub collapsed: bool,
}

/// Outcome of a single prediction.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionReport {
    /// Attribute names in header order
    pub attributes: Vec<String>,
    /// Query values as given
    pub query: Vec<String>,
    /// Predicted label, 1 or 0
    pub label: u8,
    /// Hypotheses voting positive
    pub yes: usize,
    /// Hypotheses voting negative
    pub no: usize,
}

/// Outcome of scoring on the training data.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    /// Number of scored examples
    pub examples: usize,
    /// Predicted versus actual counts
    pub confusion: ConfusionMatrix,
    /// Ratios derived from the confusion matrix
    pub metrics: Metrics,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a training report.
    pub fn format_training(&self, report: &TrainingReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.format_training_table(report)),
            OutputFormat::Quiet => Ok(report.version_space_size.to_string()),
        }
    }

    /// Format a prediction report.
    pub fn format_prediction(&self, report: &PredictionReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.format_prediction_table(report)),
            OutputFormat::Quiet => Ok(report.label.to_string()),
        }
    }

    /// Format an evaluation report.
    pub fn format_evaluation(&self, report: &EvaluationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.format_evaluation_table(report)),
            OutputFormat::Quiet => Ok(format!("{:.4}", report.metrics.accuracy)),
        }
    }

    fn format_training_table(&self, report: &TrainingReport) -> String {
        let mut builder = Builder::default();
        let mut header = vec!["Boundary".to_string()];
        header.extend(report.attributes.iter().cloned());
        builder.push_record(header);

        for (name, boundary) in [("S", &report.specific), ("G", &report.general)] {
            for terms in boundary {
                let mut record = vec![name.to_string()];
                record.extend(terms.iter().cloned());
                builder.push_record(record);
            }
        }

        let mut lines = vec![self.table(builder)];

        if let Some(hypotheses) = &report.hypotheses {
            let mut builder = Builder::default();
            builder.push_record(report.attributes.iter().cloned());
            for terms in hypotheses {
                builder.push_record(terms.iter().cloned());
            }
            lines.push(self.table(builder));
        }

        if report.collapsed {
            lines.push(self.warning(
                "No conjunctive hypothesis is consistent with the training data",
            ));
        }
        lines.push(self.info(&format!(
            "{} example(s), version space holds {} hypothesis(es) ({})",
            report.examples, report.version_space_size, report.materialization
        )));

        lines.join("\n")
    }

    fn format_prediction_table(&self, report: &PredictionReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(report.attributes.iter().cloned());
        builder.push_record(report.query.iter().cloned());

        let verdict = if report.label == 1 {
            self.success("Prediction: positive (1)")
        } else {
            self.error("Prediction: negative (0)")
        };

        format!(
            "{}\n{}\n{}",
            self.table(builder),
            verdict,
            self.info(&format!("Votes: {} yes, {} no", report.yes, report.no))
        )
    }

    fn format_evaluation_table(&self, report: &EvaluationReport) -> String {
        let c = &report.confusion;
        let mut confusion = Builder::default();
        confusion.push_record(["", "Predicted 0", "Predicted 1"]);
        confusion.push_record(["Actual 0".to_string(), c.tn.to_string(), c.fp.to_string()]);
        confusion.push_record(["Actual 1".to_string(), c.fn_.to_string(), c.tp.to_string()]);

        let m = &report.metrics;
        let mut metrics = Builder::default();
        metrics.push_record(["Metric", "Value"]);
        for (name, value) in [
            ("Accuracy", m.accuracy),
            ("Specificity", m.specificity),
            ("Sensitivity", m.sensitivity),
            ("Precision", m.precision),
            ("Prevalence", m.prevalence),
        ] {
            metrics.push_record([name.to_string(), format!("{:.4}", value)]);
        }

        format!(
            "{}\n{}\n{}",
            self.table(confusion),
            self.table(metrics),
            self.info(&format!("Scored {} training example(s)", report.examples))
        )
    }

    fn table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
