//! Confusion matrix and derived evaluation metrics

use crate::Result;
use serde::Serialize;
use versa_domain::{Classifier, Example, Label};

/// Counts of predicted versus actual labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    /// Negative predicted negative
    pub tn: usize,
    /// Negative predicted positive
    pub fp: usize,
    /// Positive predicted negative
    #[serde(rename = "fn")]
    pub fn_: usize,
    /// Positive predicted positive
    pub tp: usize,
}

impl ConfusionMatrix {
    /// Empty matrix
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one prediction
    pub fn record(&mut self, actual: Label, predicted: Label) {
        match (actual, predicted) {
            (Label::Negative, Label::Negative) => self.tn += 1,
            (Label::Negative, Label::Positive) => self.fp += 1,
            (Label::Positive, Label::Negative) => self.fn_ += 1,
            (Label::Positive, Label::Positive) => self.tp += 1,
        }
    }

    /// Score `classifier` against labelled examples
    pub fn evaluate<C>(classifier: &C, examples: &[Example]) -> Result<Self>
    where
        C: Classifier + ?Sized,
    {
        let mut matrix = Self::new();
        for example in examples {
            let predicted = classifier.classify(&example.instance)?;
            matrix.record(example.label, predicted);
        }
        tracing::debug!(
            tn = matrix.tn,
            fp = matrix.fp,
            fn_ = matrix.fn_,
            tp = matrix.tp,
            "Evaluated classifier"
        );
        Ok(matrix)
    }

    /// Number of recorded predictions
    pub fn total(&self) -> usize {
        self.tn + self.fp + self.fn_ + self.tp
    }
}

/// Ratios derived from a [`ConfusionMatrix`]
///
/// A ratio whose denominator is zero is reported as `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Metrics {
    /// (tp + tn) / total
    pub accuracy: f64,
    /// tn / (tn + fp)
    pub specificity: f64,
    /// tp / (tp + fn)
    pub sensitivity: f64,
    /// tp / (tp + fp)
    pub precision: f64,
    /// (tp + fn) / total
    pub prevalence: f64,
}

impl From<&ConfusionMatrix> for Metrics {
    fn from(m: &ConfusionMatrix) -> Self {
        let total = m.total();
        Self {
            accuracy: ratio(m.tp + m.tn, total),
            specificity: ratio(m.tn, m.tn + m.fp),
            sensitivity: ratio(m.tp, m.tp + m.fn_),
            precision: ratio(m.tp, m.tp + m.fp),
            prevalence: ratio(m.tp + m.fn_, total),
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use versa_domain::{build, MaterializeConfig, Schema};

    #[test]
    fn test_record() {
        let mut matrix = ConfusionMatrix::new();
        matrix.record(Label::Positive, Label::Positive);
        matrix.record(Label::Positive, Label::Negative);
        matrix.record(Label::Negative, Label::Negative);
        matrix.record(Label::Negative, Label::Negative);
        matrix.record(Label::Negative, Label::Positive);

        assert_eq!(
            matrix,
            ConfusionMatrix {
                tn: 2,
                fp: 1,
                fn_: 1,
                tp: 1
            }
        );
        assert_eq!(matrix.total(), 5);
    }

    #[test]
    fn test_metrics() {
        let matrix = ConfusionMatrix {
            tn: 3,
            fp: 1,
            fn_: 2,
            tp: 4,
        };
        let metrics = Metrics::from(&matrix);

        assert!((metrics.accuracy - 0.7).abs() < 1e-12);
        assert!((metrics.specificity - 0.75).abs() < 1e-12);
        assert!((metrics.sensitivity - 4.0 / 6.0).abs() < 1e-12);
        assert!((metrics.precision - 0.8).abs() < 1e-12);
        assert!((metrics.prevalence - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_zero_denominators() {
        let metrics = Metrics::from(&ConfusionMatrix::new());
        assert_eq!(metrics, Metrics::default());

        // no positive predictions: precision is undefined
        let metrics = Metrics::from(&ConfusionMatrix {
            tn: 2,
            fp: 0,
            fn_: 1,
            tp: 0,
        });
        assert_eq!(metrics.precision, 0.0);
        assert_eq!(metrics.sensitivity, 0.0);
        assert_eq!(metrics.specificity, 1.0);
    }

    #[test]
    fn test_evaluate_version_space() {
        let schema = Schema::binary(3).unwrap();
        let examples = vec![
            Example::from_raw(vec![0, 0, 0], 1, &schema).unwrap(),
            Example::from_raw(vec![1, 0, 0], 0, &schema).unwrap(),
        ];
        let space = build(schema, &examples, &MaterializeConfig::default()).unwrap();

        let matrix = ConfusionMatrix::evaluate(&space, &examples).unwrap();
        assert_eq!(matrix.tp, 1);
        assert_eq!(matrix.tn, 1);
        assert_eq!(matrix.total(), 2);
    }
}
