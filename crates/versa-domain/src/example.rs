//! Training examples - validated instances paired with a binary label

use crate::{LearnError, Result, Schema};
use std::fmt;

/// A fully concrete attribute vector, already checked against a schema
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instance(Box<[u8]>);

impl Instance {
    /// Validate `values` against `schema` and wrap them
    pub fn new(values: Vec<u8>, schema: &Schema) -> Result<Self> {
        schema.validate_instance(&values)?;
        Ok(Self(values.into_boxed_slice()))
    }

    /// Value codes in attribute order
    pub fn values(&self) -> &[u8] {
        &self.0
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the instance has no attributes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|v| v.to_string()).collect();
        write!(f, "<{}>", parts.join(", "))
    }
}

/// Classification label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    /// The concept does not hold (0)
    Negative,

    /// The concept holds (1)
    Positive,
}

impl Label {
    /// Numeric form of the label
    pub fn as_u8(&self) -> u8 {
        match self {
            Label::Negative => 0,
            Label::Positive => 1,
        }
    }

    /// Whether this is the positive label
    pub fn is_positive(&self) -> bool {
        matches!(self, Label::Positive)
    }
}

impl TryFrom<u8> for Label {
    type Error = LearnError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Label::Negative),
            1 => Ok(Label::Positive),
            other => Err(LearnError::InvalidLabel(other)),
        }
    }
}

impl From<bool> for Label {
    fn from(value: bool) -> Self {
        if value {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// A labeled training example
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Example {
    /// The observed instance
    pub instance: Instance,

    /// Whether the instance belongs to the concept
    pub label: Label,
}

impl Example {
    /// Create an example from a validated instance
    pub fn new(instance: Instance, label: Label) -> Self {
        Self { instance, label }
    }

    /// Create an example from raw codes and a raw label
    ///
    /// The label is checked before the values, and nothing is built unless
    /// both are valid.
    pub fn from_raw(values: Vec<u8>, label: u8, schema: &Schema) -> Result<Self> {
        let label = Label::try_from(label)?;
        let instance = Instance::new(values, schema)?;
        Ok(Self { instance, label })
    }
}

/// Pair attribute rows with their labels
///
/// `data[i]` is labeled by `target[i]`; both sequences must have the same length.
pub fn examples_from_pairs(data: &[Vec<u8>], target: &[u8], schema: &Schema) -> Result<Vec<Example>> {
    if data.len() != target.len() {
        return Err(LearnError::LengthMismatch {
            data: data.len(),
            target: target.len(),
        });
    }

    data.iter()
        .zip(target)
        .map(|(values, &label)| Example::from_raw(values.clone(), label, schema))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_conversion() {
        assert_eq!(Label::try_from(0), Ok(Label::Negative));
        assert_eq!(Label::try_from(1), Ok(Label::Positive));
        assert_eq!(Label::try_from(2), Err(LearnError::InvalidLabel(2)));
        assert_eq!(Label::from(true), Label::Positive);
        assert_eq!(Label::Positive.as_u8(), 1);
    }

    #[test]
    fn test_example_from_raw() {
        let schema = Schema::binary(3).unwrap();
        let example = Example::from_raw(vec![0, 1, 0], 1, &schema).unwrap();
        assert_eq!(example.instance.values(), &[0, 1, 0]);
        assert!(example.label.is_positive());
        assert_eq!(example.instance.to_string(), "<0, 1, 0>");
    }

    #[test]
    fn test_example_rejects_invalid_label() {
        let schema = Schema::binary(3).unwrap();
        let result = Example::from_raw(vec![0, 1, 0], 7, &schema);
        assert_eq!(result, Err(LearnError::InvalidLabel(7)));
    }

    #[test]
    fn test_example_rejects_wildcard_code() {
        let schema = Schema::binary(2).unwrap();
        let result = Example::from_raw(vec![0, 2], 0, &schema);
        assert!(matches!(result, Err(LearnError::ValueOutOfDomain { position: 1, .. })));
    }

    #[test]
    fn test_examples_from_pairs() {
        let schema = Schema::binary(2).unwrap();
        let data = vec![vec![0, 0], vec![1, 1]];
        let examples = examples_from_pairs(&data, &[1, 0], &schema).unwrap();
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[1].label, Label::Negative);

        let mismatch = examples_from_pairs(&data, &[1], &schema);
        assert_eq!(mismatch, Err(LearnError::LengthMismatch { data: 2, target: 1 }));
    }
}
