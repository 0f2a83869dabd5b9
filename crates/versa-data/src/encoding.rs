//! Categorical encoding
//!
//! Maps the string cells of a [`Dataset`] onto the small integer codes the
//! learning core works with. Codes are handed out per column in first-seen
//! order, except that a column holding only `"0"` and `"1"` keeps the identity
//! mapping so already-binary data stays binary.

use crate::{DataError, Dataset, Result};
use versa_domain::{Example, Hypothesis, Instance, Label, Query, Schema, Term};

/// Symbol for "any value" in query input
const ANY: &str = "?";

/// Value names of one attribute, indexed by code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeEncoding {
    name: String,
    values: Vec<String>,
}

impl AttributeEncoding {
    /// Attribute name from the header
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value names in code order
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of distinct values
    pub fn arity(&self) -> u8 {
        // fit() caps the value count at u8::MAX
        self.values.len() as u8
    }

    /// Code assigned to `value`
    pub fn code_of(&self, value: &str) -> Option<u8> {
        self.values.iter().position(|v| v == value).map(|i| i as u8)
    }

    /// Name of the value with `code`
    pub fn name_of(&self, code: u8) -> Option<&str> {
        self.values.get(code as usize).map(String::as_str)
    }

    fn encode(&self, value: &str) -> Result<u8> {
        self.code_of(value).ok_or_else(|| DataError::UnknownValue {
            column: self.name.clone(),
            value: value.to_string(),
        })
    }
}

/// Parse a label cell
///
/// Accepts `1/0`, `true/false`, `yes/no` and `positive/negative`, ignoring case.
pub fn parse_label(s: &str) -> Option<Label> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "positive" => Some(Label::Positive),
        "0" | "false" | "no" | "negative" => Some(Label::Negative),
        _ => None,
    }
}

/// Encoder fitted to the columns of one dataset
#[derive(Debug, Clone)]
pub struct CategoricalEncoder {
    attributes: Vec<AttributeEncoding>,
    label_name: String,
    schema: Schema,
}

impl CategoricalEncoder {
    /// Assign codes to every attribute value of `dataset`
    pub fn fit(dataset: &Dataset) -> Result<Self> {
        let mut attributes = Vec::with_capacity(dataset.attribute_names().len());

        for (column, name) in dataset.attribute_names().iter().enumerate() {
            let mut values: Vec<String> = Vec::new();
            for row in dataset.rows() {
                let cell = &row[column];
                if !values.contains(cell) {
                    values.push(cell.clone());
                }
            }

            if values.iter().all(|v| v == "0" || v == "1") {
                values = vec!["0".to_string(), "1".to_string()];
            }
            if values.len() > u8::MAX as usize {
                return Err(DataError::TooManyValues {
                    column: name.clone(),
                });
            }

            tracing::trace!(attribute = %name, arity = values.len(), "Encoded attribute");
            attributes.push(AttributeEncoding {
                name: name.clone(),
                values,
            });
        }

        let schema = Schema::categorical(attributes.iter().map(|a| a.arity()).collect())?;
        tracing::debug!(
            attributes = schema.len(),
            binary = schema.is_binary(),
            "Fitted categorical encoder"
        );

        Ok(Self {
            attributes,
            label_name: dataset.label_name().to_string(),
            schema,
        })
    }

    /// Schema describing the encoded attributes
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Per-attribute encodings in header order
    pub fn attributes(&self) -> &[AttributeEncoding] {
        &self.attributes
    }

    /// Name of the label column
    pub fn label_name(&self) -> &str {
        &self.label_name
    }

    /// Encode every row of `dataset` as a labelled example
    ///
    /// Rows whose label cannot be parsed are rejected rather than skipped.
    pub fn encode_examples(&self, dataset: &Dataset) -> Result<Vec<Example>> {
        (0..dataset.len())
            .map(|row| {
                let cell = dataset.label(row);
                let label = parse_label(cell).ok_or_else(|| DataError::UnknownLabel {
                    row,
                    value: cell.to_string(),
                })?;
                let instance = self.encode_instance(dataset.attributes(row))?;
                Ok(Example::new(instance, label))
            })
            .collect()
    }

    /// Encode one row of attribute values
    pub fn encode_instance<S: AsRef<str>>(&self, values: &[S]) -> Result<Instance> {
        self.schema.check_len(values.len())?;
        let codes = self
            .attributes
            .iter()
            .zip(values)
            .map(|(attribute, value)| attribute.encode(value.as_ref().trim()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Instance::new(codes, &self.schema)?)
    }

    /// Encode a query; `?` leaves an attribute unconstrained
    pub fn encode_query<S: AsRef<str>>(&self, values: &[S]) -> Result<Query> {
        self.schema.check_len(values.len())?;
        let terms = self
            .attributes
            .iter()
            .zip(values)
            .map(|(attribute, value)| match value.as_ref().trim() {
                ANY => Ok(Term::Any),
                other => attribute.encode(other).map(Term::Value),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Query::from_terms(terms, &self.schema)?)
    }

    /// Render the terms of `hypothesis` with attribute value names
    pub fn decode(&self, hypothesis: &Hypothesis) -> Vec<String> {
        hypothesis
            .terms()
            .iter()
            .zip(&self.attributes)
            .map(|(term, attribute)| match *term {
                Term::Value(code) => attribute
                    .name_of(code)
                    .map(str::to_string)
                    .unwrap_or_else(|| term.to_string()),
                Term::Any | Term::Empty => term.to_string(),
            })
            .collect()
    }

    /// Decoded hypothesis in angle-bracket form, e.g. `<Sunny, Warm, ?>`
    pub fn render(&self, hypothesis: &Hypothesis) -> String {
        format!("<{}>", self.decode(hypothesis).join(", "))
    }
}
