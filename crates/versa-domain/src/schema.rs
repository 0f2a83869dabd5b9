//! Schema module - attribute count and per-attribute domain sizes

use crate::{LearnError, Result};

/// Attribute layout shared by every instance, hypothesis and query of one
/// learning run
///
/// Attribute `i` takes the value codes `0..arity(i)`. The canonical domain is
/// binary; categorical schemas come out of the dataset encoder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Schema {
    arities: Vec<u8>,
}

impl Schema {
    /// Create a schema of `k` binary attributes
    pub fn binary(k: usize) -> Result<Self> {
        if k == 0 {
            return Err(LearnError::EmptySchema);
        }
        Ok(Self { arities: vec![2; k] })
    }

    /// Create a schema with an explicit arity for every attribute
    pub fn categorical(arities: Vec<u8>) -> Result<Self> {
        if arities.is_empty() {
            return Err(LearnError::EmptySchema);
        }
        if let Some(position) = arities.iter().position(|&a| a == 0) {
            return Err(LearnError::InvalidArity { position });
        }
        Ok(Self { arities })
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.arities.len()
    }

    /// Always false; a schema is never empty
    pub fn is_empty(&self) -> bool {
        self.arities.is_empty()
    }

    /// Arity of attribute `position`
    pub fn arity(&self, position: usize) -> u8 {
        self.arities[position]
    }

    /// All arities in attribute order
    pub fn arities(&self) -> &[u8] {
        &self.arities
    }

    /// Whether every attribute is binary
    pub fn is_binary(&self) -> bool {
        self.arities.iter().all(|&a| a == 2)
    }

    /// Check that `len` matches the attribute count
    pub fn check_len(&self, len: usize) -> Result<()> {
        if len != self.len() {
            return Err(LearnError::ArityMismatch {
                expected: self.len(),
                actual: len,
            });
        }
        Ok(())
    }

    /// Check a raw value vector against the schema
    pub fn validate_instance(&self, values: &[u8]) -> Result<()> {
        self.check_len(values.len())?;
        for (position, (&value, &arity)) in values.iter().zip(&self.arities).enumerate() {
            if value >= arity {
                return Err(LearnError::ValueOutOfDomain {
                    position,
                    value,
                    arity,
                });
            }
        }
        Ok(())
    }

    /// Every value code of attribute `position` except `value`
    pub fn other_values(&self, position: usize, value: u8) -> impl Iterator<Item = u8> {
        (0..self.arities[position]).filter(move |&v| v != value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_schema() {
        let schema = Schema::binary(4).unwrap();
        assert_eq!(schema.len(), 4);
        assert!(schema.is_binary());
        assert_eq!(schema.arity(3), 2);
    }

    #[test]
    fn test_categorical_rejects_bad_layouts() {
        assert_eq!(Schema::categorical(vec![]), Err(LearnError::EmptySchema));
        assert_eq!(
            Schema::categorical(vec![2, 0, 3]),
            Err(LearnError::InvalidArity { position: 1 })
        );
    }

    #[test]
    fn test_validate_instance() {
        let schema = Schema::categorical(vec![2, 3]).unwrap();
        assert!(schema.validate_instance(&[1, 2]).is_ok());
        assert_eq!(
            schema.validate_instance(&[1]),
            Err(LearnError::ArityMismatch { expected: 2, actual: 1 })
        );
        assert_eq!(
            schema.validate_instance(&[2, 0]),
            Err(LearnError::ValueOutOfDomain { position: 0, value: 2, arity: 2 })
        );
    }

    #[test]
    fn test_other_values() {
        let schema = Schema::categorical(vec![3]).unwrap();
        assert_eq!(schema.other_values(0, 1).collect::<Vec<_>>(), vec![0, 2]);

        let binary = Schema::binary(1).unwrap();
        assert_eq!(binary.other_values(0, 0).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_binary_zero_attributes() {
        assert_eq!(Schema::binary(0), Err(LearnError::EmptySchema));
    }
}
