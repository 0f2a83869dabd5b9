//! Hypothesis module - conjunctive hypotheses and their generality order
//!
//! A hypothesis is an immutable vector of [`Term`]s, one per attribute.
//! Every revision produces a new hypothesis; nothing is edited in place.

use crate::{Instance, LearnError, Result, Schema, Term};
use std::fmt;

/// A conjunction of attribute constraints
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hypothesis(Box<[Term]>);

impl Hypothesis {
    /// Build a hypothesis from its terms
    pub fn new(terms: Vec<Term>) -> Self {
        Self(terms.into_boxed_slice())
    }

    /// The maximally specific hypothesis `<*, ..., *>`
    pub fn all_empty(k: usize) -> Self {
        Self::new(vec![Term::Empty; k])
    }

    /// The maximally general hypothesis `<?, ..., ?>`
    pub fn all_any(k: usize) -> Self {
        Self::new(vec![Term::Any; k])
    }

    /// The hypothesis matching exactly one instance
    pub fn from_instance(instance: &Instance) -> Self {
        Self::new(instance.values().iter().map(|&v| Term::Value(v)).collect())
    }

    /// Parse a hypothesis and check it against `schema`
    pub fn parse_with(s: &str, schema: &Schema) -> Result<Self> {
        let hypothesis: Hypothesis = s.parse()?;
        hypothesis.validate(schema)?;
        Ok(hypothesis)
    }

    /// Check length and value codes against `schema`
    pub fn validate(&self, schema: &Schema) -> Result<()> {
        schema.check_len(self.len())?;
        for (position, term) in self.terms().iter().enumerate() {
            if let Term::Value(value) = *term {
                let arity = schema.arity(position);
                if value >= arity {
                    return Err(LearnError::ValueOutOfDomain { position, value, arity });
                }
            }
        }
        Ok(())
    }

    /// Whether any position is `*`, so the hypothesis matches nothing
    pub fn has_empty(&self) -> bool {
        self.0.iter().any(Term::is_empty)
    }

    /// Terms in attribute order
    pub fn terms(&self) -> &[Term] {
        &self.0
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the hypothesis has no attributes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the two vectors agree wherever neither side is `?`
    ///
    /// Works for hypothesis-vs-hypothesis as well as hypothesis-vs-instance
    /// (pass [`Hypothesis::from_instance`]).
    pub fn matches(&self, other: &Hypothesis) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| !a.contradicts(b))
    }

    /// Whether this hypothesis covers a concrete instance
    pub fn matches_instance(&self, instance: &Instance) -> bool {
        self.0
            .iter()
            .zip(instance.values())
            .all(|(term, &value)| !term.contradicts(&Term::Value(value)))
    }

    /// Whether every instance matched by `other` is matched by `self`
    ///
    /// Reflexive: a hypothesis is as general as itself.
    pub fn is_more_general_than(&self, other: &Hypothesis) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.covers(b))
    }

    /// Whether every instance matched by `self` is matched by `other`
    pub fn is_more_specific_than(&self, other: &Hypothesis) -> bool {
        other.is_more_general_than(self)
    }

    /// Positions where both sides are non-wildcard and differ
    pub fn contradicting_positions(&self, other: &Hypothesis) -> Vec<usize> {
        self.0
            .iter()
            .zip(other.0.iter())
            .enumerate()
            .filter(|(_, (a, b))| a.contradicts(b))
            .map(|(i, _)| i)
            .collect()
    }

    /// Least generalization that also covers `instance`
    ///
    /// An empty term takes the instance's value; any other disagreeing value
    /// becomes `?`.
    pub fn min_generalization(&self, instance: &Instance) -> Hypothesis {
        let terms = self
            .0
            .iter()
            .zip(instance.values())
            .map(|(term, &value)| match term {
                Term::Empty => Term::Value(value),
                Term::Value(v) if *v != value => Term::Any,
                same => *same,
            })
            .collect();
        Hypothesis::new(terms)
    }

    /// Least specializations that exclude `instance`
    ///
    /// One candidate per `?` position and per domain value other than the
    /// instance's value at that position.
    pub fn min_specializations(&self, instance: &Instance, schema: &Schema) -> Vec<Hypothesis> {
        let mut specializations = Vec::new();
        for (position, term) in self.0.iter().enumerate() {
            if !term.is_any() {
                continue;
            }
            for value in schema.other_values(position, instance.values()[position]) {
                let mut terms = self.0.to_vec();
                terms[position] = Term::Value(value);
                specializations.push(Hypothesis::new(terms));
            }
        }
        specializations
    }

    /// Copy of `self` with position `i` taken from `source`
    pub fn with_term_from(&self, source: &Hypothesis, position: usize) -> Hypothesis {
        let mut terms = self.0.to_vec();
        terms[position] = source.0[position];
        Hypothesis::new(terms)
    }
}

impl fmt::Display for Hypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|t| t.to_string()).collect();
        write!(f, "<{}>", parts.join(", "))
    }
}

impl std::str::FromStr for Hypothesis {
    type Err = LearnError;

    /// Accepts `<0, ?, 1>`, `0,?,1` or the compact `0?1`
    fn from_str(s: &str) -> Result<Self> {
        let body = s.trim().trim_start_matches('<').trim_end_matches('>').trim();
        if body.is_empty() {
            return Err(LearnError::ParseHypothesis(s.to_string()));
        }

        let tokens: Vec<String> = if body.contains(',') {
            body.split(',').map(|t| t.trim().to_string()).collect()
        } else if body.contains(char::is_whitespace) {
            body.split_whitespace().map(str::to_string).collect()
        } else {
            body.chars().map(String::from).collect()
        };

        tokens
            .iter()
            .map(|token| Term::parse(token).ok_or_else(|| LearnError::ParseHypothesis(s.to_string())))
            .collect::<Result<Vec<_>>>()
            .map(Hypothesis::new)
    }
}
