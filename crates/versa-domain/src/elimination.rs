//! Candidate elimination - incremental maintenance of the S and G boundaries
//!
//! Each example is one event. The event computes fresh boundaries from the
//! current ones and swaps them in when it is done, so a boundary is never
//! edited while it is being iterated and a rejected example changes nothing.

use crate::{
    Boundary, Example, Hypothesis, Instance, Label, MaterializeConfig, Result, Schema,
    VersionSpace,
};

/// The boundary update engine
///
/// # Examples
///
/// ```
/// use versa_domain::{CandidateElimination, Example, Hypothesis, Schema};
///
/// let schema = Schema::binary(3).unwrap();
/// let mut learner = CandidateElimination::new(schema.clone());
/// learner.observe(&Example::from_raw(vec![0, 0, 0], 1, &schema).unwrap()).unwrap();
/// learner.observe(&Example::from_raw(vec![1, 0, 0], 0, &schema).unwrap()).unwrap();
///
/// let g: Hypothesis = "0??".parse().unwrap();
/// assert!(learner.general().contains(&g));
/// ```
#[derive(Debug, Clone)]
pub struct CandidateElimination {
    schema: Schema,
    specific: Boundary,
    general: Boundary,
    examples_seen: usize,
}

impl CandidateElimination {
    /// Start with S = {<*, ..., *>} and G = {<?, ..., ?>}
    pub fn new(schema: Schema) -> Self {
        let k = schema.len();
        Self {
            specific: Boundary::singleton(Hypothesis::all_empty(k)),
            general: Boundary::singleton(Hypothesis::all_any(k)),
            schema,
            examples_seen: 0,
        }
    }

    /// The schema every example is checked against
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The specific boundary S
    pub fn specific(&self) -> &Boundary {
        &self.specific
    }

    /// The general boundary G
    pub fn general(&self) -> &Boundary {
        &self.general
    }

    /// Number of examples applied so far
    pub fn examples_seen(&self) -> usize {
        self.examples_seen
    }

    /// Whether no conjunctive hypothesis is consistent with the examples
    pub fn is_collapsed(&self) -> bool {
        self.specific.is_empty() || self.general.is_empty()
    }

    /// Apply one example
    pub fn observe(&mut self, example: &Example) -> Result<()> {
        // Instances may come from a different schema; recheck before touching S or G.
        self.schema.validate_instance(example.instance.values())?;

        let was_collapsed = self.is_collapsed();
        let (specific, general) = match example.label {
            Label::Positive => self.positive(&example.instance),
            Label::Negative => self.negative(&example.instance),
        };
        self.specific = specific;
        self.general = general;
        self.examples_seen += 1;

        tracing::debug!(
            example = self.examples_seen,
            label = %example.label,
            specific = self.specific.len(),
            general = self.general.len(),
            "Boundaries updated"
        );
        if self.is_collapsed() && !was_collapsed {
            tracing::warn!(
                example = self.examples_seen,
                "Version space collapsed: no conjunctive hypothesis fits the examples"
            );
        }
        Ok(())
    }

    /// Validate raw codes and a raw label, then apply them as one example
    pub fn observe_raw(&mut self, values: Vec<u8>, label: u8) -> Result<()> {
        let example = Example::from_raw(values, label, &self.schema)?;
        self.observe(&example)
    }

    /// Apply examples in order
    ///
    /// Stops at the first invalid example; the ones before it stay applied.
    pub fn train<'a, I>(&mut self, examples: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Example>,
    {
        for example in examples {
            self.observe(example)?;
        }
        Ok(())
    }

    /// Expand the current boundaries into a queryable version space
    pub fn materialize(&self, config: &MaterializeConfig) -> Result<VersionSpace> {
        VersionSpace::materialize(
            self.schema.clone(),
            self.specific.clone(),
            self.general.clone(),
            config,
        )
    }

    fn positive(&self, x: &Instance) -> (Boundary, Boundary) {
        // G keeps only hypotheses that cover every positive
        let general = self.general.retain_where(|g| g.matches_instance(x));

        let mut specific = Vec::with_capacity(self.specific.len());
        for s in &self.specific {
            if s.matches_instance(x) {
                specific.push(s.clone());
                continue;
            }
            let generalization = s.min_generalization(x);
            // never generalize past what the negatives already ruled out
            if general.is_empty() || general.has_more_general(&generalization) {
                specific.push(generalization);
            }
        }

        let specific: Boundary = specific.into_iter().collect();
        (specific.prune_more_general(), general)
    }

    fn negative(&self, x: &Instance) -> (Boundary, Boundary) {
        // S drops every hypothesis that covers a negative
        let specific = self.specific.retain_where(|s| !s.matches_instance(x));

        let mut general = Vec::with_capacity(self.general.len());
        for g in &self.general {
            if !g.matches_instance(x) {
                general.push(g.clone());
            }
            for specialization in g.min_specializations(x, &self.schema) {
                if specific.is_empty() || specific.has_more_specific(&specialization) {
                    general.push(specialization);
                }
            }
        }

        let general: Boundary = general.into_iter().collect();
        (specific, general.prune_more_specific())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const K: usize = 4;

    fn examples() -> impl Strategy<Value = Vec<(Vec<u8>, u8)>> {
        prop::collection::vec((prop::collection::vec(0u8..2, K), 0u8..2), 0..10)
    }

    fn run(raw: &[(Vec<u8>, u8)]) -> CandidateElimination {
        let mut learner = CandidateElimination::new(Schema::binary(K).unwrap());
        for (values, label) in raw {
            learner.observe_raw(values.clone(), *label).unwrap();
        }
        learner
    }

    proptest! {
        /// Property: both boundaries stay antichains after every update
        #[test]
        fn test_antichain_invariant(raw in examples()) {
            let mut learner = CandidateElimination::new(Schema::binary(K).unwrap());
            for (values, label) in raw {
                learner.observe_raw(values, label).unwrap();
                prop_assert!(learner.specific().is_antichain());
                prop_assert!(learner.general().is_antichain());
            }
        }

        /// Property: boundaries agree with every example seen so far
        #[test]
        fn test_consistency_invariant(raw in examples()) {
            let schema = Schema::binary(K).unwrap();
            let mut learner = CandidateElimination::new(schema.clone());
            let mut seen: Vec<Example> = Vec::new();

            for (values, label) in raw {
                let example = Example::from_raw(values, label, &schema).unwrap();
                learner.observe(&example).unwrap();
                seen.push(example);

                for e in &seen {
                    match e.label {
                        Label::Positive => {
                            for s in learner.specific() {
                                prop_assert!(s.matches_instance(&e.instance));
                            }
                            // once S is empty no G member is anchored to the positives
                            if !learner.specific().is_empty() {
                                for g in learner.general() {
                                    prop_assert!(g.matches_instance(&e.instance));
                                }
                            }
                        }
                        Label::Negative => {
                            for g in learner.general() {
                                prop_assert!(!g.matches_instance(&e.instance));
                            }
                            if !learner.general().is_empty() {
                                for s in learner.specific() {
                                    prop_assert!(!s.matches_instance(&e.instance));
                                }
                            }
                        }
                    }
                }
            }
        }

        /// Property: a positive only removes from G, a negative only removes from S
        #[test]
        fn test_monotonicity(raw in examples(), values in prop::collection::vec(0u8..2, K)) {
            let learner = run(&raw);

            let mut positive = learner.clone();
            positive.observe_raw(values.clone(), 1).unwrap();
            prop_assert!(positive.general().iter().all(|g| learner.general().contains(g)));

            let mut negative = learner.clone();
            negative.observe_raw(values, 0).unwrap();
            prop_assert!(negative.specific().iter().all(|s| learner.specific().contains(s)));
        }

        /// Property: the same sequence always yields the same boundaries
        #[test]
        fn test_determinism(raw in examples()) {
            let first = run(&raw);
            let second = run(&raw);
            prop_assert_eq!(first.specific(), second.specific());
            prop_assert_eq!(first.general(), second.general());
        }
    }
}
