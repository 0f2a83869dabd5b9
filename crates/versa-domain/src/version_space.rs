//! Version space materialization and majority-vote prediction

use crate::{
    Boundary, CandidateElimination, Classifier, Example, Hypothesis, Instance, Label, LearnError,
    Result, Schema, Term,
};
use std::collections::BTreeSet;

/// Default cap on the number of materialized hypotheses
pub const DEFAULT_MAX_HYPOTHESES: usize = 65_536;

/// How the boundaries are expanded into hypotheses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Materialization {
    /// S and G plus, for every `s`, position `i` and `g`, the hybrid taking
    /// position `i` from `s` and the rest from `g`
    ///
    /// Cheap to compute, but it need not coincide with the exact version
    /// space; on an untrained learner it holds far fewer hypotheses.
    #[default]
    Hybrid,

    /// Every hypothesis lying between some `s` in S and some `g` in G
    Exact,
}

impl Materialization {
    /// Get the strategy name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Materialization::Hybrid => "hybrid",
            Materialization::Exact => "exact",
        }
    }

    /// Parse a strategy from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hybrid" => Some(Materialization::Hybrid),
            "exact" => Some(Materialization::Exact),
            _ => None,
        }
    }
}

impl std::str::FromStr for Materialization {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid materialization: {}", s))
    }
}

/// Configuration for version space materialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeConfig {
    /// Expansion strategy
    pub materialization: Materialization,

    /// Upper bound on the number of hypotheses kept
    pub max_hypotheses: usize,
}

impl Default for MaterializeConfig {
    fn default() -> Self {
        Self {
            materialization: Materialization::Hybrid,
            max_hypotheses: DEFAULT_MAX_HYPOTHESES,
        }
    }
}

impl MaterializeConfig {
    /// Exact enumeration with the default budget
    pub fn exact() -> Self {
        Self {
            materialization: Materialization::Exact,
            ..Self::default()
        }
    }
}

/// A query vector: concrete codes, with `?` allowed as "no constraint"
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(Box<[Term]>);

impl Query {
    /// Query from concrete value codes
    pub fn from_values(values: &[u8], schema: &Schema) -> Result<Self> {
        schema.validate_instance(values)?;
        Ok(Self(values.iter().map(|&v| Term::Value(v)).collect()))
    }

    /// Query from terms; `*` is rejected
    pub fn from_terms(terms: Vec<Term>, schema: &Schema) -> Result<Self> {
        schema.check_len(terms.len())?;
        for (position, term) in terms.iter().enumerate() {
            match *term {
                Term::Empty => return Err(LearnError::InvalidQueryTerm { position }),
                Term::Value(value) if value >= schema.arity(position) => {
                    return Err(LearnError::ValueOutOfDomain {
                        position,
                        value,
                        arity: schema.arity(position),
                    })
                }
                _ => {}
            }
        }
        Ok(Self(terms.into_boxed_slice()))
    }

    /// Parse a query such as `<0, ?, 1>` or `0?1`
    pub fn parse_with(s: &str, schema: &Schema) -> Result<Self> {
        let hypothesis: Hypothesis = s.parse()?;
        Self::from_terms(hypothesis.terms().to_vec(), schema)
    }

    /// Query asking about one concrete instance
    pub fn from_instance(instance: &Instance) -> Self {
        Self(instance.values().iter().map(|&v| Term::Value(v)).collect())
    }

    /// Terms in attribute order
    pub fn terms(&self) -> &[Term] {
        &self.0
    }
}

/// Vote tally for one query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Votes {
    /// Hypotheses accepting the query
    pub yes: usize,
    /// Hypotheses rejecting the query
    pub no: usize,
}

impl Votes {
    /// Strict majority wins; a tie is negative
    pub fn label(&self) -> Label {
        Label::from(self.yes > self.no)
    }

    /// Total number of votes cast
    pub fn total(&self) -> usize {
        self.yes + self.no
    }
}

/// A materialized version space
///
/// Built once from a pair of boundaries and read-only afterwards. Training
/// further means materializing a new one.
#[derive(Debug, Clone)]
pub struct VersionSpace {
    schema: Schema,
    specific: Boundary,
    general: Boundary,
    materialization: Materialization,
    hypotheses: BTreeSet<Hypothesis>,
}

impl VersionSpace {
    /// Expand `specific` and `general` according to `config`
    ///
    /// Every boundary member is checked against `schema` first.
    pub fn materialize(
        schema: Schema,
        specific: Boundary,
        general: Boundary,
        config: &MaterializeConfig,
    ) -> Result<Self> {
        for h in specific.iter().chain(general.iter()) {
            h.validate(&schema)?;
        }

        let hypotheses = match config.materialization {
            Materialization::Hybrid => hybrid(&specific, &general, config.max_hypotheses)?,
            Materialization::Exact => exact(&schema, &specific, &general, config.max_hypotheses)?,
        };

        tracing::info!(
            strategy = config.materialization.as_str(),
            specific = specific.len(),
            general = general.len(),
            hypotheses = hypotheses.len(),
            "Version space materialized"
        );

        Ok(Self {
            schema,
            specific,
            general,
            materialization: config.materialization,
            hypotheses,
        })
    }

    /// Schema of the training run
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The specific boundary this space was built from
    pub fn specific(&self) -> &Boundary {
        &self.specific
    }

    /// The general boundary this space was built from
    pub fn general(&self) -> &Boundary {
        &self.general
    }

    /// Strategy used to build the space
    pub fn materialization(&self) -> Materialization {
        self.materialization
    }

    /// Number of hypotheses
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }

    /// Whether the space holds no hypothesis
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }

    /// Iterate hypotheses in a deterministic order
    pub fn iter(&self) -> impl Iterator<Item = &Hypothesis> {
        self.hypotheses.iter()
    }

    /// Whether `hypothesis` is part of the space
    pub fn contains(&self, hypothesis: &Hypothesis) -> bool {
        self.hypotheses.contains(hypothesis)
    }

    /// Count the hypotheses accepting and rejecting `query`
    pub fn votes(&self, query: &Query) -> Votes {
        let yes = self.hypotheses.iter().filter(|h| accepts(h, query)).count();
        Votes {
            yes,
            no: self.hypotheses.len() - yes,
        }
    }

    /// Majority vote over the space
    pub fn predict(&self, query: &Query) -> Label {
        self.votes(query).label()
    }

    /// Validate raw codes against the schema and predict
    pub fn predict_values(&self, values: &[u8]) -> Result<Label> {
        let query = Query::from_values(values, &self.schema)?;
        Ok(self.predict(&query))
    }
}

impl Classifier for VersionSpace {
    fn classify(&self, instance: &Instance) -> Result<Label> {
        self.predict_values(instance.values())
    }
}

/// Train on `examples` and materialize the resulting version space
pub fn build<'a, I>(schema: Schema, examples: I, config: &MaterializeConfig) -> Result<VersionSpace>
where
    I: IntoIterator<Item = &'a Example>,
{
    let mut learner = CandidateElimination::new(schema);
    learner.train(examples)?;
    tracing::info!(
        examples = learner.examples_seen(),
        collapsed = learner.is_collapsed(),
        "Training finished"
    );
    learner.materialize(config)
}

/// A hypothesis votes yes when every concrete term agrees with the query
fn accepts(hypothesis: &Hypothesis, query: &Query) -> bool {
    hypothesis
        .terms()
        .iter()
        .zip(query.terms())
        .all(|(term, q)| match term {
            Term::Empty => false,
            Term::Any => true,
            Term::Value(_) => q.is_any() || q == term,
        })
}

fn insert_bounded(
    set: &mut BTreeSet<Hypothesis>,
    hypothesis: Hypothesis,
    limit: usize,
) -> Result<()> {
    set.insert(hypothesis);
    if set.len() > limit {
        return Err(LearnError::VersionSpaceTooLarge { limit });
    }
    Ok(())
}

fn hybrid(specific: &Boundary, general: &Boundary, limit: usize) -> Result<BTreeSet<Hypothesis>> {
    let mut space = BTreeSet::new();
    for h in specific.iter().chain(general.iter()) {
        insert_bounded(&mut space, h.clone(), limit)?;
    }

    for s in specific {
        for position in 0..s.len() {
            for g in general {
                insert_bounded(&mut space, g.with_term_from(s, position), limit)?;
            }
        }
    }
    Ok(space)
}

fn exact(
    schema: &Schema,
    specific: &Boundary,
    general: &Boundary,
    limit: usize,
) -> Result<BTreeSet<Hypothesis>> {
    let mut space = BTreeSet::new();

    for s in specific {
        for g in general.iter().filter(|g| g.is_more_general_than(s)) {
            // any hypothesis with a `*` matches nothing, so all of them count
            // once, as <*, ..., *>
            if s.has_empty() {
                insert_bounded(&mut space, Hypothesis::all_empty(schema.len()), limit)?;
            }

            let choices: Vec<Vec<Term>> = (0..schema.len())
                .map(|i| terms_between(s.terms()[i], g.terms()[i], schema.arity(i)))
                .collect();
            if choices.iter().any(Vec::is_empty) {
                continue;
            }

            let size = choices
                .iter()
                .fold(1usize, |acc, c| acc.saturating_mul(c.len()));
            if size > limit {
                return Err(LearnError::VersionSpaceTooLarge { limit });
            }

            // odometer over the per-position choices
            let mut cursor = vec![0usize; choices.len()];
            loop {
                let terms = cursor
                    .iter()
                    .zip(&choices)
                    .map(|(&c, options)| options[c])
                    .collect();
                insert_bounded(&mut space, Hypothesis::new(terms), limit)?;

                let mut position = 0;
                while position < cursor.len() {
                    cursor[position] += 1;
                    if cursor[position] < choices[position].len() {
                        break;
                    }
                    cursor[position] = 0;
                    position += 1;
                }
                if position == cursor.len() {
                    break;
                }
            }
        }
    }
    Ok(space)
}

/// Non-empty terms `t` with `low <= t <= high` in the positional order
fn terms_between(low: Term, high: Term, arity: u8) -> Vec<Term> {
    (0..arity)
        .map(Term::Value)
        .chain(std::iter::once(Term::Any))
        .filter(|t| high.covers(t) && t.covers(&low))
        .collect()
}
