//! Boundary sets and pruning
//!
//! A boundary is kept in a `BTreeSet`, so iteration order and equality do not
//! depend on the order in which hypotheses were added. Pruning never edits a
//! set while walking it: it always builds the surviving set from scratch.

use crate::Hypothesis;
use std::collections::BTreeSet;

/// A set of hypotheses forming one frontier of the version space
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Boundary {
    hypotheses: BTreeSet<Hypothesis>,
}

impl Boundary {
    /// Empty boundary
    pub fn new() -> Self {
        Self::default()
    }

    /// Boundary holding a single hypothesis
    pub fn singleton(hypothesis: Hypothesis) -> Self {
        let mut hypotheses = BTreeSet::new();
        hypotheses.insert(hypothesis);
        Self { hypotheses }
    }

    /// Number of hypotheses
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }

    /// Whether the boundary holds no hypothesis
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }

    /// Iterate in a deterministic order
    pub fn iter(&self) -> impl Iterator<Item = &Hypothesis> {
        self.hypotheses.iter()
    }

    /// Whether `hypothesis` is a member
    pub fn contains(&self, hypothesis: &Hypothesis) -> bool {
        self.hypotheses.contains(hypothesis)
    }

    /// Keep only members satisfying `keep`
    pub fn retain_where<F>(&self, mut keep: F) -> Boundary
    where
        F: FnMut(&Hypothesis) -> bool,
    {
        self.iter().filter(|h| keep(h)).cloned().collect()
    }

    /// Keep the maximal elements: drop every member that is more specific than
    /// another member
    pub fn prune_more_specific(&self) -> Boundary {
        self.retain_where(|a| {
            !self
                .iter()
                .any(|b| b != a && a.is_more_specific_than(b))
        })
    }

    /// Keep the minimal elements: drop every member that is more general than
    /// another member
    pub fn prune_more_general(&self) -> Boundary {
        self.retain_where(|a| {
            !self
                .iter()
                .any(|b| b != a && a.is_more_general_than(b))
        })
    }

    /// Whether no two members are comparable
    pub fn is_antichain(&self) -> bool {
        self.iter().all(|a| {
            self.iter()
                .all(|b| a == b || (!a.is_more_general_than(b) && !b.is_more_general_than(a)))
        })
    }

    /// Whether some member is at least as general as `hypothesis`
    pub fn has_more_general(&self, hypothesis: &Hypothesis) -> bool {
        self.iter().any(|g| g.is_more_general_than(hypothesis))
    }

    /// Whether some member is at least as specific as `hypothesis`
    pub fn has_more_specific(&self, hypothesis: &Hypothesis) -> bool {
        self.iter().any(|s| s.is_more_specific_than(hypothesis))
    }

    /// Members rendered with `Display`, in iteration order
    pub fn to_strings(&self) -> Vec<String> {
        self.iter().map(|h| h.to_string()).collect()
    }
}

impl FromIterator<Hypothesis> for Boundary {
    fn from_iter<I: IntoIterator<Item = Hypothesis>>(iter: I) -> Self {
        Self {
            hypotheses: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Boundary {
    type Item = &'a Hypothesis;
    type IntoIter = std::collections::btree_set::Iter<'a, Hypothesis>;

    fn into_iter(self) -> Self::IntoIter {
        self.hypotheses.iter()
    }
}
