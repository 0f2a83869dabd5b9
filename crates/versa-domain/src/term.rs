//! Term module - a single attribute constraint inside a hypothesis

use std::fmt;

/// Constraint placed on one attribute by a hypothesis
///
/// Terms are ordered by generality, position by position:
/// `Empty` is below every concrete value, every concrete value is below `Any`,
/// and two different concrete values are incomparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// Matches nothing (`*`); only used in the initial specific boundary
    Empty,

    /// Matches exactly one coded value
    Value(u8),

    /// Matches anything (`?`)
    Any,
}

impl Term {
    /// Whether this term is the wildcard
    pub fn is_any(&self) -> bool {
        matches!(self, Term::Any)
    }

    /// Whether this term is the empty constraint
    pub fn is_empty(&self) -> bool {
        matches!(self, Term::Empty)
    }

    /// Whether this term is at least as general as `other`
    pub fn covers(&self, other: &Term) -> bool {
        self == other || self.is_any() || other.is_empty()
    }

    /// Whether the two terms disagree with no wildcard involved
    pub fn contradicts(&self, other: &Term) -> bool {
        self != other && !self.is_any() && !other.is_any()
    }

    /// Parse a single token (`*`, `?` or a decimal code)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "*" => Some(Term::Empty),
            "?" => Some(Term::Any),
            code => code.parse::<u8>().ok().map(Term::Value),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Empty => write!(f, "*"),
            Term::Value(v) => write!(f, "{}", v),
            Term::Any => write!(f, "?"),
        }
    }
}

impl std::str::FromStr for Term {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid term: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_order() {
        assert!(Term::Any.covers(&Term::Value(0)));
        assert!(Term::Value(1).covers(&Term::Empty));
        assert!(Term::Any.covers(&Term::Empty));
        assert!(!Term::Value(0).covers(&Term::Value(1)));
        assert!(!Term::Value(0).covers(&Term::Any));
        assert!(!Term::Empty.covers(&Term::Value(0)));
    }

    #[test]
    fn test_contradiction() {
        assert!(Term::Value(0).contradicts(&Term::Value(1)));
        assert!(Term::Empty.contradicts(&Term::Value(1)));
        assert!(!Term::Any.contradicts(&Term::Value(1)));
        assert!(!Term::Value(1).contradicts(&Term::Value(1)));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Term::parse("*"), Some(Term::Empty));
        assert_eq!(Term::parse(" ? "), Some(Term::Any));
        assert_eq!(Term::parse("12"), Some(Term::Value(12)));
        assert_eq!(Term::parse("x"), None);
        assert!("256".parse::<Term>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Term::Empty.to_string(), "*");
        assert_eq!(Term::Any.to_string(), "?");
        assert_eq!(Term::Value(3).to_string(), "3");
    }
}
