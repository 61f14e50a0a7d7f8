use std::{
    collections::BTreeSet,
    fmt::Display,
    hash::{Hash, Hasher},
};

use crate::literal::Literal;

/// Sequential label used for trace printing and provenance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClauseId(pub usize);

impl ClauseId {
    // Returns the current id and advances the counter.
    pub fn bump(&mut self) -> ClauseId {
        let id = *self;
        self.0 += 1;
        id
    }
}

impl Display for ClauseId {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A disjunction of literals.
///
/// Equality and hashing only look at the literal *set*; the id and parents are
/// labels and play no part in membership checks.
#[derive(Clone, Debug)]
pub struct Clause {
    id: ClauseId,
    literals: Vec<Literal>,
    parents: Option<(ClauseId, ClauseId)>,
}

impl Clause {
    pub fn new(literals: Vec<Literal>, id: ClauseId) -> Self {
        Clause { id, literals, parents: None }
    }

    pub fn derived(literals: Vec<Literal>, id: ClauseId, parents: (ClauseId, ClauseId)) -> Self {
        Clause { id, literals, parents: Some(parents) }
    }

    // The contradiction; built fresh every time it is found.
    pub fn empty(id: ClauseId, parents: (ClauseId, ClauseId)) -> Self {
        Clause::derived(Vec::new(), id, parents)
    }

    pub fn id(&self) -> ClauseId {
        self.id
    }

    pub(crate) fn with_id(mut self, id: ClauseId) -> Self {
        self.id = id;
        self
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn parents(&self) -> Option<(ClauseId, ClauseId)> {
        self.parents
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn contains(&self, lit: &Literal) -> bool {
        self.literals.contains(lit)
    }

    pub fn is_subset_of(&self, other: &Clause) -> bool {
        self.literals.iter().all(|l| other.contains(l))
    }

    // Drops repeated literals, keeping the first occurrence of each.
    pub fn factor(&mut self) {
        let mut seen = BTreeSet::new();
        self.literals.retain(|l| seen.insert(l.clone()));
    }

    /// Negates the clause into one unit clause per literal (De Morgan).
    ///
    /// Ids are drawn from `next_id`, which is left pointing past the last one used.
    pub fn negate_to_units(&self, next_id: &mut ClauseId) -> Vec<Clause> {
        self.literals.iter().map(|l| Clause::new(vec![l.negate()], next_id.bump())).collect()
    }

    fn key(&self) -> BTreeSet<&Literal> {
        self.literals.iter().collect()
    }
}

impl PartialEq for Clause {
    fn eq(&self, other: &Self) -> bool {
        self.is_subset_of(other) && other.is_subset_of(self)
    }
}

impl Eq for Clause {}

impl Hash for Clause {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Sorted and de-duplicated, so it agrees with set equality.
        for lit in self.key() {
            lit.hash(state);
        }
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "NIL");
        }
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " v ")?;
            }
            write!(f, "{}", lit)?;
        }
        Ok(())
    }
}
