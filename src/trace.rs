use std::{collections::HashMap, fmt::Display, ops::Index};

use crate::{
    clause::{Clause, ClauseId},
    error::TraceError,
    ops,
};

const SEPARATOR: &str = "===============";

/// Ordered record of a refutation: the simplified input, then every resolvent
/// in the order it was derived.
#[derive(Clone, Debug, Default)]
pub struct ProofTrace {
    seeds: Vec<Clause>,
    derived: Vec<Clause>,
}

impl ProofTrace {
    pub fn new(seeds: Vec<Clause>) -> Self {
        ProofTrace { seeds, derived: Vec::new() }
    }

    pub fn push_seed(&mut self, clause: Clause) {
        self.seeds.push(clause)
    }

    pub fn push_derived(&mut self, clause: Clause) {
        self.derived.push(clause)
    }

    pub fn seeds(&self) -> &[Clause] {
        &self.seeds
    }

    pub fn derived(&self) -> &[Clause] {
        &self.derived
    }

    pub fn len(&self) -> usize {
        self.seeds.len() + self.derived.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.seeds.iter().chain(self.derived.iter())
    }

    pub fn get(&self, id: ClauseId) -> Option<&Clause> {
        self.iter().find(|c| c.id() == id)
    }

    pub fn ends_in_contradiction(&self) -> bool {
        self.derived.last().is_some_and(Clause::is_empty)
    }

    /// Re-checks every derived line against the lines before it.
    pub fn verify(&self) -> Result<(), TraceError> {
        let mut known: HashMap<ClauseId, &Clause> = HashMap::new();

        for seed in &self.seeds {
            if known.insert(seed.id(), seed).is_some() {
                return Err(TraceError::DuplicateId(seed.id()));
            }
        }

        for clause in &self.derived {
            let (p1, p2) = clause.parents().ok_or(TraceError::MissingParents(clause.id()))?;
            let left = known.get(&p1).ok_or(TraceError::UnknownParent { id: clause.id(), parent: p1 })?;
            let right = known.get(&p2).ok_or(TraceError::UnknownParent { id: clause.id(), parent: p2 })?;

            if !ops::is_resolvent(clause, left, right) {
                return Err(TraceError::NotAResolvent(clause.id()));
            }

            if known.insert(clause.id(), clause).is_some() {
                return Err(TraceError::DuplicateId(clause.id()));
            }
        }

        Ok(())
    }
}

impl Index<usize> for ProofTrace {
    type Output = Clause;

    fn index(&self, index: usize) -> &Self::Output {
        if index < self.seeds.len() {
            &self.seeds[index]
        } else {
            &self.derived[index - self.seeds.len()]
        }
    }
}

impl Display for ProofTrace {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        for clause in &self.seeds {
            writeln!(f, "{}. {}", clause.id(), clause)?;
        }
        writeln!(f, "{}", SEPARATOR)?;

        for clause in &self.derived {
            match clause.parents() {
                Some((p1, p2)) => writeln!(f, "{}. {} ({}, {})", clause.id(), clause, p1, p2)?,
                None => writeln!(f, "{}. {}", clause.id(), clause)?,
            }
        }
        write!(f, "{}", SEPARATOR)
    }
}
