use indexmap::IndexSet;

use crate::{
    clause::{Clause, ClauseId},
    literal::Literal,
};

pub fn factor(clauses: &mut [Clause]) {
    for clause in clauses.iter_mut() {
        clause.factor();
    }
}

pub fn is_tautology(clause: &Clause) -> bool {
    let lits = clause.literals();
    lits.iter().enumerate().any(|(i, l)| lits[i + 1..].iter().any(|o| l.is_complement_of(o)))
}

/// Deletion strategy: drops tautologies and every clause whose literals are a
/// superset (or copy) of another surviving clause.
///
/// Candidates are read from a snapshot taken on entry, so removals never shift
/// what is visited. Of several equal clauses the earliest one survives.
pub fn remove_redundant(clauses: &mut Vec<Clause>) {
    let snapshot = clauses.clone();
    let mut alive = vec![true; snapshot.len()];

    for (i, clause) in snapshot.iter().enumerate() {
        if !alive[i] {
            continue;
        }

        if is_tautology(clause) {
            alive[i] = false;
            continue;
        }

        for (j, other) in snapshot.iter().enumerate() {
            if i != j && alive[j] && clause.is_subset_of(other) {
                alive[j] = false;
            }
        }
    }

    let mut keep = alive.into_iter();
    clauses.retain(|_| keep.next().unwrap_or(false));
}

pub fn simplify(clauses: &mut Vec<Clause>) {
    factor(clauses);
    remove_redundant(clauses);
}

fn remainder(a: &Clause, b: &Clause, la: &Literal, lb: &Literal) -> IndexSet<Literal> {
    a.literals()
        .iter()
        .chain(b.literals())
        .filter(|l| *l != la && *l != lb)
        .cloned()
        .collect()
}

/// Binary resolution of a working-set clause against a set-of-support clause.
///
/// Every complementary pair yields its own resolvent, with parents
/// `(working.id, support.id)`. Ids are taken from `next_id` only for resolvents
/// that are new to the result. If a pair leaves nothing behind, the empty clause
/// is returned on its own straight away.
pub fn resolve(working: &Clause, support: &Clause, next_id: &mut ClauseId) -> IndexSet<Clause> {
    let parents = (working.id(), support.id());
    let mut resolvents = IndexSet::new();

    for la in working.literals() {
        for lb in support.literals() {
            if !la.is_complement_of(lb) {
                continue;
            }

            let literals = remainder(working, support, la, lb);
            if literals.is_empty() {
                return IndexSet::from([Clause::empty(next_id.bump(), parents)]);
            }

            let resolvent = Clause::derived(literals.into_iter().collect(), *next_id, parents);
            if !resolvents.contains(&resolvent) {
                next_id.bump();
                resolvents.insert(resolvent);
            }
        }
    }

    resolvents
}

// Whether `clause` is a binary resolvent of `left` and `right` on some pair.
pub fn is_resolvent(clause: &Clause, left: &Clause, right: &Clause) -> bool {
    left.literals().iter().any(|la| {
        right.literals().iter().any(|lb| {
            la.is_complement_of(lb) && {
                let rest = remainder(left, right, la, lb);
                rest.len() == clause.literals().iter().collect::<IndexSet<_>>().len()
                    && clause.literals().iter().all(|l| rest.contains(l))
            }
        })
    })
}
