use std::fmt::Display;

use indexmap::IndexSet;
use log::{debug, info, trace};

use crate::{
    clause::{Clause, ClauseId},
    ops,
    trace::ProofTrace,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Proved,
    Unknown,
}

impl Display for Verdict {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        match self {
            Verdict::Proved => write!(f, "true"),
            Verdict::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Outcome {
    pub verdict: Verdict,
    pub goal: Clause,
    pub trace: ProofTrace,
    // Outer derivation rounds run before the verdict.
    pub iterations: usize,
}

impl Outcome {
    pub fn proved(&self) -> bool {
        self.verdict == Verdict::Proved
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        writeln!(f, "{}", self.trace)?;
        write!(f, "[CONCLUSION]: {} is {}", self.goal, self.verdict)
    }
}

/// Set-of-support resolution refutation for a single goal.
///
/// One engine is built per query and consumed by [`RefutationEngine::run`]; it
/// holds no state that outlives the run.
pub struct RefutationEngine {
    axioms: Vec<Clause>,
    goal: Clause,
}

impl RefutationEngine {
    pub fn new(axioms: Vec<Clause>, goal: Clause) -> Self {
        RefutationEngine { axioms, goal }
    }

    pub fn run(self) -> Outcome {
        let RefutationEngine { axioms, goal } = self;
        info!("refuting `{}` against {} axioms", goal, axioms.len());

        let mut next_id = ClauseId(axioms.len() + 1);
        let units = goal.negate_to_units(&mut next_id);

        let mut seeds = axioms;
        seeds.extend(units.iter().cloned());
        ops::simplify(&mut seeds);

        let seeds: Vec<Clause> =
            seeds.into_iter().enumerate().map(|(i, c)| c.with_id(ClauseId(i + 1))).collect();
        let mut working: IndexSet<Clause> = seeds.iter().cloned().collect();

        // The negated goal seeds the support set, under the ids it got above.
        let mut sos: Vec<Clause> = Vec::new();
        for unit in &units {
            if let Some(seeded) = working.get(unit) {
                if !sos.contains(seeded) {
                    sos.push(seeded.clone());
                }
            }
        }

        let mut trace = ProofTrace::new(seeds);
        let mut next_id = ClauseId(working.len() + 1);
        let mut iterations = 0;

        loop {
            iterations += 1;
            debug!("round {iterations}: {} in support, {} in working set", sos.len(), working.len());

            let mut fresh: Vec<Clause> = Vec::new();

            // Newest support clause first; stop at the first pair that resolves.
            'scan: for support in sos.iter().rev() {
                for clause in working.iter() {
                    let resolvents = ops::resolve(clause, support, &mut next_id);
                    if resolvents.is_empty() {
                        continue;
                    }

                    for r in &resolvents {
                        trace!("{}. {} from {} and {}", r.id(), r, clause.id(), support.id());
                        trace.push_derived(r.clone());
                    }

                    if resolvents.iter().any(Clause::is_empty) {
                        info!("`{}` proved after {} rounds", goal, iterations);
                        return Outcome { verdict: Verdict::Proved, goal, trace, iterations };
                    }

                    fresh.extend(resolvents);
                    break 'scan;
                }
            }

            if fresh.iter().all(|c| working.contains(c)) {
                info!("`{}` unknown: round {} produced nothing new", goal, iterations);
                return Outcome { verdict: Verdict::Unknown, goal, trace, iterations };
            }

            sos.extend(fresh.iter().cloned());
            ops::simplify(&mut sos);
            ops::simplify(&mut fresh);

            let before = working.len();
            working.extend(fresh);
            if working.len() == before {
                info!("`{}` unknown: simplification left nothing new in round {}", goal, iterations);
                return Outcome { verdict: Verdict::Unknown, goal, trace, iterations };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RefutationEngine, Verdict};
    use crate::{
        clause::{Clause, ClauseId},
        literal::Literal,
    };

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn clause(lits: &[&str]) -> Clause {
        let lits = lits
            .iter()
            .map(|l| match l.strip_prefix('~') {
                Some(name) => Literal::neg(name),
                None => Literal::pos(*l),
            })
            .collect();
        Clause::new(lits, ClauseId(0))
    }

    fn refute(axioms: &[&[&str]], goal: &[&str]) -> super::Outcome {
        let axioms = axioms.iter().map(|a| clause(a)).collect();
        RefutationEngine::new(axioms, clause(goal)).run()
    }

    #[test]
    fn modus_ponens() {
        init();
        let outcome = refute(&[&["~a", "b"], &["a"]], &["b"]);

        assert_eq!(outcome.verdict, Verdict::Proved);
        assert_eq!(outcome.trace.derived().len(), 2);
        assert_eq!(
            outcome.to_string(),
            "1. ~a v b\n2. a\n3. ~b\n===============\n\
             4. ~a (1, 3)\n5. NIL (2, 4)\n===============\n\
             [CONCLUSION]: b is true"
        );
        assert_eq!(outcome.trace.verify(), Ok(()));
    }

    #[test]
    fn unrelated_goal_is_unknown() {
        init();
        let outcome = refute(&[&["a"], &["b"]], &["c"]);

        assert_eq!(outcome.verdict, Verdict::Unknown);
        assert_eq!(outcome.iterations, 1);
        assert!(outcome.trace.derived().is_empty());
        assert!(outcome.to_string().ends_with("[CONCLUSION]: c is unknown"));
    }

    #[test]
    fn goal_already_an_axiom() {
        init();
        let outcome = refute(&[&["a", "b"], &["c"]], &["c"]);

        assert!(outcome.proved());
        let nil = &outcome.trace.derived()[0];
        assert!(nil.is_empty());
        assert_eq!(nil.parents(), Some((ClauseId(2), ClauseId(3))));
    }

    #[test]
    fn chained_implications() {
        init();
        let outcome = refute(&[&["~a", "b"], &["~b", "c"], &["a"]], &["c"]);

        assert!(outcome.proved());
        let derived: Vec<String> = outcome.trace.derived().iter().map(|c| c.to_string()).collect();
        assert_eq!(derived, ["~b", "~a", "NIL"]);
        assert_eq!(outcome.trace.derived()[2].parents(), Some((ClauseId(3), ClauseId(6))));
        assert_eq!(outcome.iterations, 3);
        assert_eq!(outcome.trace.verify(), Ok(()));
    }

    #[test]
    fn disjunctive_goal() {
        init();
        let outcome = refute(&[&["a"]], &["a", "b"]);

        assert!(outcome.proved());
        assert_eq!(outcome.trace.seeds().len(), 3);
        assert!(outcome.to_string().ends_with("[CONCLUSION]: a v b is true"));
    }

    #[test]
    fn unknown_after_progress() {
        init();
        let outcome = refute(&[&["~a", "b"]], &["b"]);

        assert_eq!(outcome.verdict, Verdict::Unknown);
        assert_eq!(outcome.iterations, 2);
        // the repeated resolvent gets a fresh id
        let ids: Vec<usize> = outcome.trace.derived().iter().map(|c| c.id().0).collect();
        assert_eq!(ids, [3, 4]);
        assert_eq!(outcome.trace.verify(), Ok(()));
    }

    #[test]
    fn tautological_axioms_are_dropped() {
        init();
        let outcome = refute(&[&["a", "~a"], &["b", "b"]], &["b"]);

        let seeds: Vec<String> = outcome.trace.seeds().iter().map(|c| c.to_string()).collect();
        assert_eq!(seeds, ["b", "~b"]);
        assert!(outcome.proved());
    }

    #[test]
    fn only_tautologies_derived() {
        init();
        // round two only yields `~b v b` and `~a v a`, so the working set stops growing
        let outcome = refute(&[&["c", "a", "b"], &["~a", "~b"]], &["c"]);

        assert_eq!(outcome.verdict, Verdict::Unknown);
        assert_eq!(outcome.iterations, 2);
        let derived: Vec<String> = outcome.trace.derived().iter().map(|c| c.to_string()).collect();
        assert_eq!(derived, ["a v b", "~b v b", "~a v a"]);
    }

    #[test]
    fn runs_are_deterministic() {
        init();
        let axioms: &[&[&str]] = &[&["~a", "b", "c"], &["~b", "d"], &["~c", "d"], &["a"]];
        let first = refute(axioms, &["d"]);
        let second = refute(axioms, &["d"]);

        assert_eq!(first.verdict, second.verdict);
        assert_eq!(first.to_string(), second.to_string());
    }
}
