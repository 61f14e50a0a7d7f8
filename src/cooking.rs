use std::fmt::Display;

use log::{info, warn};

use crate::{
    clause::Clause,
    parser::{Command, CommandKind},
    refutation::{Outcome, RefutationEngine},
};

/// What a single command did to the session.
#[derive(Clone, Debug)]
pub enum Response {
    Query(Outcome),
    Added(Clause),
    Removed { clause: Clause, found: bool },
}

/// Interactive knowledge base driven by a command script.
pub struct Session {
    axioms: Vec<Clause>,
}

impl Session {
    pub fn new(axioms: Vec<Clause>) -> Self {
        Session { axioms }
    }

    pub fn axioms(&self) -> &[Clause] {
        &self.axioms
    }

    pub fn execute(&mut self, command: &Command) -> Response {
        let clause = command.clause.clone();
        match command.kind {
            CommandKind::Query => {
                Response::Query(RefutationEngine::new(self.axioms.clone(), clause).run())
            }
            CommandKind::Add => {
                info!("adding `{}`", clause);
                self.axioms.push(clause.clone());
                Response::Added(clause)
            }
            CommandKind::Remove => {
                // First clause with the same literal set.
                let found = match self.axioms.iter().position(|a| *a == clause) {
                    Some(ix) => {
                        self.axioms.remove(ix);
                        true
                    }
                    None => false,
                };
                if found {
                    info!("removed `{}`", clause);
                } else {
                    warn!("`{}` is not in the knowledge base", clause);
                }
                Response::Removed { clause, found }
            }
        }
    }

    // Renders every command the way the interactive mode prints it.
    pub fn run_script(&mut self, commands: &[Command]) -> String {
        let mut out = String::new();
        for command in commands {
            let response = self.execute(command);
            out.push_str(&format!("User's command: {}\n{}\n\n", command.line, response));
        }
        out
    }
}

impl Display for Response {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        match self {
            Response::Query(outcome) => write!(f, "{}", outcome),
            Response::Added(clause) => write!(f, "Added {}", clause),
            Response::Removed { clause, .. } => write!(f, "Removed {}", clause),
        }
    }
}
