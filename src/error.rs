use std::{io, path::PathBuf};

use thiserror::Error;

use crate::clause::ClauseId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: empty literal in `{text}`")]
    EmptyLiteral { line: usize, text: String },

    #[error("line {line}: missing command, expected a trailing `?`, `+` or `-`")]
    MissingCommand { line: usize },

    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: char },

    #[error("no goal clause: the clause file is empty")]
    MissingGoal,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Problems found when re-checking a finished proof trace.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TraceError {
    #[error("clause id {0} appears more than once")]
    DuplicateId(ClauseId),

    #[error("clause {id} names parent {parent}, which is not earlier in the trace")]
    UnknownParent { id: ClauseId, parent: ClauseId },

    #[error("clause {0} has no parents")]
    MissingParents(ClauseId),

    #[error("clause {0} is not a resolvent of its parents")]
    NotAResolvent(ClauseId),
}
