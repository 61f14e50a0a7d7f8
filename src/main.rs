pub mod clause;
pub mod cooking;
pub mod error;
pub mod literal;
mod logging;
pub mod ops;
pub mod parser;
pub mod refutation;
pub mod trace;


use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};

use clause::Clause;
use cooking::Session;
use error::{Error, Result};
use refutation::{Outcome, RefutationEngine};

#[derive(Parser, Debug)]
#[command(name = "refute", version)]
#[command(about = "Propositional resolution refutation with a set-of-support strategy")]
struct Args {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Prove the last clause of the file from the clauses before it
    Resolution {
        /// Clause file, one `a v ~b` disjunction per line
        clauses: PathBuf,
    },
    /// Run a script of `?`, `+` and `-` commands against a knowledge base
    Cooking {
        clauses: PathBuf,
        commands: PathBuf,
    },
}

fn prove(mut clauses: Vec<Clause>) -> Result<Outcome> {
    let goal = clauses.pop().ok_or(Error::MissingGoal)?;
    Ok(RefutationEngine::new(clauses, goal).run())
}

fn run(mode: Mode) -> Result<String> {
    match mode {
        Mode::Resolution { clauses } => {
            let outcome = prove(parser::load_clauses(&clauses)?)?;
            Ok(format!("{}\n", outcome))
        }
        Mode::Cooking { clauses, commands } => {
            let mut session = Session::new(parser::load_clauses(&clauses)?);
            let commands = parser::load_commands(&commands)?;
            Ok(session.run_script(&commands))
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args.mode) {
        Ok(out) => {
            print!("{}", out);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
