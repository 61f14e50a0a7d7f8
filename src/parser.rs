use std::{fs, path::Path};

use crate::{
    clause::{Clause, ClauseId},
    error::{Error, Result},
    literal::Literal,
};

const SEPARATOR: &str = " v ";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommandKind {
    Query,
    Add,
    Remove,
}

impl CommandKind {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '?' => Some(CommandKind::Query),
            '+' => Some(CommandKind::Add),
            '-' => Some(CommandKind::Remove),
            _ => None,
        }
    }
}

/// One line of a cooking script: a clause followed by `?`, `+` or `-`.
#[derive(Clone, Debug)]
pub struct Command {
    pub clause: Clause,
    pub kind: CommandKind,
    // Normalised source line, echoed back to the user.
    pub line: String,
}

// Lines that carry no clause.
fn is_skipped(line: &str) -> bool {
    line.starts_with('#') || line.trim().is_empty()
}

pub fn parse_literal(text: &str, line: usize) -> Result<Literal> {
    let text = text.trim();
    let (name, negated) = match text.strip_prefix('~') {
        Some(rest) => (rest.trim(), true),
        None => (text, false),
    };

    if name.is_empty() {
        return Err(Error::EmptyLiteral { line, text: text.to_string() });
    }
    Ok(Literal::new(name, negated))
}

pub fn parse_clause(text: &str, id: ClauseId, line: usize) -> Result<Clause> {
    let text = text.trim().to_lowercase();
    let literals = text
        .split(SEPARATOR)
        .map(|lit| parse_literal(lit, line))
        .collect::<Result<Vec<_>>>()?;
    Ok(Clause::new(literals, id))
}

pub fn parse_clauses(input: &str) -> Result<Vec<Clause>> {
    let mut clauses = Vec::new();
    for (ix, line) in input.lines().enumerate() {
        if is_skipped(line) {
            continue;
        }
        clauses.push(parse_clause(line, ClauseId(clauses.len() + 1), ix + 1)?);
    }
    Ok(clauses)
}

pub fn parse_commands(input: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for (ix, line) in input.lines().enumerate() {
        if is_skipped(line) {
            continue;
        }
        let line_no = ix + 1;
        let line = line.trim().to_lowercase();

        let mut chars = line.chars();
        let command = chars.next_back().ok_or(Error::MissingCommand { line: line_no })?;
        let kind = CommandKind::from_char(command)
            .ok_or(Error::UnknownCommand { line: line_no, command })?;

        let body = chars.as_str().trim();
        if body.is_empty() {
            return Err(Error::EmptyLiteral { line: line_no, text: line.clone() });
        }

        let clause = parse_clause(body, ClauseId(commands.len() + 1), line_no)?;
        commands.push(Command { clause, kind, line });
    }
    Ok(commands)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })
}

pub fn load_clauses(path: &Path) -> Result<Vec<Clause>> {
    parse_clauses(&read(path)?)
}

pub fn load_commands(path: &Path) -> Result<Vec<Command>> {
    parse_commands(&read(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clause_file() {
        let input = "# comment\n~A v B\n\nA\nb\n";
        let clauses = parse_clauses(input).unwrap();

        assert_eq!(clauses.len(), 3);
        assert_eq!(clauses[0].literals(), &[Literal::neg("a"), Literal::pos("b")]);
        assert_eq!(clauses[0].id(), ClauseId(1));
        assert_eq!(clauses[2].id(), ClauseId(3));
        assert_eq!(clauses[2].to_string(), "b");
    }

    #[test]
    fn duplicates_survive_parsing() {
        let clause = parse_clause("a v a", ClauseId(1), 1).unwrap();
        assert_eq!(clause.len(), 2);
    }

    #[test]
    fn empty_literal_is_rejected() {
        assert!(matches!(parse_clauses("a v ~\n"), Err(Error::EmptyLiteral { line: 1, .. })));
        assert!(matches!(parse_clauses("a\n~ v b\n"), Err(Error::EmptyLiteral { line: 2, .. })));
    }

    #[test]
    fn command_file() {
        let input = "# cooking\nC +\nc ?\n~Milk v coffee -\n";
        let commands = parse_commands(input).unwrap();

        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0].kind, CommandKind::Add);
        assert_eq!(commands[0].line, "c +");
        assert_eq!(commands[1].kind, CommandKind::Query);
        assert_eq!(commands[2].kind, CommandKind::Remove);
        assert_eq!(commands[2].clause.to_string(), "~milk v coffee");
    }

    #[test]
    fn bad_commands() {
        assert!(matches!(parse_commands("a !\n"), Err(Error::UnknownCommand { line: 1, command: '!' })));
        assert!(matches!(parse_commands("a\n"), Err(Error::UnknownCommand { line: 1, command: 'a' })));
        assert!(matches!(parse_commands("?\n"), Err(Error::EmptyLiteral { line: 1, .. })));
    }

    #[test]
    fn missing_file() {
        let err = load_clauses(Path::new("/nonexistent/clauses.txt")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
