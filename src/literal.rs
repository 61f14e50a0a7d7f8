use std::fmt::Display;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    name: String,
    negated: bool,
}

impl Literal {
    pub fn new(name: impl Into<String>, negated: bool) -> Self {
        Literal { name: name.into(), negated }
    }

    pub fn pos(name: impl Into<String>) -> Self {
        Literal::new(name, false)
    }

    pub fn neg(name: impl Into<String>) -> Self {
        Literal::new(name, true)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn negate(&self) -> Self {
        Literal { name: self.name.clone(), negated: !self.negated }
    }

    // Same atom, opposite polarity.
    pub fn is_complement_of(&self, other: &Literal) -> bool {
        self.name == other.name && self.negated != other.negated
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        if self.negated {
            write!(f, "~{}", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}
