//! Training events transported by [`EventStream`](`crate::EventStream`)s.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use thiserror::Error;

// -------------------------------------------------------------------------------------------------

/// A single observed outcome together with the context predicates it was
/// observed in. Streams pass events through untouched; interpreting them is
/// the consuming trainer's job.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Event {
    pub outcome: String,
    pub context: Vec<String>,
}

impl Event {
    pub fn new<O, C, P>(outcome: O, context: C) -> Self
    where
        O: Into<String>,
        C: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            outcome: outcome.into(),
            context: context.into_iter().map(Into::into).collect(),
        }
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.outcome)?;
        for predicate in &self.context {
            write!(f, " {}", predicate)?;
        }
        Ok(())
    }
}

// -------------------------------------------------------------------------------------------------

/// Error from parsing an [`Event`] out of its line representation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseEventError {
    #[error("event line is empty")]
    EmptyLine,
    #[error("event '{0}' has no context predicates")]
    MissingContext(String),
}

impl FromStr for Event {
    type Err = ParseEventError;

    /// Parse an event from a whitespace separated line: the first token is
    /// the outcome, all remaining tokens are context predicates. At least
    /// one predicate is required.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let outcome = tokens.next().ok_or(ParseEventError::EmptyLine)?;
        let context: Vec<String> = tokens.map(str::to_string).collect();
        if context.is_empty() {
            return Err(ParseEventError::MissingContext(outcome.to_string()));
        }
        Ok(Self {
            outcome: outcome.to_string(),
            context,
        })
    }
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse() -> Result<(), ParseEventError> {
        assert_eq!("".parse::<Event>(), Err(ParseEventError::EmptyLine));
        assert_eq!("  \t ".parse::<Event>(), Err(ParseEventError::EmptyLine));
        assert_eq!(
            "yes".parse::<Event>(),
            Err(ParseEventError::MissingContext("yes".to_string()))
        );

        let event = "yes w=rain w-1=heavy".parse::<Event>()?;
        assert_eq!(event, Event::new("yes", ["w=rain", "w-1=heavy"]));
        Ok(())
    }

    #[test]
    fn display() {
        let event = Event::new("no", ["w=sun", "w-1=bright"]);
        assert_eq!(event.to_string(), "no w=sun w-1=bright");
    }
}
