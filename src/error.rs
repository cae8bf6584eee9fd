use ggez::GameError;
use std::fmt::{Debug, Display, Formatter};
use std::{fmt, result};

/// Wraps a `GameError` together with a trace of the call
/// sites it passed through, stored in reverse order
#[must_use]
pub struct Error {
    source: GameError,
    trace: Vec<String>,
}

impl From<GameError> for Error {
    fn from(e: GameError) -> Self {
        Self { source: e, trace: vec![] }
    }
}

impl Error {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.trace.push(s.to_string());
        self
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.source)?;
        for t in self.trace.iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for Error {}

pub type Result<T = ()> = result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}
