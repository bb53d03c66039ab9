//! Engine errors

use core::fmt;

/// Failure of an engine operation
///
/// `E` is the error type of the [`OutputDriver`](crate::OutputDriver). Knob
/// and button reads never fail, so the strip is the only source of errors.
#[derive(Debug)]
pub enum EngineError<E> {
    /// Writing or clearing the strip failed
    Output(E),
}

impl<E> EngineError<E> {
    /// Driver error behind the failure
    pub fn into_inner(self) -> E {
        let Self::Output(error) = self;
        error
    }
}

// `?` on an `OutputDriver` result inside the engine
impl<E> From<E> for EngineError<E> {
    fn from(error: E) -> Self {
        Self::Output(error)
    }
}

impl<E: fmt::Debug> fmt::Display for EngineError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Output(error) => write!(f, "strip write failed: {:?}", error),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for EngineError<E> {}
