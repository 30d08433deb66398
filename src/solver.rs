use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Number of stickers in a serialized cube state.
pub const FACELET_COUNT: usize = 54;

/// Failures reported by the solving collaborator. Passed through to the
/// operator verbatim; the core never retries or reinterprets them.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SolveError {
    #[error("cube state is unsolvable")]
    Unsolvable,
    #[error("solver rejected the facelet string: {0}")]
    Malformed(String),
    #[error("solver internal error: {0}")]
    Internal(String),
}

/// A whitespace-separated sequence of moves in the solver's notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveSequence(String);

impl MoveSequence {
    pub fn new(moves: impl Into<String>) -> Self {
        Self(moves.into())
    }

    pub fn moves(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }

    pub fn len(&self) -> usize {
        self.moves().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.split_whitespace().next().is_none()
    }
}

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Boundary to the solving algorithm: a function from a validated
/// 54-character facelet string to a move sequence or a typed failure.
pub trait Solver: Send {
    fn solve(&self, facelets: &str) -> Result<MoveSequence, SolveError>;
}
