//! # Edit Operations

/// One step of an [`EditScript`](super::EditScript).
///
/// Lengths count `char`s, not bytes. Texts are stored in reading order,
/// whatever the script's direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EditOp {
    /// Copy `n` chars from the source.
    Keep(usize),

    /// Skip the given source text.
    Delete(String),

    /// Emit the given text.
    Insert(String),
}

impl EditOp {
    /// The number of source chars this op consumes.
    pub fn consumed(&self) -> usize {
        match self {
            EditOp::Keep(n) => *n,
            EditOp::Delete(text) => text.chars().count(),
            EditOp::Insert(_) => 0,
        }
    }

    /// The number of chars this op emits.
    pub fn emitted(&self) -> usize {
        match self {
            EditOp::Keep(n) => *n,
            EditOp::Delete(_) => 0,
            EditOp::Insert(text) => text.chars().count(),
        }
    }
}
