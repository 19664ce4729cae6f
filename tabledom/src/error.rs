//! Skip reasons for grid operations.
//!
//! Nothing in the grid aborts a call chain. Operations that cannot be
//! applied are skipped, and the reason is recorded as a [`Skipped`]
//! diagnostic on the grid.

use crate::address::SectionKind;
use crate::node::CellId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Only \"body\" and \"head\" are allowed, got '{0}'")]
    UnknownSection(String),

    #[error("Only \"row\", \"cell\" and \"column\" are allowed, got '{0}'")]
    UnknownTarget(String),

    #[error("The {0} section has not been created")]
    MissingSection(SectionKind),

    #[error("Row {row} doesn't exist ({rows} rows)")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("A cell [{row},{cell}] doesn't exist. Note: you need to pass [row, cell] pairs")]
    CellOutOfRange { row: usize, cell: usize },

    #[error("Expected {expected} coordinate(s), got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("You should copy first! Clipboard is empty")]
    EmptyClipboard,

    #[error("Clipboard holds no cell for row {0}")]
    NothingToPaste(usize),

    #[error("No such key '{0}' to bind an event to")]
    UndeclaredKey(String),

    #[error("Key '{0}' is already declared")]
    DuplicateKey(String),

    #[error("{0} is only available in creation mode")]
    BindingMode(&'static str),

    #[error("No host node matches '{0}'")]
    UnresolvedLocator(String),

    #[error("{0} is no longer part of the table")]
    StaleCell(CellId),
}

impl GridError {
    /// Misuse of the builder surface itself, reported even with debug off.
    pub fn always_reported(&self) -> bool {
        matches!(self, Self::UnknownSection(_) | Self::UnknownTarget(_))
    }
}

/// One skipped operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub operation: &'static str,
    pub reason: GridError,
}
