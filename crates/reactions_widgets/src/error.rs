//! Error types for reactions_widgets

use thiserror::Error;

/// Errors raised while building or configuring a reaction picker
///
/// All of these are caller mistakes: the picker never enters an error state
/// while handling input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// The picker was given no reactions to choose from
    #[error("reaction picker needs at least one reaction")]
    EmptyReactions,

    /// The default selection does not name one of the reactions
    #[error("default reaction {index} is out of range for {len} reactions")]
    DefaultOutOfRange { index: usize, len: usize },

    /// A reaction index passed to the picker does not exist
    #[error("reaction {index} is out of range for {len} reactions")]
    ItemOutOfRange { index: usize, len: usize },
}

/// Result type for reactions_widgets operations
pub type Result<T> = std::result::Result<T, PickerError>;
