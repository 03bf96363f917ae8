//! Error types for quiz transitions

use thiserror::Error;

/// A transition that is not allowed in the current session state.
///
/// Rejected transitions leave the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The current question already has an answer (or help was requested)
    #[error("This question has already been answered")]
    AlreadyAnswered,

    /// Option index does not exist for the current question
    #[error("Option {index} does not exist (question has {len} options)")]
    OptionOutOfRange {
        /// Requested option
        index: usize,
        /// Number of options on the question
        len: usize,
    },

    /// Advancing requires the explanation to be visible first
    #[error("Answer the question or ask for help before moving on")]
    NotAnswered,

    /// Already on the last question
    #[error("This is the last question")]
    LastQuestion,
}
