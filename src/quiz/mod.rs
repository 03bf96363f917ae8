//! Quiz session logic
//!
//! Pure state machine over a question set, with no knowledge of rendering
//! or of how explanations are fetched.

mod error;
mod session;

pub use error::QuizError;
pub use session::{
    AnswerOutcome, FALLBACK_EXPLANATION, HelpDelivery, HelpRequest, HelpTicket, QuizSession,
    SessionState,
};
