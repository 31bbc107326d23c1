//! Questionnaire session state machine.

mod session;
mod state;

pub use session::QuestionnaireSession;
pub use state::SessionState;
