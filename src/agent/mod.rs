mod definition;
pub mod fsm;
mod runner;

pub use definition::{Agent, AgentDefinition, TRANSLATOR_INSTRUCTIONS, TRANSLATOR_NAME};
pub use fsm::{SubmissionEvent, SubmissionState, SubmissionStateMachine};
pub use runner::Runner;
