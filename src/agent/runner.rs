use super::{
    definition::Agent,
    fsm::{SubmissionEvent, SubmissionStateMachine},
};
use crate::Result;
use std::time::Instant;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

/// Executes one agent call per submission.
pub struct Runner;

impl Runner {
    /// Sends `input` to `agent` once and returns the model's final text.
    ///
    /// Model failures come back as `Err` carrying the underlying error; the
    /// caller decides how to show them.
    pub async fn run(agent: &Agent, input: &str) -> Result<String> {
        let submission_id = Uuid::new_v4();
        let span = info_span!("submission", id = %submission_id, agent = agent.name());

        Self::execute(agent, input).instrument(span).await
    }

    async fn execute(agent: &Agent, input: &str) -> Result<String> {
        let mut fsm = SubmissionStateMachine::new();
        fsm.transition(SubmissionEvent::Submit)?;
        fsm.transition(SubmissionEvent::DispatchToModel)?;

        let started = Instant::now();
        match agent.respond(input).await {
            Ok(output) => {
                info!(
                    "Model responded with {} chars in {:?}",
                    output.len(),
                    started.elapsed()
                );
                fsm.complete(output.clone())?;
                Ok(output)
            }
            Err(e) => {
                error!("Model call failed after {:?}: {}", started.elapsed(), e);
                fsm.fail(e.to_string())?;
                Err(e)
            }
        }
    }
}
