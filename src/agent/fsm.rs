use crate::{Error, Result};
use tracing::{debug, info, warn};

// Submission states
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Idle,
    Submitted,
    AwaitingModel,
    Rendered,
    Failed,
}

// Submission events
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionEvent {
    Submit,
    DispatchToModel,
    ModelResponded,
    ModelFailed,
}

/// Lifecycle of a single form submission.
pub struct SubmissionStateMachine {
    state: SubmissionState,
    output: Option<String>,
    last_error: Option<String>,
}

impl SubmissionStateMachine {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
            output: None,
            last_error: None,
        }
    }

    pub fn current_state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn transition(&mut self, event: SubmissionEvent) -> Result<()> {
        let old_state = self.state.clone();
        debug!("FSM processing event {:?} in state {:?}", event, old_state);

        let new_state = match (&self.state, &event) {
            (SubmissionState::Idle, SubmissionEvent::Submit)
            | (SubmissionState::Rendered, SubmissionEvent::Submit)
            | (SubmissionState::Failed, SubmissionEvent::Submit) => SubmissionState::Submitted,
            (SubmissionState::Submitted, SubmissionEvent::DispatchToModel) => {
                SubmissionState::AwaitingModel
            }
            (SubmissionState::AwaitingModel, SubmissionEvent::ModelResponded) => {
                SubmissionState::Rendered
            }
            (SubmissionState::AwaitingModel, SubmissionEvent::ModelFailed) => {
                SubmissionState::Failed
            }
            _ => {
                warn!(
                    "Invalid FSM transition from {:?} with event {:?}",
                    self.state, event
                );
                return Err(Error::InvalidTransition {
                    current: format!("{:?}", self.state),
                    requested: format!("{:?}", event),
                });
            }
        };

        info!(
            "FSM state transition: {:?} -> {:?} (event: {:?})",
            old_state, new_state, event
        );

        if new_state == SubmissionState::Submitted {
            self.output = None;
            self.last_error = None;
        }

        self.state = new_state;
        Ok(())
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.state,
            SubmissionState::Rendered | SubmissionState::Failed
        )
    }

    /// Records the completion and moves to `Rendered`.
    pub fn complete(&mut self, output: String) -> Result<()> {
        self.transition(SubmissionEvent::ModelResponded)?;
        self.output = Some(output);
        Ok(())
    }

    /// Records the failure description and moves to `Failed`.
    pub fn fail(&mut self, error: String) -> Result<()> {
        self.transition(SubmissionEvent::ModelFailed)?;
        self.last_error = Some(error);
        Ok(())
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

impl Default for SubmissionStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
