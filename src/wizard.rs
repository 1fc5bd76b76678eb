//! # The registration wizard
//!
//! The wizard owns the draft for as long as it is open and moves through
//! these states:
//!
//! ```text
//! Editing(1..6) -> Submitting -> Succeeded -> Closed -> Editing(1)
//!                      |
//!                      +-------> Failed -> Editing(6)
//! ```
//!
//! A submission is split into `begin_submission` and `complete_submission`
//! so that a view can keep its submit control disabled while the request is
//! in flight. `submit` runs both around a single call.
use std::error;
use std::fmt;

use crate::client::SubmissionError;
use crate::logger::Logger;
use crate::mapper::Mapper;
use crate::model::registration_result::RegistrationResult;
use crate::model::step::Step;
use crate::model::surface::Surface;
use crate::request::RegistrationDraft;
use crate::service::{Registrar, StepSequencer, Submission};
use crate::validation::ValidationError;
use crate::validation::registration::Validator;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WizardState {
    Editing(Step),
    Submitting,
    Succeeded,
    Failed,
    Closed,
}

impl fmt::Display for WizardState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            WizardState::Editing(step) => write!(f, "editing({})", step),
            WizardState::Submitting => write!(f, "submitting"),
            WizardState::Succeeded => write!(f, "succeeded"),
            WizardState::Failed => write!(f, "failed"),
            WizardState::Closed => write!(f, "closed"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum WizardError {
    /// Some fields are invalid, the step has not changed.
    Invalid(Vec<ValidationError>),
    UnknownField(String),
    /// The submission is only available from the last step.
    NotOnLastStep(Step),
    /// A submission is already in flight.
    InFlight,
    /// The action is not available in the current state.
    Unavailable(WizardState),
    Submission(SubmissionError),
}

impl fmt::Display for WizardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WizardError::Invalid(errors) => {
                let fields = errors
                    .iter()
                    .map(|e| e.field.as_str())
                    .collect::<Vec<&str>>();
                write!(f, "invalid fields: {}", fields.join(", "))
            },
            WizardError::UnknownField(field) => {
                write!(f, "unknown field: {}", field)
            },
            WizardError::NotOnLastStep(step) => {
                write!(f, "not on the last step: {}", step)
            },
            WizardError::InFlight => write!(f, "a submission is in flight"),
            WizardError::Unavailable(state) => {
                write!(f, "unavailable while {}", state)
            },
            WizardError::Submission(e) => write!(f, "submission: {}", e),
        }
    }
}

impl error::Error for WizardError {}

/// A transient error notification
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub message: String,
}

/// The panel shown once the registration has succeeded
#[derive(Clone, Debug, PartialEq)]
pub struct Confirmation {
    pub full_name: String,
    pub email: String,
    pub message: String,
}

impl<'a> From<&'a RegistrationResult> for Confirmation {
    fn from(result: &'a RegistrationResult) -> Self {
        Self {
            full_name: result.user.full_name(),
            email: result.user.email.to_string(),
            message: result.message.to_string(),
        }
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.full_name)?;
        writeln!(f, "{}", self.email)?;
        write!(f, "{}", self.message)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Editing,
    Submitting,
    Succeeded,
    Failed,
    Closed,
}

pub struct RegistrationWizard<'a> {
    surface: Surface,
    logger: &'a Logger,
    draft: RegistrationDraft,
    sequencer: StepSequencer,
    phase: Phase,
    errors: Vec<ValidationError>,
    result: Option<RegistrationResult>,
    notification: Option<Notification>,
}

impl<'a> RegistrationWizard<'a> {
    /// Opens a wizard on the first step with an empty draft.
    pub fn new(surface: Surface, logger: &'a Logger) -> Self {
        Self {
            surface,
            logger,
            draft: RegistrationDraft::default(),
            sequencer: StepSequencer::new(),
            phase: Phase::Editing,
            errors: vec![],
            result: None,
            notification: None,
        }
    }

    pub fn state(&self) -> WizardState {
        match self.phase {
            Phase::Editing => WizardState::Editing(self.sequencer.step()),
            Phase::Submitting => WizardState::Submitting,
            Phase::Succeeded => WizardState::Succeeded,
            Phase::Failed => WizardState::Failed,
            Phase::Closed => WizardState::Closed,
        }
    }

    pub fn step(&self) -> Step {
        self.sequencer.step()
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// Returns the inline errors of the last validation.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn field_errors(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        match self.phase {
            Phase::Editing => self.sequencer.step().is_last(),
            Phase::Failed => true,
            _ => false,
        }
    }

    fn reset(&mut self) {
        self.draft = RegistrationDraft::default();
        self.sequencer.reset();
        self.errors.clear();
        self.result = None;
        self.notification = None;
    }

    // a failed submission goes back to editing on the next interaction
    fn editable(&mut self) -> Result<(), WizardError> {
        match self.phase {
            Phase::Editing => Ok(()),
            Phase::Failed => {
                self.phase = Phase::Editing;
                Ok(())
            },
            Phase::Submitting => Err(WizardError::InFlight),
            _ => Err(WizardError::Unavailable(self.state())),
        }
    }

    pub fn open(&mut self) {
        if self.phase == Phase::Closed {
            self.reset();
            self.phase = Phase::Editing;
        }
    }

    /// Closes the wizard and discards the draft.
    pub fn close(&mut self) -> Result<(), WizardError> {
        if self.phase == Phase::Submitting {
            return Err(WizardError::InFlight);
        }
        self.reset();
        self.phase = Phase::Closed;
        Ok(())
    }

    pub fn set_field(
        &mut self,
        field: &str,
        value: &str,
    ) -> Result<(), WizardError>
    {
        self.editable()?;
        if !self.draft.set(field, value) {
            return Err(WizardError::UnknownField(field.to_string()));
        }
        self.errors.retain(|e| e.field != field);
        Ok(())
    }

    /// Gives mutable access to the draft while it's editable.
    pub fn draft_mut(
        &mut self,
    ) -> Result<&mut RegistrationDraft, WizardError>
    {
        self.editable()?;
        Ok(&mut self.draft)
    }

    pub fn advance(&mut self) -> Result<Step, WizardError> {
        self.editable()?;
        match self.sequencer.advance(&self.draft, self.logger) {
            Ok(step) => {
                self.errors.clear();
                Ok(step)
            },
            Err(errors) => {
                self.errors = errors.clone();
                Err(WizardError::Invalid(errors))
            },
        }
    }

    pub fn retreat(&mut self) -> Result<Step, WizardError> {
        self.editable()?;
        self.errors.clear();
        Ok(self.sequencer.retreat())
    }

    /// Validates every field, maps the draft and enters the submitting
    /// state.
    pub fn begin_submission(&mut self) -> Result<Submission, WizardError> {
        self.editable()?;
        let step = self.sequencer.step();
        if !step.is_last() {
            return Err(WizardError::NotOnLastStep(step));
        }

        if let Err(errors) = Validator::new(&self.draft, self.logger).validate()
        {
            self.errors = errors.clone();
            return Err(WizardError::Invalid(errors));
        }
        self.errors.clear();

        let payload = Mapper::new(self.surface, self.logger).map(&self.draft);
        let submission = Submission::new(payload);

        self.notification = None;
        self.phase = Phase::Submitting;
        Ok(submission)
    }

    pub fn complete_submission(
        &mut self,
        outcome: Result<RegistrationResult, SubmissionError>,
    ) -> Result<(), WizardError>
    {
        if self.phase != Phase::Submitting {
            return Err(WizardError::Unavailable(self.state()));
        }
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.phase = Phase::Succeeded;
            },
            Err(e) => {
                self.notification = Some(Notification {
                    message: e.user_message(),
                });
                self.phase = Phase::Failed;
            },
        }
        Ok(())
    }

    /// Submits the draft through the registrar with a single call.
    pub fn submit(
        &mut self,
        registrar: &Registrar,
    ) -> Result<&RegistrationResult, WizardError>
    {
        let submission = self.begin_submission()?;
        let outcome = registrar.register(&submission);
        let failure = outcome.clone().err();

        self.complete_submission(outcome)?;
        match (failure, self.result.as_ref()) {
            (None, Some(result)) => Ok(result),
            (Some(e), _) => Err(WizardError::Submission(e)),
            (None, None) => Err(WizardError::Unavailable(self.state())),
        }
    }

    pub fn result(&self) -> Option<&RegistrationResult> {
        self.result.as_ref()
    }

    pub fn confirmation(&self) -> Option<Confirmation> {
        match self.phase {
            Phase::Succeeded => self.result.as_ref().map(Confirmation::from),
            _ => None,
        }
    }

    /// Takes the pending notification, if any.
    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    /// Dismisses the confirmation, closing the wizard with a fresh draft.
    pub fn dismiss_confirmation(&mut self) -> Result<(), WizardError> {
        if self.phase != Phase::Succeeded {
            return Err(WizardError::Unavailable(self.state()));
        }
        self.reset();
        self.phase = Phase::Closed;
        Ok(())
    }
}
