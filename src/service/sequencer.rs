use crate::logger::Logger;
use crate::model::step::Step;
use crate::request::RegistrationDraft;
use crate::validation::ValidationError;
use crate::validation::registration::Validator;

/// StepSequencer gates forward navigation through the six steps.
#[derive(Clone, Debug, Default)]
pub struct StepSequencer {
    step: Step,
}

impl StepSequencer {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Moves to the next step if the fields of the current one are valid.
    ///
    /// The step is left unchanged on failure.
    pub fn advance(
        &mut self,
        draft: &RegistrationDraft,
        logger: &Logger,
    ) -> Result<Step, Vec<ValidationError>>
    {
        Validator::new(draft, logger).validate_step(self.step)?;
        self.step = self.step.next();
        debug!(logger, "advanced to step {}", self.step);
        Ok(self.step)
    }

    /// Moves to the previous step without any validation.
    pub fn retreat(&mut self) -> Step {
        self.step = self.step.previous();
        self.step
    }

    pub fn reset(&mut self) {
        self.step = Step::FIRST;
    }
}
