use std::result::Result;

use crate::logger::Logger;
use crate::model::gender::Gender;
use crate::model::step::Step;
use crate::model::subscription_plan::SubscriptionPlan;
use crate::request::RegistrationDraft as RequestData;
use crate::validation::*;

pub struct Validator<'a> {
    data: &'a RequestData,
    logger: &'a Logger,
}

impl<'a> Validator<'a> {
    pub fn new(data: &'a RequestData, logger: &'a Logger) -> Self {
        Self { data, logger }
    }

    #[allow(clippy::redundant_closure)]
    fn check(&self) -> Vec<ValidationError> {
        let d = self.data;
        let result = rules! {
            "firstName" => d.first_name => [
                required(), min_chars_if_present(2)
            ],
            "lastName" => d.last_name => [required(), min_chars_if_present(2)],
            "gender" => d.gender => [
                required(), one_of_if_present(Gender::as_vec())
            ],
            "ageRange" => d.age_range => [required()],

            "phone" => d.phone => [required(), min_chars_if_present(8)],
            "phoneCountry" => d.phone_country => [required()],
            "whatsapp" => d.whatsapp => [required()],
            "email" => d.email => [required(), email_if_present()],
            "country" => d.country => [required()],
            "city" => d.city => [required()],

            "professionalStatus" => d.professional_status => [required()],

            "savingsHabit" => d.savings_habit => [required()],
            "savingsFrequency" => d.savings_frequency => [required()],
            "savingsUsage" => d.savings_usage => [required()],
            "savingsAmount" => d.savings_amount => [required()],
            "partnerAccounts" => d.partner_accounts => [required()],
            "expenseTracking" => d.expense_tracking => [required()],

            "previousParticipation" => d.previous_participation => [
                required()
            ],
            "motivation" => d.motivation => [required()],
            "savingsGoal" => d.savings_goal => [required()],
            "contributionFrequency" => d.contribution_frequency => [
                required()
            ],
            "referralSource" => d.referral_source => [required()],
            "futureInterest" => d.future_interest => [required()],
            "subscriptionPlan" => d.subscription_plan => [
                required(), one_of_if_present(SubscriptionPlan::as_vec())
            ],

            "challengeStartMonth" => d.challenge_start_month => [
                required(), year_month_if_present()
            ]
        };
        match result {
            Err(v) => ValidationError::from_multiple(&v),
            Ok(_) => vec![],
        }
    }

    fn report(
        &self,
        errors: Vec<ValidationError>,
    ) -> Result<(), Vec<ValidationError>>
    {
        if !errors.is_empty() {
            for e in &errors {
                info!(
                    self.logger,
                    "validation error: {} {}",
                    e.field,
                    e.messages.join(",")
                );
            }
            return Err(errors);
        }
        Ok(())
    }

    /// Validates every field of the draft.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        self.report(self.check())
    }

    /// Validates only the fields belonging to the step.
    pub fn validate_step(
        &self,
        step: Step,
    ) -> Result<(), Vec<ValidationError>>
    {
        let errors = self
            .check()
            .into_iter()
            .filter(|e| step.contains(&e.field))
            .collect();
        self.report(errors)
    }
}
