//! RegistrationPayload
//!
//! The backend-shaped registration built by the mapper at submission time.
//! It has no public constructor, any change goes through the draft.

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) username: String,
    pub(crate) gender: String,
    pub(crate) age_range: String,
    pub(crate) email: String,
    pub(crate) phone: String,
    pub(crate) whatsapp: String,
    pub(crate) country: String,
    pub(crate) city: String,
    pub(crate) professional_status: String,
    pub(crate) savings_habit: String,
    pub(crate) savings_frequency: String,
    pub(crate) savings_usage: String,
    pub(crate) savings_amount: String,
    pub(crate) partner_accounts: String,
    pub(crate) expense_tracking: String,
    pub(crate) previous_participation: String,
    pub(crate) motivation: String,
    pub(crate) savings_goal: String,
    pub(crate) contribution_frequency: String,
    pub(crate) referral_source: String,
    pub(crate) future_interest: String,
    pub(crate) subscription_plan: String,
    pub(crate) challenge_formula: String,
    pub(crate) challenge_start_month: String,
}

impl RegistrationPayload {
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn whatsapp(&self) -> &str {
        &self.whatsapp
    }

    pub fn professional_status(&self) -> &str {
        &self.professional_status
    }

    pub fn challenge_formula(&self) -> &str {
        &self.challenge_formula
    }
}
