/// RegistrationDraft
///
/// The in-progress form state of the wizard. Every control stores the raw
/// value it produces, enumerated controls store their option code.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistrationDraft {
    // identity
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub age_range: String,

    // contact
    pub phone: String,
    pub phone_country: String,
    pub whatsapp: String,
    pub email: String,
    pub country: String,
    pub city: String,

    // professional status
    pub professional_status: String,

    // savings profile
    pub savings_habit: String,
    pub savings_frequency: String,
    pub savings_usage: String,
    pub savings_amount: String,
    pub partner_accounts: String,
    pub expense_tracking: String,

    // challenge participation
    pub previous_participation: String,
    pub motivation: String,
    pub savings_goal: String,
    pub contribution_frequency: String,
    pub referral_source: String,
    pub future_interest: String,
    pub subscription_plan: String,

    // start month as YYYY-MM
    pub challenge_start_month: String,
}

impl RegistrationDraft {
    /// Returns the value of a field by its payload name.
    pub fn get(&self, field: &str) -> Option<&str> {
        let v = match field {
            "firstName" => &self.first_name,
            "lastName" => &self.last_name,
            "gender" => &self.gender,
            "ageRange" => &self.age_range,
            "phone" => &self.phone,
            "phoneCountry" => &self.phone_country,
            "whatsapp" => &self.whatsapp,
            "email" => &self.email,
            "country" => &self.country,
            "city" => &self.city,
            "professionalStatus" => &self.professional_status,
            "savingsHabit" => &self.savings_habit,
            "savingsFrequency" => &self.savings_frequency,
            "savingsUsage" => &self.savings_usage,
            "savingsAmount" => &self.savings_amount,
            "partnerAccounts" => &self.partner_accounts,
            "expenseTracking" => &self.expense_tracking,
            "previousParticipation" => &self.previous_participation,
            "motivation" => &self.motivation,
            "savingsGoal" => &self.savings_goal,
            "contributionFrequency" => &self.contribution_frequency,
            "referralSource" => &self.referral_source,
            "futureInterest" => &self.future_interest,
            "subscriptionPlan" => &self.subscription_plan,
            "challengeStartMonth" => &self.challenge_start_month,
            _ => return None,
        };
        Some(v.as_str())
    }

    fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        let v = match field {
            "firstName" => &mut self.first_name,
            "lastName" => &mut self.last_name,
            "gender" => &mut self.gender,
            "ageRange" => &mut self.age_range,
            "phone" => &mut self.phone,
            "phoneCountry" => &mut self.phone_country,
            "whatsapp" => &mut self.whatsapp,
            "email" => &mut self.email,
            "country" => &mut self.country,
            "city" => &mut self.city,
            "professionalStatus" => &mut self.professional_status,
            "savingsHabit" => &mut self.savings_habit,
            "savingsFrequency" => &mut self.savings_frequency,
            "savingsUsage" => &mut self.savings_usage,
            "savingsAmount" => &mut self.savings_amount,
            "partnerAccounts" => &mut self.partner_accounts,
            "expenseTracking" => &mut self.expense_tracking,
            "previousParticipation" => &mut self.previous_participation,
            "motivation" => &mut self.motivation,
            "savingsGoal" => &mut self.savings_goal,
            "contributionFrequency" => &mut self.contribution_frequency,
            "referralSource" => &mut self.referral_source,
            "futureInterest" => &mut self.future_interest,
            "subscriptionPlan" => &mut self.subscription_plan,
            "challengeStartMonth" => &mut self.challenge_start_month,
            _ => return None,
        };
        Some(v)
    }

    /// Sets the value of a field by its payload name.
    ///
    /// Returns false if the field is unknown.
    pub fn set(&mut self, field: &str, value: &str) -> bool {
        match self.field_mut(field) {
            Some(v) => {
                *v = value.to_string();
                true
            },
            None => false,
        }
    }
}
