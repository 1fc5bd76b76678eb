//! # A type Step for the registration wizard
//!
//! Step is one of the six ordered screens. Each step owns a disjoint subset
//! of the draft fields, named as they appear in the payload.
use std::fmt;
use std::slice::Iter;

static STEPS: [Step; 6] = [
    Step::One,
    Step::Two,
    Step::Three,
    Step::Four,
    Step::Five,
    Step::Six,
];

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize)]
pub enum Step {
    One, // default
    Two,
    Three,
    Four,
    Five,
    Six,
}

impl Default for Step {
    fn default() -> Self {
        Step::One
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl Step {
    pub const FIRST: Step = Step::One;
    pub const LAST: Step = Step::Six;

    pub fn iter() -> Iter<'static, Self> {
        STEPS.iter()
    }

    pub fn number(self) -> u8 {
        match self {
            Step::One => 1,
            Step::Two => 2,
            Step::Three => 3,
            Step::Four => 4,
            Step::Five => 5,
            Step::Six => 6,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        STEPS.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Returns the following step, staying at the last one.
    pub fn next(self) -> Self {
        Self::from_number(self.number() + 1).unwrap_or(Self::LAST)
    }

    /// Returns the preceding step, staying at the first one.
    pub fn previous(self) -> Self {
        Self::from_number(self.number() - 1).unwrap_or(Self::FIRST)
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Step::One => &["firstName", "lastName", "gender", "ageRange"],
            Step::Two => &[
                "phone",
                "phoneCountry",
                "whatsapp",
                "email",
                "country",
                "city",
            ],
            Step::Three => &["professionalStatus"],
            Step::Four => &[
                "savingsHabit",
                "savingsFrequency",
                "savingsUsage",
                "savingsAmount",
                "partnerAccounts",
                "expenseTracking",
            ],
            Step::Five => &[
                "previousParticipation",
                "motivation",
                "savingsGoal",
                "contributionFrequency",
                "referralSource",
                "futureInterest",
                "subscriptionPlan",
            ],
            Step::Six => &["challengeStartMonth"],
        }
    }

    pub fn contains(self, field: &str) -> bool {
        self.fields().iter().any(|f| *f == field)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::collections::HashSet;

    #[test]
    fn test_next() {
        assert_eq!(Step::Two, Step::One.next());
        assert_eq!(Step::Six, Step::Five.next());
        assert_eq!(Step::Six, Step::Six.next());
    }

    #[test]
    fn test_previous() {
        assert_eq!(Step::One, Step::One.previous());
        assert_eq!(Step::One, Step::Two.previous());
        assert_eq!(Step::Five, Step::Six.previous());
    }

    #[test]
    fn test_from_number() {
        assert_eq!(None, Step::from_number(0));
        assert_eq!(Some(Step::One), Step::from_number(1));
        assert_eq!(Some(Step::Six), Step::from_number(6));
        assert_eq!(None, Step::from_number(7));
    }

    #[test]
    fn test_fmt() {
        assert_eq!("1", format!("{}", Step::One));
        assert_eq!("6", format!("{}", Step::Six));
    }

    #[test]
    fn test_fields_are_disjoint() {
        let mut seen = HashSet::new();
        for step in Step::iter() {
            for field in step.fields() {
                assert!(seen.insert(*field), "{} is duplicated", field);
            }
        }
        assert_eq!(25, seen.len());
    }

    #[test]
    fn test_contains() {
        assert!(Step::One.contains("gender"));
        assert!(!Step::One.contains("email"));
        assert!(Step::Five.contains("subscriptionPlan"));
    }
}
