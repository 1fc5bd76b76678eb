//! Field mapping from a registration draft to the registration payload.
//!
//! Mapping never fails. Unknown option codes and unresolvable calling codes
//! fall back to the value given in the draft, and are logged so that drift
//! between the form options and the backend vocabulary stays visible.

pub mod calling_code;
pub mod table;

use crate::logger::Logger;
use crate::model::registration::RegistrationPayload;
use crate::model::subscription_plan::{PREMIUM_FORMULA, SubscriptionPlan};
use crate::model::surface::Surface;
use crate::request::RegistrationDraft;

use self::table::*;

/// Capitalizes the first letter of each space-separated token and lowercases
/// the rest.
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .split(' ')
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(c) => {
                    c.to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect()
                },
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Lowercased first name followed by lowercased last name, without any
/// whitespace.
pub fn username(first_name: &str, last_name: &str) -> String {
    format!("{}{}", first_name, last_name)
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Returns `+<calling code><local digits>`, or None if the country has no
/// known calling code.
pub fn international_phone(country: &str, local: &str) -> Option<String> {
    let code = calling_code::resolve(country)?;
    let digits: String = local.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    Some(format!("+{}{}", code, digits))
}

pub fn challenge_formula(plan: &str, surface: Surface) -> &'static str {
    SubscriptionPlan::from_code(plan)
        .map_or(PREMIUM_FORMULA, |p| p.challenge_formula(surface))
}

pub struct Mapper<'a> {
    surface: Surface,
    logger: &'a Logger,
}

impl<'a> Mapper<'a> {
    pub fn new(surface: Surface, logger: &'a Logger) -> Self {
        Self { surface, logger }
    }

    fn translate(&self, table: &OptionTable, code: &str) -> String {
        let code = code.trim();
        if !code.is_empty() && table.label(code).is_none() {
            warn!(
                self.logger,
                "unmapped option code: {} {}", table.name, code
            );
        }
        table.translate(code)
    }

    fn phone(&self, draft: &RegistrationDraft) -> String {
        match international_phone(&draft.phone_country, &draft.phone) {
            Some(v) => v,
            None => {
                warn!(
                    self.logger,
                    "calling code not resolved: {}, falling back to whatsapp",
                    draft.phone_country
                );
                draft.whatsapp.to_string()
            },
        }
    }

    pub fn map(&self, draft: &RegistrationDraft) -> RegistrationPayload {
        let d = draft;
        let phone = self.phone(d);

        let payload = RegistrationPayload {
            first_name: normalize_name(&d.first_name),
            last_name: normalize_name(&d.last_name),
            username: username(&d.first_name, &d.last_name),
            gender: d.gender.to_string(),
            age_range: d.age_range.to_string(),
            email: d.email.trim().to_string(),
            whatsapp: phone.to_string(),
            phone,
            country: d.country.to_string(),
            city: d.city.to_string(),
            professional_status: self
                .translate(&PROFESSIONAL_STATUS, &d.professional_status),
            savings_habit: self.translate(&SAVINGS_HABIT, &d.savings_habit),
            savings_frequency: d.savings_frequency.to_string(),
            savings_usage: self.translate(&SAVINGS_USAGE, &d.savings_usage),
            savings_amount: d.savings_amount.to_string(),
            partner_accounts: self
                .translate(&PARTNER_ACCOUNTS, &d.partner_accounts),
            expense_tracking: self
                .translate(&EXPENSE_TRACKING, &d.expense_tracking),
            previous_participation: d.previous_participation.to_string(),
            motivation: d.motivation.to_string(),
            savings_goal: d.savings_goal.to_string(),
            contribution_frequency: d.contribution_frequency.to_string(),
            referral_source: d.referral_source.to_string(),
            future_interest: self
                .translate(&FUTURE_INTEREST, &d.future_interest),
            subscription_plan: d.subscription_plan.to_string(),
            challenge_formula: challenge_formula(
                &d.subscription_plan,
                self.surface,
            )
            .to_string(),
            challenge_start_month: d.challenge_start_month.to_string(),
        };
        debug!(self.logger, "mapped registration: {}", payload.username());
        payload
    }
}

#[rustfmt::skip::attributes(rstest)]
#[cfg(test)]
mod test {
    use super::*;

    use std::panic::{RefUnwindSafe, UnwindSafe};
    use std::sync::Arc;

    use parking_lot::Mutex;
    use rstest::rstest;
    use slog::{Drain, Level, Never, OwnedKVList, Record};

    use crate::logger::discard;
    use crate::validation::registration::test::valid_draft;

    #[rstest(
        name, expected,
        case("marie", "Marie"),
        case("DUPONT", "Dupont"),
        case("Marie", "Marie"),
        case("jean pierre", "Jean Pierre"),
        case("  kOUAME  ", "Kouame"),
        case("élodie", "Élodie"),
        case("jean-pierre", "Jean-pierre"),
        case("", ""),
        ::trace
    )]
    fn test_normalize_name(name: &'static str, expected: &'static str) {
        assert_eq!(expected, normalize_name(name));
    }

    #[rstest(
        name,
        case("marie"),
        case("DUPONT"),
        case("jean  PIERRE"),
        case("ÉLODIE"),
        ::trace
    )]
    fn test_normalize_name_is_idempotent(name: &'static str) {
        let once = normalize_name(name);
        assert_eq!(once, normalize_name(&once));
    }

    #[rstest(
        first_name, last_name, expected,
        case("marie", "DUPONT", "mariedupont"),
        case("Jean Pierre", "Kouamé", "jeanpierrekouamé"),
        case(" Awa ", "Diallo\t", "awadiallo"),
        ::trace
    )]
    fn test_username(
        first_name: &'static str,
        last_name: &'static str,
        expected: &'static str,
    )
    {
        assert_eq!(expected, username(first_name, last_name));
        assert_eq!(
            username(first_name, last_name),
            username(first_name, last_name)
        );
    }

    #[rstest(
        country, local, expected,
        case("CI", "0706494916", Some("+2250706494916")),
        case("sn", "77 123 45 67", Some("+221771234567")),
        case("XX", "0706494916", None),
        case("CI", "", None),
        ::trace
    )]
    fn test_international_phone(
        country: &'static str,
        local: &'static str,
        expected: Option<&'static str>,
    )
    {
        assert_eq!(
            expected.map(String::from),
            international_phone(country, local)
        );
    }

    #[rstest(
        plan, surface, expected,
        case("gratuit", Surface::Modal, "Standard"),
        case("gratuit", Surface::Page, "Classique"),
        case("mensuel", Surface::Modal, "Premium"),
        case("annuel", Surface::Page, "Premium"),
        case("inconnu", Surface::Modal, "Premium"),
        ::trace
    )]
    fn test_challenge_formula(
        plan: &'static str,
        surface: Surface,
        expected: &'static str,
    )
    {
        assert_eq!(expected, challenge_formula(plan, surface));
    }

    /// Keeps the messages of the warning records.
    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<String>>>);

    impl UnwindSafe for Recorder {}
    impl RefUnwindSafe for Recorder {}

    impl Drain for Recorder {
        type Ok = ();
        type Err = Never;

        fn log(&self, record: &Record, _: &OwnedKVList) -> Result<(), Never> {
            if record.level() == Level::Warning {
                self.0.lock().push(record.msg().to_string());
            }
            Ok(())
        }
    }

    impl Recorder {
        fn logger(&self) -> Logger {
            slog::Logger::root(self.clone(), o!())
        }

        fn records(&self) -> Vec<String> {
            self.0.lock().clone()
        }
    }

    #[test]
    fn test_map() {
        let logger = discard();
        let mapper = Mapper::new(Surface::Modal, &logger);
        let payload = mapper.map(&valid_draft());

        assert_eq!("Marie", payload.first_name());
        assert_eq!("Dupont", payload.last_name());
        assert_eq!("mariedupont", payload.username());
        assert_eq!("+2250706494916", payload.phone());
        assert_eq!("+2250706494916", payload.whatsapp());
        assert_eq!("Chef d'entreprise", payload.professional_status());
        assert_eq!("Standard", payload.challenge_formula());
        assert_eq!("Régulièrement", payload.savings_habit);
        assert_eq!("Financer un projet", payload.savings_usage);
        assert_eq!("Mobile Money", payload.partner_accounts);
        assert_eq!("Oui, avec une application", payload.expense_tracking);
        assert_eq!("Investissement", payload.future_interest);
        assert_eq!("2027-01", payload.challenge_start_month);
    }

    #[test]
    fn test_map_with_unresolved_calling_code() {
        let logger = discard();
        let mapper = Mapper::new(Surface::Page, &logger);
        let draft = RegistrationDraft {
            phone_country: "ZZ".to_string(),
            ..valid_draft()
        };
        let payload = mapper.map(&draft);

        assert_eq!("+225 07 06 49 49 16", payload.phone());
        assert_eq!("+225 07 06 49 49 16", payload.whatsapp());
        assert_eq!("Classique", payload.challenge_formula());
    }

    #[test]
    fn test_map_passes_unmapped_codes_through() {
        let logger = discard();
        let mapper = Mapper::new(Surface::Modal, &logger);
        let draft = RegistrationDraft {
            professional_status: "astronaute".to_string(),
            savings_usage: "Autre usage".to_string(),
            ..valid_draft()
        };
        let payload = mapper.map(&draft);

        assert_eq!("astronaute", payload.professional_status());
        assert_eq!("Autre usage", payload.savings_usage);
    }

    #[test]
    fn test_map_serializes_camel_case() {
        let logger = discard();
        let payload = Mapper::new(Surface::Modal, &logger).map(&valid_draft());
        let v = serde_json::to_value(&payload).unwrap();

        assert_eq!("mariedupont", v["username"]);
        assert_eq!("Standard", v["challengeFormula"]);
        assert_eq!("gratuit", v["subscriptionPlan"]);
        assert_eq!("2027-01", v["challengeStartMonth"]);
        assert!(v.get("phoneCountry").is_none());
    }

    #[test]
    fn test_map_logs_unmapped_codes() {
        let recorder = Recorder::default();
        let logger = recorder.logger();
        let mapper = Mapper::new(Surface::Modal, &logger);
        let draft = RegistrationDraft {
            professional_status: "astronaute".to_string(),
            ..valid_draft()
        };
        mapper.map(&draft);

        let records = recorder.records();
        assert_eq!(1, records.len());
        assert!(records[0].contains("professionalStatus"));
        assert!(records[0].contains("astronaute"));
    }

    #[test]
    fn test_map_does_not_log_mapped_or_empty_codes() {
        let recorder = Recorder::default();
        let logger = recorder.logger();
        let mapper = Mapper::new(Surface::Modal, &logger);
        let draft = RegistrationDraft {
            future_interest: "".to_string(),
            ..valid_draft()
        };
        let payload = mapper.map(&draft);

        assert_eq!("", payload.future_interest);
        assert!(recorder.records().is_empty());
    }

    #[test]
    fn test_map_trims_option_codes() {
        let recorder = Recorder::default();
        let logger = recorder.logger();
        let mapper = Mapper::new(Surface::Modal, &logger);
        let draft = RegistrationDraft {
            professional_status: " etudiant ".to_string(),
            ..valid_draft()
        };
        let payload = mapper.map(&draft);

        assert_eq!("Étudiant(e)", payload.professional_status());
        assert!(recorder.records().is_empty());
    }
}
