//! Mapping tables from form option codes to the labels the registration API
//! expects.
use fnv::FnvHashMap;

use crate::fnvhashmap;

pub struct OptionTable {
    pub name: &'static str,
    entries: FnvHashMap<&'static str, &'static str>,
}

impl OptionTable {
    fn new(
        name: &'static str,
        entries: FnvHashMap<&'static str, &'static str>,
    ) -> Self
    {
        Self { name, entries }
    }

    pub fn label(&self, code: &str) -> Option<&'static str> {
        self.entries.get(code).copied()
    }

    /// Returns the label for the code, or the code itself if it's unknown.
    pub fn translate(&self, code: &str) -> String {
        self.label(code).unwrap_or(code).to_string()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

lazy_static! {
    pub static ref PROFESSIONAL_STATUS: OptionTable = OptionTable::new(
        "professionalStatus",
        fnvhashmap! {
            "etudiant" => "Étudiant(e)",
            "salarie" => "Salarié(e)",
            "fonctionnaire" => "Fonctionnaire",
            "chef-entreprise" => "Chef d'entreprise",
            "commercant" => "Commerçant(e)",
            "independant" => "Travailleur indépendant",
            "sans-emploi" => "Sans emploi",
            "retraite" => "Retraité(e)",
            "autre" => "Autre"
        }
    );

    pub static ref SAVINGS_HABIT: OptionTable = OptionTable::new(
        "savingsHabit",
        fnvhashmap! {
            "jamais" => "Je n'épargne pas",
            "rarement" => "Rarement",
            "parfois" => "De temps en temps",
            "regulierement" => "Régulièrement",
            "chaque-mois" => "Chaque mois"
        }
    );

    pub static ref SAVINGS_USAGE: OptionTable = OptionTable::new(
        "savingsUsage",
        fnvhashmap! {
            "urgence" => "Fonds d'urgence",
            "projet" => "Financer un projet",
            "investissement" => "Investissement",
            "education" => "Éducation des enfants",
            "immobilier" => "Achat immobilier",
            "voyage" => "Voyage",
            "retraite" => "Préparer la retraite"
        }
    );

    pub static ref PARTNER_ACCOUNTS: OptionTable = OptionTable::new(
        "partnerAccounts",
        fnvhashmap! {
            "banque" => "Compte bancaire",
            "mobile-money" => "Mobile Money",
            "microfinance" => "Microfinance",
            "tontine" => "Tontine",
            "aucun" => "Aucun compte"
        }
    );

    pub static ref EXPENSE_TRACKING: OptionTable = OptionTable::new(
        "expenseTracking",
        fnvhashmap! {
            "oui-application" => "Oui, avec une application",
            "oui-carnet" => "Oui, dans un carnet",
            "parfois" => "De temps en temps",
            "non" => "Non"
        }
    );

    pub static ref FUTURE_INTEREST: OptionTable = OptionTable::new(
        "futureInterest",
        fnvhashmap! {
            "investissement" => "Investissement",
            "formation" => "Formation financière",
            "credit" => "Accès au crédit",
            "assurance" => "Assurance",
            "entrepreneuriat" => "Entrepreneuriat"
        }
    );
}

#[rustfmt::skip::attributes(rstest)]
#[cfg(test)]
mod test {
    use super::*;

    use rstest::rstest;

    #[rstest(
        code, expected,
        case("etudiant", "Étudiant(e)"),
        case("chef-entreprise", "Chef d'entreprise"),
        case("sans-emploi", "Sans emploi"),
        case("Étudiant(e)", "Étudiant(e)"),
        case("pilote", "pilote"),
        case("", ""),
        ::trace
    )]
    fn test_translate_professional_status(
        code: &'static str,
        expected: &'static str,
    )
    {
        assert_eq!(expected, PROFESSIONAL_STATUS.translate(code));
    }

    #[test]
    fn test_label() {
        assert_eq!(
            Some("Mobile Money"),
            PARTNER_ACCOUNTS.label("mobile-money")
        );
        assert_eq!(None, PARTNER_ACCOUNTS.label("Mobile Money"));
        assert_eq!(
            Some("Oui, avec une application"),
            EXPENSE_TRACKING.label("oui-application")
        );
    }

    #[test]
    fn test_tables_are_not_empty() {
        for table in &[
            &*PROFESSIONAL_STATUS,
            &*SAVINGS_HABIT,
            &*SAVINGS_USAGE,
            &*PARTNER_ACCOUNTS,
            &*EXPENSE_TRACKING,
            &*FUTURE_INTEREST,
        ] {
            assert!(!table.is_empty(), "{} is empty", table.name);
        }
        assert_eq!(9, PROFESSIONAL_STATUS.len());
    }
}
