pub mod registration;

use accord::{Invalid, MultipleError, ValidatorResult};
use chrono::NaiveDate;
use regex::Regex;

type SV = Box<dyn Fn(&String) -> ValidatorResult>;

lazy_static! {
    static ref EMAIL: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub messages: Vec<String>,
}

impl ValidationError {
    /// MultipleError to Vec<ValidationError>
    pub(crate) fn from_multiple(e: &MultipleError) -> Vec<Self> {
        e.0.iter()
            .map(|e| {
                ValidationError {
                    field: e.tag.to_string(),
                    messages: e
                        .invalids
                        .iter()
                        .map(|i| i.human_readable.to_string())
                        .collect(),
                }
            })
            .collect()
    }
}

fn invalid(msg: &str, args: Vec<String>, human_readable: String) -> Invalid {
    Invalid {
        msg: msg.to_string(),
        args,
        human_readable,
    }
}

pub fn required() -> SV {
    Box::new(move |s: &String| {
        if !s.trim().is_empty() {
            return Ok(());
        }
        Err(invalid("Must exist", vec![], "Must exist".to_string()))
    })
}

// counts characters, not bytes
pub fn min_chars_if_present(min: usize) -> SV {
    Box::new(move |s: &String| {
        let v = s.trim();
        if v.is_empty() || v.chars().count() >= min {
            return Ok(());
        }
        Err(invalid(
            "Must contain at least %1 characters",
            vec![min.to_string()],
            format!("Must contain at least {} characters", min),
        ))
    })
}

pub fn one_of_if_present(options: Vec<String>) -> SV {
    Box::new(move |s: &String| {
        let v = s.trim();
        if v.is_empty() || options.iter().any(|o| o == v) {
            return Ok(());
        }
        let list = options
            .iter()
            .map(|o| format!("'{}'", o))
            .collect::<Vec<String>>()
            .join(", ");
        Err(invalid(
            "Must be one of %1",
            vec![list.to_string()],
            format!("Must be one of {}", list),
        ))
    })
}

pub fn email_if_present() -> SV {
    Box::new(move |s: &String| {
        if s.trim().is_empty() || EMAIL.is_match(s.trim()) {
            return Ok(());
        }
        Err(invalid(
            "Must be a valid email address",
            vec![],
            "Must be a valid email address".to_string(),
        ))
    })
}

/// A month given as `YYYY-MM`.
pub fn year_month_if_present() -> SV {
    Box::new(move |s: &String| {
        let v = s.trim();
        if v.is_empty() {
            return Ok(());
        }
        let date = format!("{}-01", v);
        if v.len() == 7 && NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok()
        {
            return Ok(());
        }
        Err(invalid(
            "Must be a month as %1",
            vec!["YYYY-MM".to_string()],
            "Must be a month as YYYY-MM".to_string(),
        ))
    })
}
