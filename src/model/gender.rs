//! # A type Gender for the registration draft
use std::fmt;
use std::slice::Iter;

static GENDERS: [Gender; 2] = [Gender::Masculine, Gender::Feminine];

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub enum Gender {
    #[serde(rename = "masculin")]
    Masculine,
    #[serde(rename = "feminin")]
    Feminine,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Gender::Masculine => write!(f, "masculin"),
            Gender::Feminine => write!(f, "feminin"),
        }
    }
}

impl Gender {
    pub fn iter() -> Iter<'static, Self> {
        GENDERS.iter()
    }

    pub fn as_vec() -> Vec<String> {
        Self::iter().map(|g| g.to_string()).collect()
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::iter().find(|g| g.to_string() == code).copied()
    }
}
