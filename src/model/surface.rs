//! # The presentation surface hosting the wizard
//!
//! The modal and the full-page registration share every rule except the
//! label sent as the challenge formula for the free tier.
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    Modal, // default
    Page,
}

impl Default for Surface {
    fn default() -> Self {
        Surface::Modal
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Surface::Modal => write!(f, "modal"),
            Surface::Page => write!(f, "page"),
        }
    }
}

impl FromStr for Surface {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_ref() {
            "modal" => Ok(Surface::Modal),
            "page" => Ok(Surface::Page),
            _ => Err(format!("Invalid surface: '{}'", s)),
        }
    }
}

impl Surface {
    /// Returns the challenge formula label for the free tier.
    pub fn free_formula(self) -> &'static str {
        match self {
            Surface::Modal => "Standard",
            Surface::Page => "Classique",
        }
    }
}
