//! # A type SubscriptionPlan for the registration draft
//!
//! The free tier joins the challenge with the classic formula, any paid plan
//! joins it with the premium one.
use std::fmt;
use std::slice::Iter;

use crate::model::surface::Surface;

static SUBSCRIPTION_PLANS: [SubscriptionPlan; 3] = [
    SubscriptionPlan::Free,
    SubscriptionPlan::Monthly,
    SubscriptionPlan::Annual,
];

pub const PREMIUM_FORMULA: &str = "Premium";

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub enum SubscriptionPlan {
    #[serde(rename = "gratuit")]
    Free,
    #[serde(rename = "mensuel")]
    Monthly,
    #[serde(rename = "annuel")]
    Annual,
}

impl fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SubscriptionPlan::Free => write!(f, "gratuit"),
            SubscriptionPlan::Monthly => write!(f, "mensuel"),
            SubscriptionPlan::Annual => write!(f, "annuel"),
        }
    }
}

impl SubscriptionPlan {
    pub fn iter() -> Iter<'static, Self> {
        SUBSCRIPTION_PLANS.iter()
    }

    pub fn as_vec() -> Vec<String> {
        Self::iter().map(|p| p.to_string()).collect()
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::iter().find(|p| p.to_string() == code).copied()
    }

    pub fn is_free(self) -> bool {
        self == SubscriptionPlan::Free
    }

    pub fn challenge_formula(self, surface: Surface) -> &'static str {
        if self.is_free() {
            surface.free_formula()
        } else {
            PREMIUM_FORMULA
        }
    }
}
