//! Model entities of the registration wizard.
//!
//! Enumerated option types, the step type, the payload sent to the
//! registration API and its result.

// option types
pub mod gender;
pub mod subscription_plan;
pub mod surface;

pub mod step;

// payload and response
pub mod registration;
pub mod registration_result;

pub use self::registration::RegistrationPayload;
pub use self::registration_result::{CreatedUser, Message, RegistrationResult};
pub use self::step::Step;
pub use self::surface::Surface;
