pub mod registration;

pub use self::registration::RegistrationDraft;
