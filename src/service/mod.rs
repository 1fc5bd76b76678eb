pub mod registrar;
pub mod sequencer;

pub use self::registrar::{Registrar, Submission};
pub use self::sequencer::StepSequencer;
