//! Domain logic - pure version rules independent of git operations

pub mod increment;
pub mod qualifier;
pub mod version;

pub use increment::{validate, validate_sequence, Rejection, SequenceBreak, Verdict};
pub use qualifier::{Iteration, Qualifier};
pub use version::Version;
