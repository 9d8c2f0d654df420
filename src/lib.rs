pub mod boundary;
pub mod check;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod ui;

pub use check::{run_check, Baseline, CheckOutcome, CheckReport, CheckRequest};
pub use domain::{validate, Qualifier, Rejection, Verdict, Version};
pub use error::{Result, TagParseError, VersionTagError};
