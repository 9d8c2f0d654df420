//! User interface module - terminal output for check results.
//!
//! - `formatter` - message text and colored printing

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_report, display_status, display_success,
    format_outcome,
};
