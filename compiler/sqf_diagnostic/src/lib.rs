//! Error reporting for the SQF interpreter.
//!
//! - [`SqfError`]: the error every interpreter operation returns
//! - [`ErrorCode`]: searchable codes grouped by phase
//! - [`Diagnostic`]: presentation form with labels, notes and source
//!   positions

mod diagnostic;
mod error;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error::{SqfError, SqfResult};
pub use error_code::ErrorCode;
