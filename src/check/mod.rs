//! One-submission check pipeline: normalize the form, build and send the
//! provider request, present the result.

pub mod presenter;
pub mod runner;
pub mod types;

pub use runner::run_check;
pub use types::{CheckRequest, CheckResponse};
