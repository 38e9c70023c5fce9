//! Application use cases for covbadge.
//!
//! The CLI stays thin; the whole generate pipeline lives here so it can be
//! tested against a loopback badge service without spawning a binary.

#![forbid(unsafe_code)]

mod generate;

pub use generate::{GenerateInput, GenerateOutput, run_generate};
