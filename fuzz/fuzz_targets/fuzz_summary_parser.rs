//! Fuzz target for coverage summary parsing.
//!
//! Goal: The parser should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_summary_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only test valid UTF-8 strings (summary files are UTF-8 JSON)
    if let Ok(text) = std::str::from_utf8(data) {
        // Should never panic - invalid JSON is an error, not a crash
        let _ = covbadge_report::fuzz::parse_summary(text);
    }
});
