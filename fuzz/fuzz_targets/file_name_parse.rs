//! Fuzz target for re-id file name parsing.
//!
//! This fuzzer feeds arbitrary UTF-8 file names to the identity/camera
//! parser, checking for panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use reidset::parse::fuzz_parse_file_name;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }

    let Ok(name) = std::str::from_utf8(data) else {
        return;
    };

    let _ = fuzz_parse_file_name(name);
});
