#![no_main]

use libfuzzer_sys::fuzz_target;
use phc_string::{format, parse, Field, Hint};

fuzz_target!(|data: &str| {
    // A decoded 7-bit salt is the segment text, so formatting it back must succeed
    let hint = Hint::seven_bit_salt();
    if let Ok(fields) = parse(data, &hint, &Field::ALL) {
        assert!(format(&fields, &hint).is_ok());
    }
});
