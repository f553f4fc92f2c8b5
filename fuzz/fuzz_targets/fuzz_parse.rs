#![no_main]

use libfuzzer_sys::fuzz_target;
use phc_string::{format, parse, Field, Hint, PhcString};

fuzz_target!(|data: &str| {
    // Parsing must never panic, and accepted strings must re-serialize verbatim
    if let Ok(phc) = PhcString::parse(data) {
        assert_eq!(phc.to_string(), data);
    }

    let hint = Hint::default();
    if let Ok(fields) = parse(data, &hint, &Field::ALL) {
        let _ = format(&fields, &hint);
    }
});
