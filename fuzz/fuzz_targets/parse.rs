#![no_main]

use libfuzzer_sys::fuzz_target;
use ippc::frontend::parser;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the whole pipeline; a successful parse must also serialize or fail cleanly
        if let Ok(program) = parser::parse_program(s) {
            let _ = ippc::to_xml(&program);
        }
        // Fuzz single-line validation too
        let _ = parser::validate_line(s);
    }
});
