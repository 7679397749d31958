#![no_main]

use libfuzzer_sys::fuzz_target;
use showcase::page::PageManifest;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either parse into a valid manifest or be rejected, never panic
    if let Ok(s) = std::str::from_utf8(data) {
        let _result = PageManifest::parse(s);
    }
});
