#![no_main]

use libfuzzer_sys::fuzz_target;
use showcase::config::ShowcaseConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _result: Result<ShowcaseConfig, _> = serde_json::from_str(s);
    }
});
