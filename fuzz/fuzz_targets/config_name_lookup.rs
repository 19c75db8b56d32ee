//! Fuzz target for config-name and split-name lookup.
//!
//! This fuzzer feeds arbitrary UTF-8 strings to the name lookups,
//! checking for panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wmt15::descriptor::wmt15::find_config;
use wmt15::descriptor::SplitName;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }

    let Ok(name) = std::str::from_utf8(data) else {
        return;
    };

    if let Some(cfg) = find_config(name) {
        assert_eq!(cfg.name(), name.trim());
    }
    let _ = name.parse::<SplitName>();
});
