//! Fuzz target: configuration decoding
//!
//! Arbitrary bytes go through both the JSON and the postcard decoders.
//! Anything that decodes must also validate, and must survive a
//! postcard round-trip unchanged.
//!
//! cargo fuzz run fuzz_config

#![no_main]

use libfuzzer_sys::fuzz_target;
use lavabot::config::SystemConfig;

fn check(config: &SystemConfig) {
    assert!(config.validate().is_ok());
    let bytes = config.to_bytes().expect("valid config encodes");
    let back = SystemConfig::from_bytes(&bytes).expect("own encoding decodes");
    assert_eq!(&back, config);
}

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = core::str::from_utf8(data) {
        if let Ok(config) = SystemConfig::from_json(text) {
            check(&config);
        }
    }
    if let Ok(config) = SystemConfig::from_bytes(data) {
        check(&config);
    }
});
