//! Fuzz target for crop config parsing.
//!
//! This fuzzer feeds arbitrary UTF-8 text to the crop config parser,
//! checking for panics, crashes, or hangs.

#![no_main]

use image_cropper::config::fuzz_parse_crop_config;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let _ = fuzz_parse_crop_config(text);
});
