#![no_main]
use libfuzzer_sys::fuzz_target;
use name_format::Pattern;

fuzz_target!(|data: &[u8]| {
    if let Ok(pattern) = Pattern::from_utf8(data) {
        assert_eq!(pattern, Pattern::compile(pattern.source()));
    }
});
