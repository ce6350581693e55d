#![no_main]
use libfuzzer_sys::fuzz_target;
use name_format::{compile, Key, Markup, NameRecord, Settings};

// Input is a pattern, a newline, then the value used for every component
fuzz_target!(|data: &str| {
    let (pattern, value) = data.split_once('\n').unwrap_or((data, "Ada"));
    let record: NameRecord = Key::ALL.iter().map(|&key| (key, value)).collect();
    let settings = Settings::default().with_markup(Markup::Wrapped);
    compile(pattern).render(&record, &settings);
});
