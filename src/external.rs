//! A C API for compiling patterns and rendering names.
//!
//! Strings returned by this module must be released with
//! `name_format_free_string`; patterns, records and settings with their own
//! `free` functions.

extern crate libc;

use self::libc::c_char;
use super::{Key, Markup, NameRecord, Pattern, Settings};
use std::ffi::{CStr, CString};
use std::mem;
use std::ptr;

macro_rules! str_to_char_star {
    ($str:expr) => {
        match CString::new($str) {
            Ok(s) => s.into_raw() as *const c_char,
            Err(_) => ptr::null(),
        }
    };
}

macro_rules! char_star_to_str {
    ($ptr:expr) => {
        match CStr::from_ptr($ptr).to_str() {
            Ok(s) => s,
            Err(_) => return None,
        }
    };
}

#[no_mangle]
pub unsafe extern "C" fn name_format_compile(input: *const c_char) -> Option<Box<Pattern>> {
    let s = char_star_to_str!(input);
    Some(Box::new(Pattern::compile(s)))
}

#[no_mangle]
pub unsafe extern "C" fn name_format_free_pattern(pattern_ptr: *mut Pattern) {
    mem::drop(Box::from_raw(pattern_ptr));
}

#[no_mangle]
pub unsafe extern "C" fn name_format_record_new() -> Box<NameRecord> {
    Box::new(NameRecord::new())
}

/// Set a component by name, e.g. `"given"`. Returns false if the name is
/// not a known component or either string is not UTF-8.
#[no_mangle]
pub unsafe extern "C" fn name_format_record_set(
    record: &mut NameRecord,
    key: *const c_char,
    value: *const c_char,
) -> bool {
    let key = match CStr::from_ptr(key).to_str().ok().and_then(|k| k.parse::<Key>().ok()) {
        Some(key) => key,
        None => return false,
    };
    match CStr::from_ptr(value).to_str() {
        Ok(value) => {
            record.set(key, value);
            true
        }
        Err(_) => false,
    }
}

#[no_mangle]
pub unsafe extern "C" fn name_format_free_record(record_ptr: *mut NameRecord) {
    mem::drop(Box::from_raw(record_ptr));
}

/// Markup is one of `"none"`, `"raw"` or `"wrapped"`.
#[no_mangle]
pub unsafe extern "C" fn name_format_settings_new(
    sep1: *const c_char,
    sep2: *const c_char,
    sep3: *const c_char,
    markup: *const c_char,
) -> Option<Box<Settings>> {
    let markup: Markup = char_star_to_str!(markup).parse().ok()?;
    Some(Box::new(Settings {
        sep1: char_star_to_str!(sep1).into(),
        sep2: char_star_to_str!(sep2).into(),
        sep3: char_star_to_str!(sep3).into(),
        markup,
    }))
}

#[no_mangle]
pub unsafe extern "C" fn name_format_free_settings(settings_ptr: *mut Settings) {
    mem::drop(Box::from_raw(settings_ptr));
}

#[no_mangle]
pub unsafe extern "C" fn name_format_render(
    pattern: &Pattern,
    record: &NameRecord,
    settings: &Settings,
) -> *const c_char {
    str_to_char_star!(pattern.render(record, settings))
}

#[no_mangle]
pub unsafe extern "C" fn name_format_initials(input: *const c_char) -> *const c_char {
    let s = CStr::from_ptr(input).to_string_lossy();
    str_to_char_star!(super::initials(&s))
}

#[no_mangle]
pub unsafe extern "C" fn name_format_free_string(str_ptr: *mut c_char) {
    mem::drop(CString::from_raw(str_ptr));
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe fn take_string(ptr: *const c_char) -> String {
        let s = CStr::from_ptr(ptr).to_str().unwrap().to_string();
        name_format_free_string(ptr as *mut c_char);
        s
    }

    #[test]
    fn render_round_trip() {
        let pattern_src = CString::new("f+jg").unwrap();
        let given = CString::new("given").unwrap();
        let family = CString::new("family").unwrap();
        let unknown = CString::new("nickname").unwrap();
        let ada = CString::new("Ada").unwrap();
        let lovelace = CString::new("Lovelace").unwrap();
        let sep1 = CString::new(" ").unwrap();
        let sep2 = CString::new(" / ").unwrap();
        let sep3 = CString::new("").unwrap();
        let markup = CString::new("none").unwrap();

        unsafe {
            let pattern = name_format_compile(pattern_src.as_ptr()).unwrap();
            let mut record = name_format_record_new();
            assert!(name_format_record_set(&mut record, given.as_ptr(), ada.as_ptr()));
            assert!(name_format_record_set(&mut record, family.as_ptr(), lovelace.as_ptr()));
            assert!(!name_format_record_set(&mut record, unknown.as_ptr(), ada.as_ptr()));

            let settings =
                name_format_settings_new(sep1.as_ptr(), sep2.as_ptr(), sep3.as_ptr(), markup.as_ptr()).unwrap();

            let rendered = name_format_render(&pattern, &record, &settings);
            assert_eq!("Lovelace / Ada", take_string(rendered));

            name_format_free_pattern(Box::into_raw(pattern));
            name_format_free_record(Box::into_raw(record));
            name_format_free_settings(Box::into_raw(settings));
        }
    }

    #[test]
    fn rejects_bad_input() {
        let invalid = CString::new(vec![0xff, 0xfe]).unwrap();
        let sep = CString::new(" ").unwrap();
        let fancy = CString::new("fancy").unwrap();

        unsafe {
            assert!(name_format_compile(invalid.as_ptr()).is_none());
            assert!(name_format_settings_new(sep.as_ptr(), sep.as_ptr(), sep.as_ptr(), fancy.as_ptr()).is_none());
        }
    }

    #[test]
    fn initials() {
        let input = CString::new("Ada Lovelace").unwrap();
        unsafe {
            assert_eq!("AL", take_string(name_format_initials(input.as_ptr())));
        }
    }
}
