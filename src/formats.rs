static BUILTIN_FORMATS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "default" => "((((t+ig)+im)+if)+is)+jc",
    "full" => "((((t+ig)+im)+if)+is)+jc",
    "given" => "g",
    "family" => "f",
    "formal" => "t+if",
    "given_family" => "g+if",
    "short_full" => "((t+ig)+if)+jc",
    "initials" => "J",
    "initial_family" => "x+if",
};

/// Look up one of the formats that ship with the library.
///
/// # Examples
/// ```
/// use name_format::builtin_format;
///
/// assert_eq!(Some("t+if"), builtin_format("formal"));
/// assert_eq!(None, builtin_format("informal"));
/// ```
pub fn builtin_format(name: &str) -> Option<&'static str> {
    BUILTIN_FORMATS.get(name).copied()
}

/// All formats that ship with the library, as `(name, pattern)` pairs in
/// no particular order.
pub fn builtin_formats() -> impl Iterator<Item = (&'static str, &'static str)> {
    BUILTIN_FORMATS.entries().map(|(name, pattern)| (*name, *pattern))
}
