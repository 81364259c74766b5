#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! hint {
    (
        name: $name:expr,
        pattern: $pat:literal,
        level_one: $level_one:expr
        $(, level_two: $level_two:expr)?
        $(,)?
    ) => {{
        $crate::Hint {
            name: $name,
            pattern: $crate::regex!($pat),
            level_one: $level_one,
            level_two: { None $(.or(Some($level_two)))? },
        }
    }};
}
