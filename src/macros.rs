#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a [`RuleDef`](crate::RuleDef). Fields after `pattern` are optional but
/// must appear in the order shown:
///
/// ```
/// use uascope::rule;
///
/// let def = rule! {
///     pattern: r"Vivaldi/(\d+[\.\d]*)",
///     name: "Vivaldi",
///     version: "$1",
/// };
/// assert_eq!(def.pattern, r"Vivaldi/(\d+[\.\d]*)");
/// ```
#[macro_export]
macro_rules! rule {
    (
        pattern: $pattern:expr
        $(, name: $name:expr)?
        $(, version: $version:expr)?
        $(, versions: [ $( ($cond_pattern:expr, $cond_version:expr) ),* $(,)? ])?
        $(, engine: $engine:expr)?
        $(, family: $family:expr)?
        $(,)?
    ) => {{
        $crate::RuleDef {
            pattern: $pattern.to_string(),
            name: { None::<String> $(.or(Some($name.to_string())))? },
            version: { None::<String> $(.or(Some($version.to_string())))? },
            versions: vec![ $($( ($cond_pattern.to_string(), $cond_version.to_string()) ),*)? ],
            engine: { None::<$crate::EngineSpec> $(.or(Some($engine)))? },
            family: { None::<String> $(.or(Some($family.to_string())))? },
        }
    }};
}
