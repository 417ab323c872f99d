//! Preset declaration macro.

/// Declares presets as constructor functions backed by a lazily built,
/// labelled descriptor.
///
/// Each call returns a clone of the same shared descriptor, so presets cost a
/// pointer copy after first use.
///
/// ```rust,ignore
/// preset! {
///     /// Non-negative integers.
///     pub fn nat() = "Nat", filter(Kind::Int, |v| v.as_int().is_some_and(|n| n >= 0));
/// }
/// ```
macro_rules! preset {
    ($(
        $(#[$meta:meta])*
        $vis:vis fn $name:ident() = $label:literal, $build:expr;
    )+) => {
        $(
            $(#[$meta])*
            $vis fn $name() -> ::typeward_contract::Descriptor {
                static PRESET: ::std::sync::LazyLock<::typeward_contract::Descriptor> =
                    ::std::sync::LazyLock::new(|| {
                        ::typeward_contract::Descriptor::from($build).named($label)
                    });
                PRESET.clone()
            }
        )+
    };
}
