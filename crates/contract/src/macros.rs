//! Macros for registering functions and building descriptors with minimal
//! boilerplate.
//!
//! # Available Macros
//!
//! - [`function!`]: Register a [`Function`](crate::signature::Function) from a
//!   signature-like header and a body
//! - [`union!`]: Variadic [`union`](crate::combinators::union)
//! - [`product!`]: Variadic [`product`](crate::combinators::product)
//!
//! # Examples
//!
//! ```rust,ignore
//! use typeward_contract::{function, union};
//! use typeward_contract::prelude::*;
//!
//! let id = union![Kind::Int, Kind::Str]?;
//! let show = function!(show(key: id) -> Kind::Str; |args| Ok(Value::str(args[0].to_string())));
//! let checked = wrap(show)?;
//! ```

// ============================================================================
// FUNCTION MACRO
// ============================================================================

/// Registers a function from a header and a body.
///
/// The header lists parameters as `name: descriptor` and, optionally, a return
/// descriptor after `->`. The body receives the argument slice and returns
/// `Result<Value, BoxError>`.
///
/// **With return descriptor**:
/// ```rust,ignore
/// let add = function!(add(a: Kind::Int, b: Kind::Int) -> Kind::Int; |args| {
///     Ok(Value::Int(args[0].as_int().unwrap_or(0) + args[1].as_int().unwrap_or(0)))
/// });
/// ```
///
/// **Without** (for domain-only wrapping):
/// ```rust,ignore
/// let log = function!(log(line: Kind::Str); |args| {
///     println!("{}", args[0]);
///     Ok(Value::Nil)
/// });
/// ```
#[macro_export]
macro_rules! function {
    // ── Variant 1: parameters and return descriptor ──────────────────────
    (
        $name:ident ( $($param:ident : $descriptor:expr),* $(,)? ) -> $returns:expr;
        |$args:pat_param| $body:expr
    ) => {
        $crate::function!($name ( $($param : $descriptor),* ); |$args| $body)
            .returns($returns)
    };

    // ── Variant 2: parameters only ───────────────────────────────────────
    (
        $name:ident ( $($param:ident : $descriptor:expr),* $(,)? );
        |$args:pat_param| $body:expr
    ) => {
        $crate::signature::Function::new(
            stringify!($name),
            move |$args: &[$crate::foundation::Value]| $body,
        )
        $(.param(stringify!($param), $descriptor))*
    };
}

// ============================================================================
// UNION / PRODUCT MACROS
// ============================================================================

/// Builds a union from any mix of descriptors, kinds, classes and nested
/// argument lists.
///
/// ```rust,ignore
/// let number = union![Kind::Int, Kind::Float]?;
/// ```
#[macro_export]
macro_rules! union {
    ($($arg:expr),+ $(,)?) => {
        $crate::combinators::union([$($crate::combinators::TypeArg::from($arg)),+])
    };
}

/// Builds a fixed-arity product.
///
/// ```rust,ignore
/// let point = product![Kind::Float, Kind::Float]?;
/// ```
#[macro_export]
macro_rules! product {
    ($($arg:expr),+ $(,)?) => {
        $crate::combinators::product([$($crate::combinators::TypeArg::from($arg)),+])
    };
}

// ============================================================================
// TESTS
// ============================================================================
