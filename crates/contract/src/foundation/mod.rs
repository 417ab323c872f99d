//! Core value and error types
//!
//! This module contains the pieces every other module builds on:
//!
//! - **Values**: [`Value`], the dynamically typed subject of every check
//! - **Nominal types**: [`Kind`], [`Class`] and the [`Object`] trait for host types
//! - **Capabilities**: the structural operations a value exposes
//! - **Errors**: [`ContractError`], [`ViolationRecord`]
//! - **Options**: [`CheckOptions`], the per-site check configuration
//!
//! # Architecture
//!
//! ## 1. Static engine, dynamic subject
//!
//! Descriptors never inspect Rust types at runtime. Every checked value is a
//! [`Value`], a closed tagged variant, and every membership rule is a `match`
//! over it:
//!
//! ```rust,ignore
//! use typeward_contract::foundation::{Kind, Value};
//!
//! assert!(Kind::Int.admits(&Value::from(3), true));
//! assert!(!Kind::Int.admits(&Value::from("3"), true));
//! ```
//!
//! ## 2. Structured diagnostics
//!
//! Failed checks produce [`ViolationRecord`]s that carry the value, the
//! expected and received display names, and whether the failure was a plain
//! mismatch or a failed refinement:
//!
//! ```rust,ignore
//! let err = checked.call(&[Value::from(150)]).unwrap_err();
//! for record in err.violations() {
//!     println!("{} expected {}", record.actual, record.expected);
//! }
//! ```

pub mod capability;
pub mod error;
pub mod kind;
pub mod options;
pub mod value;

pub use error::{BoxError, ContractError, Result, ViolationKind, ViolationRecord};
pub use kind::{Class, Kind, Object};
pub use options::CheckOptions;
pub use value::Value;

/// Common imports for working with the foundation types.
pub mod prelude {
    pub use super::{
        BoxError, CheckOptions, Class, ContractError, Kind, Object, Result, Value, ViolationKind,
        ViolationRecord,
    };
}
