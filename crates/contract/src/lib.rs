//! # typeward-contract
//!
//! Runtime contract checking for call boundaries whose values are dynamically
//! typed.
//!
//! A [`Descriptor`] is a composable type specification with a uniform
//! membership test. Functions are registered with a descriptor per parameter
//! and one for the return value, then wrapped; every call through the wrapper
//! checks the arguments before delegating and the result afterwards.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use typeward_contract::prelude::*;
//!
//! let score = Function::new("score", |args| Ok(Value::Bool(args[0].as_int() > Some(10))))
//!     .param("points", range(0, 100)?)
//!     .param("label", regex("[A-Z]+")?)
//!     .returns(Kind::Bool);
//!
//! let checked = wrap(score)?;
//! assert!(checked.call(&[Value::from(50), Value::from("OK")]).is_ok());
//!
//! let err = checked.call(&[Value::from(150), Value::from("ok")]).unwrap_err();
//! assert_eq!(err.violations().len(), 2);
//! ```
//!
//! ## Building blocks
//!
//! - **Values**: [`Value`], [`Kind`], [`Class`], [`Object`]
//! - **Descriptors**: [`Descriptor`] plus the factories in [`combinators`]
//! - **Signatures**: [`Function`], [`Callable`], [`Signature`]
//! - **Checking**: [`check_domain`], [`check_codomain`], [`wrap`], [`TypedFn`]
//! - **Null objects**: [`null_of`], [`is_null_of_type`]

// ContractError carries the full violation list.
#![allow(clippy::result_large_err)]

pub mod check;
pub mod combinators;
pub mod descriptor;
pub mod foundation;
mod macros;
pub mod null;
pub mod prelude;
pub mod signature;
pub mod typed;

pub use check::{check_codomain, check_domain};
pub use descriptor::{Descriptor, DescriptorKind, Membership, Predicate, Shape};
pub use foundation::{
    BoxError, CheckOptions, Class, ContractError, Kind, Object, Result, Value, ViolationKind,
    ViolationRecord,
};
pub use null::{is_null_of_type, null_of};
pub use signature::{Callable, CheckMode, Function, Parameter, Signature};
pub use typed::{TypedFn, nill, wrap, wrap_with};
