//! Prelude module for convenient imports.
//!
//! Provides a single `use typeward_contract::prelude::*;` import that brings
//! in the value model, every descriptor factory, and the wrapping API.
//!
//! # Examples
//!
//! ```rust,ignore
//! use typeward_contract::prelude::*;
//!
//! let rgb = product_n(range(0, 255)?, 3)?;
//! let paint = Function::new("paint", |_| Ok(Value::Nil))
//!     .param("color", rgb)
//!     .returns(Kind::Nil);
//! let checked = wrap(paint)?;
//! ```

// ============================================================================
// FOUNDATION: Values, kinds, errors, options
// ============================================================================

pub use crate::foundation::{
    BoxError, CheckOptions, Class, ContractError, Kind, Object, Result, Value, ViolationKind,
    ViolationRecord,
};

// ============================================================================
// DESCRIPTORS: Types and factories
// ============================================================================

pub use crate::descriptor::{Descriptor, DescriptorKind, Membership, Number, Predicate, Shape};

pub use crate::combinators::{
    Field, TypeArg, capability, capability_one, compl, dict_keyed, dict_of, exact_model, filter,
    filter_fn, inter, len, list_of, model, null, product, product_n, range, range_values, regex,
    set_of, tuple_of, union, uprod,
};

// ============================================================================
// CHECKING: Signatures, wrapping, null objects
// ============================================================================

pub use crate::check::{check_codomain, check_domain};
pub use crate::null::{is_null_of_type, null_of};
pub use crate::signature::{Callable, CheckMode, Function, Parameter, Signature};
pub use crate::typed::{TypedFn, nill, wrap, wrap_with};
