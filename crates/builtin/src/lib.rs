//! # typeward-builtin
//!
//! Ready-made descriptors for common domains, built only from the
//! `typeward-contract` factories. Each preset is a constructor function
//! returning a labelled [`Descriptor`](typeward_contract::Descriptor) that is
//! built once and shared.
//!
//! # Categories
//!
//! - **Numeric**: `Num`, `Nat`, `Odd`, `Even`, `Pos`, `Neg`, `PosNum`, `NegNum`
//! - **Text**: `Char`, `Email`, `Env`, `UUID`
//! - **Color**: `RGB`, `HSL`, `HEX`
//! - **Network**: `Hostname`, `IPv4`
//! - **JSON**: `Json`, `Table`, `Entry`, `Flat`
//! - **Filesystem**: `Path`, `Exists`, `File`, `Dir`, `Symlink`
//! - **Protocols**: `Callable`, `Iterable`, `Sized`, `ContextManager`, ...
//!
//! # Examples
//!
//! ```rust,ignore
//! use typeward_builtin::{color, numeric};
//! use typeward_contract::prelude::*;
//!
//! let paint = Function::new("paint", |_| Ok(Value::Nil))
//!     .param("color", color::rgb())
//!     .param("layer", numeric::nat())
//!     .returns(Kind::Nil);
//! let checked = wrap(paint)?;
//! assert!(checked.call(&[Value::tuple([255, 0, 0]), Value::from(2)]).is_ok());
//! ```

#[macro_use]
mod macros;

pub mod color;
pub mod json;
pub mod network;
pub mod numeric;
pub mod path;
pub mod protocol;
pub mod text;
