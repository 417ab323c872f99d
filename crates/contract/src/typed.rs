//! Contract-checked functions
//!
//! [`wrap`] turns a registered [`Function`] into a [`TypedFn`]: a callable
//! that validates its arguments before running the body and its result
//! afterwards. The signature is extracted once at wrap time and shared by
//! every call, and by every further wrapping layer with the same mode.
//!
//! # Call order
//!
//! 1. Domain check; on failure the body never runs.
//! 2. The innermost body; its own errors pass through as
//!    [`ContractError::Callee`].
//! 3. Codomain check. The body has already run, so any side effects it had
//!    stay in place when this fails.
//!
//! ```rust,ignore
//! let halve = wrap(function!(halve(n: Kind::Int) -> Kind::Int; |args| {
//!     Ok(Value::Int(args[0].as_int().unwrap_or(0) / 2))
//! }))?;
//! assert_eq!(halve.call(&[Value::from(8)])?, Value::from(4));
//! assert!(halve.call(&[Value::from("8")]).unwrap_err().is_domain());
//! ```

use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::check::{check_codomain, check_domain};
use crate::foundation::{CheckOptions, ContractError, Kind, Result, Value};
use crate::signature::{Callable, CheckMode, Function, Signature};

// ============================================================================
// TYPED FUNCTION
// ============================================================================

/// A function wrapped with call-time contract checks.
#[derive(Clone)]
pub struct TypedFn {
    signature: Arc<Signature>,
    mode: CheckMode,
    options: CheckOptions,
    wraps: Callable,
    original: Arc<Function>,
}

/// Wraps `callable` with full checks and default options.
pub fn wrap(callable: impl Into<Callable>) -> Result<TypedFn> {
    wrap_with(callable, CheckMode::Full, CheckOptions::default())
}

/// Wraps `callable` checking the sides `mode` selects, with per-site options.
///
/// Wrapping an already wrapped function with the same mode reuses its
/// signature instead of extracting it again.
pub fn wrap_with(
    callable: impl Into<Callable>,
    mode: CheckMode,
    options: CheckOptions,
) -> Result<TypedFn> {
    let callable = callable.into();
    let signature = match &callable {
        Callable::Typed(inner) if inner.mode == mode => Arc::clone(&inner.signature),
        _ => Signature::extract(&callable, mode)?,
    };
    let original = Arc::clone(callable.original());

    tracing::debug!(
        function = %signature.function(),
        mode = ?mode,
        rewrap = matches!(callable, Callable::Typed(_)),
        "function wrapped"
    );
    Ok(TypedFn {
        signature,
        mode,
        options,
        wraps: callable,
        original,
    })
}

impl TypedFn {
    /// Calls the function with checks.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        tracing::trace!(function = %self.name(), args = args.len(), "checked call");

        if self.mode.checks_domain() {
            check_domain(&self.signature, args, &self.options)?;
        } else if args.len() != self.signature.arity() {
            return Err(ContractError::ArityMismatch {
                function: self.name().to_owned(),
                expected: self.signature.arity(),
                supplied: args.len(),
            });
        }

        let result = self.original.call(args)?;

        if self.mode.checks_codomain() {
            if let Err(err) = check_codomain(&self.signature, &result, &self.options) {
                tracing::warn!(
                    function = %self.name(),
                    result = %result.render(self.options.max_value_display),
                    "codomain violation raised after the call completed"
                );
                return Err(err);
            }
        }
        Ok(result)
    }

    /// Chains `inner` into `self`: the result calls `inner`, then `self` on
    /// its result.
    ///
    /// `self` must take exactly one parameter. When `inner` returns a nominal
    /// type and `self` accepts a nominal type, the first must be a sub-kind of
    /// the second. The composition keeps `inner`'s parameters and `self`'s
    /// codomain, and both layers still check their own contracts.
    ///
    /// ```rust,ignore
    /// let len_then_double = double.compose(&length)?;
    /// assert_eq!(len_then_double.call(&[Value::from("abc")])?, Value::from(6));
    /// ```
    pub fn compose(&self, inner: &TypedFn) -> Result<TypedFn> {
        let incompatible = |reason: String| ContractError::IncompatibleComposition {
            outer: self.name().to_owned(),
            inner: inner.name().to_owned(),
            reason,
        };

        let [parameter] = self.signature.parameters() else {
            return Err(incompatible(format!(
                "outer function must take exactly one parameter, takes {}",
                self.signature.arity()
            )));
        };
        let produced = inner.signature.codomain().and_then(|d| d.as_nominal());
        if let (Some(produced), Some(accepted)) = (produced, parameter.descriptor().as_nominal()) {
            if !produced.is_sub_kind_of(accepted) {
                return Err(incompatible(format!(
                    "{} result is not accepted as {}",
                    produced.name(),
                    accepted.name()
                )));
            }
        }

        let signature = Signature::new(
            format!("({} * {})", self.name(), inner.name()),
            inner.signature.parameters().to_vec(),
            self.signature.codomain().cloned(),
        );
        let (outer, first) = (self.clone(), inner.clone());
        let function = Function::composed(signature, move |args: &[Value]| {
            let mid = first.call(args)?;
            outer.call(std::slice::from_ref(&mid))
        });
        wrap_with(function, CheckMode::Full, self.options.clone())
    }

    pub fn name(&self) -> &str {
        self.signature.function()
    }

    /// Signature shared by every call.
    pub fn signature(&self) -> &Arc<Signature> {
        &self.signature
    }

    pub const fn mode(&self) -> CheckMode {
        self.mode
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// Layer directly beneath this one.
    pub fn wraps(&self) -> &Callable {
        &self.wraps
    }

    /// Innermost registered function, whatever the number of layers.
    pub fn original(&self) -> &Arc<Function> {
        &self.original
    }
}

impl fmt::Debug for TypedFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedFn")
            .field("signature", &self.signature.to_string())
            .field("mode", &self.mode)
            .field("wraps", &self.wraps)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// NILL
// ============================================================================

static NILL: LazyLock<Arc<TypedFn>> = LazyLock::new(|| {
    let function = Arc::new(Function::new("nill", |_| Ok(Value::Nil)).returns(Kind::Nil));
    let signature = Arc::new(Signature::new("nill", Vec::new(), Some(Kind::Nil.into())));
    Arc::new(TypedFn {
        signature,
        mode: CheckMode::Full,
        options: CheckOptions::default(),
        wraps: Callable::Plain(Arc::clone(&function)),
        original: function,
    })
});

/// The typed function that takes nothing and returns nil. It is the null
/// object of `Func`, and always the same instance.
pub fn nill() -> Arc<TypedFn> {
    Arc::clone(&NILL)
}

// ============================================================================
// TESTS
// ============================================================================
