//! Function registration and signature extraction
//!
//! A [`Function`] is the explicit registration of a callable: its name, its
//! parameters with their descriptors, an optional return descriptor, and the
//! body. [`Signature::extract`] turns the registration into the immutable
//! [`Signature`] that every checked call is validated against.
//!
//! ```rust,ignore
//! let add = Function::new("add", |args| {
//!     Ok(Value::Int(args[0].as_int().unwrap_or(0) + args[1].as_int().unwrap_or(0)))
//! })
//! .param("a", Kind::Int)
//! .param("b", Kind::Int)
//! .returns(Kind::Int);
//!
//! let signature = Signature::extract(&add.into(), CheckMode::Full)?;
//! assert_eq!(signature.arity(), 2);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::descriptor::Descriptor;
use crate::foundation::{BoxError, ContractError, Result, Value};
use crate::typed::TypedFn;

type Body = Arc<dyn Fn(&[Value]) -> Result<Value> + Send + Sync>;

// ============================================================================
// CHECK MODE
// ============================================================================

/// Which side of a call a wrapper validates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CheckMode {
    /// Arguments and result.
    #[default]
    Full,
    /// Arguments only; the return descriptor may be absent.
    DomainOnly,
    /// Result only; parameter descriptors may be absent.
    CodomainOnly,
}

impl CheckMode {
    pub const fn checks_domain(self) -> bool {
        matches!(self, Self::Full | Self::DomainOnly)
    }

    pub const fn checks_codomain(self) -> bool {
        matches!(self, Self::Full | Self::CodomainOnly)
    }
}

// ============================================================================
// FUNCTION
// ============================================================================

/// A registered callable.
#[derive(Clone)]
pub struct Function {
    name: String,
    parameters: Vec<(String, Option<Descriptor>)>,
    returns: Option<Descriptor>,
    body: Body,
    composed: Option<Arc<Signature>>,
}

impl Function {
    /// Registers `body` under `name` with no parameters declared yet.
    ///
    /// Errors returned by the body reach callers as
    /// [`ContractError::Callee`] and can be downcast back to their own type.
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&[Value]) -> std::result::Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            returns: None,
            body: Arc::new(move |args: &[Value]| body(args).map_err(ContractError::Callee)),
            composed: None,
        }
    }

    /// Function whose signature is fixed up front instead of declared
    /// parameter by parameter.
    pub(crate) fn composed<F>(signature: Signature, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        let parameters = signature
            .parameters()
            .iter()
            .map(|p| (p.name().to_owned(), Some(p.descriptor().clone())))
            .collect();
        Self {
            name: signature.function().to_owned(),
            parameters,
            returns: signature.codomain().cloned(),
            body: Arc::new(body),
            composed: Some(Arc::new(signature)),
        }
    }

    /// Appends a parameter with a descriptor.
    pub fn param(mut self, name: impl Into<String>, descriptor: impl Into<Descriptor>) -> Self {
        self.parameters.push((name.into(), Some(descriptor.into())));
        self
    }

    /// Appends a parameter without a descriptor.
    pub fn untyped_param(mut self, name: impl Into<String>) -> Self {
        self.parameters.push((name.into(), None));
        self
    }

    /// Sets the return descriptor.
    pub fn returns(mut self, descriptor: impl Into<Descriptor>) -> Self {
        self.returns = Some(descriptor.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Declared parameters in order.
    pub fn parameters(&self) -> &[(String, Option<Descriptor>)] {
        &self.parameters
    }

    pub fn return_descriptor(&self) -> Option<&Descriptor> {
        self.returns.as_ref()
    }

    /// Runs the body without any checks.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        (self.body)(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("returns", &self.returns)
            .field("composed", &self.composed.is_some())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// CALLABLE
// ============================================================================

/// A plain registered function or an already wrapped one.
#[derive(Clone)]
pub enum Callable {
    Plain(Arc<Function>),
    Typed(Arc<TypedFn>),
}

impl Callable {
    pub fn name(&self) -> &str {
        match self {
            Self::Plain(function) => function.name(),
            Self::Typed(typed) => typed.name(),
        }
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }

    /// Address of the shared callable, used for identity hashing.
    pub fn addr(&self) -> usize {
        match self {
            Self::Plain(function) => Arc::as_ptr(function) as usize,
            Self::Typed(typed) => Arc::as_ptr(typed) as usize,
        }
    }

    /// Innermost registered function of a wrapping chain.
    pub fn original(&self) -> &Arc<Function> {
        match self {
            Self::Plain(function) => function,
            Self::Typed(typed) => typed.original(),
        }
    }

    /// Layer directly beneath a wrapped callable.
    pub fn wraps(&self) -> Option<&Callable> {
        match self {
            Self::Plain(_) => None,
            Self::Typed(typed) => Some(typed.wraps()),
        }
    }

    /// Calls through every layer of the chain.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        match self {
            Self::Plain(function) => function.call(args),
            Self::Typed(typed) => typed.call(args),
        }
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(function) => f.debug_tuple("Plain").field(&function.name()).finish(),
            Self::Typed(typed) => f.debug_tuple("Typed").field(&typed.name()).finish(),
        }
    }
}

impl From<Function> for Callable {
    fn from(function: Function) -> Self {
        Self::Plain(Arc::new(function))
    }
}

impl From<Arc<Function>> for Callable {
    fn from(function: Arc<Function>) -> Self {
        Self::Plain(function)
    }
}

impl From<TypedFn> for Callable {
    fn from(typed: TypedFn) -> Self {
        Self::Typed(Arc::new(typed))
    }
}

impl From<Arc<TypedFn>> for Callable {
    fn from(typed: Arc<TypedFn>) -> Self {
        Self::Typed(typed)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Func(function.into())
    }
}

impl From<TypedFn> for Value {
    fn from(typed: TypedFn) -> Self {
        Self::Func(typed.into())
    }
}

// ============================================================================
// SIGNATURE
// ============================================================================

/// One checked parameter.
#[derive(Debug, Clone)]
pub struct Parameter {
    name: String,
    descriptor: Descriptor,
}

impl Parameter {
    pub fn new(name: impl Into<String>, descriptor: impl Into<Descriptor>) -> Self {
        Self {
            name: name.into(),
            descriptor: descriptor.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }
}

/// The checked shape of a function: parameter descriptors in order and an
/// optional codomain. Built once per wrap and shared by every call.
#[derive(Debug, Clone)]
pub struct Signature {
    function: String,
    parameters: Vec<Parameter>,
    codomain: Option<Descriptor>,
}

impl Signature {
    pub fn new(
        function: impl Into<String>,
        parameters: Vec<Parameter>,
        codomain: Option<Descriptor>,
    ) -> Self {
        Self {
            function: function.into(),
            parameters,
            codomain,
        }
    }

    /// Extracts the signature of the innermost function of `callable`.
    ///
    /// A composed function carries its signature already. Otherwise every
    /// descriptor `mode` needs must be declared:
    ///
    /// - [`CheckMode::Full`]: every parameter and the return value
    /// - [`CheckMode::DomainOnly`]: every parameter
    /// - [`CheckMode::CodomainOnly`]: the return value; untyped parameters
    ///   accept anything
    pub fn extract(callable: &Callable, mode: CheckMode) -> Result<Arc<Signature>> {
        let function = callable.original();
        if let Some(signature) = &function.composed {
            return Ok(Arc::clone(signature));
        }

        let missing: Vec<String> = if mode.checks_domain() {
            function
                .parameters
                .iter()
                .filter(|(_, descriptor)| descriptor.is_none())
                .map(|(name, _)| name.clone())
                .collect()
        } else {
            Vec::new()
        };
        let missing_return = mode.checks_codomain() && function.returns.is_none();
        if !missing.is_empty() || missing_return {
            return Err(ContractError::UnannotatedSignature {
                function: function.name.clone(),
                missing,
                missing_return,
            });
        }

        let parameters = function
            .parameters
            .iter()
            .map(|(name, descriptor)| {
                Parameter::new(name.clone(), descriptor.clone().unwrap_or_else(Descriptor::any))
            })
            .collect();
        let signature = Self::new(function.name.clone(), parameters, function.returns.clone());

        tracing::debug!(
            function = %signature.function,
            arity = signature.arity(),
            mode = ?mode,
            codomain = %signature.codomain_name(),
            "signature extracted"
        );
        Ok(Arc::new(signature))
    }

    /// Name of the function the signature belongs to.
    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn codomain(&self) -> Option<&Descriptor> {
        self.codomain.as_ref()
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    fn codomain_name(&self) -> String {
        self.codomain
            .as_ref()
            .map_or_else(|| "-".to_owned(), Descriptor::display_name)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", parameter.name, parameter.descriptor)?;
        }
        write!(f, ") -> {}", self.codomain_name())
    }
}
