//! Contract errors and violation diagnostics
//!
//! Every failure the engine can report is a [`ContractError`]. Call-time
//! failures carry [`ViolationRecord`]s, one per offending parameter (or one
//! for the result), so a single error lists everything that went wrong with a
//! call.
//!
//! # Examples
//!
//! ```rust,ignore
//! match checked.call(&args) {
//!     Err(err) if err.is_domain() => {
//!         for record in err.violations() {
//!             eprintln!("{record}");
//!         }
//!     }
//!     Err(ContractError::Callee(inner)) => return Err(inner),
//!     other => { /* ... */ }
//! }
//! ```

use std::fmt;

use serde::Serialize;

use crate::foundation::options::DEFAULT_MAX_VALUE_DISPLAY;
use crate::foundation::value::Value;

/// Boxed error returned by a registered function body.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type used throughout the crate.
pub type Result<T, E = ContractError> = std::result::Result<T, E>;

// ============================================================================
// VIOLATION RECORD
// ============================================================================

/// How a value failed its descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    /// The value is not of the declared type at all.
    Mismatch,
    /// The value has the right type but a refinement rejected it.
    Refinement {
        /// Display name of the descriptor whose refinement failed.
        failed: String,
    },
}

/// One failed check: a parameter (or the result) and why it failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViolationRecord {
    /// Parameter name; `None` for the return value.
    pub parameter: Option<String>,
    /// The offending value.
    pub value: Value,
    /// Display name of the declared descriptor.
    pub expected: String,
    /// Display name of the value's runtime type.
    pub actual: String,
    /// Mismatch or failed refinement.
    #[serde(flatten)]
    pub kind: ViolationKind,
    /// Free-form detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Constituent names when the declared descriptor was a union.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expected_set: Vec<String>,
    #[serde(skip)]
    display_limit: usize,
}

impl ViolationRecord {
    /// Creates a plain mismatch record.
    pub fn mismatch(
        parameter: Option<String>,
        value: Value,
        expected: impl Into<String>,
    ) -> Self {
        let actual = value.type_name().to_owned();
        Self {
            parameter,
            value,
            expected: expected.into(),
            actual,
            kind: ViolationKind::Mismatch,
            note: None,
            expected_set: Vec::new(),
            display_limit: DEFAULT_MAX_VALUE_DISPLAY,
        }
    }

    /// Creates a failed-refinement record.
    pub fn refinement(
        parameter: Option<String>,
        value: Value,
        expected: impl Into<String>,
        failed: impl Into<String>,
    ) -> Self {
        let mut record = Self::mismatch(parameter, value, expected);
        record.kind = ViolationKind::Refinement {
            failed: failed.into(),
        };
        record
    }

    /// Attaches a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Attaches the union constituent names.
    pub fn with_expected_set(mut self, names: Vec<String>) -> Self {
        self.expected_set = names;
        self
    }

    /// Sets the max rendered width of the offending value.
    pub fn with_display_limit(mut self, limit: usize) -> Self {
        self.display_limit = limit;
        self
    }

    /// `true` when a refinement (not the type) rejected the value.
    pub const fn is_refinement(&self) -> bool {
        matches!(self.kind, ViolationKind::Refinement { .. })
    }
}

impl fmt::Display for ViolationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            ViolationKind::Mismatch => "type mismatch",
            ViolationKind::Refinement { .. } => "additional check failed",
        };
        match &self.parameter {
            Some(name) => writeln!(f, "  --> '{name}': {what}")?,
            None => writeln!(f, "  --> result: {what}")?,
        }
        writeln!(f, "        [value]: '{}'", self.value.render(self.display_limit))?;
        write!(f, "        [expected_type]: '{}'", self.expected)?;
        if !self.expected_set.is_empty() {
            write!(f, "\n        [expected_any_of]: {}", self.expected_set.join(", "))?;
        }
        write!(f, "\n        [received_type]: '{}'", self.actual)?;
        if let ViolationKind::Refinement { failed } = &self.kind {
            write!(f, "\n        [failed_type]: '{failed}'")?;
        }
        if let Some(note) = &self.note {
            write!(f, "\n        [note]: {note}")?;
        }
        Ok(())
    }
}

fn render_records(records: &[ViolationRecord]) -> String {
    records.iter().fold(String::new(), |mut out, record| {
        out.push('\n');
        out.push_str(&record.to_string());
        out
    })
}

fn render_missing(missing: &[String], missing_return: &bool) -> String {
    let mut parts: Vec<String> = missing.iter().map(|name| format!("'{name}'")).collect();
    if *missing_return {
        parts.push("return value".to_owned());
    }
    parts.join(", ")
}

// ============================================================================
// CONTRACT ERROR
// ============================================================================

/// Errors raised while building descriptors, wrapping or calling functions.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ContractError {
    /// One or more arguments failed their parameter descriptors.
    #[error("domain mismatch in func '{function}':{}", render_records(.violations))]
    DomainViolation {
        function: String,
        violations: Vec<ViolationRecord>,
    },

    /// The result failed the return descriptor. The call has already run.
    #[error("codomain mismatch in func '{function}':\n{violation}")]
    CodomainViolation {
        function: String,
        violation: Box<ViolationRecord>,
    },

    /// A descriptor required by the check mode is missing.
    #[error("func '{function}' is missing annotations for: {}", render_missing(.missing, .missing_return))]
    UnannotatedSignature {
        function: String,
        missing: Vec<String>,
        missing_return: bool,
    },

    /// A factory was given arguments that do not form a valid descriptor.
    #[error("malformed type specification: {reason}")]
    MalformedTypeSpecification { reason: String },

    /// Wrong number of arguments.
    #[error("func '{function}' takes {expected} argument(s) but {supplied} were given")]
    ArityMismatch {
        function: String,
        expected: usize,
        supplied: usize,
    },

    /// Two typed functions cannot be chained.
    #[error("cannot compose '{outer}' with '{inner}': {reason}")]
    IncompatibleComposition {
        outer: String,
        inner: String,
        reason: String,
    },

    /// Error returned by the wrapped function body, passed through untouched.
    #[error("{0}")]
    Callee(BoxError),
}

impl ContractError {
    /// Shorthand for [`ContractError::MalformedTypeSpecification`].
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedTypeSpecification {
            reason: reason.into(),
        }
    }

    /// Violation records carried by a domain or codomain error.
    pub fn violations(&self) -> &[ViolationRecord] {
        match self {
            Self::DomainViolation { violations, .. } => violations,
            Self::CodomainViolation { violation, .. } => std::slice::from_ref(&**violation),
            _ => &[],
        }
    }

    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::DomainViolation { .. })
    }

    pub const fn is_codomain(&self) -> bool {
        matches!(self, Self::CodomainViolation { .. })
    }

    /// The callee's own error, if this is one.
    pub fn callee(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Callee(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }

    /// Takes the callee's own error out, if this is one.
    pub fn into_callee(self) -> Option<BoxError> {
        match self {
            Self::Callee(inner) => Some(inner),
            _ => None,
        }
    }

    /// Stable machine-readable code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::DomainViolation { .. } => "domain_violation",
            Self::CodomainViolation { .. } => "codomain_violation",
            Self::UnannotatedSignature { .. } => "unannotated_signature",
            Self::MalformedTypeSpecification { .. } => "malformed_type_specification",
            Self::ArityMismatch { .. } => "arity_mismatch",
            Self::IncompatibleComposition { .. } => "incompatible_composition",
            Self::Callee(_) => "callee",
        }
    }

    /// Converts the error to a JSON structure.
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let violations: Vec<serde_json::Value> = self
            .violations()
            .iter()
            .map(|record| serde_json::to_value(record).unwrap_or(serde_json::Value::Null))
            .collect();

        let function = match self {
            Self::DomainViolation { function, .. }
            | Self::CodomainViolation { function, .. }
            | Self::UnannotatedSignature { function, .. }
            | Self::ArityMismatch { function, .. } => Some(function.as_str()),
            _ => None,
        };

        json!({
            "code": self.code(),
            "message": self.to_string(),
            "function": function,
            "violations": violations,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
