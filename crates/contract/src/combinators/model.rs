//! Mapping schemas
//!
//! A model admits a `Dict` whose text keys name fields: required fields must
//! be present, optional ones may be absent (their default stands in for them
//! in the null object), and every present field must satisfy its descriptor.
//! Exact models additionally reject keys that name no field.

use std::fmt;

use crate::descriptor::{Descriptor, DescriptorKind};
use crate::foundation::{ContractError, Result, Value};

// ============================================================================
// FIELD
// ============================================================================

/// One named entry of a model.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    descriptor: Descriptor,
    default: Option<Value>,
}

impl Field {
    /// A field that must be present.
    pub fn required(name: impl Into<String>, descriptor: impl Into<Descriptor>) -> Self {
        Self {
            name: name.into(),
            descriptor: descriptor.into(),
            default: None,
        }
    }

    /// A field that may be absent. The default must be a member of the
    /// descriptor.
    pub fn optional(
        name: impl Into<String>,
        descriptor: impl Into<Descriptor>,
        default: impl Into<Value>,
    ) -> Result<Self> {
        let (name, descriptor, default) = (name.into(), descriptor.into(), default.into());
        if !descriptor.is_member(&default) {
            return Err(ContractError::malformed(format!(
                "default {} of field '{name}' is not a member of {}",
                default.repr(),
                descriptor.display_name()
            )));
        }
        Ok(Self {
            name,
            descriptor,
            default: Some(default),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Default of an optional field.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub const fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.descriptor)?;
        if let Some(default) = &self.default {
            write!(f, " = {}", default.repr())?;
        }
        Ok(())
    }
}

// ============================================================================
// FACTORIES
// ============================================================================

fn build(fields: impl IntoIterator<Item = Field>, exact: bool) -> Result<Descriptor> {
    let fields: Vec<Field> = fields.into_iter().collect();
    for (i, field) in fields.iter().enumerate() {
        if field.name.is_empty() {
            return Err(ContractError::malformed("field name must not be empty"));
        }
        if fields[..i].iter().any(|other| other.name == field.name) {
            return Err(ContractError::malformed(format!(
                "duplicate field '{}'",
                field.name
            )));
        }
    }
    Ok(Descriptor::new(DescriptorKind::Model { fields, exact }))
}

/// Mappings carrying the given fields; extra keys are allowed.
///
/// ```rust,ignore
/// let user = model([
///     Field::required("name", Kind::Str),
///     Field::optional("age", Kind::Int, 0)?,
/// ])?;
/// assert!(user.is_member(&Value::dict([("name", "ann")])));
/// ```
pub fn model(fields: impl IntoIterator<Item = Field>) -> Result<Descriptor> {
    build(fields, false)
}

/// Mappings carrying the given fields and nothing else.
pub fn exact_model(fields: impl IntoIterator<Item = Field>) -> Result<Descriptor> {
    build(fields, true)
}
