//! Per-site check configuration

use serde::Deserialize;

/// Default width at which rendered values are cut in diagnostics.
pub const DEFAULT_MAX_VALUE_DISPLAY: usize = 80;

/// Options applied to membership tests at one wrap site.
///
/// Missing keys fall back to their defaults when loaded from JSON:
///
/// ```rust,ignore
/// let opts = CheckOptions::from_json(r#"{ "allow_subclass": false }"#)?;
/// assert_eq!(opts.max_value_display, 80);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CheckOptions {
    /// Whether instances of subclasses satisfy a class descriptor.
    pub allow_subclass: bool,
    /// Max chars of a value rendered into a violation record.
    pub max_value_display: usize,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            allow_subclass: true,
            max_value_display: DEFAULT_MAX_VALUE_DISPLAY,
        }
    }
}

impl CheckOptions {
    /// Exact class matching.
    pub fn strict() -> Self {
        Self {
            allow_subclass: false,
            ..Self::default()
        }
    }

    /// Parses options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_max_value_display(mut self, width: usize) -> Self {
        self.max_value_display = width;
        self
    }
}
