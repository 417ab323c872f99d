//! Canonical descriptor names

use super::{Descriptor, DescriptorKind};

fn join(items: &[Descriptor]) -> String {
    items
        .iter()
        .map(Descriptor::display_name)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Descriptor {
    /// Name used in diagnostics: the explicit label, or the canonical rendering.
    pub fn display_name(&self) -> String {
        match self.label() {
            Some(label) => label.to_owned(),
            None => self.canonical_name(),
        }
    }

    /// Structural rendering that ignores any label on this node.
    pub fn canonical_name(&self) -> String {
        match self.kind() {
            DescriptorKind::Any => "Any".to_owned(),
            DescriptorKind::Nominal(kind) => kind.name().to_owned(),
            DescriptorKind::Union(items) => format!("Union({})", join(items)),
            DescriptorKind::Product(items) => format!("Prod({})", join(items)),
            DescriptorKind::UProd(items) => format!("UProd({})", join(items)),
            DescriptorKind::Filter { base, .. } => format!("Filter({})", base.display_name()),
            DescriptorKind::Regex { source, .. } => format!("Regex(r'{source}')"),
            DescriptorKind::Range { low, high } => format!("Range({low}, {high})"),
            DescriptorKind::Len { base, len } => format!("Len({}, {len})", base.display_name()),
            DescriptorKind::Capability(names) => format!("Attr({})", names.join(", ")),
            DescriptorKind::Container {
                shape,
                elements,
                key,
            } => {
                let head = shape.name();
                match (key, elements.is_empty()) {
                    (None, true) => head.to_owned(),
                    (None, false) => format!("{head}({})", join(elements)),
                    (Some(key), true) => format!("{head}({}, Any)", key.display_name()),
                    (Some(key), false) => {
                        format!("{head}({}, {})", key.display_name(), join(elements))
                    }
                }
            }
            DescriptorKind::Inter(items) => format!("Inter({})", join(items)),
            DescriptorKind::Compl { base, excluded } => {
                format!("Compl({} excluding {})", base.display_name(), join(excluded))
            }
            DescriptorKind::Model { fields, exact } => {
                let head = if *exact { "ExactModel" } else { "Model" };
                let body = fields
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{head}({body})")
            }
        }
    }
}
