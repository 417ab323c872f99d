//! Membership tests
//!
//! [`Descriptor::classify`] is the single membership entry point. It tells a
//! plain type mismatch apart from a refinement that rejected a value of the
//! right type, and names the descriptor whose refinement failed. Every rule is
//! total: a failed test is an answer, never a panic.

use crate::foundation::{CheckOptions, Value};

use super::{Descriptor, DescriptorKind, Number, Shape};

/// Outcome of a membership test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Membership {
    /// The value belongs to the descriptor.
    Member,
    /// The value has the wrong type or shape.
    Mismatch,
    /// The value has the right type but a refinement rejected it.
    Refused {
        /// Display name of the descriptor whose refinement failed.
        failed: String,
    },
}

impl Membership {
    pub const fn is_member(&self) -> bool {
        matches!(self, Self::Member)
    }

    /// Name of the refusing descriptor, for refusals.
    pub fn failed(&self) -> Option<&str> {
        match self {
            Self::Refused { failed } => Some(failed),
            _ => None,
        }
    }
}

impl Descriptor {
    /// Classifies `value` against this descriptor.
    pub fn classify(&self, value: &Value, options: &CheckOptions) -> Membership {
        match self.kind() {
            DescriptorKind::Any => Membership::Member,
            DescriptorKind::Nominal(kind) => {
                if kind.admits(value, options.allow_subclass) {
                    Membership::Member
                } else {
                    Membership::Mismatch
                }
            }
            DescriptorKind::Union(constituents) => any_of(constituents, value, options),
            DescriptorKind::Product(positions) => match value {
                Value::Tuple(items) if items.len() == positions.len() => {
                    for (descriptor, item) in positions.iter().zip(items) {
                        if let Some(failed) = element_failure(descriptor, item, options) {
                            return Membership::Refused { failed };
                        }
                    }
                    Membership::Member
                }
                _ => Membership::Mismatch,
            },
            DescriptorKind::UProd(constituents) => match value {
                Value::Tuple(items) if items.len() == constituents.len() => {
                    if fills_every_slot(constituents, items, options) {
                        Membership::Member
                    } else {
                        self.refused()
                    }
                }
                _ => Membership::Mismatch,
            },
            DescriptorKind::Filter { base, predicate } => {
                self.apply_refinement(base.classify(value, options), || predicate(value))
            }
            DescriptorKind::Regex { compiled, .. } => match value {
                Value::Str(text) => {
                    self.apply_refinement(Membership::Member, || compiled.is_match(text))
                }
                _ => Membership::Mismatch,
            },
            DescriptorKind::Range { low, high } => match Number::from_value(value) {
                Some(number) => {
                    self.apply_refinement(Membership::Member, || within(number, *low, *high))
                }
                None => Membership::Mismatch,
            },
            DescriptorKind::Len { base, len } => {
                self.apply_refinement(base.classify(value, options), || {
                    value.length() == Some(*len)
                })
            }
            DescriptorKind::Capability(names) => {
                if names.iter().all(|name| value.has_capability(name)) {
                    Membership::Member
                } else {
                    Membership::Mismatch
                }
            }
            DescriptorKind::Container {
                shape,
                elements,
                key,
            } => self.classify_container(*shape, elements, key.as_ref(), value, options),
            DescriptorKind::Inter(constituents) => {
                for constituent in constituents {
                    let outcome = constituent.classify(value, options);
                    if !outcome.is_member() {
                        return outcome;
                    }
                }
                Membership::Member
            }
            DescriptorKind::Compl { base, excluded } => {
                self.apply_refinement(base.classify(value, options), || {
                    !excluded.iter().any(|d| d.is_member_with(value, options))
                })
            }
            DescriptorKind::Model { fields, exact } => {
                let Value::Dict(entries) = value else {
                    return Membership::Mismatch;
                };
                for field in fields {
                    match entries.get(&Value::str(field.name())) {
                        Some(item) => {
                            if let Some(failed) = element_failure(field.descriptor(), item, options)
                            {
                                return Membership::Refused { failed };
                            }
                        }
                        None if field.is_required() => return self.refused(),
                        None => {}
                    }
                }
                let unknown_key = || {
                    entries.keys().any(|key| {
                        !fields
                            .iter()
                            .any(|field| key.as_str() == Some(field.name()))
                    })
                };
                if *exact && unknown_key() {
                    return self.refused();
                }
                Membership::Member
            }
        }
    }

    fn refused(&self) -> Membership {
        Membership::Refused {
            failed: self.display_name(),
        }
    }

    /// Applies this node's own refinement once the base admitted the value.
    fn apply_refinement(&self, base: Membership, check: impl FnOnce() -> bool) -> Membership {
        match base {
            Membership::Member if check() => Membership::Member,
            Membership::Member => self.refused(),
            other => other,
        }
    }

    fn classify_container(
        &self,
        shape: Shape,
        elements: &[Descriptor],
        key: Option<&Descriptor>,
        value: &Value,
        options: &CheckOptions,
    ) -> Membership {
        if value.shape() != shape {
            return Membership::Mismatch;
        }
        let failure = match value {
            Value::List(items) | Value::Tuple(items) => {
                self.first_failure(items.iter(), elements, options)
            }
            Value::Set(items) => self.first_failure(items.iter(), elements, options),
            Value::Dict(entries) => {
                let keys = key.map(std::slice::from_ref).unwrap_or_default();
                self.first_failure(entries.keys(), keys, options)
                    .or_else(|| self.first_failure(entries.values(), elements, options))
            }
            _ => None,
        };
        match failure {
            Some(failed) => Membership::Refused { failed },
            None => Membership::Member,
        }
    }

    /// First element not admitted by any of `accepted`; empty `accepted`
    /// admits everything.
    fn first_failure<'a>(
        &self,
        mut items: impl Iterator<Item = &'a Value>,
        accepted: &[Descriptor],
        options: &CheckOptions,
    ) -> Option<String> {
        if accepted.is_empty() {
            return None;
        }
        items.find_map(|item| match any_of(accepted, item, options) {
            Membership::Member => None,
            Membership::Refused { failed } => Some(failed),
            Membership::Mismatch => Some(self.display_name()),
        })
    }
}

/// Union rule: the first accepting constituent wins; otherwise the first
/// constituent that matched nominally but refused is reported.
fn any_of(constituents: &[Descriptor], value: &Value, options: &CheckOptions) -> Membership {
    let mut refused = None;
    for constituent in constituents {
        match constituent.classify(value, options) {
            Membership::Member => return Membership::Member,
            Membership::Refused { failed } => {
                refused.get_or_insert(failed);
            }
            Membership::Mismatch => {}
        }
    }
    match refused {
        Some(failed) => Membership::Refused { failed },
        None => Membership::Mismatch,
    }
}

/// Name of the failing descriptor for one element of a composite, if any.
fn element_failure(descriptor: &Descriptor, item: &Value, options: &CheckOptions) -> Option<String> {
    match descriptor.classify(item, options) {
        Membership::Member => None,
        Membership::Refused { failed } => Some(failed),
        Membership::Mismatch => Some(descriptor.display_name()),
    }
}

/// `true` when every item can be assigned its own constituent that admits
/// it. Solved as a bipartite matching so an early greedy choice never blocks
/// a later item.
fn fills_every_slot(constituents: &[Descriptor], items: &[Value], options: &CheckOptions) -> bool {
    let admits: Vec<Vec<bool>> = items
        .iter()
        .map(|item| {
            constituents
                .iter()
                .map(|constituent| constituent.is_member_with(item, options))
                .collect()
        })
        .collect();
    let mut owner: Vec<Option<usize>> = vec![None; constituents.len()];
    (0..items.len()).all(|item| {
        let mut visited = vec![false; constituents.len()];
        assign(item, &admits, &mut owner, &mut visited)
    })
}

/// Augmenting-path step: gives `item` a slot, moving earlier owners along.
fn assign(
    item: usize,
    admits: &[Vec<bool>],
    owner: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    for slot in 0..owner.len() {
        if !admits[item][slot] || visited[slot] {
            continue;
        }
        visited[slot] = true;
        let free = match owner[slot] {
            None => true,
            Some(previous) => assign(previous, admits, owner, visited),
        };
        if free {
            owner[slot] = Some(item);
            return true;
        }
    }
    false
}

fn within(value: Number, low: Number, high: Number) -> bool {
    match (value, low, high) {
        (Number::Int(v), Number::Int(lo), Number::Int(hi)) => lo <= v && v <= hi,
        _ => {
            let v = value.as_f64();
            low.as_f64() <= v && v <= high.as_f64()
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
