//! Element id generation

use std::collections::HashSet;

use uuid::Uuid;

use super::kind::ElementKind;
use super::ElementId;

/// Source of fresh element ids
pub trait IdGenerator {
    /// Produce a new id for an element of `kind`
    fn next_id(&mut self, kind: ElementKind) -> ElementId;
}

/// Random ids of the form `title-8f0c...`
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self, kind: ElementKind) -> ElementId {
        ElementId::new(format!("{}-{}", kind, Uuid::new_v4().simple()))
    }
}

/// Deterministic ids of the form `title-1`, `text-2`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    counter: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue counting after `start`
    pub fn starting_after(start: u64) -> Self {
        Self { counter: start }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, kind: ElementKind) -> ElementId {
        self.counter += 1;
        ElementId::new(format!("{}-{}", kind, self.counter))
    }
}

/// Draw an id from `ids` that is not in `taken`, and reserve it
///
/// A generated id that is already taken gets a numeric suffix until it is
/// unique, so a misbehaving generator still cannot produce a clash.
pub fn fresh_id(
    ids: &mut dyn IdGenerator,
    kind: ElementKind,
    taken: &mut HashSet<String>,
) -> ElementId {
    let base = ids.next_id(kind);
    let mut candidate = base.0.clone();
    let mut suffix = 2u64;
    while taken.contains(&candidate) {
        candidate = format!("{}-{}", base.0, suffix);
        suffix += 1;
    }
    taken.insert(candidate.clone());
    ElementId::new(candidate)
}
