//! Edit commands over a slide's element list
//!
//! Each command is a pure transformation: it borrows the current elements
//! and returns a new list plus the placement decision that was taken. The
//! caller persists the result.

use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::element::{
    fresh_id, ElementError, ElementId, ElementKind, ElementProps, GridElement, IdGenerator,
};
use crate::grid::{
    check_collision, colliding_ids, find_free_position, slot_rect, GridPosition, GridRect,
    GridSize, GridSpec, Slot, SlotConvention,
};

/// What to do when a proposed rectangle overlaps another element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Refuse the edit
    Reject,
    /// Move the element to the first free position
    #[default]
    Relocate,
    /// Keep the overlap
    Allow,
}

/// Errors that can occur while applying an edit
#[derive(Debug, Error)]
pub enum EditError {
    /// No element with this id
    #[error("element not found: {id}")]
    NotFound { id: ElementId },

    /// An element with this id already exists
    #[error("duplicate element id: {id}")]
    DuplicateId { id: ElementId },

    /// Rectangle empty or off the grid
    #[error("element {id} does not fit the grid at {rect}")]
    OutOfBounds { id: ElementId, rect: GridRect },

    /// Overlap refused by the collision policy
    #[error("element {id} at {rect} collides with {}", with.join(", "))]
    Collision {
        id: ElementId,
        rect: GridRect,
        with: Vec<String>,
        suggestion: Option<GridPosition>,
    },

    /// No free position for the element
    #[error("no free position for a {size} element")]
    NoSpace { size: GridSize },

    /// Properties that do not decode for their element type
    #[error(transparent)]
    Props(#[from] ElementError),
}

/// A single edit, as sent by an editor or a content generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditCommand {
    /// Insert a fully specified element; an empty id gets a fresh one
    Add { element: GridElement },
    /// Insert new content without coordinates, in a slot or the first free spot
    Place {
        #[serde(rename = "type")]
        kind: ElementKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        slot: Option<Slot>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        w: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        h: Option<u32>,
        #[serde(default, skip_serializing_if = "Map::is_empty")]
        props: Map<String, Value>,
    },
    Move { id: ElementId, x: u32, y: u32 },
    Resize { id: ElementId, w: u32, h: u32 },
    /// Copy an element into the first free spot
    Duplicate { id: ElementId },
    Delete { id: ElementId },
}

/// The placement decision taken for an edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Placement {
    /// The proposed rectangle was used as-is
    Accepted { id: ElementId, rect: GridRect },
    /// The proposed rectangle collided and the element was moved
    Relocated {
        id: ElementId,
        from: GridRect,
        to: GridRect,
    },
    /// The proposed rectangle collided and the overlap was kept
    Overlapping {
        id: ElementId,
        rect: GridRect,
        with: Vec<String>,
    },
    Removed { id: ElementId },
}

/// Result of a successful edit
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutcome {
    /// The complete new element list
    pub elements: Vec<GridElement>,
    pub placement: Placement,
}

/// Applies edit commands against a grid under a collision policy
#[derive(Debug, Clone, Default)]
pub struct Editor {
    grid: GridSpec,
    slots: SlotConvention,
    policy: CollisionPolicy,
}

impl Editor {
    /// Create an editor for a grid with the default slot convention and policy
    pub fn new(grid: GridSpec) -> Self {
        Self {
            grid,
            ..Self::default()
        }
    }

    /// Set the slot convention used by `place`
    pub fn with_slots(mut self, slots: SlotConvention) -> Self {
        self.slots = slots;
        self
    }

    /// Set the collision policy
    pub fn with_policy(mut self, policy: CollisionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    /// Apply one command to an element list
    pub fn apply(
        &self,
        elements: &[GridElement],
        command: &EditCommand,
        ids: &mut dyn IdGenerator,
    ) -> Result<CommandOutcome, EditError> {
        let outcome = match command {
            EditCommand::Add { element } => self.add(elements, element, ids)?,
            EditCommand::Place {
                kind,
                slot,
                w,
                h,
                props,
            } => {
                let default = kind.default_size();
                let size = GridSize::new(w.unwrap_or(default.w), h.unwrap_or(default.h));
                let props = ElementProps::default_for(*kind).overlay(props)?;
                self.place(elements, props, *slot, size, ids)?
            }
            EditCommand::Move { id, x, y } => {
                self.reposition(elements, id, |rect| rect.at(GridPosition::new(*x, *y)))?
            }
            EditCommand::Resize { id, w, h } => {
                self.reposition(elements, id, |rect| rect.resized(GridSize::new(*w, *h)))?
            }
            EditCommand::Duplicate { id } => self.duplicate(elements, id, ids)?,
            EditCommand::Delete { id } => {
                let index = find(elements, id)?;
                let mut next = elements.to_vec();
                next.remove(index);
                CommandOutcome {
                    elements: next,
                    placement: Placement::Removed { id: id.clone() },
                }
            }
        };
        debug!(placement:? = outcome.placement; "Applied edit");
        Ok(outcome)
    }

    fn add(
        &self,
        elements: &[GridElement],
        element: &GridElement,
        ids: &mut dyn IdGenerator,
    ) -> Result<CommandOutcome, EditError> {
        let mut element = element.clone();
        if element.id.as_str().is_empty() {
            let mut taken = taken_ids(elements);
            element.id = fresh_id(ids, element.kind(), &mut taken);
        } else if elements.iter().any(|e| e.id == element.id) {
            return Err(EditError::DuplicateId { id: element.id });
        }

        let (rect, placement) = self.settle(elements, &element.id, element.rect)?;
        let mut next = elements.to_vec();
        next.push(element.with_rect(rect));
        Ok(CommandOutcome {
            elements: next,
            placement,
        })
    }

    fn place(
        &self,
        elements: &[GridElement],
        props: ElementProps,
        slot: Option<Slot>,
        size: GridSize,
        ids: &mut dyn IdGenerator,
    ) -> Result<CommandOutcome, EditError> {
        let mut taken = taken_ids(elements);
        let id = fresh_id(ids, props.kind(), &mut taken);

        let (rect, placement) = match slot {
            Some(slot) => {
                let candidate = slot_rect(&self.grid, &self.slots, slot);
                self.settle(elements, &id, candidate)?
            }
            None => {
                if !self.grid.fits(size) {
                    return Err(EditError::OutOfBounds {
                        id,
                        rect: GridRect::from_parts(GridPosition::default(), size),
                    });
                }
                let position = find_free_position(&self.grid, size, elements, None)
                    .ok_or(EditError::NoSpace { size })?;
                let rect = GridRect::from_parts(position, size);
                (rect, Placement::Accepted { id: id.clone(), rect })
            }
        };

        let mut next = elements.to_vec();
        next.push(GridElement::new(id, rect, props));
        Ok(CommandOutcome {
            elements: next,
            placement,
        })
    }

    fn reposition(
        &self,
        elements: &[GridElement],
        id: &ElementId,
        change: impl Fn(&GridRect) -> GridRect,
    ) -> Result<CommandOutcome, EditError> {
        let index = find(elements, id)?;
        let candidate = change(&elements[index].rect);
        let (rect, placement) = self.settle(elements, id, candidate)?;

        let mut next = elements.to_vec();
        next[index] = elements[index].with_rect(rect);
        Ok(CommandOutcome {
            elements: next,
            placement,
        })
    }

    fn duplicate(
        &self,
        elements: &[GridElement],
        id: &ElementId,
        ids: &mut dyn IdGenerator,
    ) -> Result<CommandOutcome, EditError> {
        let source = &elements[find(elements, id)?];
        let mut taken = taken_ids(elements);
        let copy_id = fresh_id(ids, source.kind(), &mut taken);
        let size = source.rect.size();

        let placement = match find_free_position(&self.grid, size, elements, None) {
            Some(position) => Placement::Relocated {
                id: copy_id.clone(),
                from: source.rect,
                to: GridRect::from_parts(position, size),
            },
            None if self.policy == CollisionPolicy::Allow => Placement::Overlapping {
                id: copy_id.clone(),
                rect: source.rect,
                with: colliding_ids(&source.rect, elements, None)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            },
            None => return Err(EditError::NoSpace { size }),
        };

        let rect = match &placement {
            Placement::Relocated { to, .. } => *to,
            _ => source.rect,
        };
        let mut next = elements.to_vec();
        next.push(GridElement::new(copy_id, rect, source.props.clone()));
        Ok(CommandOutcome {
            elements: next,
            placement,
        })
    }

    /// Validate a proposed rectangle for `id` and apply the collision policy
    fn settle(
        &self,
        elements: &[GridElement],
        id: &ElementId,
        candidate: GridRect,
    ) -> Result<(GridRect, Placement), EditError> {
        if !self.grid.in_bounds(&candidate) {
            return Err(EditError::OutOfBounds {
                id: id.clone(),
                rect: candidate,
            });
        }

        let result = check_collision(&self.grid, &candidate, elements, Some(id.as_str()));
        if !result.has_collision {
            return Ok((
                candidate,
                Placement::Accepted {
                    id: id.clone(),
                    rect: candidate,
                },
            ));
        }

        let with: Vec<String> = colliding_ids(&candidate, elements, Some(id.as_str()))
            .into_iter()
            .map(str::to_string)
            .collect();

        match self.policy {
            CollisionPolicy::Reject => Err(EditError::Collision {
                id: id.clone(),
                rect: candidate,
                with,
                suggestion: result.suggested_position,
            }),
            CollisionPolicy::Relocate => {
                let position = result.suggested_position.ok_or(EditError::NoSpace {
                    size: candidate.size(),
                })?;
                let to = candidate.at(position);
                Ok((
                    to,
                    Placement::Relocated {
                        id: id.clone(),
                        from: candidate,
                        to,
                    },
                ))
            }
            CollisionPolicy::Allow => Ok((
                candidate,
                Placement::Overlapping {
                    id: id.clone(),
                    rect: candidate,
                    with,
                },
            )),
        }
    }
}

fn find(elements: &[GridElement], id: &ElementId) -> Result<usize, EditError> {
    elements
        .iter()
        .position(|e| &e.id == id)
        .ok_or_else(|| EditError::NotFound { id: id.clone() })
}

fn taken_ids(elements: &[GridElement]) -> HashSet<String> {
    elements.iter().map(|e| e.id.0.clone()).collect()
}
