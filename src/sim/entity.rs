//! Entity capability, per-tick context and the entity registry

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use super::input::InputState;
use crate::renderer::Surface;

/// Pixel dimensions of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub width: f32,
    pub height: f32,
}

impl Geometry {
    pub fn of(surface: &dyn Surface) -> Self {
        Self {
            width: surface.width() as f32,
            height: surface.height() as f32,
        }
    }
}

/// Anything the scheduler updates and draws once per tick
pub trait Entity {
    fn update(&mut self, ctx: &TickContext<'_>);
    fn draw(&self, surface: &mut dyn Surface);
}

/// Stable handle to a registered entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Read-only snapshot handed to every entity during one update phase
///
/// Built once per tick by the scheduler. The only write an entity can make
/// through it is queueing a registration, which is applied after every
/// entity has been updated.
pub struct TickContext<'a> {
    pub geometry: Geometry,
    /// Milliseconds since the previous tick. On the first tick of a run this
    /// is the raw timestamp.
    pub delta_time: f64,
    pub input: &'a InputState,
    /// Number of registered entities when the tick began
    pub entity_count: usize,
    pending: &'a RefCell<Vec<Box<dyn Entity>>>,
}

impl<'a> TickContext<'a> {
    pub fn new(
        geometry: Geometry,
        delta_time: f64,
        input: &'a InputState,
        entity_count: usize,
        pending: &'a RefCell<Vec<Box<dyn Entity>>>,
    ) -> Self {
        Self {
            geometry,
            delta_time,
            input,
            entity_count,
            pending,
        }
    }

    /// Queue an entity for registration at the end of the update phase
    pub fn register(&self, entity: Box<dyn Entity>) {
        self.pending.borrow_mut().push(entity);
    }
}

/// Ordered collection of owned entities
///
/// Iteration order is registration order. Removal keeps the order of the
/// remaining entries.
#[derive(Default)]
pub struct Registry {
    entries: Vec<(EntityId, Box<dyn Entity>)>,
    next_id: u32,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entity: Box<dyn Entity>) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, entity));
        log::debug!("Registered entity {:?}", id);
        id
    }

    /// Drop an entity; returns false if the id is unknown
    pub fn remove(&mut self, id: EntityId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(eid, _)| *eid != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entries.iter().any(|(eid, _)| *eid == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &dyn Entity> {
        self.entries.iter().map(|(_, e)| e.as_ref())
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Entity>> {
        self.entries.iter_mut().map(|(_, e)| e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Inert;

    impl Entity for Inert {
        fn update(&mut self, _ctx: &TickContext<'_>) {}
        fn draw(&self, _surface: &mut dyn Surface) {}
    }

    #[test]
    fn test_registry_ids_are_unique_and_ordered() {
        let mut registry = Registry::new();
        let a = registry.register(Box::new(Inert));
        let b = registry.register(Box::new(Inert));
        let c = registry.register(Box::new(Inert));
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec![a, b, c]);

        assert!(registry.remove(b));
        assert!(!registry.remove(b));
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec![a, c]);

        // Ids are never reused after removal
        let d = registry.register(Box::new(Inert));
        assert!(d > c);
        assert!(!registry.contains(b));
    }

    #[test]
    fn test_context_register_queues() {
        let input = InputState::new();
        let pending = RefCell::new(Vec::new());
        let ctx = TickContext::new(
            Geometry {
                width: 10.0,
                height: 10.0,
            },
            16.0,
            &input,
            0,
            &pending,
        );
        ctx.register(Box::new(Inert));
        ctx.register(Box::new(Inert));
        assert_eq!(pending.borrow().len(), 2);
    }
}
