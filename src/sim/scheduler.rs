//! Frame scheduler
//!
//! One tick per display refresh, always in this order:
//! 1. delta time (raw timestamp on the first tick of a run)
//! 2. `InputState::update`
//! 3. `Entity::update` for every entity, registration order
//! 4. surface clear
//! 5. `Entity::draw` for every entity, same order
//!
//! The next frame is requested only after the current tick completes, and
//! `stop()` cancels the outstanding request so no tick runs after it.

use std::cell::RefCell;

use super::entity::{Entity, EntityId, Geometry, Registry, TickContext};
use super::input::InputState;
use super::scene::Scene;
use crate::platform::{FrameHandle, FrameRequester};
use crate::renderer::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

pub struct Scheduler<S: Surface, F: FrameRequester> {
    surface: S,
    frames: F,
    input: InputState,
    registry: Registry,
    scene: Box<dyn Scene>,
    state: LoopState,
    pending_frame: Option<FrameHandle>,
    previous_timestamp: Option<f64>,
    delta_time: f64,
    tick_count: u64,
}

impl<S: Surface, F: FrameRequester> Scheduler<S, F> {
    pub fn new(surface: S, input: InputState, frames: F, scene: impl Scene + 'static) -> Self {
        Self {
            surface,
            frames,
            input,
            registry: Registry::new(),
            scene: Box::new(scene),
            state: LoopState::Stopped,
            pending_frame: None,
            previous_timestamp: None,
            delta_time: 0.0,
            tick_count: 0,
        }
    }

    /// Begin ticking
    ///
    /// Always rebuilds the registry from the scene. When already running the
    /// existing frame request is kept rather than doubled.
    pub fn start(&mut self) {
        self.reset_registry();

        if self.state == LoopState::Running {
            log::info!("Loop already running, entities reset");
            return;
        }

        self.previous_timestamp = None;
        self.delta_time = 0.0;
        self.tick_count = 0;
        self.state = LoopState::Running;
        if !self.request_frame() {
            return;
        }

        log::info!("Loop started with {} entities", self.registry.len());
    }

    /// Stop ticking and cancel the outstanding frame request
    pub fn stop(&mut self) {
        if self.state == LoopState::Stopped {
            return;
        }

        if let Some(handle) = self.pending_frame.take() {
            self.frames.cancel(handle);
        }
        self.state = LoopState::Stopped;

        log::info!("Loop stopped after {} ticks", self.tick_count);
    }

    /// Display-refresh callback
    ///
    /// Frames other than the one currently requested are ignored, so a late
    /// delivery after `stop()` can never run a tick.
    pub fn on_frame(&mut self, handle: FrameHandle, timestamp: f64) {
        if self.state != LoopState::Running || self.pending_frame != Some(handle) {
            log::trace!("Ignoring stale frame {:?}", handle);
            return;
        }
        self.pending_frame = None;

        self.tick(timestamp);

        if self.state == LoopState::Running {
            let _ = self.request_frame();
        }
    }

    fn tick(&mut self, timestamp: f64) {
        self.delta_time = match self.previous_timestamp {
            Some(previous) => timestamp - previous,
            None => timestamp,
        };
        self.previous_timestamp = Some(timestamp);

        self.input.update();

        let geometry = Geometry::of(&self.surface);
        let pending = RefCell::new(Vec::new());
        {
            let ctx = TickContext::new(
                geometry,
                self.delta_time,
                &self.input,
                self.registry.len(),
                &pending,
            );
            for entity in self.registry.iter_mut() {
                entity.update(&ctx);
            }
        }
        for entity in pending.into_inner() {
            self.registry.register(entity);
        }

        self.surface.clear();
        for entity in self.registry.iter() {
            entity.draw(&mut self.surface);
        }

        self.tick_count += 1;
    }

    /// Refusal drops back to `Stopped` so a later `start()` asks again
    fn request_frame(&mut self) -> bool {
        self.pending_frame = self.frames.request();
        if self.pending_frame.is_none() {
            log::error!("Display refresh request refused; loop stopped");
            self.state = LoopState::Stopped;
            return false;
        }
        true
    }

    fn reset_registry(&mut self) {
        self.registry.clear();
        let geometry = Geometry::of(&self.surface);
        self.scene.populate(&mut self.registry, geometry);
    }

    /// Add an entity; it is updated and drawn from the next tick on
    pub fn register(&mut self, entity: Box<dyn Entity>) -> EntityId {
        self.registry.register(entity)
    }

    pub fn remove(&mut self, id: EntityId) -> bool {
        self.registry.remove(id)
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn entity_count(&self) -> usize {
        self.registry.len()
    }

    pub fn entity_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.registry.ids()
    }

    /// Delta of the most recent tick in milliseconds
    pub fn delta_time(&self) -> f64 {
        self.delta_time
    }

    /// Ticks run since the last `start()`
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    /// Forward a raw key-down from the input source
    pub fn key_down(&mut self, code: &str) -> bool {
        self.input.key_down(code)
    }

    /// Forward a raw key-up from the input source
    pub fn key_up(&mut self, code: &str) -> bool {
        self.input.key_up(code)
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn frames(&self) -> &F {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut F {
        &mut self.frames
    }
}
