//! Initial entity population
//!
//! The scheduler repopulates its registry from a [`Scene`] every time the
//! loop is started.

use glam::Vec2;

use super::entity::{Geometry, Registry};
use super::fps::FpsCounter;
use super::grid::Grid;
use super::player::Player;
use crate::settings::Settings;

pub trait Scene {
    fn populate(&mut self, registry: &mut Registry, geometry: Geometry);
}

impl<F> Scene for F
where
    F: FnMut(&mut Registry, Geometry),
{
    fn populate(&mut self, registry: &mut Registry, geometry: Geometry) {
        self(registry, geometry)
    }
}

/// Grid in the back, a player in the middle, FPS read-out on top
pub struct DefaultScene {
    settings: Settings,
}

impl DefaultScene {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl Scene for DefaultScene {
    fn populate(&mut self, registry: &mut Registry, geometry: Geometry) {
        let s = &self.settings;

        registry.register(Box::new(Grid::new(s.grid_cell, s.grid_cell, s.show_grid)));

        let center = Vec2::new(geometry.width * 0.5, geometry.height * 0.5);
        registry.register(Box::new(Player::new(center, s.player, s.helpers)));

        if s.show_fps {
            registry.register(Box::new(FpsCounter::new()));
        }
    }
}
