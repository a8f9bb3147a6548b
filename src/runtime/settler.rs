//! Click-to-move control of an entity over the terrain

use glam::Vec3;
use log::debug;

use crate::geometry::picking::tile_center_at;
use crate::io::error::Result;
use crate::runtime::entity::Entity;
use crate::runtime::lifecycle::Lifecycle;
use crate::spatial::GridShape;

/// Sends its entity to the center of each clicked tile
#[derive(Debug, Clone, PartialEq)]
pub struct SettlerController {
    entity: Entity,
}

impl SettlerController {
    /// Control `entity`
    pub const fn new(entity: Entity) -> Self {
        Self { entity }
    }

    /// Controlled entity
    pub const fn entity(&self) -> &Entity {
        &self.entity
    }

    /// React to a click whose pointer ray hit the terrain at `hit`
    ///
    /// A miss (`None`) leaves the current target alone. Returns the new target.
    pub fn on_click(&mut self, hit: Option<Vec3>, shape: &GridShape) -> Option<Vec3> {
        let target = tile_center_at(hit?, shape);
        debug!("settler heading to {target}");
        self.entity.move_to(target);
        Some(target)
    }
}

impl Lifecycle for SettlerController {
    fn init(&mut self) -> Result<()> {
        self.entity.init()
    }

    fn tick(&mut self, dt: f32) -> Result<()> {
        self.entity.tick(dt)
    }

    fn dispose(&mut self) {
        self.entity.dispose();
    }
}
