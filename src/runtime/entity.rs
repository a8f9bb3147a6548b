//! Constant-speed movement toward a target point

use glam::Vec3;

use crate::io::error::Result;
use crate::runtime::lifecycle::Lifecycle;

/// Something in the world that walks to a target
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    position: Vec3,
    move_speed: f32,
    target: Option<Vec3>,
}

impl Entity {
    /// Entity at rest at `position`, moving `move_speed` units per second once given a target
    pub const fn new(position: Vec3, move_speed: f32) -> Self {
        Self {
            position,
            move_speed,
            target: None,
        }
    }

    /// Current position
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Target being walked to, if any
    pub const fn target(&self) -> Option<Vec3> {
        self.target
    }

    /// Whether the entity is still walking
    pub const fn is_moving(&self) -> bool {
        self.target.is_some()
    }

    /// Start walking to `target`, replacing any previous target
    pub const fn move_to(&mut self, target: Vec3) {
        self.target = Some(target);
    }

    /// Advance `dt` seconds along the way to the target
    ///
    /// A step that would pass the target lands exactly on it and stops.
    pub fn step(&mut self, dt: f32) {
        let Some(target) = self.target else {
            return;
        };

        let remaining = target - self.position;
        let next_move = remaining.normalize_or_zero() * self.move_speed * dt;

        if next_move.length_squared() >= remaining.length_squared() {
            self.position = target;
            self.target = None;
        } else {
            self.position += next_move;
        }
    }
}

impl Lifecycle for Entity {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn tick(&mut self, dt: f32) -> Result<()> {
        self.step(dt);
        Ok(())
    }

    fn dispose(&mut self) {
        self.target = None;
    }
}
