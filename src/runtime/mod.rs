//! Host-driven runtime components
//!
//! Components expose explicit `init` / `tick` / `dispose` hooks instead of
//! registering themselves with a global loop.

/// Constant-speed movement toward a target
pub mod entity;
/// Lifecycle hooks called by the host loop
pub mod lifecycle;
/// Click-to-move entity control
pub mod settler;
/// Grid, atlas and generated mesh
pub mod terrain;

pub use entity::Entity;
pub use lifecycle::Lifecycle;
pub use settler::SettlerController;
pub use terrain::Terrain;
