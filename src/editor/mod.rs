//! Editing sessions independent of any GUI toolkit
//!
//! Sessions own or borrow what they edit explicitly; the host renders their
//! state and applies the commands they return.

/// Atlas editing with a tracked selection
pub mod atlas_inspector;
/// Tile painting brush
pub mod brush;
/// Terrain painting session
pub mod terrain_inspector;
/// Tool-mode state machine
pub mod tool;

pub use atlas_inspector::AtlasInspector;
pub use brush::{BrushOutline, TilePainter};
pub use terrain_inspector::{SceneFeedback, TerrainInspector};
pub use tool::{HostCommand, ToolEvent, ToolMode, ToolState};
