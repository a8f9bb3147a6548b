//! Host-driven lifecycle hooks

use crate::io::error::Result;

/// Component driven by a host loop
///
/// The host calls `init` once after attaching the component, `tick` once per
/// frame with the elapsed time in seconds, and `dispose` before detaching it.
pub trait Lifecycle {
    /// Prepare the component for ticking
    ///
    /// # Errors
    ///
    /// Returns an error if the component cannot reach a usable state
    fn init(&mut self) -> Result<()>;

    /// Advance by `dt` seconds
    ///
    /// # Errors
    ///
    /// Returns an error if the per-frame update fails
    fn tick(&mut self, dt: f32) -> Result<()>;

    /// Release resources owned by the component
    fn dispose(&mut self);
}
