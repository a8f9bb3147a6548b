//! Tool-mode state machine for scene editing
//!
//! The host editor has its own built-in tools (move, rotate, ...). While the
//! terrain painter is active those are suspended; engaging any of them again
//! drops the painter back to `Move`.

use log::debug;

/// Terrain editing tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    /// No terrain tool; the host's tools work normally
    #[default]
    Move,
    /// Paint atlas tiles into grid cells
    TilePaint,
}

/// Inputs driving tool transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolEvent {
    /// The user picked a terrain tool
    Select(ToolMode),
    /// The user engaged one of the host's built-in tools
    HostToolEngaged,
}

/// Side effects the host must apply after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Deselect the host's built-in tool
    ReleaseHostTool,
    /// Reselect the host's move tool if none is active
    RestoreHostTool,
    /// Hide the selection wireframe of the terrain
    HideWireframe,
    /// Show the selection wireframe of the terrain
    ShowWireframe,
}

/// Outcome of one transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Mode after the event
    pub next: ToolMode,
    /// Host effects, in order
    pub commands: &'static [HostCommand],
}

const ENTER_MOVE: &[HostCommand] = &[HostCommand::RestoreHostTool, HostCommand::ShowWireframe];
const ENTER_PAINT: &[HostCommand] = &[HostCommand::ReleaseHostTool, HostCommand::HideWireframe];
const STAY: &[HostCommand] = &[];

/// Full transition table
pub const fn transition(mode: ToolMode, event: ToolEvent) -> Transition {
    match (mode, event) {
        (ToolMode::Move, ToolEvent::Select(ToolMode::TilePaint)) => Transition {
            next: ToolMode::TilePaint,
            commands: ENTER_PAINT,
        },
        (ToolMode::TilePaint, ToolEvent::Select(ToolMode::Move) | ToolEvent::HostToolEngaged) => {
            Transition {
                next: ToolMode::Move,
                commands: ENTER_MOVE,
            }
        }
        (current, ToolEvent::Select(_) | ToolEvent::HostToolEngaged) => Transition {
            next: current,
            commands: STAY,
        },
    }
}

/// Current tool mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolState {
    mode: ToolMode,
}

impl ToolState {
    /// Active mode
    pub const fn mode(&self) -> ToolMode {
        self.mode
    }

    /// Apply `event`, returning the host commands to run
    pub fn handle(&mut self, event: ToolEvent) -> &'static [HostCommand] {
        let step = transition(self.mode, event);
        if step.next != self.mode {
            debug!("tool mode {:?} -> {:?}", self.mode, step.next);
        }
        self.mode = step.next;
        step.commands
    }
}
