//! Seams between the launch flow and the page it runs in.

use crate::config::EmulatorOptions;
use crate::error::HostError;
use crate::geometry::Bounds;
use crate::rom::RomBytes;

/// Handle to an instance of the external emulator.
pub trait Emulator {
    /// Transfers the cartridge and starts execution, audio included.
    fn insert(&mut self, rom: RomBytes) -> Result<(), HostError>;
}

/// The "click to start" overlay.
pub trait PlaybackControl {
    fn set_bounds(&mut self, bounds: Bounds) -> Result<(), HostError>;

    /// Hides the control for good. It is never shown again afterwards.
    fn hide(&mut self) -> Result<(), HostError>;
}

/// Everything the gate needs from the host page.
pub trait Host {
    type Emulator: Emulator;
    type Control: PlaybackControl;

    /// Current geometry of the display surface, read fresh on every call.
    fn surface_bounds(&self) -> Bounds;

    /// Builds an emulator bound to the display surface. Must not need a
    /// user gesture.
    fn construct_emulator(&mut self, options: &EmulatorOptions)
    -> Result<Self::Emulator, HostError>;

    fn create_control(&mut self) -> Result<Self::Control, HostError>;
}
