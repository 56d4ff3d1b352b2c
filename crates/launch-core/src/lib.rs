//! Browser-agnostic core of the ROM launcher.
//!
//! Fetches a ROM image, hands it to an externally supplied emulator and,
//! when audio is involved, holds playback behind a "click to start"
//! control that tracks the emulator's display surface.

pub mod config;
pub mod error;
pub mod gate;
pub mod geometry;
pub mod host;
pub mod i18n;
pub mod loader;
pub mod prelude;
pub mod rom;

#[cfg(test)]
mod gate_tests;

// Re-exports
pub use gate::{GateMode, LaunchEvent, PhaseKind, PlaybackGate};
pub use loader::Loader;
pub use rom::RomBytes;
