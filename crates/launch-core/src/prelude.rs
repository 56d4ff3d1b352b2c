//! Convenient imports for consumers of launch-core
//!
//! Pull in everything commonly needed in one line:
//! ```rust
//! use launch_core::prelude::*;
//! ```

// Launch flow
pub use crate::gate::{GateMode, LaunchEvent, PhaseKind, PlaybackGate};
pub use crate::loader::{Loader, Transport, TransferResponse};
pub use crate::rom::RomBytes;

// Host boundary traits
pub use crate::host::{Emulator, Host, PlaybackControl};
pub use crate::geometry::Bounds;

// Configuration
pub use crate::config::{EmulatorOptions, LaunchConfig};
pub use crate::i18n::{I18n, Message};

// Errors
pub use crate::error::{ConfigError, HostError, LaunchError, TransferError};
