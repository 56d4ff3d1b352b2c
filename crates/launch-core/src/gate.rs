use crate::config::EmulatorOptions;
use crate::error::{HostError, LaunchError, TransferError};
use crate::host::{Emulator, Host, PlaybackControl};
use crate::rom::RomBytes;
use log::{debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::mem;

/// Whether starting the emulator waits for a user gesture.
///
/// Browsers refuse to start audio outside of a gesture handler, so any
/// emulator producing sound has to run `Gated`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateMode {
    #[default]
    Ungated,
    Gated,
}

#[derive(Debug)]
pub enum LaunchEvent {
    /// The loader finished, successfully or not.
    Transferred(Result<RomBytes, TransferError>),
    /// Viewport resize or another layout-affecting change.
    LayoutChanged,
    /// Pointer activation of the playback control.
    Activated,
}

enum Phase<E> {
    AwaitingTransfer,
    AwaitingGesture { emulator: E, rom: RomBytes },
    Running { emulator: E },
    Stalled,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PhaseKind {
    AwaitingTransfer,
    AwaitingGesture,
    Running,
    Stalled,
}

impl PhaseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseKind::AwaitingTransfer => "awaiting-transfer",
            PhaseKind::AwaitingGesture => "awaiting-gesture",
            PhaseKind::Running => "running",
            PhaseKind::Stalled => "stalled",
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<E> Phase<E> {
    fn kind(&self) -> PhaseKind {
        match self {
            Phase::AwaitingTransfer => PhaseKind::AwaitingTransfer,
            Phase::AwaitingGesture { .. } => PhaseKind::AwaitingGesture,
            Phase::Running { .. } => PhaseKind::Running,
            Phase::Stalled => PhaseKind::Stalled,
        }
    }
}

/// Sits between "ROM bytes ready" and "emulator running".
///
/// All state changes go through [`PlaybackGate::handle`]. The ROM is moved
/// into the emulator on the single transition into `Running`, so `insert`
/// can happen at most once per gate.
pub struct PlaybackGate<H: Host> {
    mode: GateMode,
    host: H,
    options: EmulatorOptions,
    phase: Phase<H::Emulator>,
    control: Option<H::Control>,
}

impl<H: Host> PlaybackGate<H> {
    pub fn new(mode: GateMode, host: H, options: EmulatorOptions) -> Self {
        Self {
            mode,
            host,
            options,
            phase: Phase::AwaitingTransfer,
            control: None,
        }
    }

    pub fn phase(&self) -> PhaseKind {
        self.phase.kind()
    }

    /// The control while it is visible. `None` before it exists and after
    /// it has been hidden.
    pub fn control(&self) -> Option<&H::Control> {
        self.control.as_ref()
    }

    pub fn control_visible(&self) -> bool {
        self.control.is_some()
    }

    pub fn emulator(&self) -> Option<&H::Emulator> {
        match &self.phase {
            Phase::AwaitingGesture { emulator, .. } | Phase::Running { emulator } => {
                Some(emulator)
            }
            Phase::AwaitingTransfer | Phase::Stalled => None,
        }
    }

    pub fn handle(&mut self, event: LaunchEvent) -> Result<(), LaunchError> {
        debug!("[gate {}] {:?}", self.phase.kind(), event);
        match event {
            LaunchEvent::Transferred(result) => self.on_transferred(result),
            LaunchEvent::LayoutChanged => self.on_layout_changed(),
            LaunchEvent::Activated => self.on_activated(),
        }
    }

    fn on_transferred(
        &mut self,
        result: Result<RomBytes, TransferError>,
    ) -> Result<(), LaunchError> {
        if !matches!(self.phase, Phase::AwaitingTransfer) {
            warn!("transfer completed in phase {}, ignoring", self.phase.kind());
            return Ok(());
        }

        let rom = match result {
            Ok(rom) => rom,
            Err(e) => {
                self.phase = Phase::Stalled;
                return Err(e.into());
            }
        };

        let mut emulator =
            self.stall_on_err(|gate| gate.host.construct_emulator(&gate.options))?;

        match self.mode {
            GateMode::Ungated => {
                self.stall_on_err(|_| emulator.insert(rom))?;
                info!("emulator started without gesture");
                self.phase = Phase::Running { emulator };
            }
            GateMode::Gated => {
                let control = self.stall_on_err(|gate| gate.host.create_control())?;
                self.control = Some(control);
                self.stall_on_err(|gate| gate.sync_control())?;
                info!("waiting for user gesture");
                self.phase = Phase::AwaitingGesture { emulator, rom };
            }
        }
        Ok(())
    }

    fn on_layout_changed(&mut self) -> Result<(), LaunchError> {
        self.sync_control()?;
        Ok(())
    }

    /// Copies the surface's current bounds onto the control, if one is held.
    fn sync_control(&mut self) -> Result<(), HostError> {
        let Some(control) = self.control.as_mut() else {
            return Ok(());
        };
        let bounds = self.host.surface_bounds();
        if bounds.is_empty() {
            warn!("display surface has no area: {bounds:?}");
        }
        control.set_bounds(bounds)
    }

    /// Hides and releases the control. It is never shown again.
    fn retire_control(&mut self) {
        if let Some(mut control) = self.control.take()
            && let Err(e) = control.hide()
        {
            warn!("failed to hide playback control: {e}");
        }
    }

    /// Takes the control off the page without starting the emulator, for
    /// when nothing will deliver its clicks or resizes any more. A later
    /// `Activated` still starts the emulator.
    pub fn dismiss_control(&mut self) {
        if self.control.is_some() {
            info!("playback control dismissed in phase {}", self.phase.kind());
            self.retire_control();
        }
    }

    fn on_activated(&mut self) -> Result<(), LaunchError> {
        let (mut emulator, rom) = match mem::replace(&mut self.phase, Phase::Stalled) {
            Phase::AwaitingGesture { emulator, rom } => (emulator, rom),
            other => {
                warn!("activation in phase {}, ignoring", other.kind());
                self.phase = other;
                return Ok(());
            }
        };

        self.retire_control();

        emulator.insert(rom)?;
        info!("emulator started after user gesture");
        self.phase = Phase::Running { emulator };
        Ok(())
    }

    fn stall_on_err<T, E>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<T, LaunchError>
    where
        LaunchError: From<E>,
    {
        f(self).map_err(|e| {
            self.phase = Phase::Stalled;
            self.retire_control();
            LaunchError::from(e)
        })
    }
}
