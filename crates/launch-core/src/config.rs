use crate::error::ConfigError;
use crate::gate::GateMode;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOCALE: &str = "en";

/// Options forwarded untouched to the emulator's constructor.
///
/// Every field is optional; an empty object is a valid configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmulatorOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fps: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchConfig {
    pub rom_url: String,

    #[serde(default)]
    pub mode: GateMode,

    /// Locale of the playback control's text.
    #[serde(default)]
    pub locale: Option<String>,

    #[serde(default)]
    pub emulator: EmulatorOptions,
}

impl LaunchConfig {
    pub fn new(rom_url: impl Into<String>, mode: GateMode) -> Self {
        Self {
            rom_url: rom_url.into(),
            mode,
            locale: None,
            emulator: EmulatorOptions::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rom_url.trim().is_empty() {
            return Err(ConfigError::MissingRomUrl);
        }
        if let Some(fps) = self.emulator.fps
            && (!fps.is_finite() || fps <= 0.0)
        {
            return Err(ConfigError::InvalidFps(fps));
        }
        Ok(())
    }

    /// Explicit locale first, then the browser's, then English.
    pub fn resolve_locale(&self, browser_locale: Option<String>) -> String {
        self.locale
            .clone()
            .or(browser_locale)
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
    }
}
