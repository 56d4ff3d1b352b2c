use thiserror::Error;

/// The ROM fetch did not complete successfully.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server answered {status} for {uri}")]
    Status { status: u16, uri: String },

    #[error("failed to read response body: {0}")]
    Body(String),
}

/// A failure reported by the host page or the external emulator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("emulator rejected the call: {0}")]
    Emulator(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LaunchError {
    #[error("ROM transfer failed")]
    Transfer(#[from] TransferError),

    #[error("host failure")]
    Host(#[from] HostError),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("`romUrl` must not be empty")]
    MissingRomUrl,

    #[error("invalid frame rate: {0}")]
    InvalidFps(f64),
}
