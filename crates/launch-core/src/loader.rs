use crate::error::TransferError;
use crate::rom::RomBytes;
use log::{debug, info, warn};

/// Raw answer of a single read-only request.
#[derive(Debug)]
pub struct TransferResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransferResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One outbound GET. Implementations must not retry or cache.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, uri: &str) -> Result<TransferResponse, TransferError>;
}

/// Fetches a whole ROM image in one attempt.
pub struct Loader<T: Transport> {
    transport: T,
}

impl<T: Transport> Loader<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn load(&self, uri: &str) -> Result<RomBytes, TransferError> {
        debug!("Loader::load({uri})");
        let response = self.transport.get(uri).await.inspect_err(|e| {
            warn!("transfer of {uri} failed: {e}");
        })?;

        if !response.is_success() {
            warn!("transfer of {uri} answered {}", response.status);
            return Err(TransferError::Status {
                status: response.status,
                uri: uri.to_string(),
            });
        }

        info!("Loaded ROM from {uri} ({} bytes)", response.body.len());
        Ok(RomBytes::from(response.body))
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}
