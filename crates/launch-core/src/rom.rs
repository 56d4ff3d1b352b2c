use std::fmt;
use std::ops::Deref;

/// Raw cartridge image as delivered by the loader.
///
/// The buffer is never modified after the transfer. It is handed to the
/// emulator by value, so a given `RomBytes` can be inserted at most once.
#[derive(Clone, PartialEq, Eq)]
pub struct RomBytes(Box<[u8]>);

impl RomBytes {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for RomBytes {
    fn from(bytes: Vec<u8>) -> Self {
        RomBytes(bytes.into_boxed_slice())
    }
}

impl Deref for RomBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for RomBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RomBytes({} bytes)", self.0.len())
    }
}
