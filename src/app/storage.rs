use crate::demo::{FlagStore, StoreError};

/// Played-flag store backed by the browser's localStorage. Zero-sized: the
/// underlying surface is the device-global storage object, keyed per demo
/// identifier by the session itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeviceFlags;

#[cfg(feature = "hydrate")]
impl DeviceFlags {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl FlagStore for DeviceFlags {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StoreError::Unavailable)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StoreError::WriteFailed(format!("{err:?}")))
    }
}

// The server render has no device storage; every flag reads as absent and the
// client resolves the real state after hydration.
#[cfg(not(feature = "hydrate"))]
impl FlagStore for DeviceFlags {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Ok(())
    }
}
