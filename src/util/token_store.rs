//! Bearer-token persistence in `localStorage`.
//!
//! The token is the only state that survives a reload. It is read once by
//! the session provider at startup and written only when a session commit is
//! accepted.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort: a blocked or full `localStorage` degrades
//! to a session that does not survive reloads. SSR paths no-op.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("localStorage unavailable: {err:?}");
            None
        }
    }
}

/// Read the persisted token, ignoring blank values.
pub fn load(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        match storage()?.get_item(key) {
            Ok(value) => value.filter(|token| !token.trim().is_empty()),
            Err(err) => {
                log::warn!("failed to read {key}: {err:?}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Persist `token` under `key`.
pub fn save(key: &str, token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            if let Err(err) = storage.set_item(key, token) {
                log::warn!("failed to persist {key}: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, token);
    }
}

/// Forget the persisted token.
pub fn clear(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            if let Err(err) = storage.remove_item(key) {
                log::warn!("failed to clear {key}: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
