//! Thin wrapper over `window.localStorage`.
//!
//! Host builds have no browser globals, so every accessor degrades to "no
//! value" there instead of calling into `web_sys`.

pub const ACCESS_TOKEN_KEY: &str = "token";

#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or_else(|| "No window object".to_string())?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

pub fn get_item(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        local_storage()
            .ok()
            .and_then(|storage| storage.get_item(key).ok().flatten())
            .filter(|value| !value.is_empty())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

pub fn remove_item(key: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn host_storage_is_empty_and_removal_is_a_no_op() {
        assert_eq!(get_item(ACCESS_TOKEN_KEY), None);
        remove_item(ACCESS_TOKEN_KEY);
        assert_eq!(get_item(ACCESS_TOKEN_KEY), None);
    }
}
