//! localStorage persistence.
//!
//! Values are stored as JSON. Reads are forgiving: a missing key or a value
//! that no longer deserializes yields `None`, so the caller can fall back to
//! defaults instead of failing.

use serde::{Serialize, de::DeserializeOwned};

use super::dom;
use crate::core::error::StorageError;

/// Read a JSON value from localStorage.
pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Store a value in localStorage as JSON.
pub fn set<T: Serialize + ?Sized>(key: &str, data: &T) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
    let json = serde_json::to_string(data)?;
    storage
        .set_item(key, &json)
        .map_err(|_| StorageError::WriteFailed(key.to_string()))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_unreadable_value_reads_as_none() {
        let key = "cesta.test.corrupt";
        dom::local_storage().unwrap().set_item(key, "{not json").unwrap();
        assert_eq!(get::<Vec<u32>>(key), None);
    }

    #[wasm_bindgen_test]
    fn test_missing_key_reads_as_none() {
        assert_eq!(get::<Vec<u32>>("cesta.test.missing"), None);
    }

    #[wasm_bindgen_test]
    fn test_set_overwrites_previous_value() {
        let key = "cesta.test.overwrite";
        set(key, &[1u32, 2]).unwrap();
        set(key, &[3u32]).unwrap();
        assert_eq!(get::<Vec<u32>>(key), Some(vec![3]));
    }
}
