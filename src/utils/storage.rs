use gloo_storage::{LocalStorage, Storage};
use serde::{Serialize, de::DeserializeOwned};

const STORAGE_PREFIX: &str = "tml";

/// Clave con prefijo de la app, p.ej. "tml_userLocation"
pub fn storage_key(name: &str) -> String {
    format!("{}_{}", STORAGE_PREFIX, name)
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    LocalStorage::set(key, value)
        .map_err(|e| format!("Error guardando '{}' en localStorage: {}", key, e))
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    match LocalStorage::get(key) {
        Ok(value) => Some(value),
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => None,
        Err(e) => {
            log::warn!("⚠️ [STORAGE] No se pudo leer '{}': {}", key, e);
            None
        }
    }
}
