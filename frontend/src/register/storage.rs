use serde_json::{Map, Value};

/// Local-storage key of the registration draft.
pub const STORAGE_KEY: &str = "irh:register:v1";

/// Where the draft lives between visits.
pub trait DraftStorage {
    fn read(&self) -> Option<String>;
    fn write(&self, value: &str);
    fn remove(&self) -> Result<(), String>;
}

/// `window.localStorage`. Quietly does nothing when storage is unavailable
/// (private mode, disabled cookies).
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl DraftStorage for LocalStorage {
    fn read(&self) -> Option<String> {
        Self::storage()?.get_item(STORAGE_KEY).ok().flatten()
    }

    fn write(&self, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(STORAGE_KEY, value).is_err() {
                log::warn!("Could not write the registration draft");
            }
        }
    }

    fn remove(&self) -> Result<(), String> {
        match Self::storage() {
            Some(storage) => storage
                .remove_item(STORAGE_KEY)
                .map_err(|e| format!("{:?}", e)),
            None => Ok(()),
        }
    }
}

/// The saved draft, or an empty object when nothing usable is stored.
pub fn load_saved(storage: &impl DraftStorage) -> Map<String, Value> {
    match storage.read().map(|raw| serde_json::from_str::<Value>(&raw)) {
        Some(Ok(Value::Object(map))) => map,
        Some(_) => {
            log::warn!("Ignoring unreadable registration draft");
            Map::new()
        }
        None => Map::new(),
    }
}

/// Merges `patch` over the saved draft and writes the result back whole.
/// Returns what is now stored.
pub fn save_patch(storage: &impl DraftStorage, patch: &Map<String, Value>) -> Map<String, Value> {
    let mut saved = load_saved(storage);
    for (key, value) in patch {
        saved.insert(key.clone(), value.clone());
    }
    storage.write(&Value::Object(saved.clone()).to_string());
    saved
}

/// Drops the draft. A failure is logged and returned.
pub fn clear(storage: &impl DraftStorage) -> Result<(), String> {
    storage.remove().map_err(|e| {
        log::warn!("Could not remove the registration draft: {}", e);
        e
    })
}

#[cfg(test)]
pub mod memory {
    use super::DraftStorage;
    use std::cell::RefCell;

    #[derive(Default)]
    pub struct MemoryStorage(pub RefCell<Option<String>>);

    impl DraftStorage for MemoryStorage {
        fn read(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn write(&self, value: &str) {
            *self.0.borrow_mut() = Some(value.to_string());
        }

        fn remove(&self) -> Result<(), String> {
            *self.0.borrow_mut() = None;
            Ok(())
        }
    }

    /// Storage that refuses to let go of its draft.
    #[derive(Default)]
    pub struct LockedStorage(pub MemoryStorage);

    impl DraftStorage for LockedStorage {
        fn read(&self) -> Option<String> {
            self.0.read()
        }

        fn write(&self, value: &str) {
            self.0.write(value)
        }

        fn remove(&self) -> Result<(), String> {
            Err("SecurityError".to_string())
        }
    }
}
