//! Almacenamiento del progreso: un único hueco con el snapshot JSON del quiz.

use crate::error::StoreError;
use crate::model::QuizState;
use log::{debug, warn};
use std::collections::HashMap;
use std::path::PathBuf;

/// Clave fija bajo la que se guarda el snapshot.
pub const DEFAULT_STORAGE_KEY: &str = "quizProgress";

/// Almacén clave-valor de cadenas. Cada plataforma aporta el suyo.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

#[derive(Default, Debug, Clone)]
pub struct MemoryBackend {
    slots: HashMap<String, String>,
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.slots.remove(key);
        Ok(())
    }
}

/// Un fichero `<clave>.json` dentro de un directorio (versión escritorio).
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path_for(key)) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// `window.localStorage` del navegador.
#[cfg(target_arch = "wasm32")]
#[derive(Default, Debug, Clone, Copy)]
pub struct LocalStorageBackend;

#[cfg(target_arch = "wasm32")]
impl LocalStorageBackend {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| StoreError::Browser("localStorage no disponible".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::Browser(format!("{e:?}")))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Browser(format!("{e:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Browser(format!("{e:?}")))
    }
}

pub struct ProgressStore {
    backend: Box<dyn StorageBackend>,
    key: String,
}

impl ProgressStore {
    pub fn new(backend: impl StorageBackend + 'static, key: impl Into<String>) -> Self {
        Self {
            backend: Box::new(backend),
            key: key.into(),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::default(), DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Lee el snapshot. Si no existe o no se puede parsear, devuelve el estado por defecto.
    pub fn load(&self) -> QuizState {
        match self.try_load() {
            Ok(Some(state)) => state,
            Ok(None) => {
                debug!("sin progreso guardado en '{}'", self.key);
                QuizState::default()
            }
            Err(e) => {
                warn!("progreso guardado descartado: {e}");
                QuizState::default()
            }
        }
    }

    fn try_load(&self) -> Result<Option<QuizState>, StoreError> {
        match self.backend.read(&self.key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Sobrescribe el hueco con el estado completo.
    pub fn save(&mut self, state: &QuizState) {
        let result = serde_json::to_string(state)
            .map_err(StoreError::from)
            .and_then(|json| self.backend.write(&self.key, &json));
        if let Err(e) = result {
            warn!("no se pudo guardar el progreso: {e}");
        }
    }

    pub fn clear(&mut self) {
        if let Err(e) = self.backend.remove(&self.key) {
            warn!("no se pudo borrar el progreso: {e}");
        }
    }

    pub fn has_snapshot(&self) -> bool {
        matches!(self.backend.read(&self.key), Ok(Some(_)))
    }
}
