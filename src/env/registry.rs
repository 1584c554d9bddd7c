//! Environment registry.
//!
//! Maps string ids such as `"Chess-v0"` to factories building boxed
//! environments from an `EnvConfig`. Each game module exposes a `register`
//! function; `EnvRegistry::with_builtin` calls all of them through
//! `games::register_all` and `global()` shares one such registry for the
//! whole process.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::{EnvConfig, EnvError, Result};

use super::environment::Environment;

/// Factory building an environment from a configuration.
pub type EnvFactory = fn(&EnvConfig) -> Result<Box<dyn Environment>>;

/// Id -> factory table.
#[derive(Default)]
pub struct EnvRegistry {
    entries: FxHashMap<String, EnvFactory>,
}

impl EnvRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every game shipped with this crate.
    pub fn with_builtin() -> Result<Self> {
        let mut registry = Self::new();
        crate::games::register_all(&mut registry)?;
        Ok(registry)
    }

    /// Register a factory under `id`.
    pub fn register(&mut self, id: impl Into<String>, factory: EnvFactory) -> Result<()> {
        let id = id.into();
        if self.entries.contains_key(&id) {
            return Err(EnvError::DuplicateEnvironment(id));
        }
        debug!(%id, "registered environment");
        self.entries.insert(id, factory);
        Ok(())
    }

    /// Build the environment registered under `id`.
    ///
    /// The configuration is validated before the factory runs.
    pub fn make(&self, id: &str, config: &EnvConfig) -> Result<Box<dyn Environment>> {
        config.validate()?;
        let factory = self
            .entries
            .get(id)
            .ok_or_else(|| EnvError::UnknownEnvironment(id.to_string()))?;
        factory(config)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Registered ids in sorted order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Process-wide registry of the built-in games.
///
/// Built on first use; a registration failure is returned to every caller
/// until a build succeeds.
pub fn global() -> Result<&'static EnvRegistry> {
    static REGISTRY: OnceLock<EnvRegistry> = OnceLock::new();
    if let Some(registry) = REGISTRY.get() {
        return Ok(registry);
    }
    let registry = EnvRegistry::with_builtin()?;
    Ok(REGISTRY.get_or_init(|| registry))
}

/// Build a built-in environment by id.
pub fn make(id: &str, config: &EnvConfig) -> Result<Box<dyn Environment>> {
    global()?.make(id, config)
}
