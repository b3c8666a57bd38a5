//=========================================================================
// State Registry
//=========================================================================
//
// Maps state keys to factories.
//
// States are not kept alive between activations: each time a key becomes
// active, its factory builds a fresh instance. Registration happens once
// at startup; lookups happen on every state transition.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{State, StateKey};
use crate::error::EngineError;

//=== StateFactory ========================================================

/// Builds a fresh state instance.
pub type StateFactory<K> = Box<dyn Fn() -> Box<dyn State<K>> + Send>;

//=== StateRegistry =======================================================

/// Key → factory table used by the controller.
pub struct StateRegistry<K: StateKey> {
    factories: HashMap<K, StateFactory<K>>,
}

impl<K: StateKey> StateRegistry<K> {
    //--- Construction -----------------------------------------------------

    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers `factory` under `key`.
    ///
    /// Registering the same key twice replaces the earlier factory.
    ///
    /// ```rust
    /// # use state_engine::prelude::*;
    /// # use state_engine::states::{GameState, State1};
    /// let mut registry = StateRegistry::new();
    /// registry.register(GameState::State1, State1::new);
    /// assert!(registry.contains(GameState::State1));
    /// ```
    pub fn register<F, T>(&mut self, key: K, factory: F)
    where
        F: Fn() -> T + Send + 'static,
        T: State<K> + 'static,
    {
        let boxed: StateFactory<K> = Box::new(move || Box::new(factory()));
        if self.factories.insert(key, boxed).is_some() {
            warn!("State {:?} was already registered and has been replaced", key);
        } else {
            debug!("Registered state {:?}", key);
        }
    }

    /// Builder-style [`register`](Self::register).
    pub fn with<F, T>(mut self, key: K, factory: F) -> Self
    where
        F: Fn() -> T + Send + 'static,
        T: State<K> + 'static,
    {
        self.register(key, factory);
        self
    }

    //--- Lookup -----------------------------------------------------------

    /// Builds a new instance of the state registered under `key`.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownState`] if nothing is registered for `key`.
    pub fn create(&self, key: K) -> Result<Box<dyn State<K>>, EngineError> {
        let factory = self
            .factories
            .get(&key)
            .ok_or_else(|| EngineError::unknown_state(key))?;

        debug!("Creating state {:?}", key);
        Ok(factory())
    }

    /// Whether a factory is registered for `key`.
    pub fn contains(&self, key: K) -> bool {
        self.factories.contains_key(&key)
    }

    /// Registered keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.factories.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<K: StateKey> Default for StateRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================
