use std::cell::RefCell;
use std::collections::HashMap;

use super::{KeyValueStore, StoreError, StoreValue};

/// In-process store; the host can use it as a cache and tests as a double.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, StoreValue>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store, e.g. with a session snapshot published by the app
    pub fn with_values<K, V, I>(values: I) -> Self
    where
        K: Into<String>,
        V: Into<StoreValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let values = values
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: RefCell::new(values),
        }
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<StoreValue>, StoreError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn put(&self, key: &str, value: StoreValue) -> Result<(), StoreError> {
        self.values.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}
