use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::RocketryError;
use crate::log_book::flight::FlightRecord;
use crate::vehicle::motor::MotorRecord;
use crate::vehicle::rocket::RocketRecord;

pub const ROCKETS_COLLECTION: &str = "rockets";
pub const MOTORS_COLLECTION: &str = "motors";
pub const FLIGHTS_COLLECTION: &str = "flights";

/// The persistence collaborator: a string key-value store, the shape the
/// hosting environment provides. Implementations live outside the core;
/// `MemoryStore` covers tests and the demo binary.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Anything stored in a collection and addressed by its id.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for RocketRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for MotorRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for FlightRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A typed list persisted as a JSON array under a fixed key. Owned by the
/// caller and passed around explicitly; there is no process-wide state.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    key: &'static str,
    items: Vec<T>,
}

impl<T: Serialize + DeserializeOwned + Identified> Collection<T> {
    pub fn load(store: &dyn KeyValueStore, key: &'static str) -> Result<Self, RocketryError> {
        let items = match store.get(key) {
            Some(raw) => serde_json::from_str(&raw).map_err(|err| {
                RocketryError::Storage(format!("collection `{}`: {}", key, err))
            })?,
            None => Vec::new(),
        };
        Ok(Collection { key, items })
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), RocketryError> {
        let raw = serde_json::to_string(&self.items)
            .map_err(|err| RocketryError::Storage(format!("collection `{}`: {}", self.key, err)))?;
        store.set(self.key, &raw);
        Ok(())
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Replaces the item with the same id, or appends when it is new.
    pub fn upsert(&mut self, item: T) {
        match self.items.iter().position(|existing| existing.id() == item.id()) {
            Some(index) => self.items[index] = item,
            None => self.items.push(item),
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }
}
