use crate::error::SnapshotError;
use ahash::AHashMap;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// One element subscription within a case: the element id and the event
/// names the case records for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    #[serde(default)]
    pub events: Vec<String>,
}

impl Subscription {
    pub fn new(id: impl Into<String>, events: Vec<String>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

/// The wire shape of a stored case-subscription record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseSubscription {
    pub name: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
}

impl CaseSubscription {
    pub fn new(name: impl Into<String>, subscriptions: Vec<Subscription>) -> Self {
        Self {
            name: name.into(),
            note: String::new(),
            subscriptions,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

/// In-memory index of which cases record which events for which elements.
///
/// Keyed case-name -> element-id -> event names. Event membership checks
/// drive what a recorded execution subscribes to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionStore {
    cases: AHashMap<String, AHashMap<String, Vec<String>>>,
}

impl SubscriptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the subscriptions of a single case, merging duplicate element
    /// ids and de-duplicating their events while keeping first-seen order.
    pub fn set(&mut self, name: impl Into<String>, subscriptions: &[Subscription]) {
        let mut elements: AHashMap<String, Vec<String>> = AHashMap::new();
        for subscription in subscriptions {
            let events = elements.entry(subscription.id.clone()).or_default();
            let merged: Vec<String> = events
                .iter()
                .chain(subscription.events.iter())
                .unique()
                .cloned()
                .collect();
            *events = merged;
        }
        self.cases.insert(name.into(), elements);
    }

    pub fn remove(&mut self, name: &str) {
        self.cases.remove(name);
    }

    pub fn clear(&mut self) {
        self.cases.clear();
    }

    pub fn contains_case(&self, name: &str) -> bool {
        self.cases.contains_key(name)
    }

    pub fn is_subscribed(&self, name: &str, element_id: &str, event: &str) -> bool {
        self.cases
            .get(name)
            .and_then(|elements| elements.get(element_id))
            .is_some_and(|events| events.iter().any(|e| e == event))
    }

    pub fn events_for(&self, name: &str, element_id: &str) -> Option<&[String]> {
        self.cases
            .get(name)
            .and_then(|elements| elements.get(element_id))
            .map(Vec::as_slice)
    }

    pub fn case_names(&self) -> impl Iterator<Item = &str> {
        self.cases.keys().map(String::as_str)
    }

    /// Replaces the store contents wholesale with the given records, the
    /// way the original re-synced its in-memory index from storage.
    pub fn sync_from(&mut self, records: &[CaseSubscription]) {
        self.clear();
        for record in records {
            self.set(record.name.clone(), &record.subscriptions);
        }
    }

    /// Saves the store to a file in the bincode snapshot format.
    pub fn save(&self, path: &str) -> Result<(), SnapshotError> {
        let bytes = encode_to_vec(self, standard())
            .map_err(|e| SnapshotError::Generic(format!("Serialization failed: {}", e)))?;
        let mut file = fs::File::create(path).map_err(|e| {
            SnapshotError::Generic(format!("Could not create file '{}': {}", path, e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            SnapshotError::Generic(format!("Could not write to file '{}': {}", path, e))
        })?;
        Ok(())
    }

    /// Loads a store from a snapshot file.
    pub fn from_file(path: &str) -> Result<Self, SnapshotError> {
        let mut file = fs::File::open(path)
            .map_err(|e| SnapshotError::Generic(format!("Could not open file '{}': {}", path, e)))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            SnapshotError::Generic(format!("Could not read from file '{}': {}", path, e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a store from a snapshot byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        decode_from_slice(bytes, standard())
            .map(|(store, _)| store)
            .map_err(|e| SnapshotError::Generic(format!("Deserialization failed: {}", e)))
    }
}
