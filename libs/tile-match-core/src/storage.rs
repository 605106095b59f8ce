//! Persistence port.
//!
//! State is kept as JSON blobs in a flat key-value store, the same shape a
//! browser's local storage offers. Corrupt or unreadable blobs never reach
//! the player: the typed loaders log and fall back to an empty value.

use crate::error::{Result, StoreError};
use crate::timer::BestTimes;
use crate::types::{CustomDeck, DEFAULT_SUBJECT};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;

pub const CUSTOM_DECKS_KEY: &str = "customDecks";
pub const BEST_TIMES_KEY: &str = "bestTimes";
pub const QUIZ_DECK_KEY: &str = "flashcardDeck";
pub const QUIZ_SCORE_KEY: &str = "score";
pub const QUIZ_STREAK_KEY: &str = "streak";

/// Flat string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store, used by tests and as a throwaway backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Read and decode a JSON value. Missing keys are `Ok(None)`.
pub fn read_json<T, S>(store: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StoreError::MalformedStoredData {
            key: key.to_string(),
            source,
        })
}

/// Encode and write a JSON value.
pub fn write_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)
}

/// Read a JSON value, recovering from any failure with `T::default()`.
pub fn load_or_default<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    match read_json(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(err) => {
            tracing::warn!(key, error = %err, "discarding unreadable stored data");
            T::default()
        }
    }
}

pub fn load_custom_decks<S: KeyValueStore + ?Sized>(store: &S) -> Vec<CustomDeck> {
    load_or_default(store, CUSTOM_DECKS_KEY)
}

pub fn save_custom_decks<S: KeyValueStore + ?Sized>(store: &mut S, decks: &[CustomDeck]) -> Result<()> {
    write_json(store, CUSTOM_DECKS_KEY, decks)
}

/// Insert or replace a deck by subject and persist the collection. The
/// generated math subject cannot be shadowed by a custom deck.
pub fn upsert_custom_deck<S: KeyValueStore + ?Sized>(
    store: &mut S,
    deck: CustomDeck,
) -> Result<Vec<CustomDeck>> {
    if deck.subject == DEFAULT_SUBJECT {
        return Err(StoreError::ReservedSubject {
            subject: deck.subject,
        });
    }
    let mut decks = load_custom_decks(store);
    match decks.iter_mut().find(|d| d.subject == deck.subject) {
        Some(existing) => *existing = deck,
        None => decks.push(deck),
    }
    save_custom_decks(store, &decks)?;
    Ok(decks)
}

/// Remove a deck by subject. Returns whether anything was removed.
pub fn delete_custom_deck<S: KeyValueStore + ?Sized>(store: &mut S, subject: &str) -> Result<bool> {
    let mut decks = load_custom_decks(store);
    let before = decks.len();
    decks.retain(|d| d.subject != subject);
    if decks.len() == before {
        return Ok(false);
    }
    save_custom_decks(store, &decks)?;
    Ok(true)
}

pub fn load_best_times<S: KeyValueStore + ?Sized>(store: &S) -> BestTimes {
    load_or_default(store, BEST_TIMES_KEY)
}

pub fn save_best_times<S: KeyValueStore + ?Sized>(store: &mut S, best: &BestTimes) -> Result<()> {
    write_json(store, BEST_TIMES_KEY, best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DeckPair;
    use pretty_assertions::assert_eq;

    fn deck(subject: &str, answers: &[&str]) -> CustomDeck {
        CustomDeck {
            subject: subject.to_string(),
            pairs: answers
                .iter()
                .map(|a| DeckPair {
                    question: format!("q-{a}"),
                    answer: a.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn missing_keys_load_empty() {
        let store = MemoryStore::new();
        assert!(load_custom_decks(&store).is_empty());
        assert!(load_best_times(&store).is_empty());
    }

    #[test]
    fn malformed_data_falls_back_to_empty() {
        let mut store = MemoryStore::new();
        store.set(CUSTOM_DECKS_KEY, "{not json").unwrap();
        store.set(BEST_TIMES_KEY, "[1, 2, 3]").unwrap();

        assert!(load_custom_decks(&store).is_empty());
        assert!(load_best_times(&store).is_empty());
    }

    #[test]
    fn read_json_reports_malformed_key() {
        let mut store = MemoryStore::new();
        store.set(BEST_TIMES_KEY, "oops").unwrap();
        let err = read_json::<BestTimes, _>(&store, BEST_TIMES_KEY).unwrap_err();
        assert!(matches!(err, StoreError::MalformedStoredData { ref key, .. } if key == BEST_TIMES_KEY));
    }

    #[test]
    fn upsert_replaces_by_subject() {
        let mut store = MemoryStore::new();
        upsert_custom_deck(&mut store, deck("colors", &["red"])).unwrap();
        upsert_custom_deck(&mut store, deck("shapes", &["circle"])).unwrap();
        let decks = upsert_custom_deck(&mut store, deck("colors", &["blue", "green"])).unwrap();

        assert_eq!(decks.len(), 2);
        assert_eq!(load_custom_decks(&store), vec![deck("colors", &["blue", "green"]), deck("shapes", &["circle"])]);
    }

    #[test]
    fn math_subject_is_reserved() {
        let mut store = MemoryStore::new();
        let err = upsert_custom_deck(&mut store, deck(DEFAULT_SUBJECT, &["7"])).unwrap_err();
        assert!(matches!(err, StoreError::ReservedSubject { ref subject } if subject == DEFAULT_SUBJECT));
        assert!(store.is_empty());
    }

    #[test]
    fn delete_deck() {
        let mut store = MemoryStore::new();
        upsert_custom_deck(&mut store, deck("colors", &["red"])).unwrap();
        assert!(delete_custom_deck(&mut store, "colors").unwrap());
        assert!(!delete_custom_deck(&mut store, "colors").unwrap());
        assert!(load_custom_decks(&store).is_empty());
    }

    #[test]
    fn best_times_wire_format() {
        let mut store = MemoryStore::new();
        let mut best = BestTimes::default();
        best.record_if_best("math", 42);
        save_best_times(&mut store, &best).unwrap();

        assert_eq!(store.get(BEST_TIMES_KEY).unwrap().unwrap(), r#"{"math":42}"#);
        assert_eq!(load_best_times(&store).get("math"), Some(42));
    }

    #[test]
    fn custom_decks_wire_format() {
        let mut store = MemoryStore::new();
        store
            .set(
                CUSTOM_DECKS_KEY,
                r#"[{"subject":"capitals","pairs":[{"question":"France","answer":"Paris"}]}]"#,
            )
            .unwrap();
        let decks = load_custom_decks(&store);
        assert_eq!(decks[0].subject, "capitals");
        assert_eq!(decks[0].pairs[0].answer, "Paris");
    }
}
