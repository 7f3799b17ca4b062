use folio_model::{FieldQuery, GatewayError, PersistenceGateway};
use folio_types::EntityId;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

type Documents = HashMap<String, HashMap<EntityId, Value>>;

/// JSON documents grouped by entity type.
///
/// Field queries compare top-level string members, ignoring ASCII case in
/// the member name so rule field names (`Slug`) match serialized keys
/// (`slug`).
pub struct MemoryStore {
    documents: RwLock<Documents>,
    available: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Inserts or replaces a document.
    pub fn put(&self, entity_type: &str, id: EntityId, document: Value) -> Result<(), GatewayError> {
        self.ensure_available()?;
        self.documents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(entity_type.to_string())
            .or_default()
            .insert(id, document);
        Ok(())
    }

    /// Removes a document. Returns whether it existed.
    pub fn remove(&self, entity_type: &str, id: EntityId) -> Result<bool, GatewayError> {
        self.ensure_available()?;
        Ok(self
            .documents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(entity_type)
            .and_then(|docs| docs.remove(&id))
            .is_some())
    }

    pub fn get(&self, entity_type: &str, id: EntityId) -> Result<Option<Value>, GatewayError> {
        self.ensure_available()?;
        Ok(self
            .documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(entity_type)
            .and_then(|docs| docs.get(&id))
            .cloned())
    }

    pub fn contains(&self, entity_type: &str, id: EntityId) -> bool {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(entity_type)
            .is_some_and(|docs| docs.contains_key(&id))
    }

    pub fn count(&self, entity_type: &str) -> usize {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(entity_type)
            .map_or(0, HashMap::len)
    }

    /// Simulates the backend going away or coming back.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> Result<(), GatewayError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(GatewayError::Unavailable("memory store offline".into()))
        }
    }
}

fn field_matches(document: &Value, field: &str, value: &str) -> bool {
    document.as_object().is_some_and(|members| {
        members
            .iter()
            .any(|(key, v)| key.eq_ignore_ascii_case(field) && v.as_str() == Some(value))
    })
}

impl PersistenceGateway for MemoryStore {
    fn find_one(
        &self,
        entity_type: &str,
        query: &FieldQuery<'_>,
    ) -> Result<Option<EntityId>, GatewayError> {
        self.ensure_available()?;
        let documents = self
            .documents
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let Some(docs) = documents.get(entity_type) else {
            return Ok(None);
        };
        Ok(docs
            .iter()
            .filter(|(id, _)| Some(**id) != query.exclude)
            .find(|(_, doc)| field_matches(doc, query.field, query.value))
            .map(|(id, _)| *id))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let documents = self
            .documents
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("MemoryStore")
            .field("entity_types", &documents.len())
            .field("available", &self.available.load(Ordering::Relaxed))
            .finish()
    }
}
