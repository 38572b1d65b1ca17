use crate::errors::{AppError, AppResult};
use crate::models::{Mechanic, Order, RepairJob, RouteInfo, Vehicle};
use std::sync::Mutex;

pub trait Entity: Clone {
    fn id(&self) -> &str;
}

impl Entity for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for RouteInfo {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Vehicle {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Mechanic {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for RepairJob {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Ordered in-memory collection. Callers only ever see clones; the backing
/// sequence is mutated exclusively through the methods below.
#[derive(Debug)]
pub struct EntityStore<T: Entity> {
    kind: &'static str,
    records: Mutex<Vec<T>>,
}

impl<T: Entity> EntityStore<T> {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn with_records(kind: &'static str, records: Vec<T>) -> Self {
        Self {
            kind,
            records: Mutex::new(records),
        }
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, Vec<T>>> {
        self.records
            .lock()
            .map_err(|_| AppError::Internal(format!("{} store mutex poisoned", self.kind)))
    }

    pub fn insert(&self, record: T) -> AppResult<T> {
        let mut records = self.lock()?;
        if records.iter().any(|existing| existing.id() == record.id()) {
            return Err(AppError::Validation(format!(
                "Duplicate {} id {}",
                self.kind,
                record.id()
            )));
        }
        tracing::debug!(kind = self.kind, id = record.id(), "record inserted");
        records.push(record.clone());
        Ok(record)
    }

    pub fn replace(&self, record: T) -> AppResult<T> {
        let mut records = self.lock()?;
        let Some(slot) = records.iter_mut().find(|existing| existing.id() == record.id()) else {
            return Err(AppError::NotFound(format!(
                "No {} with id {}",
                self.kind,
                record.id()
            )));
        };
        *slot = record.clone();
        Ok(record)
    }

    pub fn update<F>(&self, id: &str, mutate: F) -> AppResult<T>
    where
        F: FnOnce(&mut T),
    {
        let mut records = self.lock()?;
        let Some(slot) = records.iter_mut().find(|existing| existing.id() == id) else {
            return Err(AppError::NotFound(format!("No {} with id {}", self.kind, id)));
        };
        let mut updated = slot.clone();
        mutate(&mut updated);
        *slot = updated.clone();
        Ok(updated)
    }

    pub fn remove(&self, id: &str) -> AppResult<T> {
        let mut records = self.lock()?;
        let Some(index) = records.iter().position(|existing| existing.id() == id) else {
            return Err(AppError::NotFound(format!("No {} with id {}", self.kind, id)));
        };
        tracing::debug!(kind = self.kind, id, "record removed");
        Ok(records.remove(index))
    }

    pub fn get(&self, id: &str) -> AppResult<Option<T>> {
        let records = self.lock()?;
        Ok(records.iter().find(|existing| existing.id() == id).cloned())
    }

    pub fn all(&self) -> AppResult<Vec<T>> {
        let records = self.lock()?;
        Ok(records.clone())
    }

    pub fn len(&self) -> AppResult<usize> {
        let records = self.lock()?;
        Ok(records.len())
    }

    pub fn contains(&self, id: &str) -> AppResult<bool> {
        let records = self.lock()?;
        Ok(records.iter().any(|existing| existing.id() == id))
    }
}

#[cfg(test)]
mod tests {
    use super::{Entity, EntityStore};
    use crate::errors::AppError;

    #[derive(Debug, Clone, PartialEq)]
    struct Widget {
        id: String,
        label: String,
    }

    impl Entity for Widget {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn widget(id: &str, label: &str) -> Widget {
        Widget {
            id: id.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn insert_preserves_order_and_rejects_duplicates() {
        let store = EntityStore::new("widget");
        store.insert(widget("a", "first")).expect("insert a");
        store.insert(widget("b", "second")).expect("insert b");

        let err = store.insert(widget("a", "again")).expect_err("duplicate id");
        assert!(matches!(err, AppError::Validation(_)));

        let ids: Vec<String> = store
            .all()
            .expect("snapshot")
            .into_iter()
            .map(|w| w.id)
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn update_returns_the_new_copy_and_missing_id_is_not_found() {
        let store = EntityStore::new("widget");
        store.insert(widget("a", "first")).expect("insert");

        let updated = store
            .update("a", |w| w.label = "renamed".to_string())
            .expect("update");
        assert_eq!(updated.label, "renamed");
        assert_eq!(store.get("a").expect("get").expect("present").label, "renamed");

        let err = store
            .update("missing", |w| w.label.clear())
            .expect_err("absent id");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn snapshots_are_defensive_copies() {
        let store = EntityStore::new("widget");
        store.insert(widget("a", "first")).expect("insert");

        let mut snapshot = store.all().expect("snapshot");
        snapshot[0].label = "mutated".to_string();
        assert_eq!(store.get("a").expect("get").expect("present").label, "first");
    }

    #[test]
    fn remove_returns_the_record_and_surfaces_missing_ids() {
        let store = EntityStore::new("widget");
        store.insert(widget("a", "first")).expect("insert");

        let removed = store.remove("a").expect("remove");
        assert_eq!(removed.label, "first");
        assert_eq!(store.len().expect("len"), 0);

        let err = store.remove("a").expect_err("already gone");
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
