use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Resource;

/// Shared handle to one collection. Readers take the read lock, every
/// mutation takes the write lock for the whole scan-and-modify step.
pub type Collection<R> = Arc<RwLock<RecordList<R>>>;

pub fn collection<R: Resource>(records: Vec<R>) -> Collection<R> {
    Arc::new(RwLock::new(RecordList::new(records)))
}

/// Ordered in-memory records. Insertion order is display order; lookups are
/// linear and the first matching id wins.
#[derive(Debug, Clone)]
pub struct RecordList<R> {
    records: Vec<R>,
}

impl<R> Default for RecordList<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Resource> RecordList<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    pub fn all(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Id for the next append: one past the id of the last element, or 1.
    ///
    /// Only the tail is consulted, so removing the last record frees its id
    /// for the next create.
    pub fn next_id(&self) -> i64 {
        self.records
            .last()
            .map_or(1, |last| last.id().wrapping_add(1))
    }

    /// Append `record` under a freshly assigned id, discarding whatever id it
    /// carried. Returns the stored record.
    pub fn create(&mut self, mut record: R) -> R {
        record.set_id(self.next_id());
        self.records.push(record.clone());
        record
    }

    pub fn get(&self, id: i64) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Replace the whole record stored under `id`, forcing the id back onto
    /// the replacement. `None` when nothing matches.
    pub fn replace(&mut self, id: i64, mut record: R) -> Option<R> {
        let slot = self.records.iter_mut().find(|r| r.id() == id)?;
        record.set_id(id);
        *slot = record.clone();
        Some(record)
    }

    /// Remove the first record with `id`, keeping the others in order.
    pub fn remove(&mut self, id: i64) -> Option<R> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(index))
    }
}
