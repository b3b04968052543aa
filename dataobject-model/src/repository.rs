//! Persistence seam for data objects.
//!
//! [`Repository`] is what application code programs against; storage
//! backends implement it outside this crate. [`MemoryRepository`] is the
//! reference implementation and shows the intended write protocol: inserts
//! store the full attribute set, updates write only
//! [`Record::data_changed`], and both end with [`Record::mark_clean`].

use crate::{DataObject, ModelError, ModelResult, Record};
use dataobject_types::{Attributes, ID_KEY};
use std::collections::BTreeMap;
use std::marker::PhantomData;
use tracing::debug;

/// Stores and loads records by id.
pub trait Repository<R: Record> {
    /// Inserts a new record and marks it clean.
    fn create(&mut self, record: &mut R) -> ModelResult<()>;

    /// Loads the record with `id`, clean.
    fn find(&self, id: &str) -> ModelResult<Option<R>>;

    /// Loads every record, ordered by id.
    fn list(&self) -> ModelResult<Vec<R>>;

    /// Writes the record's pending changes and marks it clean.
    ///
    /// Fails with [`ModelError::IdChanged`] if the id itself is a pending
    /// change: a record cannot be moved to another id by an update.
    fn update(&mut self, record: &mut R) -> ModelResult<()>;

    /// Removes the record with `id`. Returns whether it existed.
    fn delete(&mut self, id: &str) -> ModelResult<bool>;
}

/// In-memory [`Repository`] keeping one attribute row per id.
pub struct MemoryRepository<R> {
    rows: BTreeMap<String, Attributes>,
    _record: PhantomData<fn() -> R>,
}

impl<R> MemoryRepository<R> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            _record: PhantomData,
        }
    }

    /// Returns the stored row for `id`, as a backend would see it.
    #[must_use]
    pub fn row(&self, id: &str) -> Option<&Attributes> {
        self.rows.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<R> Default for MemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Repository<R> for MemoryRepository<R>
where
    R: Record + From<DataObject>,
{
    fn create(&mut self, record: &mut R) -> ModelResult<()> {
        let id = record.id().to_owned();
        if self.rows.contains_key(&id) {
            return Err(ModelError::AlreadyExists(id));
        }
        debug!(id = %id, attributes = record.data().len(), "Inserting record");
        self.rows.insert(id, record.data().clone());
        record.mark_clean();
        Ok(())
    }

    fn find(&self, id: &str) -> ModelResult<Option<R>> {
        Ok(self
            .rows
            .get(id)
            .map(|row| R::from(DataObject::from_data(row.clone()))))
    }

    fn list(&self) -> ModelResult<Vec<R>> {
        Ok(self
            .rows
            .values()
            .map(|row| R::from(DataObject::from_data(row.clone())))
            .collect())
    }

    fn update(&mut self, record: &mut R) -> ModelResult<()> {
        // Rows are keyed by the id the record was stored under, which a
        // pending id change no longer names.
        if record.data_changed().contains_key(ID_KEY) {
            return Err(ModelError::IdChanged(record.id().to_owned()));
        }
        let Some(row) = self.rows.get_mut(record.id()) else {
            return Err(ModelError::NotFound(record.id().to_owned()));
        };
        if !record.is_dirty() {
            return Ok(());
        }
        debug!(id = %record.id(), changed = record.data_changed().len(), "Updating record");
        row.extend(
            record
                .data_changed()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        record.mark_clean();
        Ok(())
    }

    fn delete(&mut self, id: &str) -> ModelResult<bool> {
        Ok(self.rows.remove(id).is_some())
    }
}
