use crate::codec;
use crate::{DataObjectBuilder, ModelError, ModelResult, Transformer};
use dataobject_types::{AttributeValue, Attributes, ID_KEY, IdGenerator, UuidV7Generator};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// A flat set of string attributes with change tracking.
///
/// Every attribute written through [`set`](Self::set) is recorded twice: in
/// the current data and in the changed-since-checkpoint data. Callers that
/// persist partial updates write [`data_changed`](Self::data_changed) and
/// then call [`mark_clean`](Self::mark_clean).
///
/// Objects loaded from existing data ([`from_data`](Self::from_data),
/// [`from_json`](Self::from_json), [`from_binary`](Self::from_binary)) start
/// clean. Fresh objects ([`new`](Self::new)) start dirty, since their
/// generated id has never been stored.
///
/// `DataObject::default()` is the empty zero value with no id; use a
/// constructor to get a usable object.
///
/// There is no internal locking: mutation takes `&mut self`, so sharing an
/// object across threads needs an external lock.
#[derive(Default, Clone)]
pub struct DataObject {
    data: Attributes,
    data_changed: Attributes,
    transformers: HashMap<String, Arc<dyn Transformer>>,
}

impl DataObject {
    /// Creates an object with a fresh UUID v7 id. The object is dirty.
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(&UuidV7Generator)
    }

    /// Creates an object whose id comes from `generator`. The object is dirty.
    #[must_use]
    pub fn with_generator(generator: &dyn IdGenerator) -> Self {
        let mut object = Self::default();
        object.set_id(generator.generate());
        object
    }

    /// Creates a clean object holding existing data, id included.
    #[must_use]
    pub fn from_data(data: Attributes) -> Self {
        trace!(attributes = data.len(), "Hydrating data object");
        Self {
            data,
            ..Self::default()
        }
    }

    /// Creates a clean object from a JSON object.
    ///
    /// The payload must be a non-empty JSON object with an `"id"` key. Values
    /// of any JSON type are converted to attribute strings; numbers always
    /// take the four-decimal float form.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        let data = codec::decode_json(json).inspect_err(|e| {
            debug!(error = %e, "Rejected data object json");
        })?;
        Ok(Self::from_data(data))
    }

    /// Creates a clean object from bytes produced by [`to_binary`](Self::to_binary).
    pub fn from_binary(bytes: &[u8]) -> ModelResult<Self> {
        let data = codec::decode_binary(bytes).inspect_err(|e| {
            debug!(error = %e, len = bytes.len(), "Rejected data object binary payload");
        })?;
        Ok(Self::from_data(data))
    }

    /// Starts a [`DataObjectBuilder`] for objects that need transformers or
    /// a custom id generator.
    #[must_use]
    pub fn builder() -> DataObjectBuilder {
        DataObjectBuilder::default()
    }

    // ── Identity ─────────────────────────────────────────────────

    /// Returns the id, or an empty string if none was ever set.
    #[must_use]
    pub fn id(&self) -> &str {
        self.data.get(ID_KEY).map_or("", String::as_str)
    }

    /// Sets the id and marks it dirty.
    ///
    /// The id never passes through a transformer, so this cannot fail.
    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.write(ID_KEY.to_owned(), id.into());
        self
    }

    // ── Attributes ───────────────────────────────────────────────

    /// Returns all current attributes.
    #[must_use]
    pub fn data(&self) -> &Attributes {
        &self.data
    }

    /// Returns whether `key` is present, even with an empty value.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Returns the value of `key`, passed through its transformer if any.
    ///
    /// A missing key reads as an empty string.
    pub fn get(&self, key: &str) -> ModelResult<String> {
        let Some(stored) = self.data.get(key) else {
            return Ok(String::new());
        };
        match self.transformers.get(key) {
            Some(t) => t.deserialize(stored).map_err(|reason| {
                debug!(key = %key, reason = %reason, "Transformer rejected stored value");
                ModelError::Transform {
                    key: key.to_owned(),
                    reason,
                }
            }),
            None => Ok(stored.clone()),
        }
    }

    /// Stores `value` under `key` and marks it dirty.
    ///
    /// If a transformer is registered for `key`, its serialized output is
    /// stored instead; a transformer failure leaves the object untouched.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> ModelResult<()> {
        let key = key.into();
        let value = self.serialize_value(&key, value.into())?;
        self.write(key, value);
        Ok(())
    }

    /// Converts `value` to its attribute string, then behaves like [`set`](Self::set).
    pub fn set_value<V: AttributeValue + ?Sized>(
        &mut self,
        key: impl Into<String>,
        value: &V,
    ) -> ModelResult<()> {
        self.set(key, value.to_attribute())
    }

    /// Applies [`set`](Self::set) to every entry.
    ///
    /// All values are transformed before any is written, so one failing
    /// entry leaves the whole object unchanged.
    pub fn set_data(&mut self, data: Attributes) -> ModelResult<()> {
        let staged = data
            .into_iter()
            .map(|(key, value)| {
                let value = self.serialize_value(&key, value)?;
                Ok((key, value))
            })
            .collect::<ModelResult<Vec<_>>>()?;
        for (key, value) in staged {
            self.write(key, value);
        }
        Ok(())
    }

    /// Replaces all attributes without marking anything dirty.
    ///
    /// Values are taken as already stored, so transformers are not applied.
    /// A pending change survives only if the new data holds the same value
    /// under the same key; every other pending change is dropped.
    pub fn hydrate(&mut self, data: Attributes) {
        trace!(attributes = data.len(), "Hydrating data object");
        self.data_changed
            .retain(|key, value| data.get(key) == Some(&*value));
        self.data = data;
    }

    // ── Change tracking ──────────────────────────────────────────

    /// Returns the attributes changed since the last checkpoint.
    #[must_use]
    pub fn data_changed(&self) -> &Attributes {
        &self.data_changed
    }

    /// Returns true if any attribute changed since the last checkpoint.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.data_changed.is_empty()
    }

    /// Forgets all pending changes. Current values are kept.
    pub fn mark_clean(&mut self) {
        self.data_changed.clear();
    }

    // ── Transformers ─────────────────────────────────────────────

    /// Registers `transformer` for `key`.
    ///
    /// Registration is permanent: a second registration for the same key
    /// fails and the first transformer stays active. The `id` attribute
    /// cannot carry a transformer. Values already stored are not rewritten.
    pub fn register_transformer(
        &mut self,
        key: impl Into<String>,
        transformer: Arc<dyn Transformer>,
    ) -> ModelResult<()> {
        let key = key.into();
        if key == ID_KEY {
            return Err(ModelError::ReservedAttribute(key));
        }
        if self.transformers.contains_key(&key) {
            return Err(ModelError::DuplicateTransformer(key));
        }
        trace!(key = %key, "Registered transformer");
        self.transformers.insert(key, transformer);
        Ok(())
    }

    /// Returns true if a transformer is registered for `key`.
    #[must_use]
    pub fn has_transformer(&self, key: &str) -> bool {
        self.transformers.contains_key(key)
    }

    // ── Encoding ─────────────────────────────────────────────────

    /// Encodes the current attributes as a flat JSON object of strings.
    pub fn to_json(&self) -> ModelResult<String> {
        codec::encode_json(&self.data)
    }

    /// Encodes the current attributes in the binary exchange format.
    pub fn to_binary(&self) -> ModelResult<Vec<u8>> {
        codec::encode_binary(&self.data)
    }

    fn serialize_value(&self, key: &str, value: String) -> ModelResult<String> {
        match self.transformers.get(key) {
            Some(t) => Transformer::serialize(t.as_ref(), &value).map_err(|reason| {
                debug!(key = %key, reason = %reason, "Transformer rejected value");
                ModelError::Transform {
                    key: key.to_owned(),
                    reason,
                }
            }),
            None => Ok(value),
        }
    }

    fn write(&mut self, key: String, value: String) {
        self.data_changed.insert(key.clone(), value.clone());
        self.data.insert(key, value);
    }
}

impl fmt::Debug for DataObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut transformed: Vec<&String> = self.transformers.keys().collect();
        transformed.sort();
        f.debug_struct("DataObject")
            .field("data", &self.data)
            .field("data_changed", &self.data_changed)
            .field("transformed", &transformed)
            .finish()
    }
}

/// Serializes as the flat attribute map, the same shape as [`DataObject::to_json`].
impl Serialize for DataObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}
