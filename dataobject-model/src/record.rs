use crate::{DataObject, ModelResult};
use dataobject_types::Attributes;

/// The data object capability, for domain types that embed a [`DataObject`].
///
/// Implementors only expose their embedded object; every other method is
/// provided and delegates to the [`DataObject`] method of the same name.
/// Domain types then add typed accessors as thin translations over
/// [`get`](Self::get) and [`set`](Self::set):
///
/// ```
/// use dataobject_model::{DataObject, ModelResult, Record};
///
/// struct User(DataObject);
///
/// impl Record for User {
///     fn object(&self) -> &DataObject { &self.0 }
///     fn object_mut(&mut self) -> &mut DataObject { &mut self.0 }
/// }
///
/// impl User {
///     fn first_name(&self) -> ModelResult<String> { self.get("first_name") }
///     fn set_first_name(&mut self, name: &str) -> ModelResult<()> { self.set("first_name", name) }
/// }
///
/// let mut user = User(DataObject::new());
/// user.set_first_name("Jon").unwrap();
/// assert_eq!(user.first_name().unwrap(), "Jon");
/// assert!(user.is_dirty());
/// ```
pub trait Record {
    /// The embedded data object.
    fn object(&self) -> &DataObject;

    /// The embedded data object, mutably.
    fn object_mut(&mut self) -> &mut DataObject;

    /// Returns the id, or an empty string if none was set.
    fn id(&self) -> &str {
        self.object().id()
    }

    /// Sets the id and marks it dirty.
    fn set_id(&mut self, id: &str) {
        self.object_mut().set_id(id);
    }

    /// Returns all current attributes.
    fn data(&self) -> &Attributes {
        self.object().data()
    }

    /// Returns the attributes changed since the last checkpoint.
    fn data_changed(&self) -> &Attributes {
        self.object().data_changed()
    }

    /// Returns true if any attribute changed since the last checkpoint.
    fn is_dirty(&self) -> bool {
        self.object().is_dirty()
    }

    /// Forgets all pending changes.
    fn mark_clean(&mut self) {
        self.object_mut().mark_clean();
    }

    /// Returns the value of `key`, empty if absent.
    fn get(&self, key: &str) -> ModelResult<String> {
        self.object().get(key)
    }

    /// Stores `value` under `key` and marks it dirty.
    fn set(&mut self, key: &str, value: &str) -> ModelResult<()> {
        self.object_mut().set(key, value)
    }

    /// Applies [`set`](Self::set) to every entry, all or nothing.
    fn set_data(&mut self, data: Attributes) -> ModelResult<()> {
        self.object_mut().set_data(data)
    }

    /// Replaces all attributes without marking anything dirty.
    fn hydrate(&mut self, data: Attributes) {
        self.object_mut().hydrate(data);
    }

    /// Encodes the current attributes as a JSON object.
    fn to_json(&self) -> ModelResult<String> {
        self.object().to_json()
    }

    /// Encodes the current attributes in the binary exchange format.
    fn to_binary(&self) -> ModelResult<Vec<u8>> {
        self.object().to_binary()
    }
}

impl Record for DataObject {
    fn object(&self) -> &DataObject {
        self
    }

    fn object_mut(&mut self) -> &mut DataObject {
        self
    }
}
