//! Change-tracking data container for DataObject.
//!
//! Defines the types application code builds its entities on:
//! - [`DataObject`]: flat string attributes, an id, dirty tracking, and
//!   JSON and binary encodings
//! - [`Transformer`]: optional per-attribute encode/decode hook
//! - [`Record`]: the capability domain types get by embedding a `DataObject`
//! - [`Repository`]: the persistence seam, with [`MemoryRepository`] as the
//!   reference implementation
//!
//! The container never performs I/O. Callers decide what to do with
//! [`DataObject::data`] and [`DataObject::data_changed`], typically writing
//! only the changed columns and then calling [`DataObject::mark_clean`].

mod builder;
mod codec;
mod error;
mod object;
mod record;
mod repository;
mod transformer;

pub use builder::DataObjectBuilder;
pub use error::{ModelError, ModelResult};
pub use object::DataObject;
pub use record::Record;
pub use repository::{MemoryRepository, Repository};
pub use transformer::{FnTransformer, Transformer};

pub use dataobject_types::{
    AttributeValue, Attributes, HumanIdGenerator, ID_KEY, IdGenerator, UuidV7Generator,
};
