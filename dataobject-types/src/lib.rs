//! Core type definitions for DataObject.
//!
//! This crate holds the storage-agnostic building blocks the container is
//! made of:
//! - Id generation behind the [`IdGenerator`] capability (UUID v7 and
//!   human-readable timestamp ids)
//! - The value-to-string conversion contract, [`AttributeValue`]
//!
//! The container itself, its dirty tracking and its codecs live in
//! `dataobject-model`.

mod ids;
mod value;

pub use ids::{HumanIdGenerator, IdGenerator, UuidV7Generator};
pub use value::{AttributeValue, attributes_from_json, to_attributes};

use std::collections::HashMap;

/// A flat attribute set: attribute name to string value.
pub type Attributes = HashMap<String, String>;

/// Name of the reserved attribute holding an object's identifier.
pub const ID_KEY: &str = "id";
