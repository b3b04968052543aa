//! Shared test helpers for data object tests.

#![allow(dead_code)]

use dataobject_model::{Attributes, DataObject, FnTransformer, IdGenerator, Record, Transformer};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Installs a tracing subscriber honoring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builds an attribute map from string pairs.
pub fn attrs(pairs: &[(&str, &str)]) -> Attributes {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Returns a generator yielding `prefix-0`, `prefix-1`, ...
pub fn sequence(prefix: &'static str) -> Arc<dyn IdGenerator> {
    let counter = AtomicUsize::new(0);
    Arc::new(move || format!("{prefix}-{}", counter.fetch_add(1, Ordering::SeqCst)))
}

/// Reverses the string on write and on read.
pub fn reversing() -> Arc<dyn Transformer> {
    let reverse = |v: &str| -> Result<String, String> { Ok(v.chars().rev().collect()) };
    Arc::new(FnTransformer::new(reverse, reverse))
}

/// Accepts only ASCII digits on write.
pub fn digits_only() -> Arc<dyn Transformer> {
    struct Digits;

    impl Transformer for Digits {
        fn serialize(&self, value: &str) -> Result<String, String> {
            if value.chars().all(|c| c.is_ascii_digit()) {
                Ok(value.to_owned())
            } else {
                Err(format!("{value:?} is not numeric"))
            }
        }
    }

    Arc::new(Digits)
}

/// Fails every read.
pub fn unreadable() -> Arc<dyn Transformer> {
    Arc::new(FnTransformer::new(
        |v: &str| Ok(v.to_owned()),
        |_: &str| Err("corrupt".to_string()),
    ))
}

/// Domain wrapper with typed accessors, built by embedding a data object.
#[derive(Debug, Clone)]
pub struct User {
    inner: DataObject,
}

impl User {
    pub fn new() -> Self {
        Self {
            inner: DataObject::new(),
        }
    }

    pub fn first_name(&self) -> String {
        self.get("first_name").unwrap_or_default()
    }

    pub fn set_first_name(&mut self, name: &str) -> &mut Self {
        self.set("first_name", name).expect("first_name has no transformer");
        self
    }

    pub fn last_name(&self) -> String {
        self.get("last_name").unwrap_or_default()
    }

    pub fn set_last_name(&mut self, name: &str) -> &mut Self {
        self.set("last_name", name).expect("last_name has no transformer");
        self
    }
}

impl Record for User {
    fn object(&self) -> &DataObject {
        &self.inner
    }

    fn object_mut(&mut self) -> &mut DataObject {
        &mut self.inner
    }
}

impl From<DataObject> for User {
    fn from(inner: DataObject) -> Self {
        Self { inner }
    }
}
