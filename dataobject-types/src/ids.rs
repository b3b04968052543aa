//! Identifier generation for data objects.
//!
//! A data object's id is an opaque string. Fresh objects ask an
//! [`IdGenerator`] for one instead of calling a fixed global, so tests can
//! inject deterministic sequences.

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

/// Produces unique identifier strings for new data objects.
///
/// Any `Fn() -> String` closure is a generator, which keeps test doubles
/// to a single line.
pub trait IdGenerator: Send + Sync {
    /// Returns a new identifier, distinct from every previous one.
    fn generate(&self) -> String;
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn generate(&self) -> String {
        self()
    }
}

/// Generates UUID v7 strings, which embed a timestamp for natural ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn generate(&self) -> String {
        Uuid::now_v7().to_string()
    }
}

/// Generates 32-digit numeric ids that read as a UTC timestamp.
///
/// Layout: `YYYYMMDDhhmmss` + 9 digits of nanoseconds + 9 random digits.
/// Ids sort by creation time down to the nanosecond.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HumanIdGenerator;

impl HumanIdGenerator {
    /// Length of every generated id.
    pub const LEN: usize = 32;
}

impl IdGenerator for HumanIdGenerator {
    fn generate(&self) -> String {
        let stamp = Utc::now().format("%Y%m%d%H%M%S%9f");
        let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
        format!("{stamp}{suffix:09}")
    }
}
