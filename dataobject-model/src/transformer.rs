/// Per-attribute value transformation applied on write and read.
///
/// A transformer registered for an attribute sees every value passed to
/// `set` before it is stored, and every stored value before `get` returns
/// it. Use this for encoding that callers should not have to repeat:
/// - Encryption or encoding of sensitive columns
/// - Normalization on write (trimming, case folding)
/// - Legacy format translation on read
///
/// Both directions default to the identity, so a write-only normalizer
/// implements `serialize` alone.
pub trait Transformer: Send + Sync {
    /// Converts a caller-supplied value into its stored form.
    /// Return `Err(reason)` to reject the write.
    fn serialize(&self, value: &str) -> Result<String, String> {
        Ok(value.to_owned())
    }

    /// Converts a stored value back into the form callers see.
    fn deserialize(&self, stored: &str) -> Result<String, String> {
        Ok(stored.to_owned())
    }
}

/// A [`Transformer`] assembled from two closures.
pub struct FnTransformer<S, D> {
    serialize: S,
    deserialize: D,
}

impl<S, D> FnTransformer<S, D>
where
    S: Fn(&str) -> Result<String, String> + Send + Sync,
    D: Fn(&str) -> Result<String, String> + Send + Sync,
{
    /// Pairs a write-side and a read-side function.
    pub fn new(serialize: S, deserialize: D) -> Self {
        Self {
            serialize,
            deserialize,
        }
    }
}

impl<S, D> Transformer for FnTransformer<S, D>
where
    S: Fn(&str) -> Result<String, String> + Send + Sync,
    D: Fn(&str) -> Result<String, String> + Send + Sync,
{
    fn serialize(&self, value: &str) -> Result<String, String> {
        (self.serialize)(value)
    }

    fn deserialize(&self, stored: &str) -> Result<String, String> {
        (self.deserialize)(stored)
    }
}
