use crate::{DataObject, ModelResult, Transformer};
use dataobject_types::{Attributes, IdGenerator, UuidV7Generator};
use std::sync::Arc;

/// Configures how data objects are constructed.
///
/// ```
/// use dataobject_model::{DataObject, FnTransformer};
/// use std::sync::Arc;
///
/// let lower = FnTransformer::new(|v| Ok(v.to_lowercase()), |v| Ok(v.to_owned()));
/// let mut user = DataObject::builder()
///     .id_generator(Arc::new(|| "user-1".to_string()))
///     .transformer("email", Arc::new(lower))
///     .build()
///     .unwrap();
///
/// user.set("email", "Jon@Example.COM").unwrap();
/// assert_eq!(user.id(), "user-1");
/// assert_eq!(user.get("email").unwrap(), "jon@example.com");
/// ```
#[derive(Default, Clone)]
pub struct DataObjectBuilder {
    id_generator: Option<Arc<dyn IdGenerator>>,
    transformers: Vec<(String, Arc<dyn Transformer>)>,
}

impl DataObjectBuilder {
    /// Sets the generator used by [`build`](Self::build). Defaults to UUID v7.
    #[must_use]
    pub fn id_generator(mut self, generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = Some(generator);
        self
    }

    /// Queues a transformer registration. Conflicts surface at build time.
    #[must_use]
    pub fn transformer(
        mut self,
        key: impl Into<String>,
        transformer: Arc<dyn Transformer>,
    ) -> Self {
        self.transformers.push((key.into(), transformer));
        self
    }

    /// Builds a fresh, dirty object with a generated id.
    pub fn build(self) -> ModelResult<DataObject> {
        let generator: Arc<dyn IdGenerator> = match &self.id_generator {
            Some(generator) => Arc::clone(generator),
            None => Arc::new(UuidV7Generator),
        };
        let mut object = self.register_into(DataObject::default())?;
        object.set_id(generator.generate());
        Ok(object)
    }

    /// Builds a clean object holding existing data.
    ///
    /// The data is taken as already stored: transformers apply only to
    /// later reads and writes.
    pub fn build_from_data(self, data: Attributes) -> ModelResult<DataObject> {
        self.register_into(DataObject::from_data(data))
    }

    fn register_into(self, mut object: DataObject) -> ModelResult<DataObject> {
        for (key, transformer) in self.transformers {
            object.register_transformer(key, transformer)?;
        }
        Ok(object)
    }
}
