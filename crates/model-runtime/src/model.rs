use serde_json::Value;

use crate::error::{ModelError, ValidationError};
use crate::options::MapperOptions;

/// Contract shared by generated models.
///
/// Reading (`from_parameters`, `deserialize`) never fails: unexpected input
/// is ignored. Writing (`serialize`) validates and may fail.
pub trait Model: Default {
    /// Builds a model seeded from a plain object.
    fn from_parameters(parameters: Option<&Value>) -> Self;

    /// Produces the wire payload under `options`. Never mutates `self`.
    fn serialize_with(&self, options: &MapperOptions) -> Result<Value, ValidationError>;

    /// Repopulates `self` from previously serialized data.
    ///
    /// Properties missing from `instance` keep their current value.
    fn deserialize(&mut self, instance: Option<&Value>) -> &mut Self;

    fn serialize(&self) -> Result<Value, ValidationError> {
        self.serialize_with(&MapperOptions::default())
    }

    fn to_json_string(&self) -> Result<String, ModelError> {
        let payload = self.serialize()?;
        Ok(serde_json::to_string(&payload)?)
    }

    /// Parses JSON text into a fresh model. Only malformed text is an error.
    fn from_json_str(text: &str) -> Result<Self, ModelError> {
        let instance: Value = serde_json::from_str(text)?;
        let mut model = Self::default();
        model.deserialize(Some(&instance));
        Ok(model)
    }
}
