//! `DictionaryWrapper` schema: a single optional string dictionary.

use autorest_model_runtime::dictionary::{read_dictionary, serialize_dictionary, string_entries};
use autorest_model_runtime::{ExpectedType, FieldPath, MapperOptions, Model, ValidationError};
use serde_json::{Map, Value};

const DEFAULT_PROGRAM: &str = "defaultProgram";

/// Wire shape: `{ "defaultProgram": { "<key>": "<string>", ... } }`.
///
/// Values are kept as raw JSON so that whatever was read can be written back
/// verbatim. Reading never checks value types; [`Model::serialize`] requires
/// every non-null value to be a string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DictionaryWrapper {
    default_program: Option<Map<String, Value>>,
}

impl DictionaryWrapper {
    /// Builds a wrapper from a plain object. See [`Model::from_parameters`].
    pub fn new(parameters: Option<&Value>) -> Self {
        Self {
            default_program: read_dictionary(parameters, DEFAULT_PROGRAM),
        }
    }

    /// `None` when the property is not set, which differs from an empty map.
    pub fn default_program(&self) -> Option<&Map<String, Value>> {
        self.default_program.as_ref()
    }

    /// Replaces the whole `defaultProgram` dictionary.
    pub fn with_default_program<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.default_program = Some(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// String and `null` entries of `defaultProgram`, skipping any others.
    pub fn default_program_strings(&self) -> Option<impl Iterator<Item = (&str, Option<&str>)>> {
        self.default_program.as_ref().map(string_entries)
    }
}

impl Model for DictionaryWrapper {
    fn from_parameters(parameters: Option<&Value>) -> Self {
        Self::new(parameters)
    }

    fn serialize_with(&self, options: &MapperOptions) -> Result<Value, ValidationError> {
        let mut payload = Map::new();
        if let Some(entries) = &self.default_program {
            let value = serialize_dictionary(
                &FieldPath::property(DEFAULT_PROGRAM),
                entries,
                ExpectedType::String,
                options,
            )?;
            payload.insert(DEFAULT_PROGRAM.to_string(), Value::Object(value));
        }
        Ok(Value::Object(payload))
    }

    fn deserialize(&mut self, instance: Option<&Value>) -> &mut Self {
        if let Some(entries) = read_dictionary(instance, DEFAULT_PROGRAM) {
            self.default_program = Some(entries);
        }
        self
    }
}

impl serde::Serialize for DictionaryWrapper {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let payload = Model::serialize(self).map_err(<S::Error as serde::ser::Error>::custom)?;
        serde::Serialize::serialize(&payload, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for DictionaryWrapper {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let instance = <Value as serde::Deserialize>::deserialize(deserializer)?;
        let mut model = Self::default();
        Model::deserialize(&mut model, Some(&instance));
        Ok(model)
    }
}
