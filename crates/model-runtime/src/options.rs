//! Serialization options.

use serde::Deserialize;

/// Options controlling how models are serialized.
///
/// Deserializable from a camelCase JSON fragment, missing fields take their
/// defaults: `{"clientSideValidation": false}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapperOptions {
    /// Reject values whose type does not match the schema. On by default.
    pub client_side_validation: bool,
}

impl Default for MapperOptions {
    fn default() -> Self {
        Self {
            client_side_validation: true,
        }
    }
}

impl MapperOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client_side_validation(mut self, enabled: bool) -> Self {
        self.client_side_validation = enabled;
        self
    }
}
