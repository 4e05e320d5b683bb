//! body-complex-models - generated models for the body-complex REST test
//! service.
//!
//! Each model implements [`Model`]: serialization validates property types,
//! construction and deserialization accept any input shape.

pub mod models;

pub use autorest_model_runtime::{MapperOptions, Model, ModelError, ValidationError};
pub use models::DictionaryWrapper;
