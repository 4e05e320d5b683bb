//! autorest-model-runtime - runtime support for generated REST models.
//!
//! Generated models implement [`Model`] and lean on the mappers in
//! [`dictionary`] to move properties between the model and its JSON payload.
//! Serialization is strict and reports a [`ValidationError`] naming the
//! offending [`FieldPath`]; the read paths are lenient and never fail.

pub mod dictionary;
pub mod error;
pub mod model;
pub mod options;
pub mod path;

pub use error::{ExpectedType, ModelError, ValidationError};
pub use model::Model;
pub use options::MapperOptions;
pub use path::{FieldPath, Segment};
