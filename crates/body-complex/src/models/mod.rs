//! Models of the body-complex service, one module per schema.

mod dictionary_wrapper;

pub use dictionary_wrapper::DictionaryWrapper;
