//! Collaborator seams abstracted behind traits

mod key_source;
mod url_generator;

pub use key_source::{FallbackKeySource, SequenceKeySource, UuidKeySource};
pub use url_generator::{QueryUrlGenerator, UrlGenerator};
