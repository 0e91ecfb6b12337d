//! Campaign Composer UI Library
//!
//! Request-scoped UI composition for a marketing-automation web
//! application, including:
//! - Form field assembly for the "send marketing message" form
//! - Contextual button registry with location/route scoped registration
//!
//! This library is platform-independent glue: routing, rendering and
//! persistence belong to the host framework and are abstracted behind
//! traits. Both components are single-use value assemblers constructed,
//! mutated and read within one request.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{UiError, UiResult};
pub use services::{ContextualButtonRegistry, FormFieldAssembler, MessageSendConfig, FORM_NAME};
pub use traits::{FallbackKeySource, UrlGenerator};
