//! UI composition services

mod button_registry;
mod form_assembler;

pub use button_registry::{derive_key, ContextualButtonRegistry};
pub use form_assembler::{FormFieldAssembler, MessageSendConfig, FORM_NAME};
