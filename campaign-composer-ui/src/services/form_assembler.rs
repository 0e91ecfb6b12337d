//! "Send marketing message" form assembly
//!
//! Produces the declarative field list for the message-send form: a
//! required message select, plus create/edit/preview action buttons when
//! the host form embeds this one and wants inline editing controls.

use crate::error::UiResult;
use crate::traits::UrlGenerator;
use crate::types::{Constraint, FieldDescriptor, FormFieldSpec, WidgetType};

/// Form type name registered with the host form layer
pub const FORM_NAME: &str = "message_send";

/// Options for one assembly run
#[derive(Debug, Clone, Default)]
pub struct MessageSendConfig {
    /// Select-element token the create/edit windows update on save.
    /// `Some` also switches the auxiliary create/edit/preview buttons on.
    pub update_select: Option<String>,

    /// Id of the email currently bound to the form data, if any.
    /// Edit/preview buttons render disabled without one.
    pub bound_email_id: Option<String>,
}

/// Assembler for the message-send form fields (stateless)
pub struct FormFieldAssembler;

impl FormFieldAssembler {
    /// Create an assembler instance
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Build the field spec for one form render
    ///
    /// Pure composition: the only side effect is asking `urls` for the
    /// button window URLs, and its errors are propagated as-is.
    pub fn build(
        &self,
        config: &MessageSendConfig,
        urls: &dyn UrlGenerator,
    ) -> UiResult<FormFieldSpec> {
        let mut spec = FormFieldSpec::new();

        spec.push(
            FieldDescriptor::new(
                "marketingMessage",
                WidgetType::MessageList,
                "Select a message",
            )
            .with_attr("class", "form-control")
            .with_attr("tooltip", "Choose the marketing message to send.")
            .required(true)
            .with_constraint(Constraint::NotBlank {
                message: "Please choose a message to send.".to_string(),
            }),
        );

        if let Some(token) = config.update_select.as_deref() {
            let create_url = urls.generate(
                "message.create",
                &[("contentOnly", "1"), ("updateSelect", token)],
            )?;
            spec.push(
                FieldDescriptor::new("newMessageButton", WidgetType::Button, "Create new message")
                    .with_attr("class", "btn btn-primary btn-nospin")
                    .with_attr("onclick", open_window_handler(&create_url))
                    .with_attr("icon", "fa fa-plus"),
            );

            let edit_url = urls.generate(
                "email.edit",
                &[
                    ("objectId", "emailId"),
                    ("contentOnly", "1"),
                    ("updateSelect", token),
                ],
            )?;
            spec.push(
                FieldDescriptor::new("editMessageButton", WidgetType::Button, "Edit message")
                    .with_attr("class", "btn btn-primary btn-nospin")
                    .with_attr("onclick", open_window_handler(&edit_url))
                    .with_attr("icon", "fa fa-edit")
                    .disabled(config.bound_email_id.is_none()),
            );

            let preview_url = urls.generate("email.preview", &[("objectId", "emailId")])?;
            spec.push(
                FieldDescriptor::new(
                    "previewMessageButton",
                    WidgetType::Button,
                    "Preview message",
                )
                .with_attr("class", "btn btn-primary btn-nospin")
                .with_attr("onclick", open_window_handler(&preview_url))
                .with_attr("icon", "fa fa-external-link")
                .disabled(config.bound_email_id.is_none()),
            );
        }

        Ok(spec)
    }
}

impl Default for FormFieldAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Click handler opening a modal window on the generated URL
fn open_window_handler(url: &str) -> String {
    format!("openWindow({{\"windowUrl\": \"{url}\"}})")
}
