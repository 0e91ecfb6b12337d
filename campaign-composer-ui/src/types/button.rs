//! Button descriptor types
//!
//! A button is a plain attribute bag, not a widget instance. Recognized
//! fields carry identity and ordering; everything else (CSS class, click
//! handler, disabled flag) is renderer-specific and kept in the open
//! attribute map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Confirmation dialog descriptor nested inside a button
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmDescriptor {
    /// Confirm button caption
    #[serde(skip_serializing_if = "Option::is_none")]
    pub btn_text: Option<String>,

    /// Template used to render the dialog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Icon CSS class shown in the dialog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_class: Option<String>,
}

/// Descriptor for one contextual UI button
///
/// No uniqueness constraint on content; identity is derived from
/// `btn_text`/`confirm`/`icon_class` plus the route context (see
/// [`crate::services::derive_key`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonDescriptor {
    /// Button caption
    #[serde(skip_serializing_if = "Option::is_none")]
    pub btn_text: Option<String>,

    /// Icon CSS class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_class: Option<String>,

    /// Confirmation dialog shown before the action runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmDescriptor>,

    /// Render ordering hint, higher renders first
    #[serde(default)]
    pub priority: i32,

    /// Renderer-specific attributes (CSS class, onclick, disabled, ...)
    #[serde(flatten)]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl ButtonDescriptor {
    /// Create an empty descriptor
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the button caption
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.btn_text = Some(text.into());
        self
    }

    /// Set the icon CSS class
    #[must_use]
    pub fn with_icon(mut self, icon_class: impl Into<String>) -> Self {
        self.icon_class = Some(icon_class.into());
        self
    }

    /// Attach a confirmation dialog
    #[must_use]
    pub fn with_confirm(mut self, confirm: ConfirmDescriptor) -> Self {
        self.confirm = Some(confirm);
        self
    }

    /// Set the render priority
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Set a renderer-specific attribute
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_priority_is_zero() {
        assert_eq!(ButtonDescriptor::new().priority, 0);
    }

    #[test]
    fn missing_priority_deserializes_to_zero() {
        let button: ButtonDescriptor =
            serde_json::from_str(r#"{"btnText": "Delete"}"#).unwrap();
        assert_eq!(button.priority, 0);
        assert_eq!(button.btn_text.as_deref(), Some("Delete"));
    }

    #[test]
    fn unrecognized_fields_land_in_attributes() {
        let button: ButtonDescriptor = serde_json::from_str(
            r#"{"btnText": "Delete", "attr": {"class": "btn btn-danger"}, "primary": true}"#,
        )
        .unwrap();
        assert_eq!(button.attributes.len(), 2);
        assert_eq!(button.attributes["primary"], serde_json::Value::Bool(true));
    }

    #[test]
    fn serde_roundtrip() {
        let button = ButtonDescriptor::new()
            .with_text("Delete")
            .with_icon("fa fa-trash")
            .with_priority(5)
            .with_attr("class", "btn btn-danger")
            .with_confirm(ConfirmDescriptor {
                btn_text: Some("Confirm".to_string()),
                template: Some("confirm-dialog".to_string()),
                icon_class: None,
            });

        let json = serde_json::to_string(&button).unwrap();
        let parsed: ButtonDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(button, parsed);
    }

    #[test]
    fn camel_case_field_names() {
        let button = ButtonDescriptor::new().with_text("x").with_icon("y");
        let json = serde_json::to_value(&button).unwrap();
        assert!(json.get("btnText").is_some());
        assert!(json.get("iconClass").is_some());
    }
}
