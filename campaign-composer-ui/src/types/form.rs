//! Declarative form field types
//!
//! A field spec is data handed to the host form layer; rendering and the
//! full validation pipeline live there, not here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{UiError, UiResult};

/// Widget backing a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetType {
    /// Select populated with the available marketing messages
    MessageList,
    /// Plain action button
    Button,
}

/// Declarative validation constraint attached to a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Constraint {
    /// Value must be present and non-blank at submission time
    NotBlank {
        /// User-facing message on violation
        message: String,
    },
}

impl Constraint {
    /// Evaluate the constraint against a submitted value
    pub fn evaluate(&self, value: Option<&str>) -> UiResult<()> {
        match self {
            Self::NotBlank { message } => {
                if value.is_some_and(|v| !v.trim().is_empty()) {
                    Ok(())
                } else {
                    Err(UiError::ValidationError(message.clone()))
                }
            }
        }
    }
}

/// Descriptor for one form field or button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Field name within the form
    pub name: String,

    /// Widget backing the field
    pub widget: WidgetType,

    /// User-facing label
    pub label: String,

    /// Renderer attributes (CSS class, onclick, icon, tooltip, ...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, serde_json::Value>,

    /// Constraints checked at submission time
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,

    /// Whether a value must be supplied
    #[serde(default)]
    pub required: bool,

    /// Whether the field accepts multiple values
    #[serde(default)]
    pub multiple: bool,

    /// Whether the widget renders disabled
    #[serde(default)]
    pub disabled: bool,
}

impl FieldDescriptor {
    /// Create a field descriptor with defaults
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        widget: WidgetType,
        label: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            widget,
            label: label.into(),
            attributes: BTreeMap::new(),
            constraints: Vec::new(),
            required: false,
            multiple: false,
            disabled: false,
        }
    }

    /// Set a renderer attribute
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Attach a constraint
    #[must_use]
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Mark the field required
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Mark the widget disabled
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Ordered sequence of field descriptors produced by an assembler
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormFieldSpec(Vec<FieldDescriptor>);

impl FormFieldSpec {
    /// Create an empty spec
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, keeping declaration order
    pub fn push(&mut self, field: FieldDescriptor) {
        self.0.push(field);
    }

    /// Fields in declaration order
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.0
    }

    /// Look up a field by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.0.iter().find(|f| f.name == name)
    }

    /// Number of fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the spec is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for FormFieldSpec {
    type Item = FieldDescriptor;
    type IntoIter = std::vec::IntoIter<FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
