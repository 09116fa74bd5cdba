// File: src/field.rs
// Purpose: Field catalog types and per-render default resolution

use serde::Deserialize;

use crate::config::FormTheme;
use crate::validation::{InputConstraints, Schema};

/// Render variant for a field, parsed from the descriptor's `type` tag.
///
/// Unknown tags fall back to `Text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Email,
    Password,
    Text,
}

impl FieldType {
    /// Parse a type tag string
    pub fn parse(tag: &str) -> Self {
        match tag {
            "email" => FieldType::Email,
            "password" => FieldType::Password,
            _ => FieldType::Text,
        }
    }

    /// Resolve the variant for a descriptor: the explicit `type` tag wins,
    /// otherwise the field name itself is tried as a tag.
    pub fn for_field(field_name: &str, tag: Option<&str>) -> Self {
        match tag {
            Some(tag) => Self::parse(tag),
            None => Self::parse(field_name),
        }
    }
}

/// Display options for one field. Every entry is independently optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldOptions {
    #[serde(default)]
    pub label: Option<String>,

    #[serde(rename = "type", default)]
    pub field_type: Option<String>,

    #[serde(default)]
    pub placeholder: Option<String>,

    #[serde(default)]
    pub description_message: Option<String>,

    #[serde(default)]
    pub error_message: Option<String>,

    #[serde(default)]
    pub required: bool,
}

/// Per-slot class overrides, appended after the theme's defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldClasses {
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub input: Option<String>,

    #[serde(default)]
    pub description_message: Option<String>,

    #[serde(default)]
    pub error_message: Option<String>,
}

/// One entry in the field catalog: which input to show and how to
/// label and decorate it. Pure data, no behavior.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldDescriptor {
    pub field_name: String,

    #[serde(default)]
    pub options: FieldOptions,

    #[serde(default)]
    pub class_names: FieldClasses,
}

impl FieldDescriptor {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            ..Self::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.options.label = Some(label.into());
        self
    }

    pub fn field_type(mut self, tag: impl Into<String>) -> Self {
        self.options.field_type = Some(tag.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.options.placeholder = Some(placeholder.into());
        self
    }

    pub fn description(mut self, message: impl Into<String>) -> Self {
        self.options.description_message = Some(message.into());
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.options.error_message = Some(message.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.options.required = true;
        self
    }

    pub fn class_names(mut self, classes: FieldClasses) -> Self {
        self.class_names = classes;
        self
    }
}

/// Slot classes with theme defaults and descriptor overrides merged.
#[derive(Debug, Clone)]
pub struct ResolvedClasses {
    pub label: String,
    pub input: String,
    pub description: String,
    pub error: String,
}

/// A descriptor with every default filled in, built once at render entry.
#[derive(Debug, Clone)]
pub struct ResolvedField {
    pub name: String,
    pub field_type: FieldType,
    pub label: Option<String>,
    pub placeholder: String,
    pub description: String,
    pub static_error: String,
    pub required: bool,
    pub constraints: InputConstraints,
    pub classes: ResolvedClasses,
}

impl ResolvedField {
    pub fn resolve(descriptor: &FieldDescriptor, theme: &FormTheme, schema: &Schema) -> Self {
        let options = &descriptor.options;
        let constraints = schema.constraints_for(&descriptor.field_name);
        let required = options.required || constraints.required;

        Self {
            name: descriptor.field_name.clone(),
            field_type: FieldType::for_field(&descriptor.field_name, options.field_type.as_deref()),
            label: options.label.clone(),
            placeholder: options.placeholder.clone().unwrap_or_default(),
            description: options.description_message.clone().unwrap_or_default(),
            static_error: options.error_message.clone().unwrap_or_default(),
            required,
            constraints,
            classes: ResolvedClasses {
                label: merge_classes(&theme.label, descriptor.class_names.label.as_deref()),
                input: merge_classes(&theme.input, descriptor.class_names.input.as_deref()),
                description: merge_classes(
                    &theme.description_message,
                    descriptor.class_names.description_message.as_deref(),
                ),
                error: merge_classes(
                    &theme.error_message,
                    descriptor.class_names.error_message.as_deref(),
                ),
            },
        }
    }
}

/// Join a base class with an optional override, skipping empty parts
pub(crate) fn merge_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => {
            if base.is_empty() {
                extra.to_string()
            } else {
                format!("{} {}", base, extra)
            }
        }
        _ => base.to_string(),
    }
}
