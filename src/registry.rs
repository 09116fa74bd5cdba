// File: src/registry.rs
// Purpose: Per-type field widgets and the registry that dispatches them

use std::collections::HashMap;
use std::sync::Arc;

use maud::{html, Markup};

use crate::field::{FieldType, ResolvedField};
use crate::state::FormState;

/// Capability interface for rendering one catalog field.
///
/// Every widget produces the same composition: an optional label, the
/// input bound to the form state, and description and error slots that
/// are always present, empty when there is nothing to say. Variants
/// normally only differ in the input's `type` attribute, but a widget
/// may override `render` wholesale.
pub trait FieldWidget: Send + Sync {
    /// The HTML `type` attribute for this widget's input
    fn input_type(&self) -> &'static str;

    /// Render the full field item for one descriptor
    fn render(&self, field: &ResolvedField, state: &FormState) -> Markup {
        // Live validation error wins; otherwise the descriptor's static
        // error text; otherwise the slot stays empty.
        let error_text = state
            .error(&field.name)
            .unwrap_or(field.static_error.as_str());

        html! {
            div class="form-item" {
                @if let Some(label) = &field.label {
                    label class=(field.classes.label) for=(field.name) { (label) }
                }
                input
                    type=(self.input_type())
                    name=(field.name)
                    id=(field.name)
                    class=(field.classes.input)
                    placeholder=(field.placeholder)
                    value=(state.value(&field.name))
                    minlength=[field.constraints.min_length]
                    maxlength=[field.constraints.max_length]
                    required[field.required];
                p class=(field.classes.description) { (field.description) }
                p class=(field.classes.error) { (error_text) }
            }
        }
    }
}

/// Email input widget
pub struct EmailWidget;

impl FieldWidget for EmailWidget {
    fn input_type(&self) -> &'static str {
        "email"
    }
}

/// Password input widget
pub struct PasswordWidget;

impl FieldWidget for PasswordWidget {
    fn input_type(&self) -> &'static str {
        "password"
    }
}

/// Plain text input widget, also the fallback for unknown type tags
pub struct TextWidget;

impl FieldWidget for TextWidget {
    fn input_type(&self) -> &'static str {
        "text"
    }
}

/// Registry mapping field type tags to their widgets.
pub struct WidgetRegistry {
    widgets: HashMap<FieldType, Arc<dyn FieldWidget>>,
    fallback: Arc<dyn FieldWidget>,
}

impl WidgetRegistry {
    /// Create a registry with the built-in email, password, and text widgets
    pub fn with_builtins() -> Self {
        let mut registry = Self {
            widgets: HashMap::new(),
            fallback: Arc::new(TextWidget),
        };
        registry.register(FieldType::Email, Arc::new(EmailWidget));
        registry.register(FieldType::Password, Arc::new(PasswordWidget));
        registry.register(FieldType::Text, Arc::new(TextWidget));
        registry
    }

    /// Register or replace the widget for a field type
    pub fn register(&mut self, field_type: FieldType, widget: Arc<dyn FieldWidget>) {
        self.widgets.insert(field_type, widget);
    }

    /// Get the widget for a field type, falling back to the text widget
    pub fn get(&self, field_type: FieldType) -> Arc<dyn FieldWidget> {
        self.widgets
            .get(&field_type)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormTheme;
    use crate::field::FieldDescriptor;
    use crate::validation::signup_schema;

    fn resolve(descriptor: FieldDescriptor) -> ResolvedField {
        ResolvedField::resolve(&descriptor, &FormTheme::default(), &signup_schema())
    }

    #[test]
    fn test_registry_dispatches_by_type() {
        let registry = WidgetRegistry::with_builtins();
        assert_eq!(registry.get(FieldType::Email).input_type(), "email");
        assert_eq!(registry.get(FieldType::Password).input_type(), "password");
        assert_eq!(registry.get(FieldType::Text).input_type(), "text");
    }

    #[test]
    fn test_widget_renders_label_only_when_present() {
        let state = FormState::new();
        let labeled = EmailWidget.render(&resolve(FieldDescriptor::new("email").label("Email")), &state);
        assert!(labeled.clone().into_string().contains("<label"));

        let unlabeled = EmailWidget.render(&resolve(FieldDescriptor::new("email")), &state);
        assert!(!unlabeled.into_string().contains("<label"));
    }

    #[test]
    fn test_slots_always_present() {
        let state = FormState::new();
        let html = EmailWidget
            .render(&resolve(FieldDescriptor::new("email")), &state)
            .into_string();
        assert!(html.contains(r#"<p class="form-description"></p>"#));
        assert!(html.contains(r#"<p class="form-message"></p>"#));
    }

    #[test]
    fn test_input_carries_state_value_and_constraints() {
        let mut state = FormState::new();
        state.set_value("password", "secret99");
        let html = PasswordWidget
            .render(&resolve(FieldDescriptor::new("password")), &state)
            .into_string();
        assert!(html.contains(r#"type="password""#));
        assert!(html.contains(r#"value="secret99""#));
        assert!(html.contains(r#"minlength="8""#));
        assert!(html.contains(r#"maxlength="100""#));
    }

    #[test]
    fn test_live_error_wins_over_static_error() {
        let mut state = FormState::new();
        let mut errors = std::collections::HashMap::new();
        errors.insert("email".to_string(), vec!["Invalid email format".to_string()]);
        state.record_rejected(&errors);

        let field = resolve(FieldDescriptor::new("email").error_message("Email is required"));
        let html = EmailWidget.render(&field, &state).into_string();
        assert!(html.contains("Invalid email format"));
        assert!(!html.contains("Email is required"));
    }
}
