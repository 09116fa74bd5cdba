// File: src/form.rs
// Purpose: The form renderer: binds a field catalog to state, renders it,
// and runs the validation schema on submit

use std::collections::HashMap;

use maud::{html, Markup};
use tracing::debug;

use crate::config::FormTheme;
use crate::field::{merge_classes, FieldDescriptor, ResolvedField};
use crate::registry::WidgetRegistry;
use crate::state::{FormPhase, FormState};
use crate::validation::{signup_schema, Schema, ValidationReport};

/// Class overrides for the form element and its submit button.
#[derive(Debug, Clone, Default)]
pub struct FormClasses {
    pub form: Option<String>,
    pub button: Option<String>,
}

/// Result of one submit attempt.
///
/// A rejection is a normal outcome of the attempt, not an error: the
/// report's messages are surfaced per field and the form stays editable.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// Validation passed and the handler was invoked
    Submitted,
    /// Validation failed; the handler was not invoked
    Rejected(ValidationReport),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }

    pub fn is_rejected(&self) -> bool {
        !self.is_submitted()
    }

    /// The validation report of a rejected attempt
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            SubmitOutcome::Submitted => None,
            SubmitOutcome::Rejected(report) => Some(report),
        }
    }
}

type SubmitHandler = Box<dyn FnMut(&HashMap<String, String>)>;

/// An interactive form over a field catalog.
///
/// The form owns its [`FormState`] for as long as it is mounted. Rendering
/// walks the catalog in order and dispatches each descriptor to a widget
/// by its type tag; submitting validates the current values against the
/// schema and either invokes the submit handler with the validated value
/// set or records per-field errors for the next render.
pub struct Form {
    fields: Vec<FieldDescriptor>,
    classes: FormClasses,
    theme: FormTheme,
    schema: Schema,
    registry: WidgetRegistry,
    state: FormState,
    handler: SubmitHandler,
}

impl Form {
    /// Create a form over a field catalog, validated by the signup schema.
    ///
    /// Only `email` gets an explicit default value.
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        let mut state = FormState::new();
        state.set_default("email", "");

        Self {
            fields,
            classes: FormClasses::default(),
            theme: FormTheme::default(),
            schema: signup_schema(),
            registry: WidgetRegistry::with_builtins(),
            state,
            handler: Box::new(|values| {
                debug!(?values, "form submitted");
            }),
        }
    }

    /// Override the form and button classes
    pub fn with_classes(mut self, classes: FormClasses) -> Self {
        self.classes = classes;
        self
    }

    /// Use a theme instead of the built-in defaults
    pub fn with_theme(mut self, theme: FormTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Replace the fixed signup schema with a caller-built one
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    /// Replace the widget registry
    pub fn with_registry(mut self, registry: WidgetRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Set the submit handler invoked with the validated value set
    pub fn on_submit(mut self, handler: impl FnMut(&HashMap<String, String>) + 'static) -> Self {
        self.handler = Box::new(handler);
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn phase(&self) -> FormPhase {
        self.state.phase()
    }

    /// Record a user edit to one field
    pub fn set_value(&mut self, field: &str, value: impl Into<String>) {
        self.state.set_value(field, value);
    }

    /// Render the form: one item per catalog entry, in catalog order,
    /// followed by the submit button.
    pub fn render(&self) -> Markup {
        let form_class = merge_classes(&self.theme.form, self.classes.form.as_deref());
        let button_class = merge_classes(&self.theme.button, self.classes.button.as_deref());

        let items: Vec<Markup> = self
            .fields
            .iter()
            .map(|descriptor| {
                if !self.schema.has_rule(&descriptor.field_name) {
                    // Such a field renders but never shows a validation
                    // error; the schema simply does not know it.
                    debug!(field = %descriptor.field_name, "field has no validation rule");
                }
                let resolved = ResolvedField::resolve(descriptor, &self.theme, &self.schema);
                let widget = self.registry.get(resolved.field_type);
                widget.render(&resolved, &self.state)
            })
            .collect();

        html! {
            form class=(form_class) method="post" {
                @for item in &items {
                    (item)
                }
                button type="submit" class=(button_class) { (self.theme.submit_label) }
            }
        }
    }

    /// Run one submit attempt against the current values.
    ///
    /// Synchronous and atomic from the caller's view: either the full
    /// schema validates and the handler runs exactly once with the
    /// validated value set, or the attempt is rejected with per-field
    /// errors and the handler is not invoked. Values persist either way.
    pub fn submit(&mut self) -> SubmitOutcome {
        let report = self.schema.check(self.state.values());

        if report.is_valid {
            let validated: HashMap<String, String> = self
                .schema
                .field_names()
                .into_iter()
                .map(|name| (name.to_string(), self.state.value(name).to_string()))
                .collect();

            self.state.record_submitted();
            debug!(fields = validated.len(), "form submit accepted");
            (self.handler)(&validated);
            SubmitOutcome::Submitted
        } else {
            debug!(failing_fields = report.errors.len(), "form submit rejected");
            self.state.record_rejected(&report.errors);
            SubmitOutcome::Rejected(report)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldDescriptor;
    use crate::validation::Rule;

    fn email_catalog() -> Vec<FieldDescriptor> {
        vec![FieldDescriptor::new("email")
            .label("Email")
            .field_type("email")
            .placeholder("Email")
            .description("We'll never share your email with anyone else.")
            .required()]
    }

    fn fill_valid(form: &mut Form) {
        form.set_value("email", "user@example.com");
        form.set_value("password", "longenough1");
        form.set_value("passwordConfirmation", "longenough1");
    }

    #[test]
    fn test_render_contains_submit_button() {
        let html = Form::new(email_catalog()).render().into_string();
        assert!(html.contains(r#"<button type="submit" class="form-submit">Submit</button>"#));
    }

    #[test]
    fn test_form_class_overrides_append() {
        let form = Form::new(email_catalog()).with_classes(FormClasses {
            form: Some("max-w-md".to_string()),
            button: Some("w-full".to_string()),
        });
        let html = form.render().into_string();
        assert!(html.contains(r#"<form class="form max-w-md""#));
        assert!(html.contains(r#"class="form-submit w-full""#));
    }

    #[test]
    fn test_email_default_is_empty_string() {
        let form = Form::new(email_catalog());
        assert_eq!(form.state().value("email"), "");
        assert_eq!(form.state().value("password"), "");
        assert_eq!(form.phase(), FormPhase::Pristine);
    }

    #[test]
    fn test_rejected_submit_records_errors() {
        let mut form = Form::new(email_catalog());
        form.set_value("email", "not-an-email");
        form.set_value("password", "longenough1");
        form.set_value("passwordConfirmation", "longenough1");

        let outcome = form.submit();
        assert!(outcome.is_rejected());
        assert_eq!(form.state().error("email"), Some("Invalid email format"));
        assert_eq!(form.phase(), FormPhase::EditingWithErrors);
    }

    #[test]
    fn test_error_renders_into_message_slot() {
        let mut form = Form::new(email_catalog());
        form.set_value("email", "not-an-email");
        form.submit();

        let html = form.render().into_string();
        assert!(html.contains(r#"<p class="form-message">Invalid email format</p>"#));
    }

    #[test]
    fn test_accepted_submit_runs_handler_with_schema_shape() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen: Rc<RefCell<Vec<HashMap<String, String>>>> = Rc::default();
        let sink = seen.clone();

        let mut form = Form::new(email_catalog()).on_submit(move |values| {
            sink.borrow_mut().push(values.clone());
        });
        fill_valid(&mut form);

        let outcome = form.submit();
        assert!(outcome.is_submitted());
        assert_eq!(form.phase(), FormPhase::Submitted);

        let calls = seen.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].get("email").unwrap(), "user@example.com");
        assert_eq!(calls[0].get("password").unwrap(), "longenough1");
        assert_eq!(calls[0].get("passwordConfirmation").unwrap(), "longenough1");
    }

    #[test]
    fn test_custom_schema_replaces_signup_rules() {
        let schema = Schema::new().rule(Rule::new("email").email());
        let mut form = Form::new(email_catalog()).with_schema(schema);
        form.set_value("email", "user@example.com");
        // No password rules anymore, so email alone validates.
        assert!(form.submit().is_submitted());
    }

    #[test]
    fn test_unknown_field_degrades_silently() {
        let catalog = vec![FieldDescriptor::new("nickname").label("Nickname")];
        let mut form = Form::new(catalog);
        fill_valid(&mut form);
        form.set_value("nickname", "x");

        assert!(form.submit().is_submitted());
        let html = form.render().into_string();
        // Renders, but no error ever attaches to it.
        assert!(html.contains(r#"name="nickname""#));
        assert!(form.state().error("nickname").is_none());
    }
}
