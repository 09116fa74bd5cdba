// formling - declarative form rendering and validation
// Field catalogs rendered with Maud templates, schemas checked at submit time

pub mod config;
pub mod field;
pub mod form;
pub mod registry;
pub mod state;
pub mod validation;

// Re-export Maud for callers composing around the rendered form
pub use maud::{html, Markup, PreEscaped};

// Re-export core types
pub use config::FormTheme;
pub use field::{FieldClasses, FieldDescriptor, FieldOptions, FieldType, ResolvedField};
pub use form::{Form, FormClasses, SubmitOutcome};
pub use registry::{EmailWidget, FieldWidget, PasswordWidget, TextWidget, WidgetRegistry};
pub use state::{FormPhase, FormState};
pub use validation::{signup_schema, Rule, Schema, ValidationReport};
