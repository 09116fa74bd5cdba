// File: src/validation/mod.rs
// Purpose: Declarative validation schema and its runtime

use std::collections::HashMap;

use serde::Serialize;

pub mod validators;

/// One constraint on a single field's value.
#[derive(Debug, Clone)]
enum Check {
    Email,
    Required,
    MinLength(usize),
    MaxLength(usize),
    /// Value must equal another field's value. The error is attached
    /// to this rule's own field, not the referenced one.
    EqualsField { other: String, message: String },
}

/// Validation rule for one named field, built by chaining constraints.
#[derive(Debug, Clone)]
pub struct Rule {
    field: String,
    checks: Vec<Check>,
}

impl Rule {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            checks: Vec::new(),
        }
    }

    /// Value must be a valid email address
    pub fn email(mut self) -> Self {
        self.checks.push(Check::Email);
        self
    }

    /// Value must be non-empty
    pub fn required(mut self) -> Self {
        self.checks.push(Check::Required);
        self
    }

    /// Value must be at least `min` characters
    pub fn min_length(mut self, min: usize) -> Self {
        self.checks.push(Check::MinLength(min));
        self
    }

    /// Value must be at most `max` characters
    pub fn max_length(mut self, max: usize) -> Self {
        self.checks.push(Check::MaxLength(max));
        self
    }

    /// Shorthand for `min_length(min).max_length(max)`
    pub fn length(self, min: usize, max: usize) -> Self {
        self.min_length(min).max_length(max)
    }

    /// Value must equal the value of `other`, with `message` as the error
    pub fn equals_field(mut self, other: impl Into<String>, message: impl Into<String>) -> Self {
        self.checks.push(Check::EqualsField {
            other: other.into(),
            message: message.into(),
        });
        self
    }

    /// Run every check against the value set, collecting errors in order
    fn apply(&self, values: &HashMap<String, String>) -> Vec<String> {
        let value = values.get(&self.field).map(String::as_str).unwrap_or("");
        let mut errors = Vec::new();

        for check in &self.checks {
            let result = match check {
                Check::Email => {
                    if validators::is_valid_email(value) {
                        Ok(())
                    } else {
                        Err("Invalid email format".to_string())
                    }
                }
                Check::Required => validators::check_required(value),
                Check::MinLength(min) => validators::check_min_length(value, *min),
                Check::MaxLength(max) => validators::check_max_length(value, *max),
                Check::EqualsField { other, message } => {
                    let other_value = values.get(other).map(String::as_str).unwrap_or("");
                    if value == other_value {
                        Ok(())
                    } else {
                        Err(message.clone())
                    }
                }
            };

            if let Err(message) = result {
                errors.push(message);
            }
        }

        errors
    }
}

/// Native input constraints derived from a field's rule, for HTML5 attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputConstraints {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub required: bool,
}

/// An ordered set of field rules, resolved against a value set at submit time.
///
/// The schema is independent of whatever field catalog is rendered next to
/// it: every rule runs on every check, with missing values treated as empty
/// strings.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    rules: Vec<Rule>,
}

impl Schema {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule for one field
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Whether any rule targets the given field
    pub fn has_rule(&self, field: &str) -> bool {
        self.rules.iter().any(|r| r.field == field)
    }

    /// Field names covered by the schema, in declaration order
    pub fn field_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.field.as_str()).collect()
    }

    /// HTML5-expressible constraints for one field, if it has a rule
    pub fn constraints_for(&self, field: &str) -> InputConstraints {
        let mut constraints = InputConstraints::default();
        for rule in self.rules.iter().filter(|r| r.field == field) {
            for check in &rule.checks {
                match check {
                    Check::MinLength(min) => constraints.min_length = Some(*min),
                    Check::MaxLength(max) => constraints.max_length = Some(*max),
                    Check::Required => constraints.required = true,
                    _ => {}
                }
            }
        }
        constraints
    }

    /// Validate a value set against every rule in the schema
    pub fn check(&self, values: &HashMap<String, String>) -> ValidationReport {
        let mut errors: HashMap<String, Vec<String>> = HashMap::new();

        for rule in &self.rules {
            let field_errors = rule.apply(values);
            if !field_errors.is_empty() {
                errors
                    .entry(rule.field.clone())
                    .or_default()
                    .extend(field_errors);
            }
        }

        if errors.is_empty() {
            ValidationReport::success()
        } else {
            ValidationReport::failure(errors)
        }
    }
}

/// The fixed signup schema: email format, password length 8-100, and a
/// confirmation that must match the password.
pub fn signup_schema() -> Schema {
    Schema::new()
        .rule(Rule::new("email").email())
        .rule(Rule::new("password").length(8, 100))
        .rule(
            Rule::new("passwordConfirmation")
                .length(8, 100)
                .equals_field("password", "Passwords do not match"),
        )
}

/// Result of one validation pass
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationReport {
    /// Create a successful validation report
    pub fn success() -> Self {
        Self {
            is_valid: true,
            errors: HashMap::new(),
        }
    }

    /// Create a failed validation report
    pub fn failure(errors: HashMap<String, Vec<String>>) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get first error for a specific field
    pub fn first_error(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|errors| errors.first())
            .map(String::as_str)
    }

    /// Get all errors for a specific field
    pub fn errors_for(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }
}
