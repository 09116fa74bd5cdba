// File: src/state.rs
// Purpose: Live values, errors, and lifecycle phase for one mounted form

use std::collections::{HashMap, HashSet};

/// Lifecycle of one mounted form.
///
/// `Submitted` is terminal only for that attempt; the form stays mounted
/// and editable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Pristine,
    Editing,
    Submitted,
    EditingWithErrors,
}

/// Mutable state owned by a single form instance: current field values,
/// the displayed error per field, and which fields the user has touched.
///
/// Values persist across submit attempts, so correcting one failing field
/// and re-submitting does not require re-entering the others.
#[derive(Debug, Clone)]
pub struct FormState {
    values: HashMap<String, String>,
    errors: HashMap<String, String>,
    touched: HashSet<String>,
    phase: FormPhase,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            errors: HashMap::new(),
            touched: HashSet::new(),
            phase: FormPhase::Pristine,
        }
    }

    /// Seed a default value without marking the field touched
    pub fn set_default(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// Record a user edit
    pub fn set_value(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        self.touched.insert(field.clone());
        self.values.insert(field, value.into());
        if self.phase != FormPhase::EditingWithErrors {
            self.phase = FormPhase::Editing;
        }
    }

    /// Current value for a field, empty if never set
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// Displayed error for a field, if the last submit attempt failed on it
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Record a failed submit attempt: keep the first error per field
    pub fn record_rejected(&mut self, errors: &HashMap<String, Vec<String>>) {
        self.errors = errors
            .iter()
            .filter_map(|(field, messages)| {
                messages.first().map(|m| (field.clone(), m.clone()))
            })
            .collect();
        self.phase = FormPhase::EditingWithErrors;
    }

    /// Record a successful submit attempt: errors clear, values remain
    pub fn record_submitted(&mut self) {
        self.errors.clear();
        self.phase = FormPhase::Submitted;
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
