// File: src/config.rs
// Purpose: Theme configuration, loadable from formling.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default slot classes and submit label for rendered forms.
///
/// Every field has a neutral default so a theme file only needs to name
/// what it overrides. Per-descriptor class overrides are appended after
/// these at render time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormTheme {
    #[serde(default = "default_form_class")]
    pub form: String,

    #[serde(default = "default_button_class")]
    pub button: String,

    #[serde(default = "default_label_class")]
    pub label: String,

    #[serde(default = "default_input_class")]
    pub input: String,

    #[serde(default = "default_description_class")]
    pub description_message: String,

    #[serde(default = "default_error_class")]
    pub error_message: String,

    #[serde(default = "default_submit_label")]
    pub submit_label: String,
}

fn default_form_class() -> String {
    "form".to_string()
}

fn default_button_class() -> String {
    "form-submit".to_string()
}

fn default_label_class() -> String {
    "form-label".to_string()
}

fn default_input_class() -> String {
    "form-input".to_string()
}

fn default_description_class() -> String {
    "form-description".to_string()
}

fn default_error_class() -> String {
    "form-message".to_string()
}

fn default_submit_label() -> String {
    "Submit".to_string()
}

impl Default for FormTheme {
    fn default() -> Self {
        Self {
            form: default_form_class(),
            button: default_button_class(),
            label: default_label_class(),
            input: default_input_class(),
            description_message: default_description_class(),
            error_message: default_error_class(),
            submit_label: default_submit_label(),
        }
    }
}

impl FormTheme {
    /// Load a theme from a TOML file; a missing file yields the defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse theme file: {}", path.display()))
    }
}
