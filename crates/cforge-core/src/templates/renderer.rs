//! Handlebars-based renderer for the parameterized templates.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled and HTML
//! escaping disabled. Strict mode ensures that any `{{variable}}` referenced in a
//! template must be present in the data context — otherwise rendering returns an
//! error rather than silently emitting broken C text. Escaping is disabled because
//! the output is C source: the stem must appear verbatim, and the default HTML
//! escaping would corrupt names containing `&`, `<`, or quotes.

use handlebars::{no_escape, Handlebars};
use serde_json::Value;

use crate::error::{CforgeError, Result};

/// Template renderer for generated artifact fragments.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode on and escaping off.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(no_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| CforgeError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
